//! Leptos binding of a [`ViewSession`] for list pages.
//!
//! ```ignore
//! let (list, data) = use_list_view::<SpoolFilter, FilamentSpool>(&SPOOLS_VIEW, "filament-spools");
//! ```
//!
//! `list` drives the toolbar, filter modal and column picker; `data` holds
//! the rows of the latest current reload.

use std::collections::BTreeMap;
use std::rc::Rc;

use contracts::domain::common::choice::label_for;
use contracts::domain::common::{LookupKind, LookupOption};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::fetch_list;
use crate::shared::lookups::HttpLookups;
use crate::shared::view_state::{
    BrowserStorage, BrowserUrl, ColumnDef, FilterField, FilterOptions, FilterSet, ReloadRequest,
    ViewConfig, ViewSession, ViewStateController,
};

/// Render-side copy of the controller state.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSnapshot<F: FilterField> {
    pub search: String,
    pub active: FilterSet<F>,
    pub draft: FilterSet<F>,
    pub visible_columns: Vec<ColumnDef>,
    pub show_archived: bool,
    pub modal_open: bool,
    pub lookups: BTreeMap<LookupKind, Vec<LookupOption>>,
}

impl<F: FilterField> ListSnapshot<F> {
    pub fn empty(config: &'static ViewConfig) -> Self {
        Self {
            search: String::new(),
            active: FilterSet::new(),
            draft: FilterSet::new(),
            visible_columns: config
                .columns
                .iter()
                .filter(|c| c.default_visible)
                .copied()
                .collect(),
            show_archived: false,
            modal_open: false,
            lookups: BTreeMap::new(),
        }
    }

    pub fn capture(controller: &ViewStateController<F>) -> Self {
        let lookups = F::ALL
            .iter()
            .filter_map(|f| f.lookup())
            .map(|kind| (kind, controller.lookup(kind).to_vec()))
            .collect();
        Self {
            search: controller.search().to_string(),
            active: controller.active().clone(),
            draft: controller.draft().clone(),
            visible_columns: controller.visible_columns(),
            show_archived: controller.show_archived(),
            modal_open: controller.is_filter_modal_open(),
            lookups,
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_columns.iter().any(|c| c.id == id)
    }

    /// `(value, label)` pairs for a dropdown-backed field; `None` for text.
    pub fn options_for(&self, field: F) -> Option<Vec<(String, String)>> {
        let from_lookup = |kind: LookupKind, by_name: bool| {
            self.lookups
                .get(&kind)
                .map(|options| {
                    options
                        .iter()
                        .map(|o| {
                            let value = if by_name { o.name.clone() } else { o.id.to_string() };
                            (value, o.name.clone())
                        })
                        .collect()
                })
                .unwrap_or_default()
        };
        match field.options() {
            FilterOptions::Lookup(kind) => Some(from_lookup(kind, false)),
            FilterOptions::LookupName(kind) => Some(from_lookup(kind, true)),
            FilterOptions::Choices(choices) => Some(
                choices
                    .iter()
                    .map(|c| (c.value.to_string(), c.label.to_string()))
                    .collect(),
            ),
            FilterOptions::Text => None,
        }
    }

    /// Human-readable form of an active filter value, for chips.
    pub fn display_value(&self, field: F, value: &str) -> String {
        match field.options() {
            FilterOptions::Lookup(kind) => self
                .lookups
                .get(&kind)
                .and_then(|options| options.iter().find(|o| o.id.to_string() == value))
                .map(|o| o.name.clone())
                .unwrap_or_else(|| value.to_string()),
            FilterOptions::Choices(choices) => label_for(choices, value),
            FilterOptions::LookupName(_) | FilterOptions::Text => value.to_string(),
        }
    }
}

/// Handle to the view-state half of a list page.
pub struct ListView<F: FilterField> {
    pub config: &'static ViewConfig,
    pub state: RwSignal<ListSnapshot<F>>,
    session: StoredValue<Option<ViewSession<F>>, LocalStorage>,
}

impl<F: FilterField> Clone for ListView<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FilterField> Copy for ListView<F> {}

/// Rows and load status of a list page.
pub struct ListData<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListData<T> {}

/// Mounts a view session on the browser URL and local storage. The session
/// is dropped, and unsubscribed, with the calling component.
pub fn use_list_view<F, T>(config: &'static ViewConfig, resource: &'static str) -> (ListView<F>, ListData<T>)
where
    F: FilterField,
    T: DeserializeOwned + Send + Sync + 'static,
{
    let state = RwSignal::new(ListSnapshot::<F>::empty(config));
    let session: StoredValue<Option<ViewSession<F>>, LocalStorage> = StoredValue::new_local(None);
    let data = ListData {
        items: RwSignal::new(Vec::<T>::new()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };

    let reload = move |request: ReloadRequest| {
        data.loading.set(true);
        spawn_local(async move {
            let result = fetch_list::<T>(resource, &request.params).await;
            let is_current = session
                .try_with_value(|s| s.as_ref().is_some_and(|s| s.is_current(request.seq)))
                .unwrap_or(false);
            if !is_current {
                log::debug!("[{}] dropping stale response #{}", config.namespace, request.seq);
                return;
            }
            match result {
                Ok(rows) => {
                    data.items.set(rows);
                    data.error.set(None);
                }
                Err(e) => {
                    log::error!("[{}] load failed: {}", config.namespace, e);
                    data.error.set(Some(e));
                }
            }
            data.loading.set(false);
        });
    };

    let mounted = ViewSession::mount(
        config,
        Rc::new(BrowserStorage),
        BrowserUrl::shared(),
        reload,
        move |controller: &ViewStateController<F>| state.set(ListSnapshot::capture(controller)),
    );
    session.set_value(Some(mounted));

    (ListView { config, state, session }, data)
}

impl<F: FilterField> ListView<F> {
    fn with_session(&self, f: impl FnOnce(&ViewSession<F>)) {
        let current = self.session.try_get_value().flatten();
        match current {
            Some(session) => f(&session),
            None => log::warn!("[{}] view session is not mounted", self.config.namespace),
        }
    }

    pub fn search_changed(&self, text: String) {
        self.with_session(|s| s.search_changed(&text));
    }

    pub fn refresh(&self) {
        self.with_session(|s| s.refresh());
    }

    pub fn open_filters(&self) {
        if let Some(session) = self.session.try_get_value().flatten() {
            spawn_local(async move {
                session.open_filter_modal(&HttpLookups).await;
            });
        }
    }

    pub fn set_draft(&self, field: F, value: String) {
        self.with_session(|s| s.set_draft(field, &value));
    }

    pub fn apply_filters(&self) {
        self.with_session(|s| s.apply_filters());
    }

    pub fn cancel_filters(&self) {
        self.with_session(|s| s.cancel_filter_modal());
    }

    pub fn clear_filters(&self) {
        self.with_session(|s| s.clear_filters());
    }

    pub fn remove_filter(&self, field: F) {
        self.with_session(|s| s.remove_filter(field));
    }

    pub fn set_show_archived(&self, show: bool) {
        self.with_session(|s| s.set_show_archived(show));
    }

    pub fn toggle_column(&self, id: &str) {
        self.with_session(|s| {
            if let Err(e) = s.toggle_column(id) {
                log::warn!("[{}] {}", self.config.namespace, e);
            }
        });
    }

    pub fn reset_columns(&self) {
        self.with_session(|s| s.reset_columns());
    }
}
