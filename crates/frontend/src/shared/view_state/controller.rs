//! Search / filter / column state of one list view.
//!
//! The controller never touches the URL itself. Operations that need a new
//! URL return [`Command::Navigate`]; the owner performs the navigation once
//! the controller is no longer borrowed, and the resulting query change
//! comes back through [`ViewStateController::on_query_change`]. That keeps a
//! single reload path.

use std::collections::BTreeMap;

use contracts::domain::common::{LookupKind, LookupOption};

use super::columns::{ColumnDef, ColumnVisibility};
use super::config::{PersistScope, ViewConfig, ARCHIVED_PARAM, SEARCH_PARAM};
use super::error::Result;
use super::filter_set::{FilterField, FilterSet};
use super::query::QueryMap;
use super::storage::ViewStore;

/// One fetch of the list, tagged with a sequence number so late responses
/// of superseded requests can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadRequest {
    pub seq: u64,
    pub params: QueryMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(QueryMap),
    Reload(ReloadRequest),
}

pub struct ViewStateController<F: FilterField> {
    config: &'static ViewConfig,
    store: ViewStore,
    search: String,
    active: FilterSet<F>,
    draft: FilterSet<F>,
    columns: ColumnVisibility,
    show_archived: bool,
    modal_open: bool,
    lookups: BTreeMap<LookupKind, Vec<LookupOption>>,
    latest_seq: u64,
}

impl<F: FilterField> ViewStateController<F> {
    pub fn new(config: &'static ViewConfig, store: ViewStore) -> Self {
        Self {
            config,
            store,
            search: String::new(),
            active: FilterSet::new(),
            draft: FilterSet::new(),
            columns: ColumnVisibility::defaults(config.columns),
            show_archived: false,
            modal_open: false,
            lookups: BTreeMap::new(),
            latest_seq: 0,
        }
    }

    /// Hydrates the view on mount.
    ///
    /// A URL with any query parameter wins. A bare URL is rewritten to the
    /// persisted filters when there are some; otherwise the view loads
    /// unfiltered.
    pub fn initialize(&mut self, url_query: &QueryMap) -> Command {
        self.columns = self.store.load_columns(self.config.columns);

        if url_query.is_empty() {
            if let Some(persisted) = self.store.load_filters() {
                log::debug!(
                    "[{}] restoring persisted filters {}",
                    self.config.namespace,
                    persisted
                );
                return Command::Navigate(persisted);
            }
        }
        Command::Reload(self.on_query_change(url_query))
    }

    /// The only writer of the `search` parameter. Returns `None` when the
    /// URL would not change.
    pub fn on_search_text_change(&self, current: &QueryMap, text: &str) -> Option<Command> {
        let mut next = current.clone();
        if text.is_empty() {
            next.remove(SEARCH_PARAM);
        } else {
            next.set(SEARCH_PARAM, text);
        }
        (next != *current).then_some(Command::Navigate(next))
    }

    /// Re-derives search text and active filters from the URL and asks for
    /// exactly one reload. An open modal is closed; its draft would describe
    /// a query that no longer exists.
    pub fn on_query_change(&mut self, query: &QueryMap) -> ReloadRequest {
        self.active = FilterSet::from_query(query);
        self.draft = self.active.clone();
        self.modal_open = false;
        self.search = query.get(SEARCH_PARAM).unwrap_or_default().to_string();
        self.next_reload()
    }

    /// Reload with the current state, e.g. for a refresh button.
    pub fn reload(&mut self) -> ReloadRequest {
        self.next_reload()
    }

    fn next_reload(&mut self) -> ReloadRequest {
        self.latest_seq += 1;
        let request = ReloadRequest {
            seq: self.latest_seq,
            params: self.fetch_params(),
        };
        log::debug!(
            "[{}] reload #{} {}",
            self.config.namespace,
            request.seq,
            request.params
        );
        request
    }

    /// Parameters for the list fetch: active filters, `search` and the
    /// archived constraint. The constraint is `is_archived=false` unless the
    /// toggle is on, in which case it is omitted; `true` is never sent.
    pub fn fetch_params(&self) -> QueryMap {
        let mut params = QueryMap::new();
        for (field, value) in self.active.iter() {
            params.set(field.key(), value);
        }
        if !self.search.is_empty() {
            params.set(SEARCH_PARAM, self.search.clone());
        }
        if self.config.archive_toggle && !self.show_archived {
            params.set(ARCHIVED_PARAM, "false");
        }
        params
    }

    /// Whether `seq` belongs to the newest reload issued.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    pub fn set_show_archived(&mut self, show: bool) -> Option<ReloadRequest> {
        if !self.config.archive_toggle {
            log::warn!("[{}] view has no archived toggle", self.config.namespace);
            return None;
        }
        if self.show_archived == show {
            return None;
        }
        self.show_archived = show;
        Some(self.next_reload())
    }

    /// First half of opening the filter modal: copies the active filters
    /// into the draft and lists the lookups that still have to be fetched.
    pub fn prepare_filter_modal(&mut self) -> Vec<LookupKind> {
        self.draft = self.active.clone();
        let mut missing: Vec<LookupKind> = Vec::new();
        for kind in F::ALL.iter().filter_map(|f| f.lookup()) {
            if !self.lookups.contains_key(&kind) && !missing.contains(&kind) {
                missing.push(kind);
            }
        }
        missing
    }

    /// Stores a fetched lookup list. A failure keeps whatever was cached.
    pub fn cache_lookup(&mut self, kind: LookupKind, result: std::result::Result<Vec<LookupOption>, String>) {
        match result {
            Ok(options) => {
                self.lookups.insert(kind, options);
            }
            Err(e) => log::error!(
                "[{}] failed to load {:?} options: {}",
                self.config.namespace,
                kind,
                e
            ),
        }
    }

    pub fn show_filter_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn set_draft(&mut self, field: F, value: &str) {
        self.draft.set(field, value);
    }

    /// Discards the draft.
    pub fn cancel_filter_modal(&mut self) {
        self.draft = self.active.clone();
        self.modal_open = false;
    }

    /// Commits the draft on top of the current URL query (keys the view does
    /// not own are kept) and persists the result. Navigates only when the
    /// filters the URL describes change; `status=` and a missing `status`
    /// are the same filter.
    pub fn apply_filters(&mut self, current: &QueryMap) -> Option<Command> {
        let mut merged = current.clone();
        self.draft.write_into(&mut merged);
        self.active = self.draft.clone();
        self.modal_open = false;
        self.persist(&merged);
        let changed = FilterSet::<F>::from_query(&merged) != FilterSet::<F>::from_query(current);
        changed.then_some(Command::Navigate(merged))
    }

    /// Drops one active filter, e.g. from its chip.
    pub fn remove_filter(&mut self, current: &QueryMap, field: F) -> Option<Command> {
        let mut next = current.clone();
        next.remove(field.key());
        self.active.unset(field);
        self.draft.unset(field);
        self.persist(&next);
        (next != *current).then_some(Command::Navigate(next))
    }

    /// Back to a fresh, unfiltered view: only `search` survives in the URL.
    pub fn clear_filters(&mut self, current: &QueryMap) -> Option<Command> {
        self.draft.clear();
        self.active.clear();
        self.modal_open = false;
        self.store.clear_filters();

        let mut next = QueryMap::new();
        if let Some(search) = current.get(SEARCH_PARAM).filter(|s| !s.is_empty()) {
            next.set(SEARCH_PARAM, search);
        }
        (next != *current).then_some(Command::Navigate(next))
    }

    fn persist(&self, merged: &QueryMap) {
        let mut filters = merged.clone();
        if self.config.persist_scope == PersistScope::FiltersOnly {
            filters.remove(SEARCH_PARAM);
        }
        self.store.save_filters(&filters);
    }

    pub fn toggle_column(&mut self, id: &str) -> Result<()> {
        self.columns = self.columns.toggled(self.config.columns, id)?;
        self.store.save_columns(&self.columns);
        Ok(())
    }

    pub fn save_columns(&mut self, ids: Vec<String>) -> Result<()> {
        self.columns = ColumnVisibility::validated(self.config.columns, ids)?;
        self.store.save_columns(&self.columns);
        Ok(())
    }

    pub fn reset_columns(&mut self) {
        self.columns = ColumnVisibility::defaults(self.config.columns);
        self.store.clear_columns();
    }

    pub fn config(&self) -> &'static ViewConfig {
        self.config
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn active(&self) -> &FilterSet<F> {
        &self.active
    }

    pub fn draft(&self) -> &FilterSet<F> {
        &self.draft
    }

    pub fn active_filter_count(&self) -> usize {
        self.active.active_count()
    }

    pub fn columns(&self) -> &ColumnVisibility {
        &self.columns
    }

    pub fn visible_columns(&self) -> Vec<ColumnDef> {
        self.columns.resolve(self.config.columns)
    }

    pub fn show_archived(&self) -> bool {
        self.show_archived
    }

    pub fn is_filter_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn lookup(&self, kind: LookupKind) -> &[LookupOption] {
        self.lookups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}
