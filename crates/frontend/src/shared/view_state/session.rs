//! Wires a [`ViewStateController`] to the URL, local storage and the list
//! fetch of a mounted view.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use contracts::domain::common::{LookupKind, LookupOption};

use super::config::ViewConfig;
use super::controller::{Command, ReloadRequest, ViewStateController};
use super::error::Result;
use super::filter_set::FilterField;
use super::storage::{KeyValueStorage, ViewStore};
use super::url::{Subscription, UrlSurface};

/// Source of the reference lists shown in filter dropdowns.
#[allow(async_fn_in_trait)]
pub trait LookupSource {
    async fn fetch_lookup(&self, kind: LookupKind) -> std::result::Result<Vec<LookupOption>, String>;
}

struct Hooks<F: FilterField> {
    reload: Box<dyn Fn(ReloadRequest)>,
    on_change: Box<dyn Fn(&ViewStateController<F>)>,
}

/// A mounted list view. Clones share the same state; dropping the last clone
/// unsubscribes from query changes.
pub struct ViewSession<F: FilterField> {
    controller: Rc<RefCell<ViewStateController<F>>>,
    url: Rc<dyn UrlSurface>,
    hooks: Rc<Hooks<F>>,
    _subscription: Rc<Subscription>,
}

impl<F: FilterField> Clone for ViewSession<F> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            url: self.url.clone(),
            hooks: self.hooks.clone(),
            _subscription: self._subscription.clone(),
        }
    }
}

impl<F: FilterField> ViewSession<F> {
    /// Moves the URL onto `config.path` if needed, subscribes to query
    /// changes on that path, then initializes.
    ///
    /// `reload` receives every fetch request; `on_change` is called after
    /// each state transition.
    pub fn mount(
        config: &'static ViewConfig,
        storage: Rc<dyn KeyValueStorage>,
        url: Rc<dyn UrlSurface>,
        reload: impl Fn(ReloadRequest) + 'static,
        on_change: impl Fn(&ViewStateController<F>) + 'static,
    ) -> Self {
        let store = ViewStore::new(storage, config.namespace);
        let controller = Rc::new(RefCell::new(ViewStateController::new(config, store)));
        let hooks = Rc::new(Hooks {
            reload: Box::new(reload),
            on_change: Box::new(on_change),
        });

        let path = config.path;
        if url.current_path() != path {
            log::debug!(
                "[{}] canonical path {} for {}",
                config.namespace,
                path,
                url.current_path()
            );
            url.replace_path(path);
        }
        let subscription = {
            let controller = controller.clone();
            let hooks = hooks.clone();
            url.channel().subscribe(move |event| {
                if event.path != path {
                    return;
                }
                let request = controller.borrow_mut().on_query_change(&event.query);
                (hooks.on_change)(&controller.borrow());
                (hooks.reload)(request);
            })
        };

        let session = Self {
            controller,
            url,
            hooks,
            _subscription: Rc::new(subscription),
        };

        log::debug!("[{}] mounted on {}", config.namespace, session.url.current_path());
        let command = session
            .controller
            .borrow_mut()
            .initialize(&session.url.current_query());
        session.run(Some(command));
        session
    }

    fn run(&self, command: Option<Command>) {
        match command {
            Some(Command::Navigate(query)) => self.url.navigate(query),
            Some(Command::Reload(request)) => {
                self.notify();
                (self.hooks.reload)(request);
            }
            None => self.notify(),
        }
    }

    fn notify(&self) {
        (self.hooks.on_change)(&self.controller.borrow());
    }

    pub fn state(&self) -> Ref<'_, ViewStateController<F>> {
        self.controller.borrow()
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.controller.borrow().is_current(seq)
    }

    pub fn search_changed(&self, text: &str) {
        let command = self
            .controller
            .borrow()
            .on_search_text_change(&self.url.current_query(), text);
        self.run(command);
    }

    pub fn refresh(&self) {
        let request = self.controller.borrow_mut().reload();
        self.run(Some(Command::Reload(request)));
    }

    pub fn set_show_archived(&self, show: bool) {
        let request = self.controller.borrow_mut().set_show_archived(show);
        self.run(request.map(Command::Reload));
    }

    /// Copies the active filters into the draft, fetches missing lookups
    /// and shows the modal. Failed lookups do not keep it closed.
    ///
    /// Lookups are fetched one after another in field order. A view needs
    /// at most two of them, and the controller is never borrowed across an
    /// await.
    pub async fn open_filter_modal<S: LookupSource>(&self, source: &S) {
        let missing = self.controller.borrow_mut().prepare_filter_modal();
        for kind in missing {
            let result = source.fetch_lookup(kind).await;
            self.controller.borrow_mut().cache_lookup(kind, result);
        }
        self.controller.borrow_mut().show_filter_modal();
        self.notify();
    }

    pub fn set_draft(&self, field: F, value: &str) {
        self.controller.borrow_mut().set_draft(field, value);
        self.notify();
    }

    pub fn cancel_filter_modal(&self) {
        self.controller.borrow_mut().cancel_filter_modal();
        self.notify();
    }

    pub fn apply_filters(&self) {
        let command = self
            .controller
            .borrow_mut()
            .apply_filters(&self.url.current_query());
        self.run(command);
    }

    pub fn remove_filter(&self, field: F) {
        let command = self
            .controller
            .borrow_mut()
            .remove_filter(&self.url.current_query(), field);
        self.run(command);
    }

    pub fn clear_filters(&self) {
        let command = self
            .controller
            .borrow_mut()
            .clear_filters(&self.url.current_query());
        self.run(command);
    }

    pub fn toggle_column(&self, id: &str) -> Result<()> {
        self.controller.borrow_mut().toggle_column(id)?;
        self.notify();
        Ok(())
    }

    pub fn save_columns(&self, ids: Vec<String>) -> Result<()> {
        self.controller.borrow_mut().save_columns(ids)?;
        self.notify();
        Ok(())
    }

    pub fn reset_columns(&self) {
        self.controller.borrow_mut().reset_columns();
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::view_state::columns::ColumnDef;
    use crate::shared::view_state::config::PersistScope;
    use crate::shared::view_state::filter_set::FilterOptions;
    use crate::shared::view_state::query::QueryMap;
    use crate::shared::view_state::storage::MemoryStorage;
    use crate::shared::view_state::url::MemoryUrl;
    use std::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum SpoolFilter {
        Status,
        Brand,
        Project,
    }

    impl FilterField for SpoolFilter {
        const ALL: &'static [Self] = &[SpoolFilter::Status, SpoolFilter::Brand, SpoolFilter::Project];

        fn key(self) -> &'static str {
            match self {
                SpoolFilter::Status => "status",
                SpoolFilter::Brand => "brand",
                SpoolFilter::Project => "project",
            }
        }

        fn label(self) -> &'static str {
            self.key()
        }

        fn options(self) -> FilterOptions {
            match self {
                SpoolFilter::Status => FilterOptions::Text,
                SpoolFilter::Brand => FilterOptions::Lookup(LookupKind::Brand),
                SpoolFilter::Project => FilterOptions::Lookup(LookupKind::Project),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum PartFilter {
        BrandName,
    }

    impl FilterField for PartFilter {
        const ALL: &'static [Self] = &[PartFilter::BrandName];

        fn key(self) -> &'static str {
            "brand__name"
        }

        fn label(self) -> &'static str {
            "Brand"
        }

        fn options(self) -> FilterOptions {
            FilterOptions::Text
        }
    }

    static SPOOLS: ViewConfig = ViewConfig {
        namespace: "filament-spools",
        path: "/filament-spools",
        title: "Filament Spools",
        columns: &[
            ColumnDef::new("name", "Name", true),
            ColumnDef::new("brand", "Brand", true),
            ColumnDef::new("weight", "Weight", false),
        ],
        archive_toggle: true,
        persist_scope: PersistScope::FiltersOnly,
    };

    static PARTS: ViewConfig = ViewConfig {
        namespace: "inventory",
        path: "/inventory",
        title: "Inventory",
        columns: &[ColumnDef::new("title", "Title", true)],
        archive_toggle: false,
        persist_scope: PersistScope::FiltersOnly,
    };

    struct Harness<F: FilterField> {
        url: Rc<MemoryUrl>,
        storage: MemoryStorage,
        reloads: Rc<RefCell<Vec<ReloadRequest>>>,
        changes: Rc<Cell<usize>>,
        session: ViewSession<F>,
    }

    fn mount<F: FilterField>(config: &'static ViewConfig, search: &str, storage: MemoryStorage) -> Harness<F> {
        mount_at(config.path, config, search, storage)
    }

    fn mount_at<F: FilterField>(
        path: &str,
        config: &'static ViewConfig,
        search: &str,
        storage: MemoryStorage,
    ) -> Harness<F> {
        let url = Rc::new(MemoryUrl::new(path, search));
        let reloads = Rc::new(RefCell::new(Vec::new()));
        let changes = Rc::new(Cell::new(0));
        let session = {
            let reloads = reloads.clone();
            let changes = changes.clone();
            ViewSession::mount(
                config,
                Rc::new(storage.clone()),
                url.clone(),
                move |req| reloads.borrow_mut().push(req),
                move |_| changes.set(changes.get() + 1),
            )
        };
        Harness {
            url,
            storage,
            reloads,
            changes,
            session,
        }
    }

    impl<F: FilterField> Harness<F> {
        fn reload_count(&self) -> usize {
            self.reloads.borrow().len()
        }

        fn last_params(&self) -> QueryMap {
            self.reloads.borrow().last().map(|r| r.params.clone()).unwrap_or_default()
        }
    }

    struct FakeLookups {
        calls: RefCell<Vec<LookupKind>>,
    }

    impl LookupSource for FakeLookups {
        async fn fetch_lookup(&self, kind: LookupKind) -> std::result::Result<Vec<LookupOption>, String> {
            self.calls.borrow_mut().push(kind);
            match kind {
                LookupKind::Brand => Ok(vec![LookupOption { id: 3, name: "Prusa".to_string() }]),
                _ => Err("HTTP 503".to_string()),
            }
        }
    }

    #[test]
    fn test_initialize_reads_back_url_and_types_search() {
        let h = mount::<SpoolFilter>(&SPOOLS, "?status=low&brand=3", MemoryStorage::new());
        {
            let state = h.session.state();
            assert_eq!(state.active().get(SpoolFilter::Status).as_str(), "low");
            assert_eq!(state.active().get(SpoolFilter::Brand).as_str(), "3");
            assert_eq!(state.search(), "");
        }
        assert_eq!(h.reload_count(), 1);

        h.session.search_changed("PLA");
        assert_eq!(h.url.current_query().to_search_string(), "?status=low&brand=3&search=PLA");
        assert_eq!(h.reload_count(), 2);
        assert_eq!(
            h.last_params(),
            QueryMap::parse("status=low&brand=3&search=PLA&is_archived=false")
        );
        assert_eq!(h.session.state().search(), "PLA");
    }

    #[test]
    fn test_bare_url_restores_persisted_filters_once() {
        let storage = MemoryStorage::new();
        storage
            .set_item("inventory-filters", r#"{"brand__name":"Prusa"}"#)
            .unwrap();

        let h = mount::<PartFilter>(&PARTS, "", storage);
        assert_eq!(h.url.current_query(), QueryMap::parse("brand__name=Prusa"));
        assert_eq!(h.reload_count(), 1);
        assert_eq!(h.last_params(), QueryMap::parse("brand__name=Prusa"));
        assert_eq!(h.url.history_len(), 2);

        let again = mount::<PartFilter>(&PARTS, &h.url.current_query().to_search_string(), h.storage.clone());
        assert_eq!(again.url.current_query(), QueryMap::parse("brand__name=Prusa"));
        assert_eq!(again.url.history_len(), 1);
        assert_eq!(again.reload_count(), 1);
    }

    #[tokio::test]
    async fn test_noop_apply_changes_nothing() {
        let h = mount::<SpoolFilter>(&SPOOLS, "?status=low&brand=3", MemoryStorage::new());
        let before = h.url.current_query();
        let active_before = h.session.state().active().clone();

        let lookups = FakeLookups { calls: RefCell::new(Vec::new()) };
        h.session.open_filter_modal(&lookups).await;
        h.session.apply_filters();

        assert_eq!(h.url.current_query(), before);
        assert_eq!(h.url.history_len(), 1);
        assert_eq!(*h.session.state().active(), active_before);
        assert_eq!(h.reload_count(), 1);
    }

    #[tokio::test]
    async fn test_apply_with_empty_param_keeps_url() {
        let h = mount::<SpoolFilter>(&SPOOLS, "?status=&brand=3", MemoryStorage::new());
        let lookups = FakeLookups { calls: RefCell::new(Vec::new()) };
        h.session.open_filter_modal(&lookups).await;
        h.session.apply_filters();

        assert_eq!(h.url.current_query(), QueryMap::parse("status=&brand=3"));
        assert_eq!(h.url.history_len(), 1);
        assert_eq!(h.reload_count(), 1);
        assert!(!h.session.state().is_filter_modal_open());
    }

    #[test]
    fn test_root_mount_follows_canonical_path() {
        let h = mount_at::<PartFilter>("/", &PARTS, "", MemoryStorage::new());
        assert_eq!(h.url.current_path(), "/inventory");
        assert_eq!(h.url.history_len(), 1);
        assert_eq!(h.reload_count(), 1);

        h.url.open_path("/inventory");
        assert_eq!(h.reload_count(), 2);
        h.session.search_changed("bolt");
        assert_eq!(h.reload_count(), 3);
        assert_eq!(h.session.state().search(), "bolt");
        assert_eq!(h.last_params(), QueryMap::parse("search=bolt"));
    }

    #[test]
    fn test_unknown_path_mount_keeps_query() {
        let h = mount_at::<SpoolFilter>("/no-such-view", &SPOOLS, "?status=low", MemoryStorage::new());
        assert_eq!(h.url.current_path(), "/filament-spools");
        assert_eq!(h.url.current_query(), QueryMap::parse("status=low"));
        assert_eq!(h.url.history_len(), 1);

        h.session.search_changed("PLA");
        assert_eq!(h.session.state().search(), "PLA");
        assert_eq!(h.reload_count(), 2);
    }

    #[test]
    fn test_apply_navigates_and_reloads_once() {
        let h = mount::<SpoolFilter>(&SPOOLS, "?search=PLA&tab=spools", MemoryStorage::new());
        h.session.set_draft(SpoolFilter::Status, "low");
        assert!(h.session.state().active().is_empty());

        h.session.apply_filters();
        assert_eq!(h.url.current_query(), QueryMap::parse("search=PLA&tab=spools&status=low"));
        assert_eq!(h.reload_count(), 2);
        assert_eq!(h.last_params(), QueryMap::parse("status=low&search=PLA&is_archived=false"));
        assert_eq!(
            h.storage.raw("filament-spools-filters").as_deref(),
            Some(r#"{"status":"low","tab":"spools"}"#)
        );
    }

    #[test]
    fn test_clear_always_empties_filters() {
        let storage = MemoryStorage::new();
        storage.set_item("filament-spools-filters", r#"{"status":"low"}"#).unwrap();
        let h = mount::<SpoolFilter>(&SPOOLS, "?status=low&project=2&search=PETG", storage);

        h.session.clear_filters();
        assert!(h.session.state().active().is_empty());
        assert_eq!(h.url.current_query(), QueryMap::parse("search=PETG"));
        assert_eq!(h.storage.raw("filament-spools-filters"), None);
        assert_eq!(h.last_params(), QueryMap::parse("search=PETG&is_archived=false"));

        h.session.clear_filters();
        assert!(h.session.state().active().is_empty());
    }

    #[test]
    fn test_saved_columns_survive_remount() {
        let h = mount::<SpoolFilter>(&SPOOLS, "", MemoryStorage::new());
        let picked = vec!["weight".to_string(), "name".to_string()];
        h.session.save_columns(picked.clone()).unwrap();
        assert_eq!(h.reload_count(), 1);

        let again = mount::<SpoolFilter>(&SPOOLS, "", h.storage.clone());
        assert_eq!(again.session.state().columns().ids(), picked.as_slice());
    }

    #[test]
    fn test_archived_toggle_reloads_with_and_without_constraint() {
        let h = mount::<SpoolFilter>(&SPOOLS, "", MemoryStorage::new());
        h.session.set_show_archived(true);
        assert_eq!(h.reload_count(), 2);
        assert!(h.last_params().get("is_archived").is_none());

        h.session.set_show_archived(false);
        assert_eq!(h.last_params(), QueryMap::parse("is_archived=false"));
        assert!(h.url.current_query().is_empty());
    }

    #[test]
    fn test_back_navigation_reloads_previous_state() {
        let h = mount::<SpoolFilter>(&SPOOLS, "?status=low", MemoryStorage::new());
        h.session.search_changed("silk");
        assert!(h.url.back());
        assert_eq!(h.session.state().search(), "");
        assert_eq!(h.reload_count(), 3);
        assert_eq!(h.last_params(), QueryMap::parse("status=low&is_archived=false"));
    }

    #[test]
    fn test_other_path_and_drop_stop_reloads() {
        let h = mount::<SpoolFilter>(&SPOOLS, "", MemoryStorage::new());
        h.url.open_path("/projects");
        assert_eq!(h.reload_count(), 1);

        let Harness { url, session, reloads, .. } = h;
        drop(session);
        assert_eq!(url.channel().listener_count(), 0);
        url.navigate(QueryMap::parse("status=low"));
        assert_eq!(reloads.borrow().len(), 1);
    }

    #[test]
    fn test_observer_sees_transitions() {
        let h = mount::<SpoolFilter>(&SPOOLS, "", MemoryStorage::new());
        let after_mount = h.changes.get();
        assert!(after_mount >= 1);
        h.session.set_draft(SpoolFilter::Brand, "3");
        h.session.cancel_filter_modal();
        assert_eq!(h.changes.get(), after_mount + 2);
    }

    #[tokio::test]
    async fn test_open_modal_loads_missing_lookups_and_tolerates_failures() {
        let h = mount::<SpoolFilter>(&SPOOLS, "?brand=3", MemoryStorage::new());
        let lookups = FakeLookups { calls: RefCell::new(Vec::new()) };

        h.session.open_filter_modal(&lookups).await;
        {
            let state = h.session.state();
            assert!(state.is_filter_modal_open());
            assert_eq!(state.draft(), state.active());
            assert_eq!(state.lookup(LookupKind::Brand).len(), 1);
            assert!(state.lookup(LookupKind::Project).is_empty());
        }
        assert_eq!(*lookups.calls.borrow(), vec![LookupKind::Brand, LookupKind::Project]);

        h.session.cancel_filter_modal();
        h.session.open_filter_modal(&lookups).await;
        assert_eq!(
            *lookups.calls.borrow(),
            vec![LookupKind::Brand, LookupKind::Project, LookupKind::Project]
        );
    }
}
