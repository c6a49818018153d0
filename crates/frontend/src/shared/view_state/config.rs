use super::columns::ColumnDef;

/// Backend parameter carrying the archived constraint.
pub const ARCHIVED_PARAM: &str = "is_archived";

/// URL parameter holding the free-text search.
pub const SEARCH_PARAM: &str = "search";

/// What part of the URL query a view writes to local storage when filters
/// are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistScope {
    /// Everything except `search`.
    FiltersOnly,
    /// The merged query including `search`.
    FiltersAndSearch,
}

/// Static description of one list view.
#[derive(Debug)]
pub struct ViewConfig {
    /// Storage key prefix, e.g. `inventory` for `inventory-columns`.
    pub namespace: &'static str,
    /// Canonical pathname of the view; a session only follows query
    /// changes on this path.
    pub path: &'static str,
    pub title: &'static str,
    pub columns: &'static [ColumnDef],
    /// Whether the view offers a "Show archived" toggle.
    pub archive_toggle: bool,
    pub persist_scope: PersistScope,
}
