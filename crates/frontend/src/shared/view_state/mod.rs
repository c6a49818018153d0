//! URL / storage / memory synchronization for list views.
//!
//! A list view keeps its search text and active filters in the URL query,
//! its visible columns and last applied filters in local storage, and
//! reloads its rows once per query change. [`ViewSession`] ties these
//! together for one mounted view.

pub mod browser;
pub mod columns;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter_set;
pub mod query;
pub mod session;
pub mod storage;
pub mod url;

pub use browser::{BrowserStorage, BrowserUrl};
pub use columns::{ColumnDef, ColumnVisibility};
pub use config::{PersistScope, ViewConfig, ARCHIVED_PARAM, SEARCH_PARAM};
pub use controller::{Command, ReloadRequest, ViewStateController};
pub use error::ViewStateError;
pub use filter_set::{FilterField, FilterOptions, FilterSet, FilterValue};
pub use query::QueryMap;
pub use session::{LookupSource, ViewSession};
pub use storage::{KeyValueStorage, MemoryStorage, ViewStore};
pub use url::{MemoryUrl, QueryChanged, QueryChannel, Subscription, UrlSurface};
