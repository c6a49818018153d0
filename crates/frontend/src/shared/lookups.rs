//! Reference lists for filter dropdowns.

use contracts::domain::common::{LookupKind, LookupOption};

use crate::shared::api_utils::fetch_list;
use crate::shared::view_state::{LookupSource, QueryMap};

/// Loads lookups from the REST backend.
#[derive(Clone, Copy, Default)]
pub struct HttpLookups;

impl LookupSource for HttpLookups {
    async fn fetch_lookup(&self, kind: LookupKind) -> Result<Vec<LookupOption>, String> {
        let params: QueryMap = kind.scope().into_iter().collect();
        let mut options: Vec<LookupOption> = fetch_list(kind.resource(), &params).await?;
        options.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(options)
    }
}
