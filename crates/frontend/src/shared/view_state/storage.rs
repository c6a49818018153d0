//! Per-view persistence in a key/value store (browser `localStorage`).
//!
//! Everything here is best-effort: failures are logged and the caller gets
//! defaults instead of an error.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::columns::{ColumnDef, ColumnVisibility};
use super::error::{Result, ViewStateError};
use super::query::QueryMap;

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-process storage. Clones share the same items, like two tabs of the
/// same origin would.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage accessors scoped to one view's key namespace.
#[derive(Clone)]
pub struct ViewStore {
    storage: Rc<dyn KeyValueStorage>,
    namespace: &'static str,
}

impl ViewStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, namespace: &'static str) -> Self {
        Self { storage, namespace }
    }

    pub fn filters_key(&self) -> String {
        format!("{}-filters", self.namespace)
    }

    pub fn columns_key(&self) -> String {
        format!("{}-columns", self.namespace)
    }

    /// Persisted filter object, or `None` when absent, empty or unreadable.
    pub fn load_filters(&self) -> Option<QueryMap> {
        let key = self.filters_key();
        match self.read_filters(&key) {
            Ok(Some(query)) if !query.is_empty() => Some(query),
            Ok(_) => None,
            Err(e) => {
                log::warn!("ignoring persisted filters: {}", e);
                None
            }
        }
    }

    fn read_filters(&self, key: &str) -> Result<Option<QueryMap>> {
        let Some(raw) = self.storage.get_item(key)? else {
            return Ok(None);
        };
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| ViewStateError::Malformed {
                key: key.to_string(),
                source,
            })?;
        let serde_json::Value::Object(object) = value else {
            return Err(ViewStateError::InvalidShape {
                key: key.to_string(),
            });
        };

        let mut query = QueryMap::new();
        for (name, value) in object {
            let text = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(ViewStateError::InvalidShape {
                        key: key.to_string(),
                    })
                }
            };
            if !text.is_empty() {
                query.set(name, text);
            }
        }
        Ok(Some(query))
    }

    /// Writes the filter object; an empty one removes the entry.
    pub fn save_filters(&self, filters: &QueryMap) {
        if filters.is_empty() {
            self.clear_filters();
            return;
        }
        let key = self.filters_key();
        let result = serde_json::to_string(&filters.to_btree())
            .map_err(|source| ViewStateError::Malformed {
                key: key.clone(),
                source,
            })
            .and_then(|raw| self.storage.set_item(&key, &raw));
        if let Err(e) = result {
            log::warn!("failed to persist filters for '{}': {}", self.namespace, e);
        }
    }

    pub fn clear_filters(&self) {
        if let Err(e) = self.storage.remove_item(&self.filters_key()) {
            log::warn!("failed to clear filters for '{}': {}", self.namespace, e);
        }
    }

    /// Persisted columns, or the universe defaults when absent or invalid.
    pub fn load_columns(&self, universe: &[ColumnDef]) -> ColumnVisibility {
        match self.read_columns(universe) {
            Ok(Some(columns)) => columns,
            Ok(None) => ColumnVisibility::defaults(universe),
            Err(e) => {
                log::warn!("ignoring persisted columns: {}", e);
                ColumnVisibility::defaults(universe)
            }
        }
    }

    fn read_columns(&self, universe: &[ColumnDef]) -> Result<Option<ColumnVisibility>> {
        let key = self.columns_key();
        let Some(raw) = self.storage.get_item(&key)? else {
            return Ok(None);
        };
        let ids: Vec<String> = serde_json::from_str(&raw)
            .map_err(|source| ViewStateError::Malformed { key, source })?;
        ColumnVisibility::validated(universe, ids).map(Some)
    }

    pub fn save_columns(&self, columns: &ColumnVisibility) {
        let key = self.columns_key();
        let result = serde_json::to_string(columns.ids())
            .map_err(|source| ViewStateError::Malformed {
                key: key.clone(),
                source,
            })
            .and_then(|raw| self.storage.set_item(&key, &raw));
        if let Err(e) = result {
            log::warn!("failed to persist columns for '{}': {}", self.namespace, e);
        }
    }

    pub fn clear_columns(&self) {
        if let Err(e) = self.storage.remove_item(&self.columns_key()) {
            log::warn!("failed to clear columns for '{}': {}", self.namespace, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIVERSE: &[ColumnDef] = &[
        ColumnDef::new("name", "Name", true),
        ColumnDef::new("status", "Status", true),
        ColumnDef::new("weight", "Weight", false),
    ];

    fn store() -> (MemoryStorage, ViewStore) {
        let mem = MemoryStorage::new();
        let store = ViewStore::new(Rc::new(mem.clone()), "filament-spools");
        (mem, store)
    }

    #[test]
    fn test_keys_are_namespaced() {
        let (_, store) = store();
        assert_eq!(store.filters_key(), "filament-spools-filters");
        assert_eq!(store.columns_key(), "filament-spools-columns");
    }

    #[test]
    fn test_filters_accept_scalars_and_drop_blanks() {
        let (mem, store) = store();
        mem.set_item(
            "filament-spools-filters",
            r#"{"brand":3,"status":"low","project":null,"feature":""}"#,
        )
        .unwrap();
        assert_eq!(store.load_filters(), Some(QueryMap::parse("brand=3&status=low")));
    }

    #[test]
    fn test_malformed_filters_are_treated_as_absent() {
        let (mem, store) = store();
        mem.set_item("filament-spools-filters", "{not json").unwrap();
        assert_eq!(store.load_filters(), None);

        mem.set_item("filament-spools-filters", r#"["brand"]"#).unwrap();
        assert_eq!(store.load_filters(), None);

        mem.set_item("filament-spools-filters", r#"{"brand":{"id":3}}"#).unwrap();
        assert_eq!(store.load_filters(), None);
    }

    #[test]
    fn test_save_empty_filters_removes_entry() {
        let (mem, store) = store();
        store.save_filters(&QueryMap::parse("status=low"));
        assert_eq!(mem.raw("filament-spools-filters").as_deref(), Some(r#"{"status":"low"}"#));

        store.save_filters(&QueryMap::new());
        assert_eq!(mem.raw("filament-spools-filters"), None);
    }

    #[test]
    fn test_columns_round_trip_and_fallback() {
        let (mem, store) = store();
        assert_eq!(store.load_columns(UNIVERSE), ColumnVisibility::defaults(UNIVERSE));

        let picked = ColumnVisibility::validated(UNIVERSE, vec!["weight".into(), "name".into()]).unwrap();
        store.save_columns(&picked);
        assert_eq!(store.load_columns(UNIVERSE), picked);

        mem.set_item("filament-spools-columns", r#"["name","photo"]"#).unwrap();
        assert_eq!(store.load_columns(UNIVERSE), ColumnVisibility::defaults(UNIVERSE));

        mem.set_item("filament-spools-columns", "oops").unwrap();
        assert_eq!(store.load_columns(UNIVERSE), ColumnVisibility::defaults(UNIVERSE));
    }
}
