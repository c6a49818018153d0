//! Strongly typed filter sets.
//!
//! Each list view declares an enum of its filter fields and implements
//! [`FilterField`] for it. A [`FilterSet`] only stores fields that carry a
//! value; an empty string is the same as "no constraint".

use std::collections::BTreeMap;
use std::fmt::Debug;

use contracts::domain::common::{Choice, LookupKind};

use super::query::QueryMap;

/// Where a filter field gets the options shown in its dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOptions {
    /// Loaded from the backend when the filter modal opens; the filter
    /// value is the option id.
    Lookup(LookupKind),
    /// Same, but the backend filters on the option name (`brand__name`).
    LookupName(LookupKind),
    /// Values compiled in from the backend's model choices.
    Choices(&'static [Choice]),
    /// Free text.
    Text,
}

pub trait FilterField: Copy + Ord + Debug + Send + Sync + 'static {
    /// Every field of the view, in display order.
    const ALL: &'static [Self];

    /// URL query / backend parameter name.
    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn options(self) -> FilterOptions;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    fn lookup(self) -> Option<LookupKind> {
        match self.options() {
            FilterOptions::Lookup(kind) | FilterOptions::LookupName(kind) => Some(kind),
            FilterOptions::Choices(_) | FilterOptions::Text => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterValue {
    #[default]
    Unset,
    Set(String),
}

impl FilterValue {
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            FilterValue::Unset
        } else {
            FilterValue::Set(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::Unset => "",
            FilterValue::Set(v) => v,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, FilterValue::Set(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet<F: FilterField> {
    values: BTreeMap<F, String>,
}

impl<F: FilterField> Default for FilterSet<F> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<F: FilterField> FilterSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks this view's fields out of a query; unknown keys are ignored.
    pub fn from_query(query: &QueryMap) -> Self {
        let mut set = Self::new();
        for field in F::ALL {
            if let Some(raw) = query.get(field.key()) {
                set.set(*field, raw);
            }
        }
        set
    }

    pub fn get(&self, field: F) -> FilterValue {
        self.values
            .get(&field)
            .map(|v| FilterValue::Set(v.clone()))
            .unwrap_or_default()
    }

    /// Sets a field; an empty value unsets it.
    pub fn set(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    pub fn unset(&mut self, field: F) {
        self.values.remove(&field);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields carrying a value.
    pub fn active_count(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Writes every field of the view into `query`: set fields are inserted
    /// or replaced, unset ones removed. Keys the view does not own are kept.
    pub fn write_into(&self, query: &mut QueryMap) {
        for field in F::ALL {
            match self.values.get(field) {
                Some(value) => query.set(field.key(), value.clone()),
                None => {
                    query.remove(field.key());
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub(crate) enum TestFilter {
        Status,
        Brand,
    }

    impl FilterField for TestFilter {
        const ALL: &'static [Self] = &[TestFilter::Status, TestFilter::Brand];

        fn key(self) -> &'static str {
            match self {
                TestFilter::Status => "status",
                TestFilter::Brand => "brand",
            }
        }

        fn label(self) -> &'static str {
            match self {
                TestFilter::Status => "Status",
                TestFilter::Brand => "Brand",
            }
        }

        fn options(self) -> FilterOptions {
            match self {
                TestFilter::Status => FilterOptions::Text,
                TestFilter::Brand => FilterOptions::Lookup(LookupKind::Brand),
            }
        }
    }

    #[test]
    fn test_from_query_ignores_foreign_and_empty_keys() {
        let q = QueryMap::parse("status=&brand=3&tab=spools");
        let set = FilterSet::<TestFilter>::from_query(&q);
        assert_eq!(set.get(TestFilter::Status), FilterValue::Unset);
        assert_eq!(set.get(TestFilter::Brand), FilterValue::Set("3".to_string()));
        assert_eq!(set.active_count(), 1);
    }

    #[test]
    fn test_write_into_keeps_foreign_keys() {
        let mut q = QueryMap::parse("tab=spools&status=low&search=PLA");
        let mut set = FilterSet::<TestFilter>::new();
        set.set(TestFilter::Brand, "7");
        set.write_into(&mut q);
        assert_eq!(q, QueryMap::parse("tab=spools&search=PLA&brand=7"));
    }

    #[test]
    fn test_empty_value_unsets() {
        let mut set = FilterSet::<TestFilter>::new();
        set.set(TestFilter::Status, "low");
        set.set(TestFilter::Status, "");
        assert!(set.is_empty());
        assert_eq!(TestFilter::from_key("brand"), Some(TestFilter::Brand));
        assert_eq!(TestFilter::Brand.lookup(), Some(LookupKind::Brand));
        assert_eq!(TestFilter::Status.lookup(), None);
    }
}
