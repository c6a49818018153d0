//! Ordered URL query map.
//!
//! The URL is the source of truth for search text and active filters, so this
//! type keeps the parameters in the order they appear and writes them back the
//! same way. Comparison ignores order.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, Default)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `?a=1&b=two` (leading `?` optional). Pairs with an empty key
    /// are dropped; a repeated key keeps its first position and last value.
    pub fn parse(search: &str) -> Self {
        let mut map = Self::new();
        for part in search.trim_start_matches('?').split('&') {
            if part.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = part.split_once('=').unwrap_or((part, ""));
            let key = decode_component(raw_key);
            if key.is_empty() {
                continue;
            }
            map.set(key, decode_component(raw_value));
        }
        map
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replaces the value in place, or appends a new pair.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(pos).1)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `a=1&b=two` without the leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `?a=1&b=two`, or an empty string when there are no parameters.
    pub fn to_search_string(&self) -> String {
        if self.pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", self.encode())
        }
    }

    pub fn to_btree(&self) -> BTreeMap<String, String> {
        self.pairs.iter().cloned().collect()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

impl PartialEq for QueryMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for QueryMap {}

impl fmt::Display for QueryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_search_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_decodes() {
        let q = QueryMap::parse("?status=low&brand=3&search=silk+PLA%2B");
        assert_eq!(
            q.iter().collect::<Vec<_>>(),
            vec![("status", "low"), ("brand", "3"), ("search", "silk PLA+")]
        );
    }

    #[test]
    fn test_parse_skips_empty_keys_and_repeats() {
        let q = QueryMap::parse("=x&&a=1&b&a=2");
        assert_eq!(q.iter().collect::<Vec<_>>(), vec![("a", "2"), ("b", "")]);
    }

    #[test]
    fn test_encode_round_trips_special_characters() {
        let mut q = QueryMap::new();
        q.set("brand__name", "Prusa Research");
        q.set("search", "a&b=c");
        assert_eq!(q.to_search_string(), "?brand__name=Prusa%20Research&search=a%26b%3Dc");
        assert_eq!(QueryMap::parse(&q.to_search_string()), q);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = QueryMap::parse("status=low&brand=3");
        let b = QueryMap::parse("brand=3&status=low");
        assert_eq!(a, b);
        assert_ne!(a, QueryMap::parse("brand=3"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut q = QueryMap::parse("a=1&b=2");
        q.set("a", "9");
        q.set("c", "3");
        assert_eq!(q.encode(), "a=9&b=2&c=3");
        assert_eq!(q.remove("b"), Some("2".to_string()));
        assert_eq!(q.encode(), "a=9&c=3");
        assert_eq!(QueryMap::new().to_search_string(), "");
    }
}
