// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed configuration mapping and scoped views over it.

use crate::domain::access::ConfigAccess;
use crate::domain::config_key::{ConfigKey, KEY_SEPARATOR};
use crate::domain::literal::Literal;
use std::collections::BTreeMap;

/// An immutable mapping from dotted keys to literals.
///
/// A `ConfigMap` is only built by the parser, which guarantees that no key is
/// both a value key and a key group: for any two keys, neither is a dot-bounded
/// prefix of the other.
///
/// # Examples
///
/// ```
/// use walnut::prelude::*;
///
/// let map = walnut::parse(b"server\n  port = 8080\n  host = \"localhost\"").unwrap();
/// assert_eq!(map.keys(), vec!["server.host", "server.port"]);
/// assert_eq!(map.int64("server.port").unwrap(), 8080);
/// assert_eq!(map.select("server").string("host").unwrap(), "localhost");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigMap {
    entries: BTreeMap<ConfigKey, Literal>,
}

impl ConfigMap {
    pub(crate) fn from_entries(entries: BTreeMap<ConfigKey, Literal>) -> Self {
        Self { entries }
    }

    /// Looks up a key exactly as written.
    pub fn get(&self, key: &str) -> Option<&Literal> {
        self.entries.get(key)
    }

    /// Returns the number of value keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document defined no value keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys and literals in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConfigKey, &Literal)> {
        self.entries.iter()
    }

    /// Returns a view whose lookups are relative to `prefix`.
    ///
    /// An empty prefix selects the whole map.
    pub fn select(&self, prefix: &str) -> ScopedConfig<'_> {
        ScopedConfig::new(self, prefix.to_string())
    }
}

impl ConfigAccess for ConfigMap {
    fn lookup(&self, key: &str) -> Option<&Literal> {
        self.get(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(ConfigKey::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a ConfigKey, &'a Literal);
    type IntoIter = std::collections::btree_map::Iter<'a, ConfigKey, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A view of a [`ConfigMap`] rooted at a key group.
///
/// Lookups on the view prepend the prefix, and `keys()` lists the keys below it
/// with the prefix removed.
#[derive(Clone, Debug)]
pub struct ScopedConfig<'a> {
    map: &'a ConfigMap,
    /// Empty, or the prefix followed by a separator
    prefix: String,
}

impl<'a> ScopedConfig<'a> {
    fn new(map: &'a ConfigMap, mut prefix: String) -> Self {
        if !prefix.is_empty() {
            prefix.push(KEY_SEPARATOR);
        }
        Self { map, prefix }
    }

    /// Returns the prefix this view is rooted at, without a trailing separator.
    pub fn prefix(&self) -> &str {
        self.prefix
            .strip_suffix(KEY_SEPARATOR)
            .unwrap_or(&self.prefix)
    }

    /// Narrows the view further.
    ///
    /// ```
    /// use walnut::prelude::*;
    ///
    /// let map = walnut::parse(b"a.b.c = 1").unwrap();
    /// assert_eq!(map.select("a").select("b").int64("c").unwrap(), 1);
    /// ```
    pub fn select(&self, prefix: &str) -> ScopedConfig<'a> {
        if prefix.is_empty() {
            return self.clone();
        }
        ScopedConfig::new(self.map, format!("{}{}", self.prefix, prefix))
    }
}

impl ConfigAccess for ScopedConfig<'_> {
    fn lookup(&self, key: &str) -> Option<&Literal> {
        if self.prefix.is_empty() {
            return self.map.get(key);
        }
        self.map.get(&format!("{}{}", self.prefix, key))
    }

    fn keys(&self) -> Vec<&str> {
        self.map
            .entries
            .keys()
            .filter_map(|key| key.as_str().strip_prefix(self.prefix.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigMap {
        let mut entries = BTreeMap::new();
        entries.insert(ConfigKey::from("string"), Literal::from("hello"));
        entries.insert(ConfigKey::from("int64"), Literal::Int64(12345));
        entries.insert(ConfigKey::from("foo.def"), Literal::from("hello"));
        entries.insert(ConfigKey::from("foo.abc"), Literal::from("bye"));
        entries.insert(ConfigKey::from("foobar"), Literal::Bool(true));
        ConfigMap::from_entries(entries)
    }

    #[test]
    fn test_keys_are_sorted() {
        let map = sample();
        assert_eq!(
            map.keys(),
            vec!["foo.abc", "foo.def", "foobar", "int64", "string"]
        );
    }

    #[test]
    fn test_get_present_and_absent() {
        let map = sample();
        assert_eq!(map.get("int64"), Some(&Literal::Int64(12345)));
        assert_eq!(map.get("undefined"), None);
        assert_eq!(map.get("foo"), None);
    }

    #[test]
    fn test_len() {
        let map = sample();
        assert_eq!(map.len(), 5);
        assert!(!map.is_empty());
        assert!(ConfigMap::default().is_empty());
    }

    #[test]
    fn test_select_lookup() {
        let map = sample();
        let foo = map.select("foo");
        assert_eq!(foo.lookup("def"), map.get("foo.def"));
        assert_eq!(foo.lookup("bar"), None);
    }

    #[test]
    fn test_select_keys_respect_dot_boundary() {
        let map = sample();
        assert_eq!(map.select("foo").keys(), vec!["abc", "def"]);
    }

    #[test]
    fn test_select_empty_prefix() {
        let map = sample();
        let all = map.select("");
        assert_eq!(all.prefix(), "");
        assert_eq!(all.keys(), map.keys());
        assert_eq!(all.lookup("string"), map.get("string"));
    }

    #[test]
    fn test_nested_select() {
        let mut entries = BTreeMap::new();
        entries.insert(ConfigKey::from("a.b.c"), Literal::Int64(1));
        let map = ConfigMap::from_entries(entries);
        let scoped = map.select("a").select("b");
        assert_eq!(scoped.prefix(), "a.b");
        assert_eq!(scoped.keys(), vec!["c"]);
        assert_eq!(scoped.lookup("c"), Some(&Literal::Int64(1)));
    }

    #[test]
    fn test_into_iterator() {
        let map = sample();
        let count = (&map).into_iter().count();
        assert_eq!(count, map.len());
    }
}
