// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted configuration key newtype.
//!
//! This module provides the `ConfigKey` type, a newtype around `String` holding a
//! full dotted key such as `server.http.port`. Keys order lexicographically, which
//! is what gives [`ConfigMap`](crate::domain::ConfigMap) its sorted key listing.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The separator between key segments.
pub const KEY_SEPARATOR: char = '.';

/// A type-safe wrapper for dotted configuration keys.
///
/// # Examples
///
/// ```
/// use walnut::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.ancestors().collect::<Vec<_>>(), vec!["database"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Joins key segments with the separator.
    ///
    /// ```
    /// use walnut::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::join(["server", "port"]);
    /// assert_eq!(key.as_str(), "server.port");
    /// ```
    pub fn join<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for segment in segments {
            if !key.is_empty() {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(segment.as_ref());
        }
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns every strict dot-bounded prefix of the key, shortest first.
    ///
    /// ```
    /// use walnut::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("a.b.c");
    /// assert_eq!(key.ancestors().collect::<Vec<_>>(), vec!["a", "a.b"]);
    /// ```
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.0
            .match_indices(KEY_SEPARATOR)
            .map(move |(i, _)| &self.0[..i])
    }

    /// Returns true if `self` is a strict dot-bounded prefix of `other`, i.e. `self`
    /// names a key group that `other` lives in.
    ///
    /// ```
    /// use walnut::domain::config_key::ConfigKey;
    ///
    /// let group = ConfigKey::from("foo.bar");
    /// assert!(group.is_ancestor_of("foo.bar.baz"));
    /// assert!(!group.is_ancestor_of("foo.bars"));
    /// assert!(!group.is_ancestor_of("foo.bar"));
    /// ```
    pub fn is_ancestor_of(&self, other: &str) -> bool {
        other.len() > self.0.len()
            && other.starts_with(self.0.as_str())
            && other[self.0.len()..].starts_with(KEY_SEPARATOR)
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
