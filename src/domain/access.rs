// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessors over parsed configuration.
//!
//! This module defines the `ConfigAccess` trait, the interface callers use to read
//! values out of a [`ConfigMap`](crate::domain::ConfigMap), a
//! [`ScopedConfig`](crate::domain::ScopedConfig) view or a loaded
//! [`Config`](crate::service::Config). Every typed getter distinguishes a missing
//! key ([`ConfigError::Undefined`]) from a key holding another kind of literal
//! ([`ConfigError::WrongType`]). No getter converts between kinds.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::literal::{Literal, LiteralKind};
use chrono::{DateTime, FixedOffset};
use std::time::Duration;

/// Read access to a set of configuration values.
///
/// Implementors only provide [`lookup`](ConfigAccess::lookup) and
/// [`keys`](ConfigAccess::keys); the typed getters are built on top of them.
///
/// # Examples
///
/// ```rust
/// use walnut::prelude::*;
///
/// # fn main() -> walnut::domain::Result<()> {
/// let map = walnut::parse(b"retries = 3\nname = \"api\"")?;
/// assert_eq!(map.int64("retries")?, 3);
/// assert!(matches!(map.bool("retries"), Err(ConfigError::WrongType { .. })));
/// assert!(matches!(map.bool("missing"), Err(ConfigError::Undefined { .. })));
/// # Ok(())
/// # }
/// ```
pub trait ConfigAccess {
    /// Returns the literal stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<&Literal>;

    /// Returns all defined keys in sorted order.
    fn keys(&self) -> Vec<&str>;

    /// Returns the literal stored under `key`, or `Undefined`.
    fn literal(&self, key: &str) -> Result<&Literal> {
        self.lookup(key).ok_or_else(|| ConfigError::Undefined {
            key: key.to_string(),
        })
    }

    /// Returns true if `key` holds a value.
    fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Retrieves a string value.
    fn string(&self, key: &str) -> Result<String> {
        match self.literal(key)? {
            Literal::String(s) => Ok(s.clone()),
            other => Err(ConfigError::wrong_type(key, other.kind(), LiteralKind::String)),
        }
    }

    /// Retrieves a boolean value.
    fn bool(&self, key: &str) -> Result<bool> {
        match self.literal(key)? {
            Literal::Bool(b) => Ok(*b),
            other => Err(ConfigError::wrong_type(key, other.kind(), LiteralKind::Bool)),
        }
    }

    /// Retrieves an integer value.
    fn int64(&self, key: &str) -> Result<i64> {
        match self.literal(key)? {
            Literal::Int64(n) => Ok(*n),
            other => Err(ConfigError::wrong_type(key, other.kind(), LiteralKind::Int64)),
        }
    }

    /// Retrieves a floating point value. Integers are not widened.
    fn float64(&self, key: &str) -> Result<f64> {
        match self.literal(key)? {
            Literal::Float64(x) => Ok(*x),
            other => Err(ConfigError::wrong_type(key, other.kind(), LiteralKind::Float64)),
        }
    }

    /// Retrieves a duration value.
    ///
    /// Durations read from a document are never negative; a hand-built negative
    /// duration fails with `TypeConversionError`.
    fn duration(&self, key: &str) -> Result<Duration> {
        match self.literal(key)? {
            Literal::Duration(nanos) => u64::try_from(*nanos)
                .map(Duration::from_nanos)
                .map_err(|e| ConfigError::TypeConversionError {
                    key: key.to_string(),
                    target_type: "std::time::Duration".to_string(),
                    source: Box::new(e),
                }),
            other => Err(ConfigError::wrong_type(key, other.kind(), LiteralKind::Duration)),
        }
    }

    /// Retrieves a timestamp value with the offset it was written with.
    fn timestamp(&self, key: &str) -> Result<DateTime<FixedOffset>> {
        match self.literal(key)? {
            Literal::Timestamp(t) => Ok(*t),
            other => Err(ConfigError::wrong_type(key, other.kind(), LiteralKind::Timestamp)),
        }
    }
}

/// Fail-fast unwrapping for accessor results.
///
/// For callers that treat a missing or mistyped key as a programming error.
///
/// ```rust
/// use walnut::prelude::*;
///
/// let map = walnut::parse(b"port = 8080").unwrap();
/// let port = map.int64("port").require();
/// assert_eq!(port, 8080);
/// ```
pub trait Require<T> {
    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the error message if the lookup failed.
    fn require(self) -> T;
}

impl<T> Require<T> for Result<T> {
    fn require(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}
