// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, the interface between raw
//! configuration bytes and the typed [`ConfigMap`].

use crate::domain::{ConfigMap, ParseError};
use std::path::Path;

/// A trait for parsing configuration documents.
///
/// A parser turns the full contents of a document into a flat map from dotted keys
/// to typed literals, or reports the first syntax error it finds. Parsers never
/// perform I/O; bytes are supplied by a [`ConfigSource`](crate::ports::ConfigSource).
///
/// # Examples
///
/// ```rust
/// use walnut::ports::ConfigParser;
/// use walnut::domain::{ConfigMap, ParseError};
///
/// struct EmptyParser;
///
/// impl ConfigParser for EmptyParser {
///     fn parse(&self, _content: &[u8]) -> Result<ConfigMap, ParseError> {
///         Ok(ConfigMap::default())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["empty"]
///     }
/// }
///
/// assert!(EmptyParser.parse(b"anything").unwrap().is_empty());
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses a complete document.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] in the document. No partial map is returned.
    fn parse(&self, content: &[u8]) -> Result<ConfigMap, ParseError>;

    /// Returns the file extensions (without the leading dot) this parser handles.
    fn supported_extensions(&self) -> &[&str];

    /// Returns true if the path's extension is one of [`supported_extensions`].
    ///
    /// [`supported_extensions`]: ConfigParser::supported_extensions
    fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.supported_extensions()
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            })
    }
}
