// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the walnut crate.
//!
//! Two families of errors live here. [`ParseError`] is produced by the parser and
//! always points at a 1-indexed source line. [`ConfigError`] covers everything
//! around the parser: looking values up, converting them, and acquiring the raw
//! bytes from files or streams. I/O failures are never reported as syntax errors.

use crate::domain::literal::LiteralKind;
use thiserror::Error;

/// A syntax error found while parsing a walnut document.
///
/// Parsing stops at the first error, so a document yields at most one of these.
///
/// # Examples
///
/// ```
/// use walnut::domain::ParseError;
///
/// let err = walnut::parse(b" bad = 1").unwrap_err();
/// assert_eq!(err, ParseError::IndentationError { line: 1 });
/// assert_eq!(err.line(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The indentation of a line does not line up with any open ancestor, the
    /// first line is indented, or a line is nested below a value key.
    #[error("line {line}: invalid indentation")]
    IndentationError {
        /// The offending line
        line: u32,
    },

    /// A key is empty, has an empty dotted segment, or contains whitespace or
    /// control characters.
    #[error("line {line}: invalid key")]
    InvalidKey {
        /// The offending line
        line: u32,
    },

    /// No literal type accepts the value text.
    #[error("line {line}: invalid value '{raw}'")]
    InvalidValue {
        /// The offending line
        line: u32,
        /// The value text as written, without its trailing comment
        raw: String,
    },

    /// A key is defined twice, or a value key collides with a key group.
    #[error("line {line}: key '{key}' conflicts with '{original_key}' on line {original_line}")]
    KeyConflict {
        /// The key defined last
        key: String,
        /// The line defining `key`
        line: u32,
        /// The earlier key it collides with
        original_key: String,
        /// The line defining `original_key`
        original_line: u32,
    },
}

impl ParseError {
    /// Returns the 1-indexed line the error is reported on.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::IndentationError { line }
            | ParseError::InvalidKey { line }
            | ParseError::InvalidValue { line, .. }
            | ParseError::KeyConflict { line, .. } => *line,
        }
    }
}

/// The main error type for loading and reading configuration.
///
/// # Examples
///
/// ```
/// use walnut::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::Undefined {
///         key: "database.host".to_string(),
///     })
/// }
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key is not defined.
    #[error("key '{key}' is not defined")]
    Undefined {
        /// The key that was looked up
        key: String,
    },

    /// The requested key holds a different kind of literal.
    #[error("key '{key}' holds a {actual}, not a {expected}")]
    WrongType {
        /// The key that was looked up
        key: String,
        /// The kind stored under the key
        actual: LiteralKind,
        /// The kind the caller asked for
        expected: LiteralKind,
    },

    /// The literal has the right kind but cannot be represented in the target type.
    #[error("Failed to convert value for key '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration source could not deliver its bytes.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The document is not valid walnut.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] ParseError),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `WrongType` error for `key`.
    pub fn wrong_type(key: &str, actual: LiteralKind, expected: LiteralKind) -> Self {
        ConfigError::WrongType {
            key: key.to_string(),
            actual,
            expected,
        }
    }

    /// Creates a `SourceError` without an underlying cause.
    pub fn source_error(source_name: &str, message: impl Into<String>) -> Self {
        ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
