// SPDX-License-Identifier: MIT OR Apache-2.0

//! A parser for the walnut configuration format.
//!
//! Walnut documents nest keys by indentation and carry typed literals: strings,
//! booleans, 64-bit integers, floats, durations and timestamps.
//!
//! ```text
//! # comments start with '#'
//! server
//!   host    = "localhost"
//!   port    = 8080
//!   timeout = 1m 30s
//!
//! started = 2024-02-29 12:00:00 +0100
//! ```
//!
//! Parsing produces a flat [`ConfigMap`](domain::ConfigMap) from dotted keys
//! (`server.port`) to [`Literal`](domain::Literal)s, or the first syntax error
//! together with its line number.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `Literal`, `ConfigMap`, errors) and
//!   the `ConfigAccess` accessor trait
//! - **Parser**: The walnut format itself, from bytes to `ConfigMap`
//! - **Ports**: Trait definitions that define interfaces (`ConfigSource`, `ConfigParser`)
//! - **Adapters**: Sources that acquire document bytes (files, readers)
//! - **Service**: `Config`, which binds a source and a parser and supports reloading
//!
//! # Feature Flags
//!
//! - `file`: Enable file sources and OS configuration directories (default)
//! - `cli`: Build the `walnut` command-line tool (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use walnut::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let map = walnut::parse(b"server\n  port = 8080\n  timeout = 1m 30s\n")?;
//!
//! assert_eq!(map.int64("server.port")?, 8080);
//! assert_eq!(map.duration("server.timeout")?.as_secs(), 90);
//!
//! let server = map.select("server");
//! assert_eq!(server.keys(), vec!["port", "timeout"]);
//! # Ok(())
//! # }
//! ```
//!
//! Syntax errors carry the offending line:
//!
//! ```rust
//! use walnut::domain::ParseError;
//!
//! let err = walnut::parse(b"timeout = 30m1h").unwrap_err();
//! assert_eq!(
//!     err,
//!     ParseError::InvalidValue { line: 1, raw: "30m1h".to_string() }
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod parser;
pub mod ports;
pub mod service;

pub use parser::parse;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigAccess, ConfigError, ConfigKey, ConfigMap, Literal, LiteralKind, ParseError,
        Require, Result, ScopedConfig,
    };
    pub use crate::parser::WalnutParser;
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{Config, ConfigBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "file")]
    pub use crate::adapters::FileSource;
    pub use crate::adapters::StreamSource;
}
