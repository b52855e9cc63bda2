// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the core types.
//!
//! This module defines the values the parser produces (`Literal`, `ConfigKey`,
//! `ConfigMap`), the errors it reports, and the accessor interface callers use to
//! read typed values. It has no knowledge of files, streams or the command line.

pub mod access;
pub mod config_key;
pub mod config_map;
pub mod errors;
pub mod literal;

// Re-export commonly used types
pub use access::{ConfigAccess, Require};
pub use config_key::ConfigKey;
pub use config_map::{ConfigMap, ScopedConfig};
pub use errors::{ConfigError, ParseError, Result};
pub use literal::{Literal, LiteralKind};
