// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer that loads configuration.
//!
//! This module ties a source and a parser together into a [`Config`], the main
//! entry point for applications reading walnut files.

pub mod loader;

// Re-export commonly used types
pub use loader::{Config, ConfigBuilder};
