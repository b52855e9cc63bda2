// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! This module contains concrete implementations of the `ConfigSource` port.
//! Each adapter acquires the raw bytes of a walnut document from one kind of
//! input and leaves parsing to the service layer.

#[cfg(feature = "file")]
pub mod file;
pub mod stream;

// Re-export adapters based on feature flags
#[cfg(feature = "file")]
pub use file::FileSource;
pub use stream::StreamSource;
