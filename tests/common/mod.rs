// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities for file-based integration tests.

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Writes `contents` to a fresh temporary `.walnut` file.
#[allow(dead_code)]
pub fn walnut_file(contents: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(".walnut")
        .tempfile()
        .expect("failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temporary file");
    file
}
