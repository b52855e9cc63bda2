// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stream configuration source adapter.
//!
//! Reads a walnut document from any `Read` implementation (stdin, a socket, an
//! in-memory buffer). A stream can only be consumed once.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigSource;
use std::io::{BufRead, BufReader, Read};

/// Default maximum length of a single line, in bytes (64KB)
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Configuration source backed by a reader.
///
/// The stream is read line by line through a [`BufReader`]. A line longer than the
/// maximum line length fails the read instead of buffering without bound.
///
/// # Examples
///
/// ```rust
/// use walnut::adapters::StreamSource;
/// use walnut::ports::ConfigSource;
///
/// let mut source = StreamSource::new(&b"flag = true\n"[..]);
/// assert_eq!(source.read().unwrap(), b"flag = true\n");
/// assert!(source.read().is_err());
/// ```
#[derive(Debug)]
pub struct StreamSource<R> {
    reader: Option<BufReader<R>>,
    name: String,
    max_line_length: usize,
}

impl<R: Read + Send> StreamSource<R> {
    /// Creates a stream source named `"stream"`.
    pub fn new(reader: R) -> Self {
        Self::with_name(reader, "stream")
    }

    /// Creates a stream source with a custom name, e.g. `"stdin"`.
    pub fn with_name(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader: Some(BufReader::new(reader)),
            name: name.into(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    /// Sets the maximum accepted length of a single line, including its newline.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}

impl<R: Read + Send> ConfigSource for StreamSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        let mut reader = self
            .reader
            .take()
            .ok_or_else(|| ConfigError::source_error(&self.name, "stream already consumed"))?;

        let limit = u64::try_from(self.max_line_length)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        let mut content = Vec::new();
        let mut line = Vec::new();
        let mut line_number = 0u32;

        loop {
            line.clear();
            let n = (&mut reader).take(limit).read_until(b'\n', &mut line)?;
            if n == 0 {
                break;
            }
            line_number = line_number.saturating_add(1);

            if line.len() > self.max_line_length {
                tracing::warn!(
                    source = %self.name,
                    line = line_number,
                    max = self.max_line_length,
                    "line exceeds maximum length"
                );
                return Err(ConfigError::source_error(
                    &self.name,
                    format!(
                        "line {} exceeds maximum length of {} bytes",
                        line_number, self.max_line_length
                    ),
                ));
            }
            content.extend_from_slice(&line);
        }

        tracing::debug!(bytes = content.len(), lines = line_number, source = %self.name, "read stream");
        Ok(content)
    }
}
