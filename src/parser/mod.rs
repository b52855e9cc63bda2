// SPDX-License-Identifier: MIT OR Apache-2.0

//! The walnut format parser.
//!
//! Parsing is a single left-to-right pass over the input:
//!
//! 1. `lines` splits the bytes into physical lines and drops blank and comment
//!    lines, then breaks each remaining line into indentation, key and value.
//! 2. `outline` resolves the indentation into a depth and builds the dotted key.
//! 3. `literal` (with `duration`) types the value text.
//! 4. `assembler` rejects duplicate and colliding keys and builds the map.
//!
//! The first error aborts the whole parse; no partial map is ever returned.

mod assembler;
mod duration;
mod lines;
mod literal;
mod outline;

use crate::domain::{ConfigMap, ParseError};
use crate::ports::ConfigParser;
use assembler::{Assembler, Assignment};
use outline::Outline;

/// Parses a walnut document into a [`ConfigMap`].
///
/// # Examples
///
/// ```rust
/// use walnut::domain::Literal;
///
/// let map = walnut::parse(b"server\n  port = 8080\n").unwrap();
/// assert_eq!(map.get("server.port"), Some(&Literal::Int64(8080)));
///
/// let err = walnut::parse(b"a = 1\na.b = 2\n").unwrap_err();
/// assert_eq!(err.line(), 2);
/// ```
pub fn parse(input: &[u8]) -> Result<ConfigMap, ParseError> {
    tracing::debug!(bytes = input.len(), "parsing walnut document");

    let result = parse_lines(input);
    match &result {
        Ok(map) => tracing::debug!(keys = map.len(), "parsed walnut document"),
        Err(e) => tracing::debug!(line = e.line(), error = %e, "walnut document rejected"),
    }
    result
}

fn parse_lines(input: &[u8]) -> Result<ConfigMap, ParseError> {
    let mut outline = Outline::default();
    let mut assembler = Assembler::default();

    for (line_number, text) in lines::physical_lines(input) {
        if lines::is_blank(text) {
            continue;
        }

        let line = lines::decompose(line_number, text)?;
        let key = outline.push(&line)?;

        if let Some(raw) = line.raw_value {
            let value = literal::parse_literal(raw).ok_or_else(|| ParseError::InvalidValue {
                line: line_number,
                raw: raw.to_string(),
            })?;
            assembler.insert(Assignment {
                key,
                raw_value: raw.to_string(),
                value,
                line_number,
            })?;
        }
    }

    Ok(assembler.finish())
}

/// [`ConfigParser`] implementation for walnut documents.
///
/// # Examples
///
/// ```rust
/// use walnut::parser::WalnutParser;
/// use walnut::ports::ConfigParser;
/// use std::path::Path;
///
/// let parser = WalnutParser;
/// assert!(parser.supports(Path::new("settings.walnut")));
/// assert_eq!(parser.parse(b"flag = true").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WalnutParser;

impl ConfigParser for WalnutParser {
    fn parse(&self, content: &[u8]) -> Result<ConfigMap, ParseError> {
        parse(content)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["walnut", "wn"]
    }
}
