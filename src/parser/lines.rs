// SPDX-License-Identifier: MIT OR Apache-2.0

//! Physical line handling: blank/comment filtering and line decomposition.
//!
//! Everything here works on bytes. Only the key token and the value text are
//! required to be UTF-8, so a stray invalid byte inside a comment never fails.

use crate::domain::ParseError;

/// A significant line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
    /// 1-indexed position in the document
    pub line_number: u32,
    /// Leading spaces and tabs
    pub indent: &'a [u8],
    /// The key, possibly dotted
    pub key_token: &'a str,
    /// The value text, trimmed and without its comment; `None` for key groups
    pub raw_value: Option<&'a str>,
}

fn is_blank_byte(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn trim_blanks(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !is_blank_byte(*first) {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !is_blank_byte(*last) {
            break;
        }
        bytes = rest;
    }
    bytes
}

/// Splits the input into numbered physical lines, dropping a trailing `\r`.
pub(crate) fn physical_lines(input: &[u8]) -> impl Iterator<Item = (u32, &[u8])> {
    input.split(|&b| b == b'\n').enumerate().map(|(i, line)| {
        let number = u32::try_from(i + 1).unwrap_or(u32::MAX);
        (number, line.strip_suffix(b"\r").unwrap_or(line))
    })
}

/// Returns true if the line holds nothing but blanks and an optional comment.
pub(crate) fn is_blank(line: &[u8]) -> bool {
    match line.iter().find(|&&b| !is_blank_byte(b)) {
        None => true,
        Some(&b) => b == b'#',
    }
}

/// Cuts a trailing comment off a value, leaving `#` inside string literals alone.
pub(crate) fn strip_comment(value: &[u8]) -> &[u8] {
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in value.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'#' {
            return &value[..i];
        }
    }

    value
}

fn key_token(line_number: u32, bytes: &[u8]) -> Result<&str, ParseError> {
    let invalid = || ParseError::InvalidKey { line: line_number };
    let token = std::str::from_utf8(trim_blanks(bytes)).map_err(|_| invalid())?;

    if token.is_empty() || token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }
    Ok(token)
}

fn value_text(line_number: u32, bytes: &[u8]) -> Result<&str, ParseError> {
    let raw = trim_blanks(strip_comment(bytes));
    let invalid = || ParseError::InvalidValue {
        line: line_number,
        raw: String::from_utf8_lossy(raw).into_owned(),
    };

    if raw.is_empty() {
        return Err(invalid());
    }
    std::str::from_utf8(raw).map_err(|_| invalid())
}

/// Splits a significant line into indentation, key token and value text.
pub(crate) fn decompose(line_number: u32, line: &[u8]) -> Result<SourceLine<'_>, ParseError> {
    let indent_len = line.iter().take_while(|&&b| is_blank_byte(b)).count();
    let (indent, rest) = line.split_at(indent_len);

    let (key, value) = match rest.iter().position(|&b| b == b'=' || b == b'#') {
        Some(i) if rest[i] == b'=' => (&rest[..i], Some(&rest[i + 1..])),
        Some(i) => (&rest[..i], None),
        None => (rest, None),
    };

    Ok(SourceLine {
        line_number,
        indent,
        key_token: key_token(line_number, key)?,
        raw_value: value.map(|v| value_text(line_number, v)).transpose()?,
    })
}
