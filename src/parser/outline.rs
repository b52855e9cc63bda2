// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indentation resolution and dotted key construction.
//!
//! The outline keeps two parallel stacks indexed by depth: the indentation string
//! that opened each depth, and the key token written at it. A line's depth is only
//! valid if its indentation is reachable from the open stack through literal
//! string-prefix relationships, so one indentation chain cannot mix tabs and
//! spaces inconsistently while unrelated siblings are free to differ.

use crate::domain::config_key::{ConfigKey, KEY_SEPARATOR};
use crate::domain::ParseError;
use crate::parser::lines::SourceLine;

#[derive(Debug, Default)]
pub(crate) struct Outline<'a> {
    levels: Vec<&'a [u8]>,
    keys: Vec<&'a str>,
    previous_was_leaf: bool,
}

impl<'a> Outline<'a> {
    fn depth_of(&self, line: &SourceLine<'a>) -> Result<usize, ParseError> {
        let invalid = || ParseError::IndentationError {
            line: line.line_number,
        };

        if line.indent.is_empty() {
            return Ok(0);
        }
        if self.levels.is_empty() {
            return Err(invalid());
        }

        for (depth, level) in self.levels.iter().enumerate() {
            if line.indent == *level {
                return Ok(depth);
            }
            if !line.indent.starts_with(level) {
                return Err(invalid());
            }
        }

        // one level below the previous line, which must be a key group
        if self.previous_was_leaf {
            return Err(invalid());
        }
        Ok(self.levels.len())
    }

    /// Places a line in the outline and returns its full dotted key.
    pub(crate) fn push(&mut self, line: &SourceLine<'a>) -> Result<ConfigKey, ParseError> {
        let depth = self.depth_of(line)?;

        if line.key_token.split(KEY_SEPARATOR).any(str::is_empty) {
            return Err(ParseError::InvalidKey {
                line: line.line_number,
            });
        }

        self.levels.truncate(depth);
        self.levels.push(line.indent);
        self.keys.truncate(depth);
        self.keys.push(line.key_token);
        self.previous_was_leaf = line.raw_value.is_some();

        Ok(ConfigKey::join(&self.keys))
    }
}
