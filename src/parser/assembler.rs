// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folds assignments into the final map.
//!
//! Collisions are checked against every key seen so far, not just neighbouring
//! lines: `a = 1` at the top of a document and `a.b = 2` at the bottom collide even
//! though they sit in unrelated indentation branches.

use crate::domain::config_key::{ConfigKey, KEY_SEPARATOR};
use crate::domain::{ConfigMap, Literal, ParseError};
use std::collections::BTreeMap;
use std::ops::Bound;

/// A value key together with its literal and where it was written.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Assignment {
    pub key: ConfigKey,
    pub raw_value: String,
    pub value: Literal,
    pub line_number: u32,
}

#[derive(Debug, Default)]
pub(crate) struct Assembler {
    entries: BTreeMap<ConfigKey, (Literal, u32)>,
}

impl Assembler {
    /// Returns an already assigned key that collides with `key`, and its line.
    fn collision(&self, key: &ConfigKey) -> Option<(&ConfigKey, u32)> {
        self.entries
            .get_key_value(key.as_str())
            .or_else(|| {
                key.ancestors()
                    .find_map(|ancestor| self.entries.get_key_value(ancestor))
            })
            .or_else(|| {
                // descendants of `key` sort directly after "key."
                let group = format!("{}{}", key, KEY_SEPARATOR);
                self.entries
                    .range::<str, _>((Bound::Included(group.as_str()), Bound::Unbounded))
                    .next()
                    .filter(|(k, _)| key.is_ancestor_of(k.as_str()))
            })
            .map(|(k, (_, line))| (k, *line))
    }

    pub(crate) fn insert(&mut self, assignment: Assignment) -> Result<(), ParseError> {
        if let Some((original, original_line)) = self.collision(&assignment.key) {
            return Err(ParseError::KeyConflict {
                key: assignment.key.into_string(),
                line: assignment.line_number,
                original_key: original.to_string(),
                original_line,
            });
        }

        tracing::trace!(
            key = %assignment.key,
            raw = %assignment.raw_value,
            line = assignment.line_number,
            "assigned"
        );
        self.entries
            .insert(assignment.key, (assignment.value, assignment.line_number));
        Ok(())
    }

    pub(crate) fn finish(self) -> ConfigMap {
        ConfigMap::from_entries(
            self.entries
                .into_iter()
                .map(|(key, (value, _))| (key, value))
                .collect(),
        )
    }
}
