// SPDX-License-Identifier: MIT OR Apache-2.0

//! The duration mini-grammar.
//!
//! A duration is one or more `digits unit` components, optionally separated by
//! spaces or tabs, written in strictly descending unit order: `2m 30s`, `1h1m1s`,
//! `750ms`. Magnitudes are unsigned decimal integers. The total is a signed 64-bit
//! nanosecond count and must not overflow.

use crate::domain::literal::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICROSECOND, NANOS_PER_MILLISECOND,
    NANOS_PER_MINUTE, NANOS_PER_SECOND, NANOS_PER_WEEK,
};

/// Unit spellings and their size in nanoseconds. Two-letter spellings come before
/// the one-letter units they start with.
static UNITS: [(&str, i64); 10] = [
    ("ns", 1),
    ("μs", NANOS_PER_MICROSECOND), // U+03BC
    ("µs", NANOS_PER_MICROSECOND), // U+00B5
    ("us", NANOS_PER_MICROSECOND),
    ("ms", NANOS_PER_MILLISECOND),
    ("s", NANOS_PER_SECOND),
    ("m", NANOS_PER_MINUTE),
    ("h", NANOS_PER_HOUR),
    ("d", NANOS_PER_DAY),
    ("w", NANOS_PER_WEEK),
];

fn read_unit(text: &str) -> Option<(i64, usize)> {
    UNITS
        .iter()
        .find(|(name, _)| text.starts_with(name))
        .map(|&(name, size)| (size, name.len()))
}

/// Reads a duration from the start of `text`.
///
/// Returns the total in nanoseconds and the number of bytes consumed, which stops
/// after the last complete component. Fails if no component was found, if units
/// are repeated or ascending, or if any product or sum overflows.
pub(crate) fn read_duration(text: &str) -> Option<(i64, usize)> {
    let mut consumed = 0;
    let mut total: i64 = 0;
    let mut previous_unit: Option<i64> = None;

    loop {
        let rest = &text[consumed..];
        let start = consumed + (rest.len() - rest.trim_start_matches([' ', '\t']).len());
        let rest = &text[start..];

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            break;
        }
        let Some((unit, unit_len)) = read_unit(&rest[digits..]) else {
            break;
        };

        if previous_unit.is_some_and(|previous| unit >= previous) {
            return None;
        }

        let magnitude: i64 = rest[..digits].parse().ok()?;
        total = total.checked_add(magnitude.checked_mul(unit)?)?;

        previous_unit = Some(unit);
        consumed = start + digits + unit_len;
    }

    previous_unit.map(|_| (total, consumed))
}
