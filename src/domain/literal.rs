// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed literal values.
//!
//! Every value in a walnut document resolves to exactly one [`Literal`] variant.
//! The parser only ever produces and stores literals; converting them to caller
//! types happens in the accessor layer.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nanoseconds per duration unit.
pub(crate) const NANOS_PER_MICROSECOND: i64 = 1_000;
pub(crate) const NANOS_PER_MILLISECOND: i64 = 1_000 * NANOS_PER_MICROSECOND;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000 * NANOS_PER_MILLISECOND;
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
pub(crate) const NANOS_PER_WEEK: i64 = 7 * NANOS_PER_DAY;

/// A typed configuration value.
///
/// # Examples
///
/// ```
/// use walnut::domain::Literal;
///
/// let map = walnut::parse(b"timeout = 1h30m").unwrap();
/// assert_eq!(map.get("timeout"), Some(&Literal::Duration(5_400_000_000_000)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// A double-quoted string, escapes resolved.
    String(String),
    /// `true` or `false`.
    Bool(bool),
    /// A signed 64-bit decimal integer.
    Int64(i64),
    /// A decimal floating point number.
    Float64(f64),
    /// A duration in nanoseconds.
    Duration(i64),
    /// A calendar instant carrying the offset it was written with.
    Timestamp(DateTime<FixedOffset>),
}

/// The kind of a [`Literal`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// [`Literal::String`]
    String,
    /// [`Literal::Bool`]
    Bool,
    /// [`Literal::Int64`]
    Int64,
    /// [`Literal::Float64`]
    Float64,
    /// [`Literal::Duration`]
    Duration,
    /// [`Literal::Timestamp`]
    Timestamp,
}

impl LiteralKind {
    /// Returns the lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            LiteralKind::String => "string",
            LiteralKind::Bool => "bool",
            LiteralKind::Int64 => "int64",
            LiteralKind::Float64 => "float64",
            LiteralKind::Duration => "duration",
            LiteralKind::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Literal {
    /// Returns the kind of this literal.
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::String(_) => LiteralKind::String,
            Literal::Bool(_) => LiteralKind::Bool,
            Literal::Int64(_) => LiteralKind::Int64,
            Literal::Float64(_) => LiteralKind::Float64,
            Literal::Duration(_) => LiteralKind::Duration,
            Literal::Timestamp(_) => LiteralKind::Timestamp,
        }
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int64(n)
    }
}

impl From<f64> for Literal {
    fn from(x: f64) -> Self {
        Literal::Float64(x)
    }
}

impl From<DateTime<FixedOffset>> for Literal {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Literal::Timestamp(t)
    }
}

/// Writes a nanosecond count as descending duration components, e.g. `1h30m`.
fn fmt_duration(f: &mut fmt::Formatter<'_>, nanos: i64) -> fmt::Result {
    const UNITS: [(&str, i64); 8] = [
        ("w", NANOS_PER_WEEK),
        ("d", NANOS_PER_DAY),
        ("h", NANOS_PER_HOUR),
        ("m", NANOS_PER_MINUTE),
        ("s", NANOS_PER_SECOND),
        ("ms", NANOS_PER_MILLISECOND),
        ("us", NANOS_PER_MICROSECOND),
        ("ns", 1),
    ];

    if nanos == 0 {
        return f.write_str("0s");
    }
    if nanos < 0 {
        f.write_str("-")?;
    }

    let mut rest = nanos.unsigned_abs();
    for (name, size) in UNITS {
        let size = size as u64;
        if rest >= size {
            write!(f, "{}{}", rest / size, name)?;
            rest %= size;
        }
    }
    Ok(())
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int64(n) => write!(f, "{}", n),
            Literal::Float64(x) => write!(f, "{:?}", x),
            Literal::Duration(nanos) => fmt_duration(f, *nanos),
            Literal::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S%.f %z")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind() {
        assert_eq!(Literal::from("x").kind(), LiteralKind::String);
        assert_eq!(Literal::from(true).kind(), LiteralKind::Bool);
        assert_eq!(Literal::from(1i64).kind(), LiteralKind::Int64);
        assert_eq!(Literal::from(1.5).kind(), LiteralKind::Float64);
        assert_eq!(Literal::Duration(1).kind(), LiteralKind::Duration);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(LiteralKind::Int64.to_string(), "int64");
        assert_eq!(LiteralKind::Timestamp.to_string(), "timestamp");
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Literal::from("a\"b").to_string(), "\"a\\\"b\"");
        assert_eq!(Literal::from(false).to_string(), "false");
        assert_eq!(Literal::from(-47i64).to_string(), "-47");
        assert_eq!(Literal::from(100.0).to_string(), "100.0");
    }

    #[test]
    fn test_display_duration() {
        assert_eq!(Literal::Duration(0).to_string(), "0s");
        assert_eq!(Literal::Duration(5_400_000_000_000).to_string(), "1h30m");
        assert_eq!(Literal::Duration(1_500_000_000).to_string(), "1s500ms");
        assert_eq!(Literal::Duration(NANOS_PER_WEEK + 7).to_string(), "1w7ns");
    }

    #[test]
    fn test_display_timestamp() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let t = offset.with_ymd_and_hms(2013, 2, 25, 17, 7, 46).unwrap();
        assert_eq!(Literal::from(t).to_string(), "2013-02-25 17:07:46 +0100");
    }

    #[test]
    fn test_unit_sizes() {
        assert_eq!(NANOS_PER_HOUR, 3_600_000_000_000);
        assert_eq!(NANOS_PER_WEEK, 604_800_000_000_000);
    }
}
