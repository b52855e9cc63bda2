// SPDX-License-Identifier: MIT OR Apache-2.0

//! Literal disambiguation.
//!
//! A value's text is offered to a fixed list of readers, in priority order. Each
//! reader either declines or reports the value it found at the start of the text
//! and how many bytes it consumed. The first reader whose match runs to the end of
//! the text (a trailing comment aside) decides the literal's type.

use crate::domain::Literal;
use crate::parser::duration::read_duration;
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::CharIndices;

type Reader = fn(&str) -> Option<(Literal, usize)>;

/// Readers in priority order.
static READERS: [Reader; 6] = [
    |text| read_bool(text).map(|(b, n)| (Literal::Bool(b), n)),
    |text| read_int64(text).map(|(i, n)| (Literal::Int64(i), n)),
    |text| read_float64(text).map(|(x, n)| (Literal::Float64(x), n)),
    |text| read_string(text).map(|(s, n)| (Literal::String(s), n)),
    |text| read_timestamp(text).map(|(t, n)| (Literal::Timestamp(t), n)),
    |text| read_duration(text).map(|(d, n)| (Literal::Duration(d), n)),
];

static BOOL_TOKENS: [(&str, bool); 2] = [("true", true), ("false", false)];

static TIMESTAMP_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)? [+-][0-9]{4}")
        .expect("timestamp pattern is valid")
});

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

/// Resolves value text to a literal, or `None` if no type accepts all of it.
pub(crate) fn parse_literal(text: &str) -> Option<Literal> {
    READERS.iter().find_map(|read| match read(text) {
        Some((literal, consumed)) if only_comment_left(&text[consumed..]) => Some(literal),
        _ => None,
    })
}

fn only_comment_left(rest: &str) -> bool {
    let rest = rest.trim_start_matches([' ', '\t']);
    rest.is_empty() || rest.starts_with('#')
}

/// Counts the ASCII digits at the start of `text`.
fn digit_run(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

fn sign_len(text: &str) -> usize {
    usize::from(text.starts_with(['+', '-']))
}

pub(crate) fn read_bool(text: &str) -> Option<(bool, usize)> {
    BOOL_TOKENS
        .iter()
        .find(|(token, _)| text.starts_with(token))
        .map(|&(token, value)| (value, token.len()))
}

pub(crate) fn read_int64(text: &str) -> Option<(i64, usize)> {
    let sign = sign_len(text);
    let digits = digit_run(&text[sign..]);
    if digits == 0 {
        return None;
    }

    let end = sign + digits;
    text[..end].parse().ok().map(|n| (n, end))
}

pub(crate) fn read_float64(text: &str) -> Option<(f64, usize)> {
    let sign = sign_len(text);
    let whole = digit_run(&text[sign..]);
    if whole == 0 || !text[sign + whole..].starts_with('.') {
        return None;
    }

    let fraction = digit_run(&text[sign + whole + 1..]);
    if fraction == 0 {
        return None;
    }

    // out-of-range text parses to infinity, which is not a literal
    let end = sign + whole + 1 + fraction;
    text[..end]
        .parse()
        .ok()
        .filter(|x: &f64| x.is_finite())
        .map(|x| (x, end))
}

/// Reads `count` digits in `radix` from the iterator.
fn read_code_point(chars: &mut CharIndices<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let (_, c) = chars.next()?;
        value = value * radix + c.to_digit(radix)?;
    }
    Some(value)
}

/// Resolves the escape sequence following a backslash.
fn read_escape(chars: &mut CharIndices<'_>) -> Option<char> {
    let (_, c) = chars.next()?;
    let escaped = match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '\\' | '\'' | '"' => c,
        'x' => char::from_u32(read_code_point(chars, 2, 16)?)?,
        'u' => char::from_u32(read_code_point(chars, 4, 16)?)?,
        'U' => char::from_u32(read_code_point(chars, 8, 16)?)?,
        '0'..='7' => {
            let high = c.to_digit(8)?;
            let low = read_code_point(chars, 2, 8)?;
            let value = high * 64 + low;
            if value > 0o377 {
                return None;
            }
            char::from_u32(value)?
        }
        _ => return None,
    };
    Some(escaped)
}

pub(crate) fn read_string(text: &str) -> Option<(String, usize)> {
    let body = text.strip_prefix('"')?;
    let mut chars = body.char_indices();
    let mut value = String::new();

    while let Some((i, c)) = chars.next() {
        match c {
            // opening quote, body, closing quote
            '"' => return Some((value, i + 2)),
            '\\' => value.push(read_escape(&mut chars)?),
            c if u32::from(c) < 0x20 => return None,
            c => value.push(c),
        }
    }

    None
}

pub(crate) fn read_timestamp(text: &str) -> Option<(DateTime<FixedOffset>, usize)> {
    let shape = TIMESTAMP_SHAPE.find(text)?;
    DateTime::parse_from_str(shape.as_str(), TIMESTAMP_FORMAT)
        .ok()
        .map(|t| (t, shape.end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_read_bool() {
        assert_eq!(read_bool("true"), Some((true, 4)));
        assert_eq!(read_bool("false # off"), Some((false, 5)));
        assert_eq!(read_bool("trueish"), Some((true, 4)));
        assert_eq!(read_bool("yes"), None);
        assert_eq!(read_bool("on"), None);
        assert_eq!(read_bool("True"), None);
    }

    #[test]
    fn test_read_int64() {
        assert_eq!(read_int64("0"), Some((0, 1)));
        assert_eq!(read_int64("-47"), Some((-47, 3)));
        assert_eq!(read_int64("+10"), Some((10, 3)));
        assert_eq!(read_int64("010"), Some((10, 3)));
        assert_eq!(read_int64("123.45"), Some((123, 3)));
        assert_eq!(read_int64("100 blue"), Some((100, 3)));
        assert_eq!(read_int64("abc"), None);
        assert_eq!(read_int64("-"), None);
        assert_eq!(read_int64("++0"), None);
    }

    #[test]
    fn test_read_int64_limits() {
        assert_eq!(read_int64("9223372036854775807"), Some((i64::MAX, 19)));
        assert_eq!(read_int64("-9223372036854775808"), Some((i64::MIN, 20)));
        assert_eq!(read_int64("9223372036854775808"), None);
        assert_eq!(read_int64("-9223372036854775809"), None);
    }

    #[test]
    fn test_read_float64() {
        assert_eq!(read_float64("1.3"), Some((1.3, 3)));
        assert_eq!(read_float64("100.0"), Some((100.0, 5)));
        assert_eq!(read_float64("-0.1"), Some((-0.1, 4)));
        assert_eq!(read_float64("+3.4"), Some((3.4, 4)));
        assert_eq!(
            read_float64("22.222222222222222"),
            Some(("22.222222222222222".parse().unwrap(), 18))
        );
        assert_eq!(read_float64("1.1."), Some((1.1, 3)));
    }

    #[test]
    fn test_read_float64_rounds_to_nearest() {
        assert_eq!(
            read_float64("100000000000000008388608.0"),
            Some((1.0000000000000001e23, 26))
        );
        assert_eq!(
            read_float64("100000000000000016777215.0"),
            Some((1.0000000000000001e23, 26))
        );
        assert_eq!(
            read_float64("100000000000000016777216.0"),
            Some((1.0000000000000003e23, 26))
        );
        assert_eq!(
            read_float64("-100000000000000008388608.0"),
            Some((-1.0000000000000001e23, 27))
        );
        assert_eq!(
            read_float64("-100000000000000016777215.0"),
            Some((-1.0000000000000001e23, 27))
        );
        assert_eq!(
            read_float64("-100000000000000016777216.0"),
            Some((-1.0000000000000003e23, 27))
        );
    }

    #[test]
    fn test_read_float64_out_of_range() {
        let huge = format!("{}.0", "9".repeat(400));
        assert_eq!(read_float64(&huge), None);
        assert_eq!(read_float64(&format!("-{huge}")), None);
        assert_eq!(parse_literal(&huge), None);

        let max = format!("{:.1}", f64::MAX);
        assert_eq!(read_float64(&max), Some((f64::MAX, max.len())));
    }

    #[test]
    fn test_read_float64_requires_digits_around_dot() {
        assert_eq!(read_float64("1"), None);
        assert_eq!(read_float64("1."), None);
        assert_eq!(read_float64(".5"), None);
        assert_eq!(read_float64("+-0.1"), None);
        assert_eq!(read_float64("0x30"), None);
    }

    #[test]
    fn test_read_string() {
        assert_eq!(read_string(r#""""#), Some((String::new(), 2)));
        assert_eq!(read_string(r#""hello world!""#), Some(("hello world!".to_string(), 14)));
        assert_eq!(read_string(r#""日本人""#), Some(("日本人".to_string(), 11)));
        assert_eq!(read_string(r#""a" "b""#), Some(("a".to_string(), 3)));
        assert_eq!(read_string(r#""'""#), Some(("'".to_string(), 3)));
        assert_eq!(read_string(r#""a # b""#), Some(("a # b".to_string(), 7)));
    }

    #[test]
    fn test_read_string_escapes() {
        assert_eq!(read_string(r#""a\nb""#), Some(("a\nb".to_string(), 6)));
        assert_eq!(read_string(r#""\"""#), Some(("\"".to_string(), 4)));
        assert_eq!(read_string(r#""\\""#), Some(("\\".to_string(), 4)));
        assert_eq!(read_string(r#""\u00FF""#), Some(("ÿ".to_string(), 8)));
        assert_eq!(read_string(r#""\u2603""#), Some(("☃".to_string(), 8)));
        assert_eq!(read_string(r#""\xFF""#), Some(("\u{ff}".to_string(), 6)));
        assert_eq!(read_string(r#""\U00010111""#), Some(("\u{10111}".to_string(), 12)));
        assert_eq!(
            read_string(r#""\U0001011111""#),
            Some(("\u{10111}11".to_string(), 14))
        );
        assert_eq!(read_string(r#""\101""#), Some(("A".to_string(), 6)));
        assert_eq!(
            read_string(r#""\t\r\a\b\f\v""#).map(|(s, _)| s),
            Some("\t\r\x07\x08\x0c\x0b".to_string())
        );
    }

    #[test]
    fn test_read_string_declines() {
        assert_eq!(read_string(""), None);
        assert_eq!(read_string("hello"), None);
        assert_eq!(read_string(r#""lone"#), None);
        assert_eq!(read_string(r#""mismatch'"#), None);
        assert_eq!(read_string(r#""\""#), None);
        assert_eq!(read_string(r#""\1""#), None);
        assert_eq!(read_string(r#""\19""#), None);
        assert_eq!(read_string(r#""\129""#), None);
        assert_eq!(read_string(r#""\400""#), None);
        assert_eq!(read_string(r#""\uD800""#), None);
        assert_eq!(read_string(r#""\q""#), None);
        assert_eq!(read_string("\"\n\r\""), None);
        assert_eq!(read_string("\"tab\there\""), None);
        assert_eq!(read_string("`a`"), None);
        assert_eq!(read_string("'b'"), None);
    }

    #[test]
    fn test_read_timestamp() {
        let (t, n) = read_timestamp("2013-02-25 17:07:46.409 +0100").unwrap();
        assert_eq!(n, 29);
        assert_eq!((t.year(), t.month(), t.day()), (2013, 2, 25));
        assert_eq!((t.hour(), t.minute(), t.second()), (17, 7, 46));
        assert_eq!(t.nanosecond(), 409_000_000);
        assert_eq!(t.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_read_timestamp_lengths() {
        assert_eq!(read_timestamp("1970-01-01 00:00:00 +0000").map(|(_, n)| n), Some(25));
        assert_eq!(read_timestamp("1997-08-28 14:07:27 -0123").map(|(_, n)| n), Some(25));
        assert_eq!(read_timestamp("1997-08-28 15:30:27.123 +0000").map(|(_, n)| n), Some(29));
    }

    #[test]
    fn test_read_timestamp_declines() {
        assert_eq!(read_timestamp(""), None);
        assert_eq!(read_timestamp("01:02:03"), None);
        assert_eq!(read_timestamp("1970-01-01"), None);
        assert_eq!(read_timestamp("1970-01-01 00:00:00"), None);
        assert_eq!(read_timestamp("1970-02-48 00:00:00 +0000"), None);
        assert_eq!(read_timestamp("70-01-01 00:00:00 +0000"), None);
        assert_eq!(read_timestamp("1970-01-01 00:00:00 UTC"), None);
    }

    #[test]
    fn test_parse_literal_priority() {
        assert_eq!(parse_literal("123"), Some(Literal::Int64(123)));
        assert_eq!(parse_literal("123.45"), Some(Literal::Float64(123.45)));
        assert_eq!(parse_literal("true"), Some(Literal::Bool(true)));
        assert_eq!(parse_literal("\"true\""), Some(Literal::String("true".into())));
        assert_eq!(parse_literal("1h30m"), Some(Literal::Duration(5_400_000_000_000)));
        assert!(matches!(
            parse_literal("2001-02-03 04:05:06 +0000"),
            Some(Literal::Timestamp(_))
        ));
    }

    #[test]
    fn test_parse_literal_trailing_comment() {
        assert_eq!(parse_literal("42 # answer"), Some(Literal::Int64(42)));
        assert_eq!(parse_literal("\"a\" #b"), Some(Literal::String("a".into())));
    }

    #[test]
    fn test_parse_literal_rejects_partial_matches() {
        assert_eq!(parse_literal("trueish"), None);
        assert_eq!(parse_literal("100 blue"), None);
        assert_eq!(parse_literal("1.1."), None);
        assert_eq!(parse_literal("\"a\" \"b\""), None);
        assert_eq!(parse_literal("hello"), None);
        assert_eq!(parse_literal("0x10"), None);
        assert_eq!(parse_literal("yes"), None);
    }
}
