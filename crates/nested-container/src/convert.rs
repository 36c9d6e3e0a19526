//! Non-failing conversion between value kinds.
//!
//! Conversion never reports an error. The rules, for a target type `T`:
//!
//! 1. Same kind: the stored value is copied.
//! 2. Both kinds lexical (`String`, `Float`, `Integer`, `UnsignedInteger`,
//!    `Boolean`):
//!    - from `String`, the text is parsed as `T`. Surrounding whitespace is
//!      ignored; anything else left over makes the parse fail.
//!    - otherwise the scalar is cast numerically (`as` semantics: float to
//!      integer saturates, signed to unsigned wraps, `bool` is 0 or 1, a
//!      number is `true` when non-zero).
//!    - to `String`, the scalar's text form is produced, without quotes.
//!      A `bool` is written as `1` or `0`.
//!
//!    Text reads the way it is written: only `1` is `true`, and floats accept
//!    plain decimal or exponent notation but not `nan` or `inf`.
//! 3. Anything else (a collection to a scalar, a scalar to a collection,
//!    `Null` to anything): `T`'s default value.
//!
//! A failed text parse also yields the default, so `"abc"` converts to `0`
//! exactly like `"0"` does.

use crate::value::{Map, Sequence, Value};
use std::str::FromStr;

/// Parse `text` as `T`, ignoring surrounding whitespace; default on failure.
pub fn lexical_cast<T: FromStr + Default>(text: &str) -> T {
    text.trim().parse().unwrap_or_default()
}

/// Text to boolean: `1` is `true`, every other text is `false`.
fn lexical_bool(text: &str) -> bool {
    text.trim() == "1"
}

/// Text to float, limited to digits, sign, decimal point and exponent.
fn lexical_float(text: &str) -> f64 {
    let trimmed = text.trim();
    let numeric = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if numeric {
        lexical_cast(trimmed)
    } else {
        0.0
    }
}

pub fn to_map(value: &Value) -> Map {
    match value {
        Value::Map(map) => map.clone(),
        _ => Map::new(),
    }
}

pub fn to_sequence(value: &Value) -> Sequence {
    match value {
        Value::Sequence(seq) => seq.clone(),
        _ => Sequence::new(),
    }
}

pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Float(f) => f.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::UnsignedInteger(u) => u.to_string(),
        Value::Boolean(b) => u8::from(*b).to_string(),
        Value::Null | Value::Map(_) | Value::Sequence(_) => String::new(),
    }
}

pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Float(f) => *f,
        Value::Integer(i) => *i as f64,
        Value::UnsignedInteger(u) => *u as f64,
        Value::Boolean(b) => u8::from(*b) as f64,
        Value::String(s) => lexical_float(s),
        Value::Null | Value::Map(_) | Value::Sequence(_) => 0.0,
    }
}

pub fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Integer(i) => *i,
        Value::Float(f) => *f as i64,
        Value::UnsignedInteger(u) => *u as i64,
        Value::Boolean(b) => i64::from(*b),
        Value::String(s) => lexical_cast(s),
        Value::Null | Value::Map(_) | Value::Sequence(_) => 0,
    }
}

pub fn to_uint(value: &Value) -> u64 {
    match value {
        Value::UnsignedInteger(u) => *u,
        Value::Float(f) => *f as u64,
        Value::Integer(i) => *i as u64,
        Value::Boolean(b) => u64::from(*b),
        Value::String(s) => lexical_cast(s),
        Value::Null | Value::Map(_) | Value::Sequence(_) => 0,
    }
}

pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Float(f) => *f != 0.0,
        Value::Integer(i) => *i != 0,
        Value::UnsignedInteger(u) => *u != 0,
        Value::String(s) => lexical_bool(s),
        Value::Null | Value::Map(_) | Value::Sequence(_) => false,
    }
}
