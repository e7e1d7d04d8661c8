//! Lenient input conversion.
//!
//! Form inputs and imported files are not validated: numbers that do not
//! parse become zero, and JSON values of the wrong type are coerced rather
//! than rejected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::item::Unit;

/// Clamp to a finite, non-negative amount
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse the leading decimal number of `raw`, ignoring trailing garbage.
///
/// `"12.5kg"` gives 12.5, `"abc"` and `""` give 0. Negative results are
/// clamped to 0 as well.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    coerce_amount(s[..end].parse().unwrap_or(0.0))
}

/// Parse a people count, falling back to 1 for anything below 1
pub fn parse_people_count(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if negative || digits.is_empty() {
        return 1;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX).max(1)
}

fn value_to_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => coerce_amount(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => parse_amount(s),
        _ => 0.0,
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub(crate) fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_amount(&value))
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}

pub(crate) fn unit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Unit, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Unit::default(),
        other => Unit::from_label(&value_to_text(other)),
    })
}

/// Ids may arrive as integers, integral floats or numeric strings.
/// Anything else reads as 0, which callers treat as "no id".
pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
