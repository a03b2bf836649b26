// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Number parsing and rendering shared by the arithmetic and feature endpoints.

use serde::Serializer;
use serde_json::{Map, Number, Value};

/// Largest integer an f64 represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse a form-style numeric string.
///
/// Surrounding whitespace is ignored, an empty string is zero, and the result
/// must be finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Magnitudes at or above this render in exponent form (`1e+21`).
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitudes below this render in exponent form (`1e-7`).
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a number the way it travels inside tokens, matching browser
/// `String(n)`: `7` not `7.0`, `1e+21` not a 22-digit integer.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // collapses -0
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let rendered = format!("{:e}", n);
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => rendered,
        };
    }
    n.to_string()
}

/// Whether `key` is a canonical array index (`0`, `1`, ... `2^32 - 2`).
///
/// Browsers enumerate such keys first, ascending, before all other keys.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&idx| idx != u32::MAX)
}

/// Object keys in browser enumeration order: array indices ascending, then
/// the remaining keys in source order.
pub fn browser_key_order(map: &Map<String, Value>) -> Vec<&String> {
    let mut indices: Vec<(u32, &String)> = map
        .keys()
        .filter_map(|key| array_index(key).map(|idx| (idx, key)))
        .collect();
    indices.sort_by_key(|(idx, _)| *idx);

    indices
        .into_iter()
        .map(|(_, key)| key)
        .chain(map.keys().filter(|key| array_index(key).is_none()))
        .collect()
}

/// Re-shape a parsed JSON value the way a browser would re-serialize it:
/// integral floats become integers and object keys follow
/// [`browser_key_order`].
pub fn normalize_json(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => to_json_number(f),
            None => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_json).collect()),
        Value::Object(mut map) => {
            let order: Vec<String> = browser_key_order(&map).into_iter().cloned().collect();
            let mut ordered = Map::with_capacity(map.len());
            for key in order {
                if let Some(v) = map.remove(&key) {
                    ordered.insert(key, normalize_json(v));
                }
            }
            Value::Object(ordered)
        }
        other => other,
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// JSON value for `n`, integral values as JSON integers.
pub fn to_json_number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Lenient coercion of an arbitrary JSON value to a finite number, defaulting to 0.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_number(s).unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Strict conversion of a JSON operand: numbers, numeric strings and booleans.
///
/// Missing values, `null`, arrays, objects and unparsable strings yield `None`.
pub fn number_from_value(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_number(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

pub(crate) fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&to_json_number(*n), serializer)
}

pub(crate) fn serialize_opt_number<S: Serializer>(
    n: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match n {
        Some(n) => serialize_number(n, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("3"), Some(3.0));
        assert_eq!(parse_number("  4.5 "), Some(4.5));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e300), "-2.5e+300");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_browser_key_order() {
        let map = json!({"b": 1, "2": 1, "1": 1, "01": 1, "a": 1, "10": 1})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(
            browser_key_order(&map),
            vec!["1", "2", "10", "b", "01", "a"]
        );
    }

    #[test]
    fn test_normalize_json() {
        let value: Value = serde_json::from_str(r#"[1.0, 2.50, {"z": 3.0, "0": -0.0}, "4.0"]"#).unwrap();
        let normalized = normalize_json(value);
        assert_eq!(normalized.to_string(), r#"[1,2.5,{"0":0,"z":3},"4.0"]"#);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn test_to_json_number() {
        assert_eq!(to_json_number(5.0), json!(5));
        assert_eq!(to_json_number(3.33), json!(3.33));
    }

    #[test]
    fn test_number_from_value() {
        assert_eq!(number_from_value(Some(&json!(3))), Some(3.0));
        assert_eq!(number_from_value(Some(&json!(" 4 "))), Some(4.0));
        assert_eq!(number_from_value(Some(&json!(false))), Some(0.0));
        assert_eq!(number_from_value(Some(&json!("x"))), None);
        assert_eq!(number_from_value(Some(&json!(null))), None);
        assert_eq!(number_from_value(Some(&json!({}))), None);
        assert_eq!(number_from_value(None), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(Some(&json!(12))), 12.0);
        assert_eq!(coerce_number(Some(&json!("12"))), 12.0);
        assert_eq!(coerce_number(Some(&json!("twelve"))), 0.0);
        assert_eq!(coerce_number(Some(&json!(true))), 1.0);
        assert_eq!(coerce_number(Some(&json!(null))), 0.0);
        assert_eq!(coerce_number(Some(&json!([1, 2]))), 0.0);
        assert_eq!(coerce_number(None), 0.0);
    }
}
