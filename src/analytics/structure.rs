// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured-format sniffing: JSON first, then delimiter-separated values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::numeric::{browser_key_order, normalize_json};

const JSON_ARRAY_SAMPLE: usize = 3;
const JSON_OBJECT_SAMPLE_KEYS: usize = 10;
const CSV_MAX_HEADERS: usize = 20;

/// Summary of a text that parses as a JSON array or object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonSummary {
    Array {
        length: usize,
        sample: Vec<Value>,
    },
    Object {
        #[serde(rename = "keysCount")]
        keys_count: usize,
        #[serde(rename = "sampleKeys")]
        sample_keys: Vec<String>,
    },
}

/// Summary of a text whose first line looks delimiter-separated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvSummary {
    /// `","`, `";"` or `"tab"`
    pub delimiter: String,
    pub columns: usize,
    pub headers: Vec<String>,
    pub rows: usize,
}

/// Parse `text` as JSON. Scalars are not structured and yield `None`.
pub fn detect_json(text: &str) -> Option<JsonSummary> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Array(items) => Some(JsonSummary::Array {
            length: items.len(),
            sample: items
                .into_iter()
                .take(JSON_ARRAY_SAMPLE)
                .map(normalize_json)
                .collect(),
        }),
        Value::Object(map) => Some(JsonSummary::Object {
            keys_count: map.len(),
            sample_keys: browser_key_order(&map)
                .into_iter()
                .take(JSON_OBJECT_SAMPLE_KEYS)
                .cloned()
                .collect(),
        }),
        _ => None,
    }
}

/// Pick the delimiter of the first line and summarise the table shape.
///
/// Comma wins ties over semicolon, semicolon over tab. `lines` is the full
/// line split of the text, so `rows` counts every line after the header.
pub fn detect_csv(lines: &[&str]) -> Option<CsvSummary> {
    let first = lines.first()?;

    let count = |c: char| first.chars().filter(|&x| x == c).count();
    let (comma, semicolon, tab) = (count(','), count(';'), count('\t'));
    if comma == 0 && semicolon == 0 && tab == 0 {
        return None;
    }

    let delimiter = if comma >= semicolon && comma >= tab {
        ','
    } else if semicolon >= tab {
        ';'
    } else {
        '\t'
    };

    let headers: Vec<String> = first.split(delimiter).map(|h| h.trim().to_string()).collect();
    let columns = headers.len();

    Some(CsvSummary {
        delimiter: if delimiter == '\t' {
            "tab".to_string()
        } else {
            delimiter.to_string()
        },
        columns,
        headers: headers.into_iter().take(CSV_MAX_HEADERS).collect(),
        rows: lines.len().saturating_sub(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_keeps_source_key_order() {
        let summary = detect_json(r#"{"b":1,"a":2,"c":3}"#).unwrap();
        assert_eq!(
            summary,
            JsonSummary::Object {
                keys_count: 3,
                sample_keys: vec!["b".to_string(), "a".to_string(), "c".to_string()],
            }
        );
    }

    #[test]
    fn test_json_object_lists_index_keys_first() {
        let summary = detect_json(r#"{"b":1,"2":1,"1":1}"#).unwrap();
        assert_eq!(
            summary,
            JsonSummary::Object {
                keys_count: 3,
                sample_keys: vec!["1".to_string(), "2".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn test_json_array_sample_renders_integral_floats_as_integers() {
        let summary = detect_json("[1.0, 2.50, 3]").unwrap();
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["sample"].to_string(), "[1,2.5,3]");
    }

    #[test]
    fn test_json_object_caps_sample_keys() {
        let body: serde_json::Map<String, Value> =
            (0..15).map(|i| (format!("k{}", i), json!(i))).collect();
        let text = Value::Object(body).to_string();
        match detect_json(&text).unwrap() {
            JsonSummary::Object {
                keys_count,
                sample_keys,
            } => {
                assert_eq!(keys_count, 15);
                assert_eq!(sample_keys.len(), 10);
                assert_eq!(sample_keys[0], "k0");
            }
            other => panic!("expected object summary, got {:?}", other),
        }
    }

    #[test]
    fn test_json_array_samples_first_three() {
        let summary = detect_json(" [1, \"two\", {\"x\": 3}, 4, 5] ").unwrap();
        assert_eq!(
            summary,
            JsonSummary::Array {
                length: 5,
                sample: vec![json!(1), json!("two"), json!({"x": 3})],
            }
        );
    }

    #[test]
    fn test_json_scalars_are_not_structured() {
        assert_eq!(detect_json("42"), None);
        assert_eq!(detect_json("\"text\""), None);
        assert_eq!(detect_json("null"), None);
        assert_eq!(detect_json("not json"), None);
        assert_eq!(detect_json(""), None);
    }

    #[test]
    fn test_json_summary_wire_shape() {
        let value = serde_json::to_value(JsonSummary::Object {
            keys_count: 2,
            sample_keys: vec!["a".to_string(), "b".to_string()],
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"type": "object", "keysCount": 2, "sampleKeys": ["a", "b"]})
        );
    }

    #[test]
    fn test_csv_comma() {
        let summary = detect_csv(&["a, b ,c", "1,2,3", "4,5,6"]).unwrap();
        assert_eq!(summary.delimiter, ",");
        assert_eq!(summary.columns, 3);
        assert_eq!(summary.headers, vec!["a", "b", "c"]);
        assert_eq!(summary.rows, 2);
    }

    #[test]
    fn test_csv_semicolon_and_tab() {
        assert_eq!(detect_csv(&["a;b;c,d"]).unwrap().delimiter, ";");
        let tab = detect_csv(&["x\ty", "1\t2"]).unwrap();
        assert_eq!(tab.delimiter, "tab");
        assert_eq!(tab.headers, vec!["x", "y"]);
        assert_eq!(tab.rows, 1);
    }

    #[test]
    fn test_csv_tie_prefers_comma_then_semicolon() {
        assert_eq!(detect_csv(&["a,b;c"]).unwrap().delimiter, ",");
        assert_eq!(detect_csv(&["a;b\tc"]).unwrap().delimiter, ";");
    }

    #[test]
    fn test_csv_requires_a_delimiter() {
        assert_eq!(detect_csv(&["just words here", "a,b"]), None);
        assert_eq!(detect_csv(&[]), None);
    }

    #[test]
    fn test_csv_caps_reported_headers() {
        let header = (0..25).map(|i| format!("h{}", i)).collect::<Vec<_>>().join(",");
        let summary = detect_csv(&[header.as_str()]).unwrap();
        assert_eq!(summary.columns, 25);
        assert_eq!(summary.headers.len(), 20);
        assert_eq!(summary.rows, 0);
    }
}
