// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Feature reduction over client-extracted summaries.
//!
//! Clients that prefer not to ship raw text send a [`FeatureRecord`] instead:
//! counts plus an optional word-length histogram. The reducer derives ratios
//! from it without ever seeing the content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::numeric::{coerce_number, round2, serialize_number, serialize_opt_number};
use super::text::{char_units, split_lines, tokenize};

/// Longest word length bucket; longer words are folded into it.
const MAX_WORD_LEN_BUCKET: usize = 10;

/// Client-supplied content summary.
///
/// Numeric fields are coerced leniently: anything that is not a finite number
/// (or numeric string) becomes 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(serialize_with = "serialize_number")]
    pub characters: f64,
    #[serde(serialize_with = "serialize_number")]
    pub words: f64,
    #[serde(serialize_with = "serialize_number")]
    pub lines: f64,
    #[serde(rename = "wordLenHist", skip_serializing_if = "Option::is_none", default)]
    pub word_len_hist: Option<Map<String, Value>>,
}

impl FeatureRecord {
    /// Coerce an untrusted JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            characters: coerce_number(object.get("characters")),
            words: coerce_number(object.get("words")),
            lines: coerce_number(object.get("lines")),
            word_len_hist: object
                .get("wordLenHist")
                .and_then(Value::as_object)
                .cloned(),
        })
    }
}

/// Ratios derived from a [`FeatureRecord`]. `None` when the denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    #[serde(rename = "wordsPerLine", serialize_with = "serialize_opt_number")]
    pub words_per_line: Option<f64>,
    #[serde(rename = "charsPerLine", serialize_with = "serialize_opt_number")]
    pub chars_per_line: Option<f64>,
    #[serde(rename = "avgWordLen", serialize_with = "serialize_opt_number")]
    pub avg_word_len: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEcho {
    #[serde(serialize_with = "serialize_number")]
    pub characters: f64,
    #[serde(serialize_with = "serialize_number")]
    pub words: f64,
    #[serde(serialize_with = "serialize_number")]
    pub lines: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub derived: DerivedMetrics,
    pub echo: FeatureEcho,
    pub histogram: Option<Map<String, Value>>,
}

/// Pure reduction of a feature record into derived metrics.
pub fn reduce(record: &FeatureRecord) -> FeatureReport {
    let FeatureRecord {
        characters,
        words,
        lines,
        ..
    } = *record;

    let per_line = |n: f64| (lines > 0.0).then(|| round2(n / lines));

    FeatureReport {
        derived: DerivedMetrics {
            words_per_line: per_line(words),
            chars_per_line: per_line(characters),
            avg_word_len: (words > 0.0).then(|| round2(characters / words.max(1.0))),
        },
        echo: FeatureEcho {
            characters,
            words,
            lines,
        },
        histogram: record.word_len_hist.clone(),
    }
}

/// Build the feature record a client would send for `text`.
///
/// Words are bucketed by length 1..=10 in UTF-16 units; only non-empty
/// buckets appear, in ascending order.
pub fn extract_features(text: &str) -> FeatureRecord {
    let tokens = tokenize(text);

    let mut buckets = [0u64; MAX_WORD_LEN_BUCKET];
    for token in &tokens {
        let len = char_units(token).clamp(1, MAX_WORD_LEN_BUCKET);
        buckets[len - 1] += 1;
    }

    let hist: Map<String, Value> = buckets
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(idx, &count)| ((idx + 1).to_string(), Value::from(count)))
        .collect();

    FeatureRecord {
        characters: char_units(text) as f64,
        words: tokens.len() as f64,
        lines: split_lines(text).len() as f64,
        word_len_hist: Some(hist),
    }
}
