// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use super::stopwords::is_stopword;
use super::structure::{detect_csv, detect_json, CsvSummary, JsonSummary};

const TOP_WORDS: usize = 5;
const MIN_TOP_WORD_LEN: usize = 2;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMeta {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Everything the analyzer reports about one plaintext.
///
/// At most one of `json` / `csv` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub meta: TextMeta,
    #[serde(rename = "topWords")]
    pub top_words: Vec<WordCount>,
    pub json: Option<JsonSummary>,
    pub csv: Option<CsvSummary>,
}

/// Length in UTF-16 code units, the unit browsers report for string length.
pub fn char_units(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Split on CRLF, CR or LF. Empty input has no lines; a trailing terminator
/// yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

/// Lower-case the text and pull out maximal runs of letters and digits.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Most frequent non-stopword tokens, ties kept in first-seen order.
pub fn top_words(tokens: &[String], limit: usize) -> Vec<WordCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for token in tokens {
        if char_units(token) < MIN_TOP_WORD_LEN || is_stopword(token) {
            continue;
        }
        match positions.get(token.as_str()) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(token.as_str(), counts.len());
                counts.push(WordCount {
                    word: token.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Single-pass text statistics plus JSON/CSV sniffing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lines = split_lines(text);
        let tokens = tokenize(text);

        let json = detect_json(text);
        let csv = if json.is_none() {
            detect_csv(&lines)
        } else {
            None
        };

        AnalysisResult {
            meta: TextMeta {
                characters: char_units(text),
                words: tokens.len(),
                lines: lines.len(),
            },
            top_words: top_words(&tokens, TOP_WORDS),
            json,
            csv,
        }
    }
}
