// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Minimal English and Turkish function words excluded from top-word counts.

const STOPWORDS: &[&str] = &[
    // English
    "the", "a", "an", "and", "or", "of", "to", "in", "on", "for", "with", "as", "is", "are", "be",
    "this", "that", "it", "at", "by", "from", "was", "were", "will", "can", "could", "should",
    "than", "then", "there", "here", "have", "has", "had", "not", "no", "yes", "you", "your", "we",
    "our", "they", "their", "i", "me", "my",
    // Turkish
    "ve", "veya", "bir", "bu", "şu", "o", "için", "ile", "da", "de", "mi", "mı", "mu", "mü", "ama",
    "fakat", "ki", "ya", "yada", "her", "çok", "az", "en", "sen", "ben", "biz", "siz", "onlar",
];

/// Whether `token` (already lower-cased) is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}
