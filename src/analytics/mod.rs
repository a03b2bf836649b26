// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Plaintext analytics.
//!
//! * `text` - counts, tokenization and top words ([`TextAnalyzer`])
//! * `structure` - JSON / CSV sniffing
//! * `features` - reduction of client-extracted feature records
//! * `numeric` - number parsing and rendering conventions

pub mod features;
pub mod numeric;
pub mod stopwords;
pub mod structure;
pub mod text;

pub use features::{extract_features, reduce, DerivedMetrics, FeatureRecord, FeatureReport};
pub use structure::{CsvSummary, JsonSummary};
pub use text::{AnalysisResult, TextAnalyzer, TextMeta, WordCount};
