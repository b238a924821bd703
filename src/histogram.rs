//! Word length histogram.
//!
//! Buckets are keyed by the character length of the original-case
//! whitespace-delimited tokens (not the normalized tokens the frequency
//! ranking uses). Only observed lengths get a bucket; counts are never zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Occurrence count for one observed word length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LengthBucket {
    /// Token length in characters, always >= 1.
    pub length: usize,
    /// Number of tokens with that length, always >= 1.
    pub count: usize,
}

/// All length buckets for a document plus the derived maximum.
///
/// The bucket set is conceptually unordered; it is materialized sorted by
/// length so downstream serialization is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LengthHistogram {
    /// One bucket per distinct observed length, ascending.
    pub buckets: Vec<LengthBucket>,
    /// Longest token length observed; 0 for empty input.
    pub max_length: usize,
}

/// Buckets the tokens of `text` by character length.
pub fn length_histogram(text: &str) -> LengthHistogram {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token.chars().count()).or_insert(0) += 1;
    }

    let max_length = counts.keys().next_back().copied().unwrap_or(0);
    let buckets = counts
        .into_iter()
        .map(|(length, count)| LengthBucket { length, count })
        .collect();

    LengthHistogram {
        buckets,
        max_length,
    }
}
