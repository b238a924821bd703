//! Case-insensitive word frequency ranking.
//!
//! Tokens are folded to lowercase and stripped of everything that is not a
//! word character (alphanumeric or `_`) before counting, so `CGI,` and
//! `CGI.` land in the same bucket. Ranking is by count descending with ties
//! broken by first occurrence in the token stream; the tie-break is a
//! guaranteed property of the output, not an accident of the sort.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One ranked word with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Normalized (lowercased, punctuation-stripped) word.
    pub word: String,
    /// Occurrences in the document, always >= 1.
    pub count: usize,
}

/// Ranks the `limit` most frequent normalized words in `text`.
///
/// Two runs over the same input produce identical ordered output. Empty or
/// punctuation-only input yields an empty vec, not an error.
///
/// # Examples
///
/// ```rust
/// use textreport::top_words;
///
/// let ranked = top_words("cat dog cat bird dog cat", 5);
/// assert_eq!(ranked[0].word, "cat");
/// assert_eq!(ranked[0].count, 3);
/// ```
pub fn top_words(text: &str, limit: usize) -> Vec<FrequencyEntry> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for token in normalized_tokens(text) {
        match counts.get_mut(&token) {
            Some(count) => *count += 1,
            None => {
                first_seen.push(token.clone());
                counts.insert(token, 1);
            }
        }
    }

    let mut ranked: Vec<FrequencyEntry> = first_seen
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            FrequencyEntry { word, count }
        })
        .collect();

    // Stable sort over the first-occurrence ordering: equal counts keep
    // their original relative order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Lowercases the text, strips non-word characters, and splits on
/// whitespace. Tokens that are all punctuation vanish entirely.
pub(crate) fn normalized_tokens(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    folded
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|&c| is_word_char(c))
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_case_insensitively_and_strips_punctuation() {
        let ranked = top_words("CGI cgi, CGI. done", 5);
        assert_eq!(ranked[0].word, "cgi");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].word, "done");
        assert_eq!(ranked[1].count, 1);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let ranked = top_words("beta alpha beta alpha gamma", 5);
        // beta and alpha both count 2; beta was seen first.
        assert_eq!(ranked[0].word, "beta");
        assert_eq!(ranked[1].word, "alpha");
        assert_eq!(ranked[2].word, "gamma");
    }

    #[test]
    fn ranking_is_repeatable() {
        let text = "a b c a b a d e f g d e";
        assert_eq!(top_words(text, 5), top_words(text, 5));
    }

    #[test]
    fn truncates_to_limit_with_non_increasing_counts() {
        let ranked = top_words("a a a b b c d e f", 3);
        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert!(top_words("", 5).is_empty());
        assert!(top_words("  ... !!! ", 5).is_empty());
    }
}
