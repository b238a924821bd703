//! Basic document metrics.
//!
//! Counts are defined over the raw input text: a word is a maximal run of
//! non-whitespace characters, the character count includes whitespace, and
//! lines are `\n`-delimited segments where a trailing newline does not
//! produce an extra empty segment (the `str::lines` convention; a `\r`
//! preceding the `\n` is not counted as a separate line).

use serde::{Deserialize, Serialize};

/// Word, character, and line counts for one document.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextMetrics {
    /// Number of whitespace-delimited tokens.
    pub word_count: usize,
    /// Total characters, whitespace included.
    pub char_count: usize,
    /// Number of newline-delimited segments.
    pub line_count: usize,
}

/// Computes [`TextMetrics`] for a document. Pure; no side effects.
pub fn text_metrics(text: &str) -> TextMetrics {
    TextMetrics {
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        line_count: text.lines().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_chars_and_lines() {
        let metrics = text_metrics("one two\nthree four five\n");
        assert_eq!(metrics.word_count, 5);
        assert_eq!(metrics.char_count, 24);
        assert_eq!(metrics.line_count, 2);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(text_metrics("a\nb").line_count, 2);
        assert_eq!(text_metrics("a\nb\n").line_count, 2);
    }

    #[test]
    fn word_count_matches_whitespace_split() {
        let text = "  spaced\tout \n tokens  ";
        assert_eq!(
            text_metrics(text).word_count,
            text.split_whitespace().count()
        );
    }

    #[test]
    fn empty_input_is_all_zeroes() {
        assert_eq!(text_metrics(""), TextMetrics::default());
    }
}
