//! Per-token text reversal.

/// Reverses each whitespace-delimited token's characters and rejoins the
/// tokens with single spaces, regardless of the original whitespace width.
///
/// Reversal operates on characters, not bytes, so multi-byte input stays
/// valid UTF-8. Empty input yields an empty string.
pub fn reverse_words(text: &str) -> String {
    let mut reversed = String::with_capacity(text.len());
    for token in text.split_whitespace() {
        if !reversed.is_empty() {
            reversed.push(' ');
        }
        reversed.extend(token.chars().rev());
    }
    reversed
}
