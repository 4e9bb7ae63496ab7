//! Token normalization

use crate::config::DEFAULT_MIN_TOKEN_LEN;

/// Substrings removed from every token, in this order
pub const FILTERED_PATTERNS: &[&str] = &[
    "\"", "&quot;", "&lt;", "&amp", ")", "(", "'", "=", "?", ".", "!",
];

/// Words that absorb the following piece into a bigram
pub const MERGE_WORDS: &[&str] = &["not", "very"];

const URL_MARKERS: &[&str] = &["http://", "https://"];

/// Normalize a raw piece with the default minimum length
///
/// Returns `None` when the piece is rejected.
pub fn normalize(raw: &str) -> Option<String> {
    normalize_with_min_len(raw, DEFAULT_MIN_TOKEN_LEN)
}

pub(crate) fn normalize_with_min_len(raw: &str, min_len: usize) -> Option<String> {
    let mut word = raw.to_ascii_lowercase();

    if word.is_empty() {
        return None;
    }

    if URL_MARKERS.iter().any(|marker| word.contains(marker)) {
        return None;
    }

    // Emoji and other non-ASCII text
    if !word.is_ascii() {
        return None;
    }

    for pattern in FILTERED_PATTERNS {
        word = word.replace(pattern, "");
    }

    // Mostly numbers and stray letters
    if word.len() < min_len {
        return None;
    }

    Some(word)
}
