//! Whitespace normalization and sentence boundary detection.

use std::sync::LazyLock;

use regex::Regex;

/// A boundary is `.`, `!` or `?` followed by whitespace.
static SENTENCE_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").ok());

/// Collapse every whitespace run to one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text after each sentence terminator.
///
/// The terminator stays with its sentence; the whitespace after it is dropped.
/// Returns no sentences for empty input.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let Some(boundary) = SENTENCE_BOUNDARY.as_ref() else {
        return vec![text];
    };

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in boundary.find_iter(text) {
        // Terminators are single-byte ASCII.
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}
