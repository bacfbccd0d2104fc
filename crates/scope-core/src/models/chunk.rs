use serde::{Deserialize, Serialize};

/// A bounded piece of a scope document, prepared for independent embedding.
///
/// Chunks have no identity beyond their position in the chunker's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Zero-based position in the produced sequence.
    pub position: usize,
    /// Trimmed chunk text, overlap prefix included.
    pub text: String,
    /// Number of leading characters of `text` copied from the previous chunk.
    pub overlap_chars: usize,
}

impl Chunk {
    pub fn new(position: usize, text: impl Into<String>, overlap_chars: usize) -> Self {
        Self {
            position,
            text: text.into(),
            overlap_chars,
        }
    }

    /// The text this chunk contributes beyond the carried-over overlap.
    pub fn fresh_text(&self) -> &str {
        let start = self
            .text
            .char_indices()
            .nth(self.overlap_chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        self.text[start..].trim_start()
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
