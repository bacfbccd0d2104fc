//! Sentence-aware chunking with character overlap.
//!
//! Sentences are packed greedily into a buffer of at most `chunk_size`
//! characters. When the next sentence does not fit, the buffer is closed and
//! the next one is seeded with the last `overlap` characters of the closed
//! chunk. Sentences are never split, so a sentence longer than
//! `chunk_size` forms a chunk of its own.
//!
//! All lengths are counted in characters, not bytes.

pub mod sentence;

use scope_core::config::ChunkingConfig;
use scope_core::models::Chunk;
use tracing::debug;

pub use sentence::{normalize_whitespace, split_sentences};

/// Chunker bound to one size / overlap setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Chunker {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }

    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.chunk_size, config.overlap)
    }

    /// Split `text` into chunks. Empty or whitespace-only input yields none.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let normalized = normalize_whitespace(text);
        let sentences = split_sentences(&normalized);

        let mut chunks: Vec<Chunk> = Vec::new();
        let mut buffer = ChunkBuffer::default();

        for sentence in sentences {
            let sentence_len = sentence.chars().count();
            if buffer.is_empty() || buffer.len + sentence_len <= self.chunk_size {
                buffer.push(sentence, sentence_len);
                continue;
            }

            let closed = buffer.close(chunks.len());
            buffer = self.seed(&closed.text, sentence_len);
            buffer.push(sentence, sentence_len);
            chunks.push(closed);
        }

        if !buffer.is_empty() {
            chunks.push(buffer.close(chunks.len()));
        }

        debug!(
            chunks = chunks.len(),
            chars = normalized.chars().count(),
            chunk_size = self.chunk_size,
            overlap = self.overlap,
            "chunked document"
        );
        chunks
    }

    /// Start a buffer carrying the tail of `previous` ahead of a sentence of
    /// `next_len` characters.
    ///
    /// The tail is clamped to the previous chunk's length, and shrunk so that
    /// tail, separator and sentence together stay within `chunk_size`.
    fn seed(&self, previous: &str, next_len: usize) -> ChunkBuffer {
        let previous_len = previous.chars().count();
        let room = self.chunk_size.saturating_sub(next_len + 1);
        let take = self.overlap.min(previous_len).min(room);
        if take == 0 {
            return ChunkBuffer::default();
        }

        let tail: String = previous.chars().skip(previous_len - take).collect();
        let tail = tail.trim_start();
        if tail.is_empty() {
            return ChunkBuffer::default();
        }
        let tail_len = tail.chars().count();

        let mut text = String::with_capacity(tail.len() + 1);
        text.push_str(tail);
        text.push(' ');
        ChunkBuffer {
            text,
            len: tail_len + 1,
            overlap_chars: tail_len,
            sentences: 0,
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::from_config(&ChunkingConfig::default())
    }
}

/// Split `text` with the given size and overlap.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    Chunker::new(chunk_size, overlap).chunk(text)
}

/// Running chunk under construction. `len` counts characters, including the
/// trailing separator after the last sentence.
#[derive(Debug, Default)]
struct ChunkBuffer {
    text: String,
    len: usize,
    overlap_chars: usize,
    sentences: usize,
}

impl ChunkBuffer {
    fn is_empty(&self) -> bool {
        self.sentences == 0
    }

    fn push(&mut self, sentence: &str, sentence_len: usize) {
        self.text.push_str(sentence);
        self.text.push(' ');
        self.len += sentence_len + 1;
        self.sentences += 1;
    }

    fn close(self, position: usize) -> Chunk {
        Chunk::new(position, self.text.trim(), self.overlap_chars)
    }
}
