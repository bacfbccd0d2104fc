use serde::{Deserialize, Serialize};

use super::defaults;

/// Chunker configuration. Both values are character counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Target chunk length. A single sentence longer than this is kept whole.
    pub chunk_size: usize,
    /// Characters carried from the end of one chunk into the next.
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            overlap: defaults::DEFAULT_CHUNK_OVERLAP,
        }
    }
}
