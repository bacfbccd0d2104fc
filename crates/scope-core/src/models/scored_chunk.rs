use serde::{Deserialize, Serialize};

use super::Chunk;

/// A chunk paired with its cosine similarity to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    /// Cosine similarity in [-1.0, 1.0]; 0.0 when either vector has zero norm.
    pub score: f64,
}
