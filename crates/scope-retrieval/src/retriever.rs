//! Top-k retrieval: rank chunks by cosine similarity to a query.

use scope_core::errors::{RetrievalError, ScopeResult};
use scope_core::models::{Chunk, ScoredChunk};
use scope_embeddings::EmbeddingEngine;
use tracing::{debug, debug_span};

use crate::similarity::cosine_similarity;

/// Embed `query` and every chunk, then return the `k` most similar chunks.
///
/// The query is embedded once. Chunks already seen by the engine's cache
/// cost no provider call. The first embedding failure aborts the retrieval
/// and is returned unchanged.
pub fn retrieve(
    query: &str,
    chunks: &[Chunk],
    k: usize,
    engine: &EmbeddingEngine,
) -> ScopeResult<Vec<ScoredChunk>> {
    let span = debug_span!("scope.retrieval", chunks = chunks.len(), k);
    let _guard = span.enter();

    if chunks.is_empty() || k == 0 {
        return Ok(Vec::new());
    }

    let query_embedding = engine.embed(query)?;
    let chunk_embeddings = engine.embed_all(chunks)?;
    rank(&query_embedding, chunks, &chunk_embeddings, k)
}

/// Rank pre-embedded chunks against a query vector.
///
/// Result length is `min(k, chunks.len())`, ordered by descending score.
/// Equal scores keep the original chunk order.
///
/// # Errors
/// `DimensionMismatch` when a chunk vector and the query vector differ in length.
pub fn rank(
    query_embedding: &[f32],
    chunks: &[Chunk],
    chunk_embeddings: &[Vec<f32>],
    k: usize,
) -> ScopeResult<Vec<ScoredChunk>> {
    debug_assert_eq!(chunks.len(), chunk_embeddings.len());

    let mut scored = Vec::with_capacity(chunks.len());
    for (chunk, embedding) in chunks.iter().zip(chunk_embeddings) {
        if embedding.len() != query_embedding.len() {
            return Err(RetrievalError::DimensionMismatch {
                query: query_embedding.len(),
                chunk: embedding.len(),
            }
            .into());
        }
        scored.push(ScoredChunk {
            chunk: chunk.clone(),
            score: cosine_similarity(query_embedding, embedding),
        });
    }

    // Stable sort: ties stay in chunk order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);

    debug!(
        returned = scored.len(),
        top_score = scored.first().map(|s| s.score),
        "ranked chunks"
    );
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(n: usize) -> Vec<Chunk> {
        (0..n).map(|i| Chunk::new(i, format!("chunk {i}"), 0)).collect()
    }

    #[test]
    fn ties_keep_chunk_order() {
        let cs = chunks(3);
        let vecs = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0]];
        let ranked = rank(&[2.0, 0.0], &cs, &vecs, 3).unwrap();
        let positions: Vec<usize> = ranked.iter().map(|s| s.chunk.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn zero_vector_chunk_scores_zero() {
        let cs = chunks(2);
        let vecs = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let ranked = rank(&[1.0, 0.0], &cs, &vecs, 2).unwrap();
        assert_eq!(ranked[0].chunk.position, 1);
        assert_eq!(ranked[1].score, 0.0);
    }

    /// A chunk vector carrying NaN must not disturb the ordering of the
    /// finite scores around it, nor float to the top.
    #[test]
    fn nan_component_ranks_last() {
        let cs = chunks(3);
        let vecs = vec![vec![0.5, 0.5], vec![f32::NAN, 1.0], vec![1.0, 0.0]];
        let ranked = rank(&[1.0, 0.0], &cs, &vecs, 3).unwrap();
        let positions: Vec<usize> = ranked.iter().map(|s| s.chunk.position).collect();
        assert_eq!(positions, vec![2, 0, 1]);
        assert!(ranked.iter().all(|s| s.score.is_finite()));
    }

    #[test]
    fn k_zero_returns_nothing() {
        let cs = chunks(2);
        let vecs = vec![vec![1.0], vec![1.0]];
        assert!(rank(&[1.0], &cs, &vecs, 0).unwrap().is_empty());
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let cs = chunks(1);
        let err = rank(&[1.0, 0.0], &cs, &[vec![1.0]], 1).unwrap_err();
        assert!(err.to_string().contains("query 2, chunk 1"));
    }
}
