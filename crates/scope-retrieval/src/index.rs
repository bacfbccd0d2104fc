//! A scope document chunked and embedded once, queried many times.

use scope_core::errors::ScopeResult;
use scope_core::models::{Chunk, Embedding, ScoredChunk};
use scope_embeddings::EmbeddingEngine;
use tracing::info;

use crate::chunking::Chunker;
use crate::retriever;

/// Chunk embeddings computed once per document and reused for every email.
pub struct ScopeIndex<'a> {
    engine: &'a EmbeddingEngine,
    chunks: Vec<Chunk>,
    embeddings: Vec<Embedding>,
}

impl<'a> ScopeIndex<'a> {
    /// Chunk `text` and embed every chunk.
    pub fn build(text: &str, chunker: &Chunker, engine: &'a EmbeddingEngine) -> ScopeResult<Self> {
        Self::from_chunks(chunker.chunk(text), engine)
    }

    /// Embed already-produced chunks.
    pub fn from_chunks(chunks: Vec<Chunk>, engine: &'a EmbeddingEngine) -> ScopeResult<Self> {
        let embeddings = engine.embed_all(&chunks)?;
        info!(
            chunks = chunks.len(),
            provider = engine.provider_name(),
            "scope index built"
        );
        Ok(Self {
            engine,
            chunks,
            embeddings,
        })
    }

    /// Embed `query` and return the `k` most similar chunks.
    pub fn retrieve(&self, query: &str, k: usize) -> ScopeResult<Vec<ScoredChunk>> {
        if self.chunks.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        let query_embedding = self.engine.embed(query)?;
        retriever::rank(&query_embedding, &self.chunks, &self.embeddings, k)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
