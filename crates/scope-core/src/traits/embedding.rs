use crate::errors::ScopeResult;
use crate::models::Embedding;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a fixed-length vector.
    fn embed(&self, text: &str) -> ScopeResult<Embedding>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Model identifier the vectors are produced with.
    fn model(&self) -> &str;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
