//! EmbeddingEngine: the main entry point for scope-embeddings.
//!
//! Pairs one provider with a shared [`EmbeddingCache`]. Implements
//! `IEmbeddingProvider` so the cached path can be used wherever a provider
//! is expected.

use std::sync::Arc;

use scope_core::config::EmbeddingConfig;
use scope_core::errors::{EmbeddingError, ScopeResult};
use scope_core::models::Embedding;
use scope_core::traits::IEmbeddingProvider;
use tracing::{debug, debug_span, info};

use crate::cache::{content_hash, CacheStats, EmbeddingCache};
use crate::providers;

/// Cached embedding generation.
///
/// The cache is handed in by the caller and may be shared by several
/// engines, so its lifetime is the orchestration layer's decision.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: Arc<EmbeddingCache>,
}

impl EmbeddingEngine {
    pub fn new(provider: Box<dyn IEmbeddingProvider>, cache: Arc<EmbeddingCache>) -> Self {
        info!(
            provider = provider.name(),
            model = provider.model(),
            dims = provider.dimensions(),
            capacity = ?cache.capacity(),
            "EmbeddingEngine initialized"
        );
        Self { provider, cache }
    }

    /// Build the configured provider and a fresh cache sized from config.
    pub fn from_config(config: &EmbeddingConfig) -> ScopeResult<Self> {
        let provider = providers::create_provider(config)?;
        let cache = Arc::new(EmbeddingCache::with_capacity(config.cache_capacity));
        Ok(Self::new(provider, cache))
    }

    /// Embed `text`, consulting the cache first.
    ///
    /// A miss issues exactly one provider request; its failure is returned
    /// unchanged and nothing is cached.
    pub fn embed(&self, text: &str) -> ScopeResult<Embedding> {
        let key = content_hash(text);
        self.cache.get_or_try_insert(key.clone(), || {
            let span = debug_span!(
                "scope.embedding",
                provider = self.provider.name(),
                model = self.provider.model()
            );
            let _guard = span.enter();
            debug!(hash = %key, chars = text.chars().count(), "embedding cache miss");

            let embedding = self.provider.embed(text)?;
            validate_dimensions(&embedding, self.provider.dimensions())?;
            Ok(embedding)
        })
    }

    /// Embed each text in order. Stops at the first failure.
    pub fn embed_all<S: AsRef<str>>(&self, texts: &[S]) -> ScopeResult<Vec<Embedding>> {
        texts.iter().map(|t| self.embed(t.as_ref())).collect()
    }

    pub fn cache(&self) -> &Arc<EmbeddingCache> {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> ScopeResult<Embedding> {
        EmbeddingEngine::embed(self, text)
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn model(&self) -> &str {
        self.provider.model()
    }

    fn name(&self) -> &str {
        "scope-embedding-engine"
    }
}

/// Reject vectors whose length differs from the provider's declared size.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> ScopeResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}
