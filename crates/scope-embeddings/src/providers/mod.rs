//! Embedding providers and config-driven selection.

mod hashing_provider;
mod openai_provider;

pub use hashing_provider::HashingEmbeddingProvider;
pub use openai_provider::OpenAiEmbeddingProvider;

use scope_core::config::EmbeddingConfig;
use scope_core::errors::{ScopeError, ScopeResult};
use scope_core::traits::IEmbeddingProvider;

/// Instantiate the provider named by `config.provider`.
pub fn create_provider(config: &EmbeddingConfig) -> ScopeResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "openai" => Ok(Box::new(OpenAiEmbeddingProvider::from_config(config)?)),
        "hashing" => Ok(Box::new(HashingEmbeddingProvider::new(config.dimensions))),
        other => Err(ScopeError::Config {
            reason: format!("unknown embedding provider '{other}' (expected \"openai\" or \"hashing\")"),
        }),
    }
}
