mod alert_config;
mod chunking_config;
mod classifier_config;
pub mod defaults;
mod embedding_config;
mod observability_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use alert_config::AlertConfig;
pub use chunking_config::ChunkingConfig;
pub use classifier_config::ClassifierConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{ScopeError, ScopeResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    pub chunking: ChunkingConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub classifier: ClassifierConfig,
    pub alerts: AlertConfig,
    pub observability: ObservabilityConfig,
}

impl ScopeConfig {
    /// Parse a TOML string. Missing sections and keys fall back to defaults.
    pub fn from_toml(toml_str: &str) -> ScopeResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ScopeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ScopeError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> ScopeResult<()> {
        let invalid = |reason: &str| {
            Err(ScopeError::Config {
                reason: reason.to_string(),
            })
        };
        if self.chunking.chunk_size == 0 {
            return invalid("chunking.chunk_size must be greater than 0");
        }
        if self.chunking.overlap >= self.chunking.chunk_size {
            return invalid("chunking.overlap must be smaller than chunking.chunk_size");
        }
        if self.retrieval.top_k == 0 {
            return invalid("retrieval.top_k must be at least 1");
        }
        if self.embedding.dimensions == 0 {
            return invalid("embedding.dimensions must be greater than 0");
        }
        Ok(())
    }
}
