//! OpenAI-compatible embeddings API provider.
//!
//! One blocking HTTP round-trip per text. No retry here: failures propagate
//! so the orchestration layer owns retry and backoff policy.

use std::time::Duration;

use reqwest::blocking::Client;
use scope_core::config::EmbeddingConfig;
use scope_core::errors::{EmbeddingError, ScopeError, ScopeResult};
use scope_core::models::Embedding;
use scope_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Embedding provider for the `/v1/embeddings` API shape.
pub struct OpenAiEmbeddingProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
    /// Requested output size. The API truncates its native vectors to this.
    dimensions: usize,
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddingProvider {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        dimensions: usize,
        timeout: Duration,
    ) -> ScopeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            dimensions,
        })
    }

    /// Build from config, reading the API key from `config.api_key_env`.
    pub fn from_config(config: &EmbeddingConfig) -> ScopeResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| ScopeError::Config {
            reason: format!(
                "environment variable {} must hold the embeddings API key",
                config.api_key_env
            ),
        })?;
        Self::new(
            config.endpoint.clone(),
            api_key,
            config.model.clone(),
            config.dimensions,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn request_body<'a>(&'a self, text: &'a str) -> EmbedRequest<'a> {
        EmbedRequest {
            model: &self.model,
            input: [text],
            dimensions: self.dimensions,
        }
    }

    fn request_embedding(&self, text: &str) -> ScopeResult<Embedding> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.trim())
            .json(&self.request_body(text))
            .send()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "embeddings API returned an error status");
            return Err(EmbeddingError::ApiStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        let embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::MalformedResponse {
                reason: "response contained no embeddings".to_string(),
            })?;

        debug!(dims = embedding.len(), model = %self.model, "embedding received");
        Ok(embedding)
    }
}

impl IEmbeddingProvider for OpenAiEmbeddingProvider {
    fn embed(&self, text: &str) -> ScopeResult<Embedding> {
        self.request_embedding(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &str {
        "openai"
    }
}
