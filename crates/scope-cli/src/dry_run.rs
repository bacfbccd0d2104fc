//! Retrieval-only preview: local hashing embeddings, no classifier, no SMS.

use anyhow::{Context, Result};
use scope_analysis::RetrievedSection;
use scope_core::config::{EmbeddingConfig, ScopeConfig};
use scope_embeddings::EmbeddingEngine;
use scope_retrieval::{render_context, Chunker, ScopeIndex};
use serde::Serialize;

/// Retrieved sections for one email.
#[derive(Debug, Serialize)]
pub struct PreviewRow {
    pub index: usize,
    pub email_body: String,
    pub relevant_sections: Vec<RetrievedSection>,
    /// The context block the classifier would receive.
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewReport {
    pub provider: String,
    pub chunks: usize,
    pub rows: Vec<PreviewRow>,
}

/// Chunk the scope with the configured settings and retrieve against each
/// email using the hashing embedder.
pub fn preview<S: AsRef<str>>(
    config: &ScopeConfig,
    scope_text: &str,
    emails: &[S],
) -> Result<PreviewReport> {
    let engine = EmbeddingEngine::from_config(&EmbeddingConfig {
        provider: "hashing".to_string(),
        ..config.embedding.clone()
    })
    .context("failed to build the hashing embedder")?;

    let chunker = Chunker::from_config(&config.chunking);
    let index = ScopeIndex::build(scope_text, &chunker, &engine)
        .context("failed to index the scope document")?;

    let rows = emails
        .iter()
        .enumerate()
        .map(|(i, email)| {
            let ranked = index
                .retrieve(email.as_ref(), config.retrieval.top_k)
                .with_context(|| format!("retrieval failed for email {i}"))?;
            Ok(PreviewRow {
                index: i,
                email_body: email.as_ref().to_string(),
                context: render_context(&ranked),
                relevant_sections: ranked.into_iter().map(RetrievedSection::from).collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PreviewReport {
        provider: engine.provider_name().to_string(),
        chunks: index.len(),
        rows,
    })
}
