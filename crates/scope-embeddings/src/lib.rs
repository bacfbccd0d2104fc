//! # scope-embeddings
//!
//! Turns text into dense vectors. Every lookup goes through an explicit
//! [`EmbeddingCache`] keyed by a blake3 digest of the exact text, so a given
//! string reaches the external provider at most once while its entry lives.

pub mod cache;
pub mod engine;
pub mod providers;

pub use cache::{content_hash, CacheStats, EmbeddingCache};
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, HashingEmbeddingProvider, OpenAiEmbeddingProvider};
