mod chunk;
mod classification_request;
mod risk_level;
mod scope_verdict;
mod scored_chunk;

pub use chunk::Chunk;
pub use classification_request::ClassificationRequest;
pub use risk_level::{normalize_risk, RiskLevel};
pub use scope_verdict::{ScopeCreep, ScopeVerdict};
pub use scored_chunk::ScoredChunk;

/// Dense vector representation of a piece of text.
pub type Embedding = Vec<f32>;
