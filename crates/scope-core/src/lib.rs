//! # scope-core
//!
//! Foundation crate for scopeguard.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScopeConfig;
pub use errors::{ScopeError, ScopeResult};
pub use models::{
    Chunk, ClassificationRequest, Embedding, RiskLevel, ScopeCreep, ScopeVerdict, ScoredChunk,
};
