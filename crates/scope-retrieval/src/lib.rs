//! # scope-retrieval
//!
//! The retrieval core: split a scope document into overlapping,
//! sentence-aware chunks, embed them through the cached engine, and rank
//! them against an email by cosine similarity.

pub mod chunking;
pub mod context;
pub mod index;
pub mod retriever;
pub mod similarity;

pub use chunking::{chunk_text, Chunker};
pub use context::render_context;
pub use index::ScopeIndex;
pub use retriever::{rank, retrieve};
pub use similarity::cosine_similarity;
