//! Test doubles and fixture loading shared by the scopeguard crates.
//!
//! The providers here stand in for the external embedding, classification
//! and messaging services, and count every call they receive.

mod alerts;
mod classifiers;
mod providers;

pub use alerts::RecordingAlertSender;
pub use classifiers::ScriptedClassifier;
pub use providers::{CountingProvider, FixedProvider, KeywordProvider};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Golden retrieval scenario: a scope document, a query, and the keyword
/// vocabulary the mock embeddings encode.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalScenario {
    pub name: String,
    pub document: String,
    pub query: String,
    pub keywords: Vec<String>,
    pub chunk_size: usize,
    pub overlap: usize,
    pub top_k: usize,
    /// Expected first-ranked chunk text.
    pub expected_top: String,
}

/// Load `golden/retrieval_scenarios.json`.
pub fn retrieval_scenarios() -> Vec<RetrievalScenario> {
    load_fixture("golden/retrieval_scenarios.json")
}
