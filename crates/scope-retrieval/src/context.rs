//! Render ranked chunks into the context block sent to the classifier.

use scope_core::models::ScoredChunk;

/// One labelled section per chunk, in the order given, separated by a blank line.
pub fn render_context(ranked: &[ScoredChunk]) -> String {
    ranked
        .iter()
        .map(|s| format!("Scope Section (Relevance: {:.2}):\n{}", s.score, s.chunk.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}
