/// Retrieval subsystem errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RetrievalError {
    #[error("query and chunk embeddings differ in length: query {query}, chunk {chunk}")]
    DimensionMismatch { query: usize, chunk: usize },
}
