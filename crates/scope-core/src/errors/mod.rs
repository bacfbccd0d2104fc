mod alert_error;
mod classification_error;
mod embedding_error;
mod retrieval_error;

pub use alert_error::AlertError;
pub use classification_error::ClassificationError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;

/// Convenience alias used by every crate in the workspace.
pub type ScopeResult<T> = Result<T, ScopeError>;

/// Top-level error type. Wraps each subsystem error so callers can match on
/// the failing concern without string inspection.
///
/// All variants carry owned strings, so the error is `Clone`: a failed
/// embedding load shared by several waiters is handed to each of them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScopeError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Alert(#[from] AlertError),

    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("I/O error: {reason}")]
    Io { reason: String },

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl ScopeError {
    /// Whether the failure came from an outbound call that may succeed on retry.
    ///
    /// Retry policy itself belongs to the caller.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Embedding(e) => e.is_transient(),
            Self::Classification(e) => e.is_transient(),
            Self::Alert(AlertError::SendFailed { .. }) => true,
            _ => false,
        }
    }
}

impl From<std::io::Error> for ScopeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ScopeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            reason: e.to_string(),
        }
    }
}

impl From<toml::de::Error> for ScopeError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config {
            reason: e.to_string(),
        }
    }
}
