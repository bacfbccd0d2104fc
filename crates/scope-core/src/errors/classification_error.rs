/// Classification (language model) call errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassificationError {
    #[error("classification request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("classification API returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("malformed classification response: {reason}")]
    MalformedResponse { reason: String },
}

impl ClassificationError {
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RequestFailed { .. } => true,
            Self::ApiStatus { status, .. } => *status == 429 || *status >= 500,
            Self::MalformedResponse { .. } => false,
        }
    }
}
