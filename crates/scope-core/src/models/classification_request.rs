use serde::{Deserialize, Serialize};

/// Input to the external classification call: ranked scope context plus the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// Rendered scope sections, highest relevance first.
    pub context: String,
    pub email: String,
}

impl ClassificationRequest {
    pub fn new(context: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            email: email.into(),
        }
    }
}
