use crate::errors::ScopeResult;
use crate::models::{ClassificationRequest, ScopeVerdict};

/// Scope-creep judgement from retrieved context and an email.
pub trait IScopeClassifier: Send + Sync {
    /// Classify one email. The returned verdict carries a normalized risk level.
    fn classify(&self, request: &ClassificationRequest) -> ScopeResult<ScopeVerdict>;

    fn name(&self) -> &str;
}
