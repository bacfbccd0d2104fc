use crate::errors::ScopeResult;

/// Outbound stakeholder notification channel.
pub trait IAlertSender: Send + Sync {
    /// Send `message` to `recipient`. Returns the channel's message id.
    fn send(&self, recipient: &str, message: &str) -> ScopeResult<String>;

    fn name(&self) -> &str;
}
