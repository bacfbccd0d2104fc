/// Outbound alert (SMS) errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AlertError {
    #[error("invalid recipient number: {number}")]
    InvalidRecipient { number: String },

    #[error("invalid sender number: {raw} -> {normalized}; must be E.164")]
    InvalidSender { raw: String, normalized: String },

    #[error("alert message is empty")]
    EmptyMessage,

    #[error("missing messaging credentials: {missing}")]
    MissingCredentials { missing: String },

    #[error("alert send failed: {reason}")]
    SendFailed { reason: String },
}
