use serde::{Deserialize, Serialize};

use super::defaults;

/// Stakeholder alerting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Send SMS alerts at all.
    pub enabled: bool,
    /// Stakeholder phone numbers (any punctuation, normalized before sending).
    pub recipients: Vec<String>,
    /// Normalized risk levels that trigger an alert.
    pub alert_levels: Vec<String>,
    /// Characters of the email quoted in the alert.
    pub excerpt_chars: usize,
    /// Hard limit on the message body.
    pub max_message_chars: usize,
    /// Messaging API base URL.
    pub api_base: String,
    /// Environment variable names for the messaging credentials.
    pub account_sid_env: String,
    pub auth_token_env: String,
    pub from_number_env: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ALERTS_ENABLED,
            recipients: Vec::new(),
            alert_levels: vec![defaults::DEFAULT_ALERT_LEVEL.to_string()],
            excerpt_chars: defaults::DEFAULT_ALERT_EXCERPT_CHARS,
            max_message_chars: defaults::DEFAULT_ALERT_MAX_MESSAGE_CHARS,
            api_base: defaults::DEFAULT_TWILIO_API_BASE.to_string(),
            account_sid_env: defaults::DEFAULT_TWILIO_ACCOUNT_SID_ENV.to_string(),
            auth_token_env: defaults::DEFAULT_TWILIO_AUTH_TOKEN_ENV.to_string(),
            from_number_env: defaults::DEFAULT_TWILIO_FROM_NUMBER_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_ALERT_TIMEOUT_SECS,
        }
    }
}
