//! Twilio Messages API sender.

use std::time::Duration;

use reqwest::blocking::Client;
use scope_core::config::AlertConfig;
use scope_core::errors::{AlertError, ScopeResult};
use scope_core::traits::IAlertSender;
use serde::Deserialize;
use tracing::{info, warn};

use super::phone::{clean_phone_number, is_e164};
use super::policy::truncate_chars;

/// Longest body the Messages API accepts.
pub const MAX_SMS_CHARS: usize = 1600;

/// SMS sender for the Twilio REST API (form POST, basic auth).
///
/// Sender number and credentials are checked once at construction; the
/// recipient and message are checked on every send, before any request.
pub struct TwilioSmsSender {
    client: Client,
    messages_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

#[derive(Deserialize)]
struct MessageResponse {
    sid: Option<String>,
    status: Option<String>,
}

impl TwilioSmsSender {
    pub fn new(
        api_base: &str,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        raw_from_number: &str,
        timeout: Duration,
    ) -> ScopeResult<Self> {
        let from_number = clean_phone_number(raw_from_number);
        if !is_e164(&from_number) {
            return Err(AlertError::InvalidSender {
                raw: raw_from_number.to_string(),
                normalized: from_number,
            }
            .into());
        }

        let account_sid = account_sid.into();
        let auth_token = auth_token.into();
        let missing: Vec<&str> = [("account sid", &account_sid), ("auth token", &auth_token)]
            .into_iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(AlertError::MissingCredentials {
                missing: missing.join(", "),
            }
            .into());
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AlertError::SendFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            messages_url: format!(
                "{}/Accounts/{account_sid}/Messages.json",
                api_base.trim_end_matches('/')
            ),
            account_sid,
            auth_token,
            from_number,
        })
    }

    /// Build from the credential environment variables named in `config`.
    ///
    /// Unset variables are treated as empty, so they surface as
    /// `InvalidSender` or `MissingCredentials`.
    pub fn from_config(config: &AlertConfig) -> ScopeResult<Self> {
        let env = |name: &str| std::env::var(name).unwrap_or_default();
        Self::new(
            &config.api_base,
            env(&config.account_sid_env),
            env(&config.auth_token_env),
            &env(&config.from_number_env),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn from_number(&self) -> &str {
        &self.from_number
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    fn post_message(&self, to: &str, body: &str) -> ScopeResult<String> {
        let response = self
            .client
            .post(&self.messages_url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .map_err(|e| AlertError::SendFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(AlertError::SendFailed {
                reason: format!("messages API returned {}: {text}", status.as_u16()),
            }
            .into());
        }

        let parsed: MessageResponse = response.json().map_err(|e| AlertError::SendFailed {
            reason: format!("unreadable messages API response: {e}"),
        })?;
        parsed.sid.ok_or_else(|| {
            AlertError::SendFailed {
                reason: format!(
                    "no message sid returned (status: {})",
                    parsed.status.as_deref().unwrap_or("unknown")
                ),
            }
            .into()
        })
    }
}

impl IAlertSender for TwilioSmsSender {
    fn send(&self, recipient: &str, message: &str) -> ScopeResult<String> {
        let to = clean_phone_number(recipient);
        if !is_e164(&to) {
            return Err(AlertError::InvalidRecipient { number: to }.into());
        }
        if message.is_empty() {
            return Err(AlertError::EmptyMessage.into());
        }

        let body = truncate_chars(message.to_string(), MAX_SMS_CHARS);
        match self.post_message(&to, &body) {
            Ok(sid) => {
                info!(to = %to, sid = %sid, "alert queued");
                Ok(sid)
            }
            Err(e) => {
                warn!(to = %to, error = %e, "alert send failed");
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        "twilio"
    }
}
