use std::sync::Mutex;

use scope_core::errors::{AlertError, ScopeResult};
use scope_core::traits::IAlertSender;

/// Alert sender that keeps every delivered message in memory.
#[derive(Default)]
pub struct RecordingAlertSender {
    sent: Mutex<Vec<(String, String)>>,
    reject: Option<String>,
}

impl RecordingAlertSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse delivery to `recipient`.
    pub fn rejecting(mut self, recipient: impl Into<String>) -> Self {
        self.reject = Some(recipient.into());
        self
    }

    /// `(recipient, message)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl IAlertSender for RecordingAlertSender {
    fn send(&self, recipient: &str, message: &str) -> ScopeResult<String> {
        if self.reject.as_deref() == Some(recipient) {
            return Err(AlertError::SendFailed {
                reason: format!("mock rejected {recipient}"),
            }
            .into());
        }
        let mut sent = self.sent.lock().map_err(|_| AlertError::SendFailed {
            reason: "recorder poisoned".to_string(),
        })?;
        sent.push((recipient.to_string(), message.to_string()));
        Ok(format!("SM{:04}", sent.len()))
    }

    fn name(&self) -> &str {
        "recording-mock"
    }
}
