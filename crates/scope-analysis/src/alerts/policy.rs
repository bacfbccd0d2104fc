//! When to alert and what to say.

use scope_core::config::AlertConfig;
use scope_core::models::{RiskLevel, ScopeCreep, ScopeVerdict};

/// Alert trigger and message format.
#[derive(Debug, Clone)]
pub struct AlertPolicy {
    levels: Vec<RiskLevel>,
    excerpt_chars: usize,
    max_message_chars: usize,
}

impl AlertPolicy {
    pub fn new(levels: Vec<RiskLevel>, excerpt_chars: usize, max_message_chars: usize) -> Self {
        Self {
            levels,
            excerpt_chars,
            max_message_chars,
        }
    }

    /// Configured labels pass through the risk normalizer, so `extreme`
    /// and `high` both mean [`RiskLevel::High`].
    pub fn from_config(config: &AlertConfig) -> Self {
        Self::new(
            config
                .alert_levels
                .iter()
                .map(|l| RiskLevel::normalize(Some(l.as_str())))
                .collect(),
            config.excerpt_chars,
            config.max_message_chars,
        )
    }

    /// Scope creep was detected at an alerting risk level.
    pub fn should_alert(&self, verdict: &ScopeVerdict) -> bool {
        verdict.scope_creep == ScopeCreep::Yes && self.levels.contains(&verdict.risk_level)
    }

    /// `SCOPE CREEP ALERT [HIGH]:` header, the email excerpt, and the
    /// suggestion, cut to the message limit.
    pub fn message(&self, email: &str, verdict: &ScopeVerdict) -> String {
        let excerpt: String = email.chars().take(self.excerpt_chars).collect();
        let message = format!(
            "SCOPE CREEP ALERT [{}]:\n{excerpt}...\nSuggested: {}",
            verdict.risk_level.as_str().to_uppercase(),
            verdict.suggestion
        );
        truncate_chars(message, self.max_message_chars)
    }
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::from_config(&AlertConfig::default())
    }
}

/// Flatten recipient entries, each of which may be a comma-separated list.
pub fn split_recipients<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte, _)) => text[..byte].to_string(),
        None => text,
    }
}
