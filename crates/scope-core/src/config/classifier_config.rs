use serde::{Deserialize, Serialize};

use super::defaults;

/// Classification call configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Chat model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Chat completions endpoint URL.
    pub endpoint: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_CLASSIFIER_MODEL.to_string(),
            temperature: defaults::DEFAULT_CLASSIFIER_TEMPERATURE,
            endpoint: defaults::DEFAULT_CLASSIFIER_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_OPENAI_KEY_ENV.to_string(),
            timeout_secs: defaults::DEFAULT_CLASSIFIER_TIMEOUT_SECS,
        }
    }
}
