//! Chat-completions classifier.

use std::time::Duration;

use reqwest::blocking::Client;
use scope_core::config::ClassifierConfig;
use scope_core::errors::{ClassificationError, ScopeError, ScopeResult};
use scope_core::models::{ClassificationRequest, ScopeVerdict};
use scope_core::traits::IScopeClassifier;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::parse::parse_verdict;
use super::prompt::{user_message, SYSTEM_PROMPT};

/// Classifier backed by an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Requests JSON-object output. One round-trip per email, no retry.
pub struct OpenAiClassifier {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClassifier {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> ScopeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ClassificationError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
        })
    }

    /// Build from config, reading the API key from `config.api_key_env`.
    pub fn from_config(config: &ClassifierConfig) -> ScopeResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| ScopeError::Config {
            reason: format!(
                "environment variable {} must hold the classifier API key",
                config.api_key_env
            ),
        })?;
        Self::new(
            config.endpoint.clone(),
            api_key,
            config.model.clone(),
            config.temperature,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn request_body<'a>(&'a self, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }

    fn complete(&self, user: &str) -> ScopeResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.trim())
            .json(&self.request_body(user))
            .send()
            .map_err(|e| ClassificationError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), "chat completions API returned an error status");
            return Err(ClassificationError::ApiStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: ChatResponse =
            response
                .json()
                .map_err(|e| ClassificationError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                ClassificationError::MalformedResponse {
                    reason: "response contained no message content".to_string(),
                }
                .into()
            })
    }
}

impl IScopeClassifier for OpenAiClassifier {
    fn classify(&self, request: &ClassificationRequest) -> ScopeResult<ScopeVerdict> {
        let content = self.complete(&user_message(request))?;
        let verdict = parse_verdict(&content)?;
        debug!(
            model = %self.model,
            scope_creep = %verdict.scope_creep,
            risk = %verdict.risk_level,
            "classification received"
        );
        Ok(verdict)
    }

    fn name(&self) -> &str {
        "openai-chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(endpoint: &str) -> OpenAiClassifier {
        OpenAiClassifier::new(endpoint, "sk-test", "gpt-4o", 0.2, Duration::from_millis(500))
            .unwrap()
    }

    #[test]
    fn request_asks_for_json_object() {
        let c = classifier("http://localhost/unused");
        let body = serde_json::to_value(c.request_body("EMAIL")).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "EMAIL");
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn response_content_is_extracted() {
        let raw = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{\"scope_creep\":\"no\"}"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed.choices[0].message.content.as_deref().unwrap();
        assert_eq!(parse_verdict(content).unwrap().scope_creep.to_string(), "no");
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = ClassifierConfig {
            api_key_env: "SCOPEGUARD_TEST_CLASSIFIER_KEY_NOT_SET".to_string(),
            ..Default::default()
        };
        let err = OpenAiClassifier::from_config(&config).err().unwrap();
        assert!(matches!(err, ScopeError::Config { .. }));
    }

    #[test]
    fn unreachable_endpoint_is_a_request_failure() {
        let c = classifier("http://127.0.0.1:9/v1/chat/completions");
        let err = c
            .classify(&ClassificationRequest::new("ctx", "email"))
            .unwrap_err();
        assert!(matches!(
            err,
            ScopeError::Classification(ClassificationError::RequestFailed { .. })
        ));
        assert!(err.is_transient());
    }
}
