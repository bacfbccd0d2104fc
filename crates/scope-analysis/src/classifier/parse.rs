//! Model output → [`ScopeVerdict`].
//!
//! The model is asked for a JSON object but its fields are not trusted:
//! missing keys fall back to fixed defaults, booleans are accepted for
//! `scope_creep`, and list-valued text fields are joined line by line.

use scope_core::errors::{ClassificationError, ScopeResult};
use scope_core::models::{RiskLevel, ScopeCreep, ScopeVerdict};
use serde_json::{Map, Value};

const MISSING_JUSTIFICATION: &str = "Error";
const MISSING_SUGGESTION: &str = "Check logs";
const MISSING_REFERENCE: &str = "None";
const MISSING_IMPACT: &str = "Unknown";

/// Parse the message content returned by the classifier model.
///
/// # Errors
/// `MalformedResponse` when the content is not a JSON object.
pub fn parse_verdict(content: &str) -> ScopeResult<ScopeVerdict> {
    let value: Value =
        serde_json::from_str(content.trim()).map_err(|e| ClassificationError::MalformedResponse {
            reason: format!("model output is not JSON: {e}"),
        })?;
    let Value::Object(fields) = value else {
        return Err(ClassificationError::MalformedResponse {
            reason: "model output is not a JSON object".to_string(),
        }
        .into());
    };

    Ok(ScopeVerdict {
        scope_creep: scope_creep(fields.get("scope_creep")),
        justification: text(&fields, "justification", MISSING_JUSTIFICATION),
        suggestion: text(&fields, "suggestion", MISSING_SUGGESTION),
        risk_level: RiskLevel::normalize(fields.get("risk_level").and_then(Value::as_str)),
        reference_scope_line: text(&fields, "reference_scope_line", MISSING_REFERENCE),
        impact_analysis: text(&fields, "impact_analysis", MISSING_IMPACT),
    })
}

/// `yes`/`no` in any case, `true`/`false`, or a JSON bool. Anything else is `Error`.
fn scope_creep(value: Option<&Value>) -> ScopeCreep {
    match value {
        Some(Value::Bool(true)) => ScopeCreep::Yes,
        Some(Value::Bool(false)) => ScopeCreep::No,
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "yes" | "true" => ScopeCreep::Yes,
            "no" | "false" => ScopeCreep::No,
            _ => ScopeCreep::Error,
        },
        _ => ScopeCreep::Error,
    }
}

fn text(fields: &Map<String, Value>, key: &str, missing: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => missing.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(other) => other.to_string(),
    }
}
