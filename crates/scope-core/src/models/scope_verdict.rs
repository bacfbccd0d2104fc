use std::fmt;

use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::constants::ERROR_SUGGESTION;

/// Whether an email asks for work outside the agreed scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeCreep {
    Yes,
    No,
    /// The analysis for this item failed.
    Error,
}

impl fmt::Display for ScopeCreep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Error => "error",
        })
    }
}

/// Structured judgement returned for one email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeVerdict {
    pub scope_creep: ScopeCreep,
    /// Specific differences between the email and the scope.
    pub justification: String,
    /// Suggested response strategy for the project manager.
    pub suggestion: String,
    pub risk_level: RiskLevel,
    /// Scope lines the judgement relied on.
    pub reference_scope_line: String,
    /// Estimated cost / timeline impact.
    pub impact_analysis: String,
}

impl ScopeVerdict {
    /// Per-item error marker. Batch processing records this row and moves on.
    pub fn error(reason: impl fmt::Display) -> Self {
        Self {
            scope_creep: ScopeCreep::Error,
            justification: format!("An error occurred during AI analysis: {reason}"),
            suggestion: ERROR_SUGGESTION.to_string(),
            risk_level: RiskLevel::Unknown,
            reference_scope_line: "none".to_string(),
            impact_analysis: "unknown".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.scope_creep == ScopeCreep::Error
    }
}
