use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical risk scale for a scope-creep judgement.
///
/// Labels outside the known scale are kept as `Other`, lowercased and
/// trimmed, instead of being coerced to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Unknown,
    Other(String),
}

impl RiskLevel {
    /// Map a free-form label onto the canonical scale.
    ///
    /// Case-insensitive and whitespace-trimmed. Missing or blank input is `Unknown`.
    pub fn normalize(raw: Option<&str>) -> Self {
        let label = match raw.map(str::trim) {
            None | Some("") => return Self::Unknown,
            Some(label) => label.to_lowercase(),
        };
        match label.as_str() {
            "high" | "extreme" | "critical" => Self::High,
            "medium" | "mod" | "moderate" => Self::Moderate,
            "low" | "minor" => Self::Low,
            "unknown" => Self::Unknown,
            _ => Self::Other(label),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Unknown => "unknown",
            Self::Other(label) => label,
        }
    }
}

/// Shorthand for `RiskLevel::normalize(Some(raw))`.
pub fn normalize_risk(raw: &str) -> RiskLevel {
    RiskLevel::normalize(Some(raw))
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::normalize(raw.as_deref()))
    }
}
