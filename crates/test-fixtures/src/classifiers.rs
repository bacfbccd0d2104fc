use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use scope_core::errors::{ClassificationError, ScopeResult};
use scope_core::models::{
    normalize_risk, ClassificationRequest, RiskLevel, ScopeCreep, ScopeVerdict,
};
use scope_core::traits::IScopeClassifier;

/// Classifier double. Emails containing a trigger word are judged as scope
/// creep at the scripted risk; everything else is in scope.
pub struct ScriptedClassifier {
    trigger: String,
    risk: String,
    fail_marker: Option<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ClassificationRequest>>,
}

impl ScriptedClassifier {
    pub fn new(trigger: impl Into<String>, risk: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into().to_lowercase(),
            risk: risk.into(),
            fail_marker: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every email containing `marker`.
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.fail_marker = Some(marker.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<ClassificationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl IScopeClassifier for ScriptedClassifier {
    fn classify(&self, request: &ClassificationRequest) -> ScopeResult<ScopeVerdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut r) = self.requests.lock() {
            r.push(request.clone());
        }
        if let Some(marker) = &self.fail_marker {
            if request.email.contains(marker.as_str()) {
                return Err(ClassificationError::ApiStatus {
                    status: 500,
                    body: "mock classifier failure".to_string(),
                }
                .into());
            }
        }

        let creep = request.email.to_lowercase().contains(&self.trigger);
        Ok(ScopeVerdict {
            scope_creep: if creep { ScopeCreep::Yes } else { ScopeCreep::No },
            justification: if creep {
                format!("Email requests '{}', which the scope does not cover.", self.trigger)
            } else {
                "Request is covered by the scope.".to_string()
            },
            suggestion: if creep {
                "Raise a change request.".to_string()
            } else {
                "Proceed.".to_string()
            },
            risk_level: if creep {
                normalize_risk(&self.risk)
            } else {
                RiskLevel::Low
            },
            reference_scope_line: request.context.lines().nth(1).unwrap_or("none").to_string(),
            impact_analysis: "n/a".to_string(),
        })
    }

    fn name(&self) -> &str {
        "scripted-mock"
    }
}
