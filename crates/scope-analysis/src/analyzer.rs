//! Batch scope-creep analysis over one scope document.
//!
//! The scope document is chunked and embedded once per batch. Each email
//! is then retrieved against, classified, and (when the verdict warrants
//! it) alerted on. A failure for one email becomes an error verdict on that
//! row; the batch always produces one row per email.

use chrono::{DateTime, Utc};
use scope_core::config::ScopeConfig;
use scope_core::errors::ScopeResult;
use scope_core::models::{ClassificationRequest, ScopeVerdict, ScoredChunk};
use scope_core::traits::{IAlertSender, IScopeClassifier};
use scope_embeddings::EmbeddingEngine;
use scope_retrieval::{render_context, Chunker, ScopeIndex};
use serde::Serialize;
use tracing::{debug_span, error, info, info_span, warn};
use uuid::Uuid;

use crate::alerts::{split_recipients, AlertPolicy, TwilioSmsSender};
use crate::classifier::OpenAiClassifier;

/// One retrieved scope section as reported in results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievedSection {
    pub position: usize,
    pub score: f64,
    pub text: String,
}

impl From<ScoredChunk> for RetrievedSection {
    fn from(scored: ScoredChunk) -> Self {
        Self {
            position: scored.chunk.position,
            score: scored.score,
            text: scored.chunk.text,
        }
    }
}

/// Result row for one email.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRow {
    /// Position of the email in the input batch.
    pub index: usize,
    pub email_body: String,
    #[serde(flatten)]
    pub verdict: ScopeVerdict,
    pub relevant_sections: Vec<RetrievedSection>,
    /// Alerts the messaging API accepted for this email.
    pub alerts_sent: usize,
    pub analyzed_at: DateTime<Utc>,
}

/// All rows of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub chunks: usize,
    pub rows: Vec<AnalysisRow>,
}

impl BatchReport {
    pub fn error_count(&self) -> usize {
        self.rows.iter().filter(|r| r.verdict.is_error()).count()
    }

    pub fn alerts_sent(&self) -> usize {
        self.rows.iter().map(|r| r.alerts_sent).sum()
    }
}

/// Retrieval, classification and alerting for a batch of emails.
pub struct ScopeAnalyzer {
    engine: EmbeddingEngine,
    classifier: Box<dyn IScopeClassifier>,
    alert_sender: Option<Box<dyn IAlertSender>>,
    policy: AlertPolicy,
    recipients: Vec<String>,
    chunker: Chunker,
    top_k: usize,
}

impl ScopeAnalyzer {
    /// Analyzer without alerting; chunking and retrieval settings from `config`.
    pub fn new(
        config: &ScopeConfig,
        engine: EmbeddingEngine,
        classifier: Box<dyn IScopeClassifier>,
    ) -> Self {
        Self {
            engine,
            classifier,
            alert_sender: None,
            policy: AlertPolicy::from_config(&config.alerts),
            recipients: split_recipients(&config.alerts.recipients),
            chunker: Chunker::from_config(&config.chunking),
            top_k: config.retrieval.top_k,
        }
    }

    /// Wire every component from config: the configured embedding provider,
    /// the chat classifier, and the SMS sender when alerts are enabled.
    ///
    /// A misconfigured SMS sender disables alerting with a warning instead
    /// of failing, since alerts are never allowed to stop analysis.
    pub fn from_config(config: &ScopeConfig) -> ScopeResult<Self> {
        let engine = EmbeddingEngine::from_config(&config.embedding)?;
        let classifier = OpenAiClassifier::from_config(&config.classifier)?;
        let mut analyzer = Self::new(config, engine, Box::new(classifier));

        if config.alerts.enabled {
            match TwilioSmsSender::from_config(&config.alerts) {
                Ok(sender) => analyzer = analyzer.with_alert_sender(Box::new(sender)),
                Err(e) => warn!(error = %e, "SMS alerts disabled"),
            }
        }
        Ok(analyzer)
    }

    pub fn with_alert_sender(mut self, sender: Box<dyn IAlertSender>) -> Self {
        self.alert_sender = Some(sender);
        self
    }

    /// Replace the configured recipients. Entries may hold comma-separated lists.
    pub fn with_recipients<S: AsRef<str>>(mut self, recipients: &[S]) -> Self {
        self.recipients = split_recipients(recipients);
        self
    }

    /// Analyze every email against `scope_text`. Always one row per email,
    /// in input order.
    pub fn analyze_batch<S: AsRef<str>>(&self, scope_text: &str, emails: &[S]) -> BatchReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let span = info_span!("scope.analysis", %run_id, emails = emails.len());
        let _guard = span.enter();

        let (chunks, rows) = match ScopeIndex::build(scope_text, &self.chunker, &self.engine) {
            Ok(index) => {
                let rows = emails
                    .iter()
                    .enumerate()
                    .map(|(i, email)| self.analyze_row(&index, i, email.as_ref()))
                    .collect();
                (index.len(), rows)
            }
            Err(e) => {
                error!(error = %e, "scope index build failed; every email is marked as an error");
                let rows = emails
                    .iter()
                    .enumerate()
                    .map(|(i, email)| error_row(i, email.as_ref(), ScopeVerdict::error(&e)))
                    .collect();
                (0, rows)
            }
        };

        let report = BatchReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            chunks,
            rows,
        };
        info!(
            rows = report.rows.len(),
            errors = report.error_count(),
            alerts = report.alerts_sent(),
            stats = ?self.engine.cache_stats(),
            "batch analysis complete"
        );
        report
    }

    /// Retrieve and classify one email against a prepared index.
    pub fn analyze_email(
        &self,
        index: &ScopeIndex<'_>,
        email: &str,
    ) -> ScopeResult<(ScopeVerdict, Vec<ScoredChunk>)> {
        let ranked = index.retrieve(email, self.top_k)?;
        let request = ClassificationRequest::new(render_context(&ranked), email);
        let verdict = self.classifier.classify(&request)?;
        Ok((verdict, ranked))
    }

    fn analyze_row(&self, index: &ScopeIndex<'_>, i: usize, email: &str) -> AnalysisRow {
        let span = debug_span!("scope.email", index = i);
        let _guard = span.enter();

        let (verdict, ranked) = match self.analyze_email(index, email) {
            Ok(result) => result,
            Err(e) => {
                warn!(index = i, error = %e, transient = e.is_transient(), "email analysis failed");
                return error_row(i, email, ScopeVerdict::error(&e));
            }
        };

        let alerts_sent = if self.policy.should_alert(&verdict) {
            self.send_alerts(email, &verdict)
        } else {
            0
        };

        AnalysisRow {
            index: i,
            email_body: email.to_string(),
            verdict,
            relevant_sections: ranked.into_iter().map(RetrievedSection::from).collect(),
            alerts_sent,
            analyzed_at: Utc::now(),
        }
    }

    /// Send to every recipient. Failures are logged and counted out.
    fn send_alerts(&self, email: &str, verdict: &ScopeVerdict) -> usize {
        let Some(sender) = self.alert_sender.as_deref() else {
            return 0;
        };
        let message = self.policy.message(email, verdict);
        let mut sent = 0;
        for recipient in &self.recipients {
            match sender.send(recipient, &message) {
                Ok(_) => sent += 1,
                Err(e) => warn!(
                    recipient = %recipient,
                    channel = sender.name(),
                    error = %e,
                    "alert not delivered"
                ),
            }
        }
        sent
    }
}

fn error_row(index: usize, email: &str, verdict: ScopeVerdict) -> AnalysisRow {
    AnalysisRow {
        index,
        email_body: email.to_string(),
        verdict,
        relevant_sections: Vec::new(),
        alerts_sent: 0,
        analyzed_at: Utc::now(),
    }
}
