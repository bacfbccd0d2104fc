//! # scope-analysis
//!
//! Everything downstream of retrieval: the language-model classifier,
//! stakeholder alerting, and the batch analyzer that ties them to a
//! [`scope_retrieval::ScopeIndex`].

pub mod alerts;
pub mod analyzer;
pub mod classifier;

pub use alerts::{
    clean_phone_number, is_e164, split_recipients, AlertPolicy, TwilioSmsSender,
};
pub use analyzer::{AnalysisRow, BatchReport, RetrievedSection, ScopeAnalyzer};
pub use classifier::{parse_verdict, OpenAiClassifier};
