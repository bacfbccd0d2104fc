//! Scope-creep classification through a chat-completions model.

mod openai_classifier;
mod parse;
pub mod prompt;

pub use openai_classifier::OpenAiClassifier;
pub use parse::parse_verdict;
