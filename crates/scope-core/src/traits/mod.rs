mod alert;
mod classifier;
mod embedding;

pub use alert::IAlertSender;
pub use classifier::IScopeClassifier;
pub use embedding::IEmbeddingProvider;
