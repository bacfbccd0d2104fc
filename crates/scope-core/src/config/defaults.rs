// Single source of truth for all default values.

// --- Chunking ---
pub const DEFAULT_CHUNK_SIZE: usize = 500;
pub const DEFAULT_CHUNK_OVERLAP: usize = 55;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 3;

// --- Classifier ---
pub const DEFAULT_CLASSIFIER_MODEL: &str = "gpt-4o";
pub const DEFAULT_CLASSIFIER_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_CLASSIFIER_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 60;

// --- Alerts ---
pub const DEFAULT_ALERTS_ENABLED: bool = false;
pub const DEFAULT_ALERT_LEVEL: &str = "high";
pub const DEFAULT_ALERT_EXCERPT_CHARS: usize = 200;
pub const DEFAULT_ALERT_MAX_MESSAGE_CHARS: usize = 1600;
pub const DEFAULT_TWILIO_ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";
pub const DEFAULT_TWILIO_AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";
pub const DEFAULT_TWILIO_FROM_NUMBER_ENV: &str = "TWILIO_PHONE_NUMBER";
pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";
pub const DEFAULT_ALERT_TIMEOUT_SECS: u64 = 15;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
