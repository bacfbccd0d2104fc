/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "SCOPEGUARD_LOG";

/// Column / field name carrying the email text in batch input.
pub const EMAIL_BODY_FIELD: &str = "email_body";

/// Suggestion attached to every error verdict.
pub const ERROR_SUGGESTION: &str = "Check logs for details and ensure API key is valid.";
