//! Tracing initialization.

use std::sync::Once;

use scope_core::config::ObservabilityConfig;
use scope_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for JSON results.
///
/// `SCOPEGUARD_LOG` takes precedence over `config.log_level`, e.g.
/// `SCOPEGUARD_LOG=scope_embeddings=debug,info`. Idempotent.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let (json, plain) = if config.json_logs {
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);
            (Some(layer), None)
        } else {
            let layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
            (None, Some(layer))
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(plain)
            .try_init();
    });
}
