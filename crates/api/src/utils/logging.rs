use std::time::Duration;

use sharehub_domain::{LoggingConfig, Result, ShareHubError};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. Calling this twice is
/// harmless; the second subscriber is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        warn!("tracing subscriber already installed");
    }
}

/// Log the outcome of a request handler with structured fields.
///
/// Server-side failures are logged at error level with their detail, since
/// the client only ever sees a generic message for them.
pub fn log_request_outcome<T>(route: &str, outcome: &Result<T>, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;

    match outcome {
        Ok(_) => info!(route, duration_ms, "request_success"),
        Err(err) if err.is_server_error() => {
            error!(route, duration_ms, error_type = error_label(err), error = %err, "request_failure")
        }
        Err(err) => {
            warn!(route, duration_ms, error_type = error_label(err), "request_rejected")
        }
    }
}

/// Stable label for a `ShareHubError`, suitable for logs.
#[inline]
pub fn error_label(error: &ShareHubError) -> &'static str {
    error.label()
}
