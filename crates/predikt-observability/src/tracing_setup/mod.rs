//! Tracing setup: structured logging and event types.

pub mod events;

use predikt_core::config::ObservabilityConfig;
use predikt_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `PREDIKT_LOG` environment variable for filtering and
/// defaults to `info`. Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    install(env_filter_or("info"), true);
}

/// Install a JSON subscriber with an explicit filter, ignoring `PREDIKT_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

/// Initialize tracing from config. `PREDIKT_LOG` still wins when set.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    install(env_filter_or(&config.log_level), config.json)
}

fn env_filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Every event carries its target, thread, and source location.
fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
