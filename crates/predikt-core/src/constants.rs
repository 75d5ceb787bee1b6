/// Predikt core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length of a market id.
pub const MAX_MARKET_ID_LEN: usize = 50;

/// Maximum length of a market description.
pub const MAX_MARKET_DESCRIPTION_LEN: usize = 200;

/// Prefix of the quality warning surfaced for a fatal check failure.
pub const FATAL_WARNING_PREFIX: &str = "Fatal verification failure";

/// Prefix of the quality warning surfaced when a repair broke a passing check.
pub const REGRESSION_WARNING_PREFIX: &str = "Regression after repair";

/// Environment variable read by the tracing subscriber.
pub const LOG_ENV_VAR: &str = "PREDIKT_LOG";
