//! Top-level Predikt configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GroundingConfig, ObservabilityConfig, StatsConfig, VerificationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PREDIKT_*`)
/// 2. Project config (`predikt.toml` in project root)
/// 3. User config (`~/.predikt/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrediktConfig {
    pub stats: StatsConfig,
    pub verification: VerificationConfig,
    pub grounding: GroundingConfig,
    pub observability: ObservabilityConfig,
}

impl PrediktConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_layers(Self::user_config_path().as_deref(), root)
    }

    /// Load with an explicit user config path (`None` skips the user layer).
    pub fn load_layers(user_config: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        let mut merged = toml::Table::new();

        // Lowest priority file layer: user config.
        if let Some(path) = user_config {
            if path.exists() {
                merge_tables(&mut merged, read_table(path)?);
            }
        }

        let project_path = root.join("predikt.toml");
        if project_path.exists() {
            merge_tables(&mut merged, read_table(&project_path)?);
        }

        let mut config: PrediktConfig =
            toml::Value::Table(merged)
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::ParseError {
                    path: project_path.display().to_string(),
                    message: e.to_string(),
                })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: PrediktConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, alpha) in [
            ("stats.small_sample_alpha", self.stats.small_sample_alpha),
            ("stats.large_sample_alpha", self.stats.large_sample_alpha),
        ] {
            if !(alpha > 0.0 && alpha < 0.5) {
                return Err(invalid(field, "must be strictly between 0.0 and 0.5"));
            }
        }
        if self.stats.small_sample_threshold == 0 {
            return Err(invalid(
                "stats.small_sample_threshold",
                "must be greater than 0",
            ));
        }
        if !(self.stats.prior_weight >= 0.0 && self.stats.prior_weight.is_finite()) {
            return Err(invalid("stats.prior_weight", "must be a finite value >= 0.0"));
        }
        let tolerance = self.verification.contradiction_tolerance;
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(invalid(
                "verification.contradiction_tolerance",
                "must be a finite value > 0.0",
            ));
        }
        if self.verification.tone_low_score >= self.verification.tone_high_score {
            return Err(invalid(
                "verification.tone_low_score",
                "must be below verification.tone_high_score",
            ));
        }
        if self.grounding.cache_capacity == 0 {
            return Err(invalid("grounding.cache_capacity", "must be greater than 0"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<u32>("PREDIKT_MAX_REPAIRS") {
            self.verification.max_repairs = v;
        }
        if let Some(v) = env_parse::<f64>("PREDIKT_CONTRADICTION_TOLERANCE") {
            self.verification.contradiction_tolerance = v;
        }
        if let Some(v) = env_parse::<usize>("PREDIKT_MIN_SAMPLES") {
            self.stats.min_samples = v;
        }
        if let Ok(v) = std::env::var("PREDIKT_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Returns the user config path: `~/.predikt/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|h| PathBuf::from(h).join(".predikt").join("config.toml"))
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    content.parse::<toml::Table>().map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Deep-merge `overlay` into `base`. Nested tables merge key by key; any
/// other value in `overlay` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
