use serde::{Deserialize, Serialize};

use super::defaults;

/// Robust statistics and creator scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Trim fraction for samples smaller than `small_sample_threshold`.
    pub small_sample_alpha: f64,
    /// Trim fraction for everything else.
    pub large_sample_alpha: f64,
    pub small_sample_threshold: usize,
    /// Creators with fewer samples are reported as insufficient data.
    pub min_samples: usize,
    /// Pseudo-count shrinking small-sample scores toward zero.
    pub prior_weight: f64,
}

impl StatsConfig {
    /// Winsorization alpha for a sample of `n` values.
    pub fn alpha_for_sample_size(&self, n: usize) -> f64 {
        if n < self.small_sample_threshold {
            self.small_sample_alpha
        } else {
            self.large_sample_alpha
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            small_sample_alpha: defaults::DEFAULT_SMALL_SAMPLE_ALPHA,
            large_sample_alpha: defaults::DEFAULT_LARGE_SAMPLE_ALPHA,
            small_sample_threshold: defaults::DEFAULT_SMALL_SAMPLE_THRESHOLD,
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
            prior_weight: defaults::DEFAULT_PRIOR_WEIGHT,
        }
    }
}
