//! De-biased creator scores from historical returns.

use rayon::prelude::*;

use predikt_core::config::StatsConfig;
use predikt_core::models::{CreatorSamples, CreatorScore};
use predikt_core::traits::ICreatorScorer;
use predikt_observability::tracing_setup::events;

use crate::winsorize::{winsorize_by_pair, winsorized_mean, winsorized_std};

/// Dispersion below this is treated as none (floating-point noise).
const MIN_DISPERSION: f64 = 1e-12;

/// Score a single creator.
///
/// Alpha is chosen from the creator's total sample size, returns are
/// winsorized per pair, and the moments are taken over the winsorized
/// values with alpha 0 so nothing is clipped twice.
pub fn score_creator(samples: &CreatorSamples, config: &StatsConfig) -> CreatorScore {
    let n = samples.len();
    let alpha = config.alpha_for_sample_size(n);

    let winsorized: Vec<f64> = winsorize_by_pair(&samples.returns, alpha)
        .into_iter()
        .map(|(_, v)| v)
        .collect();

    let mean_return = winsorized_mean(&winsorized, 0.0);
    let std_return = winsorized_std(&winsorized, 0.0);
    let risk_adjusted = if std_return > MIN_DISPERSION {
        mean_return / std_return
    } else {
        0.0
    };

    let insufficient_data = n < config.min_samples.max(1);
    let confidence_weight = if n == 0 {
        0.0
    } else {
        n as f64 / (n as f64 + config.prior_weight)
    };
    let score = if insufficient_data {
        0.0
    } else {
        risk_adjusted * confidence_weight
    };

    events::creator_scored(&samples.creator_id, n, score, insufficient_data);

    CreatorScore {
        creator_id: samples.creator_id.clone(),
        sample_size: n,
        alpha,
        mean_return,
        std_return,
        risk_adjusted,
        confidence_weight,
        score,
        insufficient_data,
    }
}

/// Score many creators in parallel, ranked by score descending.
///
/// Creators with insufficient data rank after all others; ties break on
/// creator id so the order is deterministic.
pub fn score_creators(all: &[CreatorSamples], config: &StatsConfig) -> Vec<CreatorScore> {
    let mut scores: Vec<CreatorScore> = all.par_iter().map(|s| score_creator(s, config)).collect();
    scores.sort_by(|a, b| {
        a.insufficient_data
            .cmp(&b.insufficient_data)
            .then_with(|| b.score.total_cmp(&a.score))
            .then_with(|| a.creator_id.cmp(&b.creator_id))
    });
    scores
}

/// [`ICreatorScorer`] backed by a [`StatsConfig`].
#[derive(Debug, Clone, Default)]
pub struct CreatorScorer {
    config: StatsConfig,
}

impl CreatorScorer {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    pub fn rank(&self, all: &[CreatorSamples]) -> Vec<CreatorScore> {
        score_creators(all, &self.config)
    }
}

impl ICreatorScorer for CreatorScorer {
    fn score(&self, samples: &CreatorSamples) -> CreatorScore {
        score_creator(samples, &self.config)
    }
}
