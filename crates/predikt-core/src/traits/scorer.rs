use crate::models::{CreatorSamples, CreatorScore};

/// Turns historical return samples into a creator score.
pub trait ICreatorScorer: Send + Sync {
    fn score(&self, samples: &CreatorSamples) -> CreatorScore;
}
