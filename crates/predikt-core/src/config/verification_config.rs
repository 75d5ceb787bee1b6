use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{default_grounding_rules, GroundingRule};

/// Verification and repair loop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Global repair budget per run.
    pub max_repairs: u32,
    /// Maximum relative difference before a claim counts as contradicted.
    pub contradiction_tolerance: f64,
    /// Re-run every check on the final record after any repair.
    pub recheck_after_repair: bool,
    /// Largest allowed gap (overall-score points) between the overall score
    /// and the one implied by the sub-scores.
    pub consistency_max_gap: f64,
    /// Overall scores at or above this must not carry a negative tone.
    pub tone_high_score: f64,
    /// Overall scores at or below this must not carry a positive tone.
    pub tone_low_score: f64,
    /// Characters kept on each side of a claim as its context.
    pub claim_context_chars: usize,
    /// Claim-to-grounding mapping, first match wins.
    pub grounding_rules: Vec<GroundingRule>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            max_repairs: defaults::DEFAULT_MAX_REPAIRS,
            contradiction_tolerance: defaults::DEFAULT_CONTRADICTION_TOLERANCE,
            recheck_after_repair: defaults::DEFAULT_RECHECK_AFTER_REPAIR,
            consistency_max_gap: defaults::DEFAULT_CONSISTENCY_MAX_GAP,
            tone_high_score: defaults::DEFAULT_TONE_HIGH_SCORE,
            tone_low_score: defaults::DEFAULT_TONE_LOW_SCORE,
            claim_context_chars: defaults::DEFAULT_CLAIM_CONTEXT_CHARS,
            grounding_rules: default_grounding_rules(),
        }
    }
}
