//! Shared data models.

pub mod check;
pub mod claim;
pub mod creator_score;
pub mod evaluation;
pub mod grounding;
pub mod market;
pub mod verification_log;

pub use check::{CheckFailure, CheckOutcome, Severity};
pub use claim::{
    default_grounding_rules, ClaimCheck, ClaimKind, ClaimVerdict, GroundingReport, GroundingRule,
    NumericalClaim, Scale,
};
pub use creator_score::{CreatorSamples, CreatorScore};
pub use evaluation::{EvaluationRecord, ScoreRange, SubScores};
pub use grounding::{fields, GroundingSnapshot};
pub use market::{MarketSpec, Position, PredictionMarket, Settlement, Side};
pub use verification_log::{FailedCheckRecord, VerificationLogEntry, VerificationOutcome};
