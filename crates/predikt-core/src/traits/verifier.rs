use crate::models::{EvaluationRecord, GroundingSnapshot, VerificationOutcome};
use crate::traits::IRepairer;

/// Verifies (and optionally repairs) an evaluation record.
pub trait IVerifier {
    /// Never fails: every problem is reported through the outcome's log entry.
    fn verify(
        &self,
        record: EvaluationRecord,
        grounding: Option<&GroundingSnapshot>,
        repairer: Option<&dyn IRepairer>,
    ) -> VerificationOutcome;
}
