use crate::errors::RepairError;
use crate::models::{CheckFailure, EvaluationRecord};

/// Produces a corrected evaluation record for a failed check.
///
/// Implementations are opaque to the verification loop and may be slow or
/// flaky (e.g. regenerate text through a model API). Any timeout belongs to
/// the implementation.
pub trait IRepairer {
    fn repair(
        &self,
        record: &EvaluationRecord,
        failure: &CheckFailure,
    ) -> Result<EvaluationRecord, RepairError>;
}

impl<F> IRepairer for F
where
    F: Fn(&EvaluationRecord, &CheckFailure) -> Result<EvaluationRecord, RepairError>,
{
    fn repair(
        &self,
        record: &EvaluationRecord,
        failure: &CheckFailure,
    ) -> Result<EvaluationRecord, RepairError> {
        self(record, failure)
    }
}
