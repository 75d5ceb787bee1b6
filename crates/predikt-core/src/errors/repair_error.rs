/// Errors a caller-supplied repair function may return.
///
/// The verification loop never propagates these: each one is recorded as a
/// failed repair attempt.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepairError {
    #[error("repair failed for check {check_id}: {reason}")]
    RepairFailed { check_id: String, reason: String },

    #[error("repair for check {check_id} produced an unusable record: {reason}")]
    InvalidOutput { check_id: String, reason: String },
}
