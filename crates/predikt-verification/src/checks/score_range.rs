//! Fatal check: every score is finite and inside its range.

use predikt_core::models::{CheckOutcome, EvaluationRecord};

use super::CheckContext;

pub const ID: &str = "score_range";

pub fn check(record: &EvaluationRecord, _ctx: &CheckContext<'_>) -> CheckOutcome {
    let violations: Vec<String> = record
        .score_fields()
        .into_iter()
        .filter(|(_, value, range)| !range.contains(*value))
        .map(|(name, value, range)| format!("{name}={value} outside [{}, {}]", range.min, range.max))
        .collect();

    if violations.is_empty() {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail(violations.join("; "))
    }
}
