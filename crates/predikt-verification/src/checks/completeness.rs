//! Minor checks for required narrative content.

use predikt_core::models::{CheckOutcome, EvaluationRecord};

use super::CheckContext;

pub const RATIONALE_ID: &str = "rationale_present";
pub const RISKS_ID: &str = "risks_listed";

pub fn check_rationale(record: &EvaluationRecord, _ctx: &CheckContext<'_>) -> CheckOutcome {
    if record.rationale.trim().is_empty() {
        CheckOutcome::fail("rationale is empty")
    } else {
        CheckOutcome::pass()
    }
}

pub fn check_risks(record: &EvaluationRecord, _ctx: &CheckContext<'_>) -> CheckOutcome {
    if record.risks.iter().any(|r| !r.trim().is_empty()) {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail("no risks listed")
    }
}
