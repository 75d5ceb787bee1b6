//! Numeric claims in the narrative must not contradict grounding data.

use predikt_core::models::{CheckOutcome, EvaluationRecord};

use super::CheckContext;
use crate::claims::extract_numerical_claims;
use crate::grounding::verify_claims_against_grounding;

pub const ID: &str = "numeric_claims";

/// Passes when no grounding snapshot is available.
pub fn check(record: &EvaluationRecord, ctx: &CheckContext<'_>) -> CheckOutcome {
    let Some(grounding) = ctx.grounding else {
        return CheckOutcome::pass();
    };

    let claims = extract_numerical_claims(record.text_fields())
        .with_context_chars(ctx.config.claim_context_chars);
    let report = verify_claims_against_grounding(&claims, grounding, ctx.policy);
    if !report.has_contradictions() {
        return CheckOutcome::pass();
    }

    let details: Vec<String> = report
        .contradictions()
        .map(|c| {
            format!(
                "{} claims {} but {} is {}",
                c.claim.field,
                c.claim.raw,
                c.grounding_field.as_deref().unwrap_or("?"),
                c.grounding_value.unwrap_or(f64::NAN),
            )
        })
        .collect();
    CheckOutcome::fail(details.join("; "))
}
