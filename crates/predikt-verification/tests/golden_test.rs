//! Golden dataset tests for predikt-verification.
//!
//! Each fixture under `golden/verification` carries a record, an optional
//! grounding snapshot, and the expected outcome of a repair-free run.

use predikt_core::models::{EvaluationRecord, GroundingSnapshot};
use predikt_verification::{
    extract_numerical_claims, run_verification, verify_claims_against_grounding, GroundingPolicy,
    VerificationOptions,
};
use serde::Deserialize;
use test_fixtures::load_all;

#[derive(Debug, Deserialize)]
struct VerificationCase {
    description: String,
    record: EvaluationRecord,
    grounding: Option<GroundingSnapshot>,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    fatal_failure: bool,
    checks_failed: u32,
    failed_check_ids: Vec<String>,
    warning_count: usize,
    claims: ClaimCounts,
}

#[derive(Debug, Deserialize)]
struct ClaimCounts {
    total: usize,
    supported: usize,
    contradicted: usize,
    unverifiable: usize,
}

fn cases() -> Vec<(String, VerificationCase)> {
    let cases = load_all::<VerificationCase>("golden/verification");
    assert_eq!(cases.len(), 6, "expected 6 verification golden files");
    cases
}

#[test]
fn golden_verification_outcomes() {
    for (name, case) in cases() {
        let mut options = VerificationOptions::default();
        if let Some(grounding) = &case.grounding {
            options = options.with_grounding(grounding);
        }
        let outcome = run_verification(case.record.clone(), options);
        let log = &outcome.log;

        assert_eq!(log.fatal_failure, case.expected.fatal_failure, "{name}: {}", case.description);
        assert_eq!(log.checks_failed, case.expected.checks_failed, "{name}");
        assert_eq!(log.checks_passed + log.checks_failed, log.checks_run, "{name}");
        assert_eq!(log.repairs_attempted, 0, "{name}: no repairer supplied");

        let failed: Vec<&str> = log.failed_checks.iter().map(|c| c.check_id.as_str()).collect();
        assert_eq!(failed, case.expected.failed_check_ids, "{name}");
        assert_eq!(log.quality_warnings.len(), case.expected.warning_count, "{name}");
        assert_eq!(outcome.record, case.record, "{name}: record must be untouched");
    }
}

#[test]
fn golden_claim_verdicts() {
    let policy = GroundingPolicy::default();
    for (name, case) in cases() {
        let grounding = case.grounding.clone().unwrap_or_default();
        let claims = extract_numerical_claims(case.record.text_fields());
        let report = verify_claims_against_grounding(&claims, &grounding, &policy);

        let expected = &case.expected.claims;
        assert_eq!(report.total, expected.total, "{name}");
        assert_eq!(report.supported, expected.supported, "{name}");
        assert_eq!(report.contradicted, expected.contradicted, "{name}");
        assert_eq!(report.unverifiable, expected.unverifiable, "{name}");
    }
}

#[test]
fn fatal_golden_warning_is_prefixed() {
    let (_, case) = cases()
        .into_iter()
        .find(|(name, _)| name == "score_out_of_range")
        .expect("score_out_of_range fixture");
    let outcome = run_verification(case.record, VerificationOptions::default());
    assert!(outcome.log.quality_warnings[0].starts_with("Fatal verification failure: "));
    assert!(outcome.log.quality_warnings[0].contains("overall_score=104"));
}
