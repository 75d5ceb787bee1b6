//! Integration tests for the verify-and-repair loop.

use std::cell::{Cell, RefCell};

use predikt_core::errors::RepairError;
use predikt_core::models::{
    CheckFailure, CheckOutcome, EvaluationRecord, GroundingSnapshot, Severity, SubScores,
};
use predikt_core::traits::{IRepairer, IVerifier};
use predikt_core::config::VerificationConfig;
use predikt_verification::{run_verification, VerificationCheck, VerificationEngine, VerificationOptions};

fn make_record(overall: f64, sub: f64) -> EvaluationRecord {
    EvaluationRecord {
        id: "eval-1".to_string(),
        overall_score: overall,
        sub_scores: SubScores {
            technical_feasibility: sub,
            tokenomics_design: sub,
            market_fit: sub,
            execution_risk: sub,
        },
        rationale: "Working product with paying customers.".to_string(),
        risks: vec!["Key-person dependency.".to_string()],
        recommendations: vec![],
    }
}

fn always_fail(id: &str, max_attempts: u32) -> VerificationCheck {
    VerificationCheck::new(id, "Always fails", Severity::Major, |_, _| {
        CheckOutcome::fail("never satisfied")
    })
    .repairable(max_attempts)
}

/// Returns the record unchanged and counts calls.
struct CountingRepairer {
    calls: Cell<u32>,
}

impl CountingRepairer {
    fn new() -> Self {
        Self { calls: Cell::new(0) }
    }
}

impl IRepairer for CountingRepairer {
    fn repair(
        &self,
        record: &EvaluationRecord,
        _failure: &CheckFailure,
    ) -> Result<EvaluationRecord, RepairError> {
        self.calls.set(self.calls.get() + 1);
        Ok(record.clone())
    }
}

#[test]
fn fatal_failure_skips_repairs() {
    let repairer = CountingRepairer::new();
    let outcome = run_verification(
        make_record(-1.0, 5.0),
        VerificationOptions::default().with_repairer(&repairer),
    );

    assert!(outcome.log.fatal_failure);
    assert_eq!(outcome.log.repairs_attempted, 0);
    assert_eq!(repairer.calls.get(), 0);
    assert!(outcome.log.quality_warnings[0].starts_with("Fatal verification failure: "));
    assert_eq!(outcome.log.failed_checks[0].check_id, "score_range");
}

#[test]
fn global_budget_caps_per_check_attempts() {
    let engine = VerificationEngine::default().with_checks(vec![always_fail("stubborn", 5)]);
    let repairer = CountingRepairer::new();
    let outcome = engine.run_with(
        make_record(50.0, 5.0),
        VerificationOptions::default()
            .with_repairer(&repairer)
            .with_max_repairs(2),
    );

    assert_eq!(outcome.log.repairs_attempted, 2);
    assert_eq!(outcome.log.repairs_succeeded, 0);
    assert_eq!(repairer.calls.get(), 2);
    assert_eq!(outcome.log.quality_warnings.len(), 1);
    assert_eq!(outcome.log.failed_checks[0].repair_attempts, 2);
    assert!(!outcome.log.failed_checks[0].repair_succeeded);
}

#[test]
fn per_check_budget_leaves_room_for_next_check() {
    let engine = VerificationEngine::default()
        .with_checks(vec![always_fail("first", 1), always_fail("second", 1)]);
    let repairer = CountingRepairer::new();
    let outcome = engine.run_with(
        make_record(50.0, 5.0),
        VerificationOptions::default()
            .with_repairer(&repairer)
            .with_max_repairs(5),
    );

    assert_eq!(outcome.log.repairs_attempted, 2);
    let attempts: Vec<u32> = outcome.log.failed_checks.iter().map(|c| c.repair_attempts).collect();
    assert_eq!(attempts, vec![1, 1]);
    assert_eq!(outcome.log.quality_warnings.len(), 2);
}

#[test]
fn failing_repairer_is_recorded_not_propagated() {
    let repairer = |_: &EvaluationRecord, failure: &CheckFailure| -> Result<EvaluationRecord, RepairError> {
        Err(RepairError::RepairFailed {
            check_id: failure.check_id.clone(),
            reason: "model API timed out".to_string(),
        })
    };
    let engine = VerificationEngine::default()
        .with_checks(vec![always_fail("first", 3), always_fail("second", 3)]);
    let outcome = engine.run_with(
        make_record(50.0, 5.0),
        VerificationOptions::default().with_repairer(&repairer),
    );

    // One failed attempt per check, then the loop moves on.
    assert_eq!(outcome.log.repairs_attempted, 2);
    assert_eq!(outcome.log.repairs_succeeded, 0);
    let first = &outcome.log.failed_checks[0];
    assert_eq!(first.detail, "never satisfied");
    assert!(first.repair_error.as_deref().unwrap().contains("model API timed out"));
    assert!(!first.resolved);
    assert_eq!(outcome.log.quality_warnings.len(), 2);
    assert!(outcome.log.quality_warnings[0].contains("never satisfied"));
    assert!(outcome.log.quality_warnings[0].contains("model API timed out"));
}

#[test]
fn successful_repair_replaces_record() {
    // Overall 95 against sub-scores implying 50 fails score consistency.
    let repairer = |record: &EvaluationRecord, failure: &CheckFailure| -> Result<EvaluationRecord, RepairError> {
        assert_eq!(failure.check_id, "score_consistency");
        assert_eq!(failure.attempt, 1);
        let mut fixed = record.clone();
        fixed.overall_score = fixed.implied_overall();
        Ok(fixed)
    };
    let outcome = run_verification(
        make_record(95.0, 5.0),
        VerificationOptions::default().with_repairer(&repairer),
    );

    assert_eq!(outcome.record.overall_score, 50.0);
    assert_eq!(outcome.log.checks_failed, 1);
    assert_eq!(outcome.log.repairs_attempted, 1);
    assert_eq!(outcome.log.repairs_succeeded, 1);
    assert!(outcome.log.quality_warnings.is_empty());
    assert!(outcome.log.is_clean());
}

#[test]
fn repair_that_breaks_a_fatal_check_is_rejected() {
    let repairer = |record: &EvaluationRecord, _: &CheckFailure| -> Result<EvaluationRecord, RepairError> {
        let mut broken = record.clone();
        broken.overall_score = 250.0;
        Ok(broken)
    };
    let outcome = run_verification(
        make_record(95.0, 5.0),
        VerificationOptions::default().with_repairer(&repairer),
    );

    assert_eq!(outcome.record.overall_score, 95.0);
    assert!(!outcome.log.fatal_failure);
    assert_eq!(outcome.log.repairs_attempted, 1);
    assert_eq!(outcome.log.repairs_succeeded, 0);
    let failed = &outcome.log.failed_checks[0];
    assert!(failed.detail.starts_with("overall_score 95.0 differs"));
    assert!(failed.repair_error.as_deref().unwrap().contains("unusable record"));
}

/// Sets the overall score to 50 and logs which check asked for it.
struct ScoreResetRepairer {
    calls: RefCell<Vec<String>>,
}

impl IRepairer for ScoreResetRepairer {
    fn repair(
        &self,
        record: &EvaluationRecord,
        failure: &CheckFailure,
    ) -> Result<EvaluationRecord, RepairError> {
        self.calls.borrow_mut().push(failure.check_id.clone());
        let mut fixed = record.clone();
        fixed.overall_score = 50.0;
        Ok(fixed)
    }
}

fn high_score_with_negative_tone() -> EvaluationRecord {
    let mut record = make_record(95.0, 5.0);
    record.rationale = "Red flags in the unlock schedule; avoid for now.".to_string();
    record
}

#[test]
fn one_repair_resolves_two_failed_checks() {
    let repairer = ScoreResetRepairer { calls: RefCell::new(Vec::new()) };
    let outcome = run_verification(
        high_score_with_negative_tone(),
        VerificationOptions::default().with_repairer(&repairer),
    );

    assert_eq!(*repairer.calls.borrow(), vec!["score_consistency".to_string()]);
    assert_eq!(outcome.record.overall_score, 50.0);
    assert_eq!(outcome.log.checks_failed, 2);
    assert_eq!(outcome.log.repairs_attempted, 1);
    assert_eq!(outcome.log.repairs_succeeded, 1);
    assert!(outcome.log.quality_warnings.is_empty());
    assert!(outcome.log.is_clean());

    let tone = &outcome.log.failed_checks[1];
    assert_eq!(tone.check_id, "tone_consistency");
    assert_eq!(tone.repair_attempts, 0);
    assert!(!tone.repair_succeeded);
    assert!(tone.resolved);
}

#[test]
fn exhausted_budget_does_not_report_checks_fixed_by_earlier_repair() {
    let repairer = ScoreResetRepairer { calls: RefCell::new(Vec::new()) };
    let outcome = run_verification(
        high_score_with_negative_tone(),
        VerificationOptions::default()
            .with_repairer(&repairer)
            .with_max_repairs(1),
    );

    assert_eq!(repairer.calls.borrow().len(), 1);
    assert_eq!(outcome.record.overall_score, 50.0);
    assert!(outcome.log.quality_warnings.is_empty());
}

#[test]
fn later_repair_resolves_check_whose_turn_came_first() {
    // Tone runs first and is not repairable; repairing the score cap
    // afterwards fixes it too.
    let engine = VerificationEngine::default().with_checks(vec![
        VerificationCheck::new("tone_consistency", "Tone", Severity::Major, |r, _| {
            if r.overall_score >= 70.0 && r.rationale.contains("avoid") {
                CheckOutcome::fail("negative text on a high score")
            } else {
                CheckOutcome::pass()
            }
        }),
        VerificationCheck::new("score_cap", "Score cap", Severity::Major, |r, _| {
            if r.overall_score > 60.0 {
                CheckOutcome::fail("score above cap")
            } else {
                CheckOutcome::pass()
            }
        })
        .repairable(1),
    ]);
    let repairer = ScoreResetRepairer { calls: RefCell::new(Vec::new()) };
    let outcome = engine.run(high_score_with_negative_tone(), None, Some(&repairer));

    assert_eq!(*repairer.calls.borrow(), vec!["score_cap".to_string()]);
    assert!(outcome.log.failed_checks.iter().all(|c| c.resolved));
    assert!(outcome.log.quality_warnings.is_empty());
}

#[test]
fn regression_after_repair_adds_warning() {
    // Fixing the rationale introduces a negative tone on a high score.
    let repairer = |record: &EvaluationRecord, _: &CheckFailure| -> Result<EvaluationRecord, RepairError> {
        let mut fixed = record.clone();
        fixed.rationale = "Too many red flags to ignore.".to_string();
        Ok(fixed)
    };
    let mut record = make_record(80.0, 8.0);
    record.rationale = String::new();

    let outcome = run_verification(record, VerificationOptions::default().with_repairer(&repairer));

    assert_eq!(outcome.log.checks_failed, 1);
    assert_eq!(outcome.log.repairs_succeeded, 1);
    assert_eq!(outcome.log.quality_warnings.len(), 1);
    assert!(outcome.log.quality_warnings[0].starts_with("Regression after repair: "));
    assert!(outcome.log.quality_warnings[0].contains("tone"));
}

#[test]
fn regression_sweep_can_be_disabled() {
    let repairer = |record: &EvaluationRecord, _: &CheckFailure| -> Result<EvaluationRecord, RepairError> {
        let mut fixed = record.clone();
        fixed.rationale = "Too many red flags to ignore.".to_string();
        Ok(fixed)
    };
    let config = VerificationConfig {
        recheck_after_repair: false,
        ..VerificationConfig::default()
    };
    let mut record = make_record(80.0, 8.0);
    record.rationale = String::new();

    let outcome = VerificationEngine::new(config).run(record, None, Some(&repairer));
    assert!(outcome.log.quality_warnings.is_empty());
}

#[test]
fn contradicted_claim_without_repairer_warns() {
    let mut record = make_record(60.0, 6.0);
    record.rationale = "Targets a $45 billion market.".to_string();
    let grounding = GroundingSnapshot::new().with_value("market_size_usd", 12e9);

    let engine = VerificationEngine::default();
    let outcome = engine.verify(record, Some(&grounding), None);

    assert_eq!(outcome.log.checks_failed, 1);
    assert_eq!(outcome.log.failed_checks[0].check_id, "numeric_claims");
    assert!(outcome.log.quality_warnings[0].contains("Numeric claim accuracy (major)"));
}

#[test]
fn clean_record_passes_all_default_checks() {
    let outcome = run_verification(make_record(50.0, 5.0), VerificationOptions::default());
    assert_eq!(outcome.log.checks_run, 6);
    assert_eq!(outcome.log.checks_passed, 6);
    assert!(outcome.log.is_clean());
    assert!(!outcome.log.run_id.is_empty());
}

#[test]
fn custom_check_runs_after_defaults() {
    let engine = VerificationEngine::default().with_check(VerificationCheck::new(
        "has_recommendation",
        "Has recommendation",
        Severity::Minor,
        |r, _| {
            if r.recommendations.is_empty() {
                CheckOutcome::fail("no recommendations")
            } else {
                CheckOutcome::pass()
            }
        },
    ));
    let outcome = engine.run(make_record(50.0, 5.0), None, None);
    assert_eq!(outcome.log.checks_run, 7);
    assert_eq!(outcome.log.failed_checks[0].check_id, "has_recommendation");
}
