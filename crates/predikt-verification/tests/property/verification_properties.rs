//! Property tests for the verify-and-repair loop counters.

use proptest::prelude::*;

use predikt_core::errors::RepairError;
use predikt_core::models::{CheckFailure, CheckOutcome, EvaluationRecord, Severity, SubScores};
use predikt_verification::{VerificationCheck, VerificationEngine, VerificationOptions};

fn make_record(overall: f64, sub: f64, rationale: &str) -> EvaluationRecord {
    EvaluationRecord {
        id: "prop".to_string(),
        overall_score: overall,
        sub_scores: SubScores {
            technical_feasibility: sub,
            tokenomics_design: sub,
            market_fit: sub,
            execution_risk: sub,
        },
        rationale: rationale.to_string(),
        risks: vec!["risk".to_string()],
        recommendations: vec![],
    }
}

proptest! {
    #[test]
    fn prop_counters_are_consistent(
        overall in -20.0f64..120.0,
        sub in -2.0f64..12.0,
        rationale in prop::sample::select(vec!["", "Solid team.", "Several red flags.", "An excellent design."]),
        extra_attempts in prop::collection::vec(0u32..4, 0..4),
        max_repairs in 0u32..6,
        repair_fails in any::<bool>(),
    ) {
        let mut engine = VerificationEngine::default();
        for (i, attempts) in extra_attempts.iter().enumerate() {
            engine = engine.with_check(
                VerificationCheck::new(&format!("extra_{i}"), "Extra", Severity::Minor, |_, _| {
                    CheckOutcome::fail("always")
                })
                .repairable(*attempts),
            );
        }
        let repairer = move |record: &EvaluationRecord, failure: &CheckFailure| -> Result<EvaluationRecord, RepairError> {
            if repair_fails {
                return Err(RepairError::RepairFailed {
                    check_id: failure.check_id.clone(),
                    reason: "flaky".to_string(),
                });
            }
            let mut fixed = record.clone();
            fixed.overall_score = fixed.implied_overall();
            fixed.rationale = "Revised.".to_string();
            Ok(fixed)
        };

        let outcome = engine.run_with(
            make_record(overall, sub, rationale),
            VerificationOptions::default()
                .with_repairer(&repairer)
                .with_max_repairs(max_repairs),
        );
        let log = &outcome.log;

        prop_assert_eq!(log.checks_passed + log.checks_failed, log.checks_run);
        prop_assert!(log.repairs_succeeded <= log.repairs_attempted);
        prop_assert!(log.repairs_attempted <= max_repairs);
        prop_assert_eq!(log.failed_checks.len() as u32, log.checks_failed);
        if log.fatal_failure {
            prop_assert_eq!(log.repairs_attempted, 0);
            prop_assert!(log.quality_warnings.iter().any(|w| w.starts_with("Fatal verification failure")));
        }
        if repair_fails {
            prop_assert_eq!(log.repairs_succeeded, 0);
        }
        let per_check: u32 = log.failed_checks.iter().map(|c| c.repair_attempts).sum();
        prop_assert_eq!(per_check, log.repairs_attempted);
    }

    #[test]
    fn prop_record_untouched_without_repairer(
        overall in -20.0f64..120.0,
        sub in -2.0f64..12.0,
    ) {
        let record = make_record(overall, sub, "Solid team.");
        let outcome = VerificationEngine::default().run(record.clone(), None, None);
        prop_assert_eq!(outcome.record, record);
        prop_assert_eq!(outcome.log.repairs_attempted, 0);
    }
}
