//! Verification check registry.
//!
//! A check is a named predicate over an evaluation record tagged with a
//! severity and repair metadata. The default set covers score ranges,
//! internal consistency, numeric claims, and required text.

pub mod completeness;
pub mod consistency;
pub mod numeric_claims;
pub mod score_range;

use std::fmt;

use predikt_core::config::VerificationConfig;
use predikt_core::models::{CheckOutcome, EvaluationRecord, GroundingSnapshot, Severity};

use crate::grounding::GroundingPolicy;

/// Everything a predicate may consult besides the record itself.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub grounding: Option<&'a GroundingSnapshot>,
    pub config: &'a VerificationConfig,
    pub policy: &'a GroundingPolicy,
}

/// Signature shared by all check predicates.
pub type CheckFn = dyn Fn(&EvaluationRecord, &CheckContext<'_>) -> CheckOutcome + Send + Sync;

/// A single verification rule.
pub struct VerificationCheck {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    /// Whether the engine may hand failures of this check to the repairer.
    pub auto_repair: bool,
    /// Per-check cap on repair attempts within one run.
    pub max_repair_attempts: u32,
    predicate: Box<CheckFn>,
}

impl VerificationCheck {
    /// A non-repairable check.
    pub fn new<F>(id: &str, name: &str, severity: Severity, predicate: F) -> Self
    where
        F: Fn(&EvaluationRecord, &CheckContext<'_>) -> CheckOutcome + Send + Sync + 'static,
    {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            severity,
            auto_repair: false,
            max_repair_attempts: 0,
            predicate: Box::new(predicate),
        }
    }

    /// Allow up to `max_attempts` repairs of this check per run.
    pub fn repairable(mut self, max_attempts: u32) -> Self {
        self.auto_repair = max_attempts > 0;
        self.max_repair_attempts = max_attempts;
        self
    }

    pub fn run(&self, record: &EvaluationRecord, ctx: &CheckContext<'_>) -> CheckOutcome {
        (self.predicate)(record, ctx)
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Debug for VerificationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationCheck")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("auto_repair", &self.auto_repair)
            .field("max_repair_attempts", &self.max_repair_attempts)
            .finish_non_exhaustive()
    }
}

/// The default check set, in execution order.
pub fn default_checks() -> Vec<VerificationCheck> {
    vec![
        VerificationCheck::new(
            score_range::ID,
            "Score range validity",
            Severity::Fatal,
            score_range::check,
        ),
        VerificationCheck::new(
            consistency::SCORE_ID,
            "Score consistency",
            Severity::Major,
            consistency::check_scores,
        )
        .repairable(2),
        VerificationCheck::new(
            consistency::TONE_ID,
            "Recommendation tone consistency",
            Severity::Major,
            consistency::check_tone,
        )
        .repairable(2),
        VerificationCheck::new(
            numeric_claims::ID,
            "Numeric claim accuracy",
            Severity::Major,
            numeric_claims::check,
        )
        .repairable(2),
        VerificationCheck::new(
            completeness::RATIONALE_ID,
            "Rationale present",
            Severity::Minor,
            completeness::check_rationale,
        )
        .repairable(1),
        VerificationCheck::new(
            completeness::RISKS_ID,
            "Risks listed",
            Severity::Minor,
            completeness::check_risks,
        )
        .repairable(1),
    ]
}
