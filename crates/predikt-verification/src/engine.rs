//! VerificationEngine: runs the check set over an evaluation record,
//! short-circuits on fatal failures, and drives a bounded repair loop.

use std::collections::HashSet;
use std::time::Instant;

use predikt_core::config::VerificationConfig;
use predikt_core::constants::{FATAL_WARNING_PREFIX, REGRESSION_WARNING_PREFIX};
use predikt_core::errors::RepairError;
use predikt_core::models::{
    CheckFailure, EvaluationRecord, FailedCheckRecord, GroundingSnapshot, VerificationOutcome,
};
use predikt_core::traits::{IRepairer, IVerifier};
use predikt_observability::tracing_setup::events;

use crate::checks::{default_checks, CheckContext, VerificationCheck};
use crate::grounding::GroundingPolicy;
use crate::log::{build_verification_log_entry, LogEntryParams};

/// Per-run inputs besides the record.
#[derive(Clone, Copy, Default)]
pub struct VerificationOptions<'a> {
    pub grounding: Option<&'a GroundingSnapshot>,
    pub repairer: Option<&'a dyn IRepairer>,
    /// Overrides the configured global repair budget for this run.
    pub max_repairs: Option<u32>,
}

impl<'a> VerificationOptions<'a> {
    pub fn with_grounding(mut self, grounding: &'a GroundingSnapshot) -> Self {
        self.grounding = Some(grounding);
        self
    }

    pub fn with_repairer(mut self, repairer: &'a dyn IRepairer) -> Self {
        self.repairer = Some(repairer);
        self
    }

    pub fn with_max_repairs(mut self, max_repairs: u32) -> Self {
        self.max_repairs = Some(max_repairs);
        self
    }
}

/// Verify a record with the default engine.
pub fn run_verification(record: EvaluationRecord, options: VerificationOptions<'_>) -> VerificationOutcome {
    VerificationEngine::default().run_with(record, options)
}

/// Ordered check set plus the configuration it runs under.
#[derive(Debug)]
pub struct VerificationEngine {
    config: VerificationConfig,
    policy: GroundingPolicy,
    checks: Vec<VerificationCheck>,
}

/// Mutable state of one failed check across the repair phase.
struct PendingFailure<'c> {
    check: &'c VerificationCheck,
    /// Latest detail reported by the check itself.
    detail: String,
    attempts: u32,
    succeeded: bool,
    /// The current record passes this check.
    resolved: bool,
    /// Repaired records accepted as the new current record.
    accepted: u32,
    repair_error: Option<String>,
}

impl PendingFailure<'_> {
    /// Re-run the check on `record`; refreshes the detail when it still fails.
    fn recheck(&mut self, record: &EvaluationRecord, ctx: &CheckContext<'_>) -> bool {
        let outcome = self.check.run(record, ctx);
        if outcome.passed {
            self.resolved = true;
        } else {
            self.detail = outcome.detail;
        }
        outcome.passed
    }
}

impl VerificationEngine {
    pub fn new(config: VerificationConfig) -> Self {
        let policy = GroundingPolicy::from_config(&config);
        Self {
            config,
            policy,
            checks: default_checks(),
        }
    }

    /// Replace the whole check set.
    pub fn with_checks(mut self, checks: Vec<VerificationCheck>) -> Self {
        self.checks = checks;
        self
    }

    /// Append a check after the current ones.
    pub fn with_check(mut self, check: VerificationCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn checks(&self) -> &[VerificationCheck] {
        &self.checks
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    pub fn run(
        &self,
        record: EvaluationRecord,
        grounding: Option<&GroundingSnapshot>,
        repairer: Option<&dyn IRepairer>,
    ) -> VerificationOutcome {
        self.run_with(
            record,
            VerificationOptions {
                grounding,
                repairer,
                max_repairs: None,
            },
        )
    }

    /// Run every check, then repair what may be repaired.
    ///
    /// Never fails. A fatal failure stops the run before any repair. Each
    /// repair attempt, successful or not, consumes one unit of the global
    /// budget and one of the failing check's own budget. Once the record has
    /// changed, a failed check is re-run before its turn, and checks that now
    /// pass are neither repaired nor reported.
    pub fn run_with(&self, record: EvaluationRecord, options: VerificationOptions<'_>) -> VerificationOutcome {
        let start = Instant::now();
        let ctx = CheckContext {
            grounding: options.grounding,
            config: &self.config,
            policy: &self.policy,
        };
        let budget = options.max_repairs.unwrap_or(self.config.max_repairs);

        let mut pending: Vec<PendingFailure<'_>> = self
            .checks
            .iter()
            .filter_map(|check| {
                let outcome = check.run(&record, &ctx);
                (!outcome.passed).then(|| PendingFailure {
                    check,
                    detail: outcome.detail,
                    attempts: 0,
                    succeeded: false,
                    resolved: false,
                    accepted: 0,
                    repair_error: None,
                })
            })
            .collect();
        let checks_failed = pending.len() as u32;

        let mut warnings = Vec::new();
        let fatal_failure = pending.iter().any(|p| p.check.is_fatal());
        let mut current = record;
        let mut repairs_used = 0u32;
        let mut record_changed = false;

        if fatal_failure {
            for p in pending.iter().filter(|p| p.check.is_fatal()) {
                events::fatal_verification_failure(&current.id, &p.check.id, &p.detail);
                warnings.push(format!("{FATAL_WARNING_PREFIX}: {}", p.detail));
            }
        } else if let Some(repairer) = options.repairer {
            for p in pending.iter_mut() {
                if record_changed && p.recheck(&current, &ctx) {
                    continue;
                }
                if !p.check.auto_repair || repairs_used >= budget {
                    continue;
                }
                current = self.repair_check(current, p, repairer, &ctx, budget, &mut repairs_used);
                record_changed |= p.accepted > 0;
            }
            // A later repair may have fixed a check whose own turn came earlier.
            if record_changed {
                for p in pending.iter_mut().filter(|p| !p.resolved) {
                    p.recheck(&current, &ctx);
                }
            }
        }

        for p in pending.iter().filter(|p| !p.resolved && !p.check.is_fatal()) {
            let mut warning = format!("{} ({}): {}", p.check.name, p.check.severity, p.detail);
            if let Some(err) = &p.repair_error {
                warning.push_str(&format!(" [repair failed: {err}]"));
            }
            warnings.push(warning);
        }

        if record_changed && self.config.recheck_after_repair {
            let unresolved: HashSet<&str> = pending
                .iter()
                .filter(|p| !p.resolved)
                .map(|p| p.check.id.as_str())
                .collect();
            warnings.extend(self.regressions(&current, &ctx, &unresolved));
        }

        let failed_checks = pending
            .iter()
            .map(|p| FailedCheckRecord {
                check_id: p.check.id.clone(),
                check_name: p.check.name.clone(),
                severity: p.check.severity,
                detail: p.detail.clone(),
                repair_attempts: p.attempts,
                repair_succeeded: p.succeeded,
                resolved: p.resolved,
                repair_error: p.repair_error.clone(),
            })
            .collect();

        let log = build_verification_log_entry(LogEntryParams {
            record_id: current.id.clone(),
            checks_run: self.checks.len() as u32,
            checks_failed,
            repairs_used,
            fatal_failure,
            quality_warnings: warnings,
            failed_checks,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        });

        events::verification_completed(
            &log.record_id,
            log.checks_run,
            log.checks_failed,
            log.repairs_attempted,
            log.duration_ms,
        );

        VerificationOutcome { record: current, log }
    }

    /// Repair one failing check until it passes or a budget runs out.
    fn repair_check(
        &self,
        mut current: EvaluationRecord,
        pending: &mut PendingFailure<'_>,
        repairer: &dyn IRepairer,
        ctx: &CheckContext<'_>,
        budget: u32,
        repairs_used: &mut u32,
    ) -> EvaluationRecord {
        let check = pending.check;
        while pending.attempts < check.max_repair_attempts && *repairs_used < budget {
            pending.attempts += 1;
            *repairs_used += 1;

            let failure = CheckFailure {
                check_id: check.id.clone(),
                check_name: check.name.clone(),
                severity: check.severity,
                detail: pending.detail.clone(),
                attempt: pending.attempts,
            };

            let candidate = match repairer
                .repair(&current, &failure)
                .and_then(|candidate| self.reject_fatal(&check.id, candidate, ctx))
            {
                Ok(candidate) => candidate,
                Err(err) => {
                    let message = err.to_string();
                    events::repair_attempted(&check.id, pending.attempts, false, Some(&message));
                    pending.repair_error = Some(message);
                    break;
                }
            };

            current = candidate;
            pending.accepted += 1;
            let outcome = check.run(&current, ctx);
            events::repair_attempted(&check.id, pending.attempts, outcome.passed, None);
            if outcome.passed {
                pending.succeeded = true;
                pending.resolved = true;
                break;
            }
            pending.detail = outcome.detail;
        }
        current
    }

    /// A repaired record must still pass every fatal check.
    fn reject_fatal(
        &self,
        check_id: &str,
        candidate: EvaluationRecord,
        ctx: &CheckContext<'_>,
    ) -> Result<EvaluationRecord, RepairError> {
        for fatal in self.checks.iter().filter(|c| c.is_fatal()) {
            let outcome = fatal.run(&candidate, ctx);
            if !outcome.passed {
                return Err(RepairError::InvalidOutput {
                    check_id: check_id.to_string(),
                    reason: format!("{} failed: {}", fatal.id, outcome.detail),
                });
            }
        }
        Ok(candidate)
    }

    /// Warnings for checks that fail on the final record but were not
    /// already reported as unresolved.
    fn regressions(
        &self,
        record: &EvaluationRecord,
        ctx: &CheckContext<'_>,
        unresolved: &HashSet<&str>,
    ) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| !unresolved.contains(c.id.as_str()))
            .filter_map(|c| {
                let outcome = c.run(record, ctx);
                (!outcome.passed)
                    .then(|| format!("{REGRESSION_WARNING_PREFIX}: {} ({}): {}", c.name, c.severity, outcome.detail))
            })
            .collect()
    }
}

impl Default for VerificationEngine {
    fn default() -> Self {
        Self::new(VerificationConfig::default())
    }
}

impl IVerifier for VerificationEngine {
    fn verify(
        &self,
        record: EvaluationRecord,
        grounding: Option<&GroundingSnapshot>,
        repairer: Option<&dyn IRepairer>,
    ) -> VerificationOutcome {
        self.run(record, grounding, repairer)
    }
}
