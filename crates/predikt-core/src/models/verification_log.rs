use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::check::Severity;
use super::evaluation::EvaluationRecord;

/// One check that failed during a verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FailedCheckRecord {
    pub check_id: String,
    pub check_name: String,
    pub severity: Severity,
    /// What the check itself reported on its most recent failing run.
    pub detail: String,
    pub repair_attempts: u32,
    /// A repair of this check made it pass.
    pub repair_succeeded: bool,
    /// The final record passes this check, whether through its own repair
    /// or as a side effect of repairing another check.
    #[serde(default)]
    pub resolved: bool,
    /// Error returned by the last failed repair attempt, if any.
    #[serde(default)]
    pub repair_error: Option<String>,
}

/// Summary of a single verification run. Created once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VerificationLogEntry {
    pub run_id: String,
    pub record_id: String,
    pub checks_run: u32,
    pub checks_passed: u32,
    pub checks_failed: u32,
    pub repairs_attempted: u32,
    pub repairs_succeeded: u32,
    pub fatal_failure: bool,
    pub quality_warnings: Vec<String>,
    pub failed_checks: Vec<FailedCheckRecord>,
    /// Wall-clock duration, rounded to 2 decimal places.
    pub duration_ms: f64,
    /// Serialized as ISO-8601.
    pub timestamp: DateTime<Utc>,
}

impl VerificationLogEntry {
    /// No fatal failure and every failed check resolved on the final record.
    pub fn is_clean(&self) -> bool {
        !self.fatal_failure && self.failed_checks.iter().all(|c| c.resolved)
    }
}

/// Final record plus the log entry describing how it got there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub record: EvaluationRecord,
    pub log: VerificationLogEntry,
}
