//! Construction of the per-run verification log entry.

use chrono::Utc;
use predikt_core::models::{FailedCheckRecord, VerificationLogEntry};
use uuid::Uuid;

/// Raw counters collected during one verification run.
#[derive(Debug, Clone, Default)]
pub struct LogEntryParams {
    pub record_id: String,
    pub checks_run: u32,
    pub checks_failed: u32,
    /// Global repair budget consumed, one unit per attempt.
    pub repairs_used: u32,
    pub fatal_failure: bool,
    pub quality_warnings: Vec<String>,
    pub failed_checks: Vec<FailedCheckRecord>,
    pub duration_ms: f64,
}

/// Build the immutable log entry for a run.
///
/// `checks_failed` is clamped to `checks_run` so the passed/failed split
/// always adds up. A fatal run reports zero repair attempts.
pub fn build_verification_log_entry(params: LogEntryParams) -> VerificationLogEntry {
    let checks_failed = params.checks_failed.min(params.checks_run);
    let repairs_attempted = if params.fatal_failure { 0 } else { params.repairs_used };
    let repairs_succeeded = (params
        .failed_checks
        .iter()
        .filter(|c| c.repair_succeeded)
        .count() as u32)
        .min(repairs_attempted);

    VerificationLogEntry {
        run_id: Uuid::new_v4().to_string(),
        record_id: params.record_id,
        checks_run: params.checks_run,
        checks_passed: params.checks_run - checks_failed,
        checks_failed,
        repairs_attempted,
        repairs_succeeded,
        fatal_failure: params.fatal_failure,
        quality_warnings: params.quality_warnings,
        failed_checks: params.failed_checks,
        duration_ms: round_to_hundredths(params.duration_ms),
        timestamp: Utc::now(),
    }
}

fn round_to_hundredths(ms: f64) -> f64 {
    if !ms.is_finite() || ms < 0.0 {
        return 0.0;
    }
    (ms * 100.0).round() / 100.0
}
