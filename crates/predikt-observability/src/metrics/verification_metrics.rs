//! Fatal rate, repair success rate, per-check failure counts.

use std::collections::HashMap;

use predikt_core::models::VerificationLogEntry;
use serde::{Deserialize, Serialize};

/// Running totals over verification log entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationMetrics {
    pub runs: u64,
    pub fatal_runs: u64,
    pub clean_runs: u64,
    pub checks_run: u64,
    pub checks_failed: u64,
    pub repairs_attempted: u64,
    pub repairs_succeeded: u64,
    /// Failures per check id.
    pub check_failures: HashMap<String, u64>,
    total_duration_ms: f64,
}

impl VerificationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one run into the totals.
    pub fn record(&mut self, entry: &VerificationLogEntry) {
        self.runs += 1;
        if entry.fatal_failure {
            self.fatal_runs += 1;
        }
        if entry.is_clean() {
            self.clean_runs += 1;
        }
        self.checks_run += u64::from(entry.checks_run);
        self.checks_failed += u64::from(entry.checks_failed);
        self.repairs_attempted += u64::from(entry.repairs_attempted);
        self.repairs_succeeded += u64::from(entry.repairs_succeeded);
        for failed in &entry.failed_checks {
            *self
                .check_failures
                .entry(failed.check_id.clone())
                .or_default() += 1;
        }
        self.total_duration_ms += entry.duration_ms;
    }

    /// Fraction of runs that ended in a fatal failure.
    pub fn fatal_rate(&self) -> f64 {
        ratio(self.fatal_runs, self.runs)
    }

    /// Fraction of repair attempts whose check passed afterwards.
    pub fn repair_success_rate(&self) -> f64 {
        ratio(self.repairs_succeeded, self.repairs_attempted)
    }

    /// Fraction of executed checks that failed.
    pub fn check_failure_rate(&self) -> f64 {
        ratio(self.checks_failed, self.checks_run)
    }

    pub fn avg_duration_ms(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_duration_ms / self.runs as f64
    }

    /// Check ids ordered by failure count, most frequent first.
    pub fn top_failing_checks(&self, limit: usize) -> Vec<(String, u64)> {
        let mut counts: Vec<(String, u64)> = self
            .check_failures
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(limit);
        counts
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
