use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// How serious a failed verification check is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Invalidates the whole record. Halts all repair attempts.
    Fatal,
    /// Eligible for bounded auto-repair.
    Major,
    /// Eligible for bounded auto-repair; cosmetic if left unrepaired.
    Minor,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fatal => "fatal",
            Self::Major => "major",
            Self::Minor => "minor",
        };
        f.write_str(s)
    }
}

/// Pass/fail verdict of a single check predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            detail: String::new(),
        }
    }

    pub fn fail(detail: impl Into<String>) -> Self {
        Self {
            passed: false,
            detail: detail.into(),
        }
    }
}

/// The failure handed to a repair function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckFailure {
    pub check_id: String,
    pub check_name: String,
    pub severity: Severity,
    pub detail: String,
    /// 1-based attempt number for this check within the current run.
    pub attempt: u32,
}
