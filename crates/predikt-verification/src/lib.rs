//! # predikt-verification
//!
//! Automated checking of AI-generated evaluation records.
//!
//! ## Pipeline
//! 1. **Claims**: numeric claims (currency, percentage, count) pulled from
//!    free text as a restartable lazy sequence.
//! 2. **Grounding**: each claim mapped to a grounding field and flagged as
//!    supported, contradicted, or unverifiable.
//! 3. **Checks**: severity-tagged rules over the record.
//! 4. **Engine**: runs the checks, short-circuits on fatal failures, and
//!    drives a caller-supplied repair function under a global and a
//!    per-check budget.
//! 5. **Log**: one immutable summary entry per run.

pub mod checks;
pub mod claims;
pub mod engine;
pub mod grounding;
pub mod log;

pub use checks::{default_checks, CheckContext, VerificationCheck};
pub use claims::{extract_numerical_claims, ClaimSequence};
pub use engine::{run_verification, VerificationEngine, VerificationOptions};
pub use grounding::{verify_claims_against_grounding, GroundingCache, GroundingPolicy};
pub use log::{build_verification_log_entry, LogEntryParams};
