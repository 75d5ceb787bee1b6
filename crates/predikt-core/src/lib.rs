//! # predikt-core
//!
//! Foundation crate for the Predikt scoring and verification core.
//! Defines all shared models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PrediktConfig;
pub use errors::{PrediktError, PrediktResult};
pub use models::{EvaluationRecord, GroundingSnapshot, Severity, SubScores, VerificationLogEntry};
