//! Metrics aggregated across verification runs.

pub mod verification_metrics;

pub use verification_metrics::VerificationMetrics;
