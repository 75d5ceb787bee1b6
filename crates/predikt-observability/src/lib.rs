//! # predikt-observability
//!
//! Structured tracing with one event function per key operation, and a
//! metrics collector aggregating verification log entries for operators.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::VerificationMetrics;
