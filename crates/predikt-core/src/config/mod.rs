//! Configuration system for Predikt.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod defaults;
pub mod grounding_config;
pub mod observability_config;
pub mod predikt_config;
pub mod stats_config;
pub mod verification_config;

pub use grounding_config::GroundingConfig;
pub use observability_config::ObservabilityConfig;
pub use predikt_config::PrediktConfig;
pub use stats_config::StatsConfig;
pub use verification_config::VerificationConfig;
