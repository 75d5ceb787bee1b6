//! Error handling for Predikt.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod grounding_error;
pub mod market_error;
pub mod repair_error;

pub use config_error::ConfigError;
pub use grounding_error::GroundingError;
pub use market_error::MarketError;
pub use repair_error::RepairError;

/// Umbrella error for callers that mix subsystems.
#[derive(Debug, thiserror::Error)]
pub enum PrediktError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grounding(#[from] GroundingError),

    #[error(transparent)]
    Market(#[from] MarketError),

    #[error(transparent)]
    Repair(#[from] RepairError),
}

pub type PrediktResult<T> = Result<T, PrediktError>;
