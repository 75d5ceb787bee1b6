/// Prediction market ledger errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarketError {
    #[error("market {market_id} has already been resolved")]
    MarketAlreadyResolved { market_id: String },

    #[error("market {market_id} has expired")]
    MarketExpired { market_id: String },

    #[error("market {market_id} is not resolved yet")]
    MarketNotResolved { market_id: String },

    #[error("market not found: {market_id}")]
    MarketNotFound { market_id: String },

    #[error("market already exists: {market_id}")]
    DuplicateMarket { market_id: String },

    #[error("{caller} is not the authority of market {market_id}")]
    Unauthorized { market_id: String, caller: String },

    #[error("invalid amount: {amount}")]
    InvalidAmount { amount: u64 },

    #[error("{field} exceeds {max} characters (got {len})")]
    FieldTooLong { field: String, max: usize, len: usize },

    #[error("end time must be after creation time for market {market_id}")]
    InvalidEndTime { market_id: String },

    #[error("stake totals overflowed on market {market_id}")]
    AmountOverflow { market_id: String },
}
