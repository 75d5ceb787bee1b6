//! # predikt-market
//!
//! In-memory ledger of binary prediction markets. Markets are created by an
//! authority, accept stakes on either side until their end time, and are
//! resolved once. Resolved markets settle parimutuel-style, and each user's
//! settled returns become the samples the creator score is computed from.

pub mod book;
pub mod settlement;

pub use book::MarketBook;
pub use settlement::settle_market;
