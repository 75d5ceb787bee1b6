use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Side of a binary prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Yes,
    No,
}

impl From<bool> for Side {
    fn from(prediction: bool) -> Self {
        if prediction {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("yes"),
            Self::No => f.write_str("no"),
        }
    }
}

/// Parameters for creating a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarketSpec {
    pub id: String,
    pub description: String,
    /// Trading pair the market is about, used to group creator returns.
    pub pair: String,
    pub end_time: DateTime<Utc>,
}

/// A binary prediction market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionMarket {
    pub id: String,
    pub description: String,
    pub pair: String,
    pub end_time: DateTime<Utc>,
    pub authority: String,
    pub is_resolved: bool,
    pub outcome: Option<Side>,
    pub total_yes_amount: u64,
    pub total_no_amount: u64,
}

impl PredictionMarket {
    pub fn total_for(&self, side: Side) -> u64 {
        match side {
            Side::Yes => self.total_yes_amount,
            Side::No => self.total_no_amount,
        }
    }

    pub fn pool(&self) -> u128 {
        self.total_yes_amount as u128 + self.total_no_amount as u128
    }
}

/// A single stake placed on a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Position {
    pub market_id: String,
    pub user: String,
    pub side: Side,
    pub amount: u64,
}

/// Parimutuel payout of one position on a resolved market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Settlement {
    pub market_id: String,
    pub user: String,
    pub side: Side,
    pub stake: u64,
    pub payout: u64,
    /// `payout / stake - 1`.
    pub return_pct: f64,
}
