//! MarketBook: markets keyed by id plus every position placed on them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use predikt_core::constants::{MAX_MARKET_DESCRIPTION_LEN, MAX_MARKET_ID_LEN};
use predikt_core::errors::MarketError;
use predikt_core::models::{CreatorSamples, MarketSpec, Position, PredictionMarket, Settlement, Side};
use predikt_observability::tracing_setup::events;

use crate::settlement::{return_of, settle_market};

/// In-memory prediction market ledger.
#[derive(Debug, Clone, Default)]
pub struct MarketBook {
    markets: BTreeMap<String, PredictionMarket>,
    positions: Vec<Position>,
}

impl MarketBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a market owned by `authority`.
    pub fn create_market(
        &mut self,
        spec: MarketSpec,
        authority: &str,
        now: DateTime<Utc>,
    ) -> Result<&PredictionMarket, MarketError> {
        check_len("id", &spec.id, MAX_MARKET_ID_LEN)?;
        check_len("description", &spec.description, MAX_MARKET_DESCRIPTION_LEN)?;
        if spec.end_time <= now {
            return Err(MarketError::InvalidEndTime { market_id: spec.id });
        }
        if self.markets.contains_key(&spec.id) {
            return Err(MarketError::DuplicateMarket { market_id: spec.id });
        }

        events::market_created(&spec.id, &spec.pair);
        let market = PredictionMarket {
            id: spec.id.clone(),
            description: spec.description,
            pair: spec.pair,
            end_time: spec.end_time,
            authority: authority.to_string(),
            is_resolved: false,
            outcome: None,
            total_yes_amount: 0,
            total_no_amount: 0,
        };
        Ok(self.markets.entry(spec.id).or_insert(market))
    }

    /// Stake `amount` on `side`.
    ///
    /// Stakes are accepted up to and including the end time.
    pub fn place_prediction(
        &mut self,
        market_id: &str,
        user: &str,
        amount: u64,
        side: Side,
        now: DateTime<Utc>,
    ) -> Result<(), MarketError> {
        let market = self.market_mut(market_id)?;
        if market.is_resolved {
            return Err(MarketError::MarketAlreadyResolved {
                market_id: market_id.to_string(),
            });
        }
        if now > market.end_time {
            return Err(MarketError::MarketExpired {
                market_id: market_id.to_string(),
            });
        }
        if amount == 0 {
            return Err(MarketError::InvalidAmount { amount });
        }

        let overflow = || MarketError::AmountOverflow {
            market_id: market_id.to_string(),
        };
        // The whole pool must fit in u64 for settlement arithmetic.
        market
            .total_yes_amount
            .checked_add(market.total_no_amount)
            .and_then(|pool| pool.checked_add(amount))
            .ok_or_else(overflow)?;
        let total = match side {
            Side::Yes => &mut market.total_yes_amount,
            Side::No => &mut market.total_no_amount,
        };
        *total = total.checked_add(amount).ok_or_else(overflow)?;

        events::prediction_placed(market_id, user, &side.to_string(), amount);
        self.positions.push(Position {
            market_id: market_id.to_string(),
            user: user.to_string(),
            side,
            amount,
        });
        Ok(())
    }

    /// Resolve a market. Only its authority may do so, and only once.
    pub fn resolve_market(
        &mut self,
        market_id: &str,
        authority: &str,
        outcome: Side,
    ) -> Result<&PredictionMarket, MarketError> {
        let market = self.market_mut(market_id)?;
        if market.authority != authority {
            return Err(MarketError::Unauthorized {
                market_id: market_id.to_string(),
                caller: authority.to_string(),
            });
        }
        if market.is_resolved {
            return Err(MarketError::MarketAlreadyResolved {
                market_id: market_id.to_string(),
            });
        }

        market.is_resolved = true;
        market.outcome = Some(outcome);
        events::market_resolved(market_id, &outcome.to_string());
        Ok(market)
    }

    pub fn market(&self, market_id: &str) -> Option<&PredictionMarket> {
        self.markets.get(market_id)
    }

    pub fn markets(&self) -> impl Iterator<Item = &PredictionMarket> {
        self.markets.values()
    }

    pub fn positions<'a>(&'a self, market_id: &'a str) -> impl Iterator<Item = &'a Position> + 'a {
        self.positions.iter().filter(move |p| p.market_id == market_id)
    }

    pub fn settle(&self, market_id: &str) -> Result<Vec<Settlement>, MarketError> {
        let market = self.market(market_id).ok_or_else(|| MarketError::MarketNotFound {
            market_id: market_id.to_string(),
        })?;
        settle_market(market, self.positions(market_id))
    }

    /// One `(pair, return)` sample per resolved market `user` staked on.
    ///
    /// Several positions on the same market are netted into one return.
    pub fn creator_returns(&self, user: &str) -> CreatorSamples {
        let mut samples = CreatorSamples::new(user);
        for market in self.markets.values().filter(|m| m.is_resolved) {
            let Ok(settlements) = self.settle(&market.id) else {
                continue;
            };
            let (stake, payout) = settlements
                .iter()
                .filter(|s| s.user == user)
                .fold((0u64, 0u64), |(stake, payout), s| {
                    (stake.saturating_add(s.stake), payout.saturating_add(s.payout))
                });
            if stake > 0 {
                samples.push(market.pair.clone(), return_of(stake, payout));
            }
        }
        samples
    }

    /// Return samples for every user with at least one position.
    pub fn all_creator_samples(&self) -> Vec<CreatorSamples> {
        let mut users: Vec<&str> = self.positions.iter().map(|p| p.user.as_str()).collect();
        users.sort_unstable();
        users.dedup();
        users.into_iter().map(|u| self.creator_returns(u)).collect()
    }

    fn market_mut(&mut self, market_id: &str) -> Result<&mut PredictionMarket, MarketError> {
        self.markets
            .get_mut(market_id)
            .ok_or_else(|| MarketError::MarketNotFound {
                market_id: market_id.to_string(),
            })
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), MarketError> {
    let len = value.chars().count();
    if len > max {
        return Err(MarketError::FieldTooLong {
            field: field.to_string(),
            max,
            len,
        });
    }
    Ok(())
}
