//! Parimutuel settlement of a resolved market.

use predikt_core::errors::MarketError;
use predikt_core::models::{Position, PredictionMarket, Settlement};

/// Settle every position of a resolved market.
///
/// Winners split the whole pool in proportion to their stake (rounded
/// down). If nobody backed the winning side, every stake is refunded.
pub fn settle_market<'p, I>(market: &PredictionMarket, positions: I) -> Result<Vec<Settlement>, MarketError>
where
    I: IntoIterator<Item = &'p Position>,
{
    let Some(outcome) = market.outcome.filter(|_| market.is_resolved) else {
        return Err(MarketError::MarketNotResolved {
            market_id: market.id.clone(),
        });
    };

    let pool = market.pool();
    let winning_total = u128::from(market.total_for(outcome));

    let settlements = positions
        .into_iter()
        .filter(|p| p.market_id == market.id)
        .map(|p| {
            let payout = if winning_total == 0 {
                p.amount
            } else if p.side == outcome {
                // The pool fits in u64, so the product fits in u128 and the
                // quotient (at most the pool) fits back in u64.
                u64::try_from(u128::from(p.amount) * pool / winning_total).unwrap_or(u64::MAX)
            } else {
                0
            };
            Settlement {
                market_id: market.id.clone(),
                user: p.user.clone(),
                side: p.side,
                stake: p.amount,
                payout,
                return_pct: return_of(p.amount, payout),
            }
        })
        .collect();
    Ok(settlements)
}

/// `payout / stake - 1`; a zero stake has no return.
pub(crate) fn return_of(stake: u64, payout: u64) -> f64 {
    if stake == 0 {
        return 0.0;
    }
    payout as f64 / stake as f64 - 1.0
}
