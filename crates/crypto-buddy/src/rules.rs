//! Rule Engine
//!
//! Pure queries over a `CoinCatalog`. Every function scans the catalog in
//! catalog order, so results are deterministic for a given catalog.

use crate::error::{AdvisorError, Result};
use crate::model::CoinCatalog;

/// Minimum sustainability score (exclusive) for a long-term pick
pub const LONG_TERM_MIN_SCORE: f64 = 0.7;

/// Coin with the highest sustainability score.
///
/// Ties go to the coin that appears first in the catalog.
pub fn most_sustainable(catalog: &CoinCatalog) -> Result<&str> {
    let mut best: Option<(&str, f64)> = None;

    for (id, record) in catalog.iter() {
        match best {
            Some((_, score)) if record.sustainability_score <= score => {}
            _ => best = Some((id, record.sustainability_score)),
        }
    }

    best.map(|(id, _)| id).ok_or(AdvisorError::EmptyCatalog)
}

/// Coins whose price is rising, in catalog order
pub fn trending_coins(catalog: &CoinCatalog) -> Vec<&str> {
    catalog
        .iter()
        .filter(|(_, record)| record.is_rising())
        .map(|(id, _)| id)
        .collect()
}

/// First rising coin scoring strictly above `LONG_TERM_MIN_SCORE`
pub fn long_term_pick(catalog: &CoinCatalog) -> Option<&str> {
    catalog
        .iter()
        .find(|(_, record)| record.is_rising() && record.sustainability_score > LONG_TERM_MIN_SCORE)
        .map(|(id, _)| id)
}
