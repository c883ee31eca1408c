//! Trending Responder
//!
//! Lists every coin whose price is rising.

use std::sync::Arc;

use buddy_core::{Reply, Responder, Result as CoreResult};

use crate::intent::Intent;
use crate::model::CoinCatalog;
use crate::rules::trending_coins;

pub struct TrendingResponder {
    catalog: Arc<CoinCatalog>,
}

impl TrendingResponder {
    pub fn new(catalog: Arc<CoinCatalog>) -> Self {
        Self { catalog }
    }
}

impl Responder for TrendingResponder {
    fn name(&self) -> &str {
        Intent::Trending.name()
    }

    fn respond(&self, _query: &str) -> CoreResult<Reply> {
        let trending = trending_coins(&self.catalog);
        if trending.is_empty() {
            return Ok(Reply::say("No coins are trending up in our dataset."));
        }
        Ok(Reply::say(format!(
            "These are trending right now: {}",
            trending.join(", ")
        )))
    }
}
