//! Sustainability Responder
//!
//! Recommends the coin with the highest sustainability score.

use std::sync::Arc;

use buddy_core::{Reply, Responder, Result as CoreResult};

use crate::intent::Intent;
use crate::model::CoinCatalog;
use crate::rules::most_sustainable;

pub struct SustainabilityResponder {
    catalog: Arc<CoinCatalog>,
}

impl SustainabilityResponder {
    pub fn new(catalog: Arc<CoinCatalog>) -> Self {
        Self { catalog }
    }
}

impl Responder for SustainabilityResponder {
    fn name(&self) -> &str {
        Intent::Sustainability.name()
    }

    fn respond(&self, _query: &str) -> CoreResult<Reply> {
        let best = most_sustainable(&self.catalog)?;
        Ok(Reply::say(format!(
            "I recommend {}! It has the highest sustainability score in our dataset.",
            best
        )))
    }
}
