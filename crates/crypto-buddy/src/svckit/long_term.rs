//! Long-Term Responder
//!
//! Recommends a rising coin with strong sustainability for long-term growth.
//! When nothing qualifies, the reply points at the catalog's most
//! sustainable coin instead of a fixed name.

use std::sync::Arc;

use buddy_core::{Reply, Responder, Result as CoreResult};

use crate::intent::Intent;
use crate::model::CoinCatalog;
use crate::rules::{long_term_pick, most_sustainable};

const NO_PICK: &str = "I don't see a perfect long-term pick right now.";

pub struct LongTermResponder {
    catalog: Arc<CoinCatalog>,
}

impl LongTermResponder {
    pub fn new(catalog: Arc<CoinCatalog>) -> Self {
        Self { catalog }
    }
}

impl Responder for LongTermResponder {
    fn name(&self) -> &str {
        Intent::LongTerm.name()
    }

    fn respond(&self, _query: &str) -> CoreResult<Reply> {
        if let Some(pick) = long_term_pick(&self.catalog) {
            return Ok(Reply::say(format!(
                "For long-term growth, consider {}. It is rising and has strong sustainability.",
                pick
            )));
        }

        tracing::warn!(coins = self.catalog.len(), "no coin meets the long-term criteria");

        let text = match most_sustainable(&self.catalog) {
            Ok(alternative) => format!(
                "{} {} looks promising but consider more research.",
                NO_PICK, alternative
            ),
            Err(_) => format!("{} Consider more research.", NO_PICK),
        };
        Ok(Reply::say(text))
    }
}
