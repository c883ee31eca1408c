//! # crypto-buddy
//!
//! CryptoBuddy: a rule-based chatbot that recommends cryptocurrencies from a
//! small in-memory catalog, weighing price trend against sustainability.
//!
//! ## Query Routing
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  "exit"                         → farewell, session ends    │
//! │  sustain | eco | environment    → most_sustainable          │
//! │  trend | trending | rising      → trending_coins            │
//! │  long-term | long term | growth → long_term_pick            │
//! │  help | examples | what can...  → help text                 │
//! │  anything else                  → "didn't understand"       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Routes are tried top to bottom; the first match answers.

pub mod svckit;
pub mod rules;
pub mod intent;
pub mod model;
pub mod error;

use std::sync::Arc;

use buddy_core::{IntentRouter, Responder, SessionConfig, StaticResponder};

pub use error::{AdvisorError, Result};
pub use intent::Intent;
pub use model::{CatalogEntry, CoinCatalog, CoinRecord, EnergyUse, MarketCap, PriceTrend};
pub use rules::{long_term_pick, most_sustainable, trending_coins, LONG_TERM_MIN_SCORE};

/// Re-export responders for custom routers
pub mod responders {
    pub use crate::svckit::{LongTermResponder, SustainabilityResponder, TrendingResponder};
}

pub const SPEAKER: &str = "CryptoBuddy";

pub const PROMPT: &str = "You: ";

pub const BANNER: &[&str] = &[
    "Hi! I'm CryptoBuddy - your AI-powered financial sidekick!",
    "Ask me about crypto trends, sustainability, or what to invest in.",
    "Try: 'Which crypto is sustainable?', 'Which are trending?', 'Long-term growth?'",
    "",
    "Type 'exit' to quit.",
    "",
];

pub const HELP_TEXT: &str = "I can tell you which coins are sustainable, which are trending, or recommend for long-term growth.
Try asking: 'Which crypto is sustainable?', 'Which coins are trending?', or 'What should I buy for long-term growth?'";

pub const FALLBACK_TEXT: &str =
    "I didn't understand that. Try asking about 'sustainability', 'trending', or 'long-term growth'.";

pub const FAREWELL_TEXT: &str = "Goodbye! Remember, crypto is risky. Do your own research!";

/// Session presentation for CryptoBuddy
pub fn session_config() -> SessionConfig {
    SessionConfig {
        speaker: SPEAKER.into(),
        prompt: PROMPT.into(),
        greeting: BANNER.iter().map(|line| (*line).to_string()).collect(),
    }
}

/// Build the router with every intent registered in priority order
pub fn build_router(catalog: Arc<CoinCatalog>) -> IntentRouter {
    let mut router = IntentRouter::new();

    for intent in Intent::PRIORITY {
        let Some(matcher) = intent.matcher() else {
            continue;
        };
        router.register_boxed(matcher, responder_for(intent, &catalog));
    }
    router.set_fallback_boxed(responder_for(Intent::Fallback, &catalog));

    tracing::debug!(routes = ?router.names(), coins = catalog.len(), "router ready");
    router
}

fn responder_for(intent: Intent, catalog: &Arc<CoinCatalog>) -> Arc<dyn Responder> {
    match intent {
        Intent::Exit => Arc::new(StaticResponder::farewell(intent.name(), FAREWELL_TEXT)),
        Intent::Sustainability => Arc::new(svckit::SustainabilityResponder::new(catalog.clone())),
        Intent::Trending => Arc::new(svckit::TrendingResponder::new(catalog.clone())),
        Intent::LongTerm => Arc::new(svckit::LongTermResponder::new(catalog.clone())),
        Intent::Help => Arc::new(StaticResponder::new(intent.name(), HELP_TEXT)),
        Intent::Fallback => Arc::new(StaticResponder::new(intent.name(), FALLBACK_TEXT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buddy_core::{normalize, BuddyError, Session, Termination};
    use std::io::Cursor;

    fn router() -> IntentRouter {
        build_router(Arc::new(CoinCatalog::default_catalog()))
    }

    fn ask(line: &str) -> String {
        let (_, reply) = router().dispatch(&normalize(line)).unwrap();
        reply.text
    }

    #[test]
    fn test_router_priority_order() {
        let router = router();
        assert_eq!(
            router.names(),
            vec!["exit", "sustainability", "trending", "long_term", "help"]
        );
        assert!(router.has_fallback());
    }

    #[test]
    fn test_router_agrees_with_classify() {
        let router = router();
        for line in ["Which crypto is sustainable?", "rising stars", "GROWTH", "examples", "banana", "exit", " eXiT "] {
            let (route, _) = router.dispatch(&normalize(line)).unwrap();
            assert_eq!(route, Intent::classify(line).name(), "line: {:?}", line);
        }
    }

    #[test]
    fn test_scenario_sustainable() {
        assert!(ask("Which crypto is sustainable?").contains("Cardano"));
    }

    #[test]
    fn test_scenario_trending() {
        assert!(ask("Which are trending?").ends_with("Bitcoin, Cardano"));
    }

    #[test]
    fn test_scenario_long_term() {
        assert!(ask("Long-term growth?").contains("consider Cardano"));
    }

    #[test]
    fn test_scenario_help() {
        let text = ask("help");
        assert_eq!(text, HELP_TEXT);
        for category in ["sustainable", "trending", "long-term growth"] {
            assert!(text.contains(category));
        }
    }

    #[test]
    fn test_scenario_unknown() {
        assert_eq!(ask("banana"), FALLBACK_TEXT);
    }

    #[test]
    fn test_scenario_exit() {
        let (route, reply) = router().dispatch(&normalize("exit")).unwrap();
        assert_eq!(route, "exit");
        assert_eq!(reply.text, FAREWELL_TEXT);
        assert!(reply.ends_session);
    }

    #[test]
    fn test_full_session() {
        let router = router();
        let mut session = Session::new(session_config());
        let mut out = Vec::new();
        let input = "Which crypto is sustainable?\nWhich are trending?\nbanana\nexit\nhelp\n";

        let summary = session.run(&router, Cursor::new(input), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(BANNER[0]));
        assert!(text.contains("You: CryptoBuddy: I recommend Cardano!"));
        assert!(text.contains("CryptoBuddy: These are trending right now: Bitcoin, Cardano\n"));
        assert!(text.ends_with(&format!("CryptoBuddy: {}\n", FAREWELL_TEXT)));
        assert_eq!(summary.turns, 4);
        assert_eq!(summary.termination, Termination::Command);
    }

    #[test]
    fn test_empty_catalog_aborts_session() {
        let router = build_router(Arc::new(CoinCatalog::builder().build().unwrap()));
        let mut session = Session::new(session_config());
        let mut out = Vec::new();

        let result = session.run(&router, Cursor::new("help
Which crypto is eco friendly?
exit
"), &mut out);

        assert!(matches!(result, Err(BuddyError::Responder(msg)) if msg.contains("Catalog is empty")));
        assert_eq!(session.turns(), 1);
        assert!(session.is_running());
    }

    #[test]
    fn test_long_term_fallback_through_router() {
        let catalog = CoinCatalog::builder()
            .coin("Bitcoin", CoinRecord::new(PriceTrend::Rising, MarketCap::High, EnergyUse::High, 0.3))
            .coin("Ethereum", CoinRecord::new(PriceTrend::Stable, MarketCap::High, EnergyUse::Medium, 0.6))
            .build()
            .unwrap();
        let router = build_router(Arc::new(catalog));

        let (route, reply) = router.dispatch(&normalize("Long-term growth?")).unwrap();
        assert_eq!(route, "long_term");
        assert_eq!(
            reply.text,
            "I don't see a perfect long-term pick right now. Ethereum looks promising but consider more research."
        );
        assert!(!reply.ends_session);
    }
}
