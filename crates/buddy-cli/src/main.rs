//! CryptoBuddy terminal session
//!
//! Reads questions from stdin and answers on stdout until the user types
//! `exit` or input ends. Logs go to stderr, filtered by `RUST_LOG`.

use std::io;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buddy_core::Session;
use crypto_buddy::{build_router, session_config, CoinCatalog, SPEAKER};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let catalog = Arc::new(CoinCatalog::default_catalog());
    tracing::debug!(coins = ?catalog.ids(), "catalog loaded");

    let router = build_router(catalog);
    let mut session = Session::new(session_config());

    match session.run(&router, io::stdin().lock(), io::stdout().lock()) {
        Ok(summary) => {
            tracing::info!(turns = summary.turns, "goodbye");
            Ok(())
        }
        Err(e) => {
            tracing::error!(session = %session.id, error = %e, "session aborted");
            eprintln!("{}: {}", SPEAKER, e.user_message());
            Err(e.into())
        }
    }
}
