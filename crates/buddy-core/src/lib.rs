//! # buddy-core
//!
//! Domain-agnostic machinery for small keyword-driven chatbots.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Session                               │
//! │  ┌─────────────┐  ┌──────────────────┐  ┌────────────────┐  │
//! │  │  Turn Loop  │──│   IntentRouter   │──│   Responder    │  │
//! │  │ (read/write)│  │ (ordered routes) │  │   (Strategy)   │  │
//! │  └─────────────┘  └──────────────────┘  └────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Routes are evaluated in registration order and the first matching
//! `KeywordMatcher` wins. Domain crates supply the `Responder`s.

pub mod intent;
pub mod error;
pub mod session;

pub use error::{BuddyError, Result};
pub use intent::{IntentRouter, KeywordMatcher, Reply, Responder, Route, StaticResponder};
pub use session::{normalize, Session, SessionConfig, SessionId, SessionState, SessionSummary, Termination};
