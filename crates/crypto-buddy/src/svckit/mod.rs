//! Service Kit - Responders
//!
//! Domain-specific responders that implement `buddy_core::Responder` by
//! running the rule engine against a shared catalog.

mod sustainability;
mod trending;
mod long_term;

pub use sustainability::SustainabilityResponder;
pub use trending::TrendingResponder;
pub use long_term::LongTermResponder;
