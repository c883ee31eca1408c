//! Error Types for CryptoBuddy

use buddy_core::BuddyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate coin in catalog: {0}")]
    DuplicateCoin(String),

    #[error("Sustainability score {score} for {coin} is outside 0.0..=1.0")]
    InvalidScore {
        coin: String,
        score: f64,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<AdvisorError> for BuddyError {
    fn from(err: AdvisorError) -> Self {
        BuddyError::Responder(err.to_string())
    }
}
