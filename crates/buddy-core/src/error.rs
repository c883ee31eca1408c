//! Error Types

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, BuddyError>;

/// Chat error types
#[derive(Error, Debug)]
pub enum BuddyError {
    /// A responder could not produce a reply
    #[error("Responder error: {0}")]
    Responder(String),

    /// Router has no route or fallback for a query
    #[error("No route for query: {0}")]
    NoRoute(String),

    /// Turn attempted on a terminated session
    #[error("Session error: {0}")]
    Session(String),

    /// Terminal read or write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuddyError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            BuddyError::Responder(msg) => format!("I couldn't work that out: {}", msg),
            BuddyError::NoRoute(_) => "I have no answer for that kind of question.".into(),
            BuddyError::Session(_) => "This conversation has already ended.".into(),
            BuddyError::Io(_) => "Lost connection to the terminal.".into(),
        }
    }
}
