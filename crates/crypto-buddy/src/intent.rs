//! Query Intents
//!
//! The six things a user can ask CryptoBuddy for, with the keywords that
//! select them. `Intent::PRIORITY` is the order routes are tried in; a query
//! that mentions several topics goes to the earliest one.

use buddy_core::{normalize, KeywordMatcher};
use serde::{Deserialize, Serialize};

const EXIT_KEYWORDS: &[&str] = &["exit"];
const SUSTAINABILITY_KEYWORDS: &[&str] = &["sustain", "eco", "environment"];
const TRENDING_KEYWORDS: &[&str] = &["trend", "trending", "rising"];
const LONG_TERM_KEYWORDS: &[&str] = &["long-term", "long term", "growth"];
const HELP_KEYWORDS: &[&str] = &["help", "examples", "what can you do"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Exit,
    Sustainability,
    Trending,
    LongTerm,
    Help,
    Fallback,
}

impl Intent {
    /// Keyword-matched intents, highest priority first
    pub const PRIORITY: [Self; 5] = [
        Self::Exit,
        Self::Sustainability,
        Self::Trending,
        Self::LongTerm,
        Self::Help,
    ];

    /// Route name
    pub fn name(self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Sustainability => "sustainability",
            Self::Trending => "trending",
            Self::LongTerm => "long_term",
            Self::Help => "help",
            Self::Fallback => "fallback",
        }
    }

    /// Matcher for this intent; `None` for the fallback
    pub fn matcher(self) -> Option<KeywordMatcher> {
        match self {
            Self::Exit => Some(KeywordMatcher::exact(EXIT_KEYWORDS.iter().copied())),
            Self::Sustainability => Some(KeywordMatcher::contains(SUSTAINABILITY_KEYWORDS.iter().copied())),
            Self::Trending => Some(KeywordMatcher::contains(TRENDING_KEYWORDS.iter().copied())),
            Self::LongTerm => Some(KeywordMatcher::contains(LONG_TERM_KEYWORDS.iter().copied())),
            Self::Help => Some(KeywordMatcher::contains(HELP_KEYWORDS.iter().copied())),
            Self::Fallback => None,
        }
    }

    /// Classify a raw line of user input
    pub fn classify(input: &str) -> Self {
        let query = normalize(input);
        Self::PRIORITY
            .into_iter()
            .find(|intent| intent.matcher().is_some_and(|m| m.matches(&query)))
            .unwrap_or(Self::Fallback)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
