//! Intent Routing
//!
//! Keyword-based intent classification. Routes are kept in registration
//! order and the first route whose matcher accepts the query handles it.
//! Queries that match nothing go to the fallback responder.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{BuddyError, Result};

/// Predicate over a normalized (trimmed, lowercased) query
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "keywords", rename_all = "lowercase")]
pub enum KeywordMatcher {
    /// Query equals one of the keywords
    Exact(Vec<String>),

    /// Query contains one of the keywords as a substring
    Contains(Vec<String>),
}

impl KeywordMatcher {
    pub fn exact<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exact(lowercased(keywords))
    }

    pub fn contains<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Contains(lowercased(keywords))
    }

    /// Keywords this matcher looks for
    pub fn keywords(&self) -> &[String] {
        match self {
            Self::Exact(k) | Self::Contains(k) => k,
        }
    }

    /// Check a normalized query against the keywords
    pub fn matches(&self, query: &str) -> bool {
        match self {
            Self::Exact(k) => k.iter().any(|kw| query == kw),
            Self::Contains(k) => k.iter().any(|kw| query.contains(kw.as_str())),
        }
    }
}

fn lowercased<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keywords.into_iter().map(|k| k.into().to_lowercase()).collect()
}

/// Reply produced by a responder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Text to show the user (may span several lines)
    pub text: String,

    /// Whether this reply ends the session
    #[serde(default)]
    pub ends_session: bool,
}

impl Reply {
    pub fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ends_session: false,
        }
    }

    pub fn farewell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ends_session: true,
        }
    }
}

/// Responder trait - implement to answer a class of queries
pub trait Responder: Send + Sync {
    /// Route name used in logs and transcripts
    fn name(&self) -> &str;

    /// Answer a normalized query
    fn respond(&self, query: &str) -> Result<Reply>;
}

/// A matcher paired with the responder it dispatches to
#[derive(Clone)]
pub struct Route {
    pub matcher: KeywordMatcher,
    pub responder: Arc<dyn Responder>,
}

impl Route {
    pub fn name(&self) -> &str {
        self.responder.name()
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name())
            .field("matcher", &self.matcher)
            .finish()
    }
}

/// Ordered registry of routes
#[derive(Default)]
pub struct IntentRouter {
    routes: Vec<Route>,
    fallback: Option<Arc<dyn Responder>>,
}

impl IntentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route; earlier routes take priority
    pub fn register<R: Responder + 'static>(&mut self, matcher: KeywordMatcher, responder: R) {
        self.register_boxed(matcher, Arc::new(responder));
    }

    /// Append a route with a shared responder
    pub fn register_boxed(&mut self, matcher: KeywordMatcher, responder: Arc<dyn Responder>) {
        self.routes.push(Route { matcher, responder });
    }

    /// Responder used when no route matches
    pub fn set_fallback<R: Responder + 'static>(&mut self, responder: R) {
        self.set_fallback_boxed(Arc::new(responder));
    }

    pub fn set_fallback_boxed(&mut self, responder: Arc<dyn Responder>) {
        self.fallback = Some(responder);
    }

    /// First route matching the query, in registration order
    pub fn resolve(&self, query: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.matcher.matches(query))
    }

    /// Route a normalized query and return the answering route's name with its reply
    pub fn dispatch(&self, query: &str) -> Result<(String, Reply)> {
        let responder = match self.resolve(query) {
            Some(route) => &route.responder,
            None => self
                .fallback
                .as_ref()
                .ok_or_else(|| BuddyError::NoRoute(query.to_string()))?,
        };

        tracing::debug!(route = responder.name(), query, "dispatching query");
        let reply = responder.respond(query)?;
        Ok((responder.name().to_string(), reply))
    }

    /// Route names in priority order (fallback excluded)
    pub fn names(&self) -> Vec<&str> {
        self.routes.iter().map(Route::name).collect()
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

// ============================================================================
// Built-in Responders
// ============================================================================

/// Responder that always returns the same text
pub struct StaticResponder {
    name: String,
    reply: Reply,
}

impl StaticResponder {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: Reply::say(text),
        }
    }

    /// Static reply that also ends the session
    pub fn farewell(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: Reply::farewell(text),
        }
    }
}

impl Responder for StaticResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn respond(&self, _query: &str) -> Result<Reply> {
        Ok(self.reply.clone())
    }
}
