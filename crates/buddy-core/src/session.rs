//! Session Management
//!
//! A session is a turn-based conversation: read a line, route it, write
//! the reply, repeat until a responder ends the session or input runs out.
//! Turns are independent; the session only tracks whether it is still
//! running and how many turns were answered.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BuddyError, Result};
use crate::intent::{IntentRouter, Reply};

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation settings for a session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name prefixed to every reply
    #[serde(default = "default_speaker")]
    pub speaker: String,

    /// Prompt written before each read
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Lines written once when the session starts
    #[serde(default)]
    pub greeting: Vec<String>,
}

fn default_speaker() -> String { "Bot".into() }
fn default_prompt() -> String { "You: ".into() }

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            speaker: default_speaker(),
            prompt: default_prompt(),
            greeting: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Running,
    Terminated,
}

/// How a finished session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A responder returned a farewell
    Command,
    /// Input stream closed
    EndOfInput,
}

/// Outcome of `Session::run`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub turns: usize,
    pub termination: Termination,
}

/// Trim surrounding whitespace and lowercase
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// A single chat session
#[derive(Clone, Debug)]
pub struct Session {
    pub id: SessionId,
    pub config: SessionConfig,
    state: SessionState,
    termination: Option<Termination>,
    turns: usize,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            id: SessionId::new(),
            config,
            state: SessionState::Running,
            termination: None,
            turns: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Number of lines answered so far
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Run one turn: normalize, route, and update state
    pub fn handle_line(&mut self, router: &IntentRouter, line: &str) -> Result<Reply> {
        if !self.is_running() {
            return Err(BuddyError::Session(format!("session {} already terminated", self.id)));
        }

        let (route, reply) = router.dispatch(&normalize(line))?;
        self.turns += 1;
        tracing::debug!(session = %self.id, route = %route, turn = self.turns, "turn answered");

        if reply.ends_session {
            self.end(Termination::Command);
        }

        Ok(reply)
    }

    /// Drive the session over a line-oriented input until it terminates
    pub fn run<R, W>(&mut self, router: &IntentRouter, mut input: R, mut output: W) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        tracing::info!(session = %self.id, routes = router.len(), "session started");

        for line in &self.config.greeting {
            writeln!(output, "{}", line)?;
        }

        let mut buf = Vec::new();
        while self.is_running() {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // Keep the terminal tidy after a dangling prompt
                writeln!(output)?;
                self.end(Termination::EndOfInput);
                break;
            }

            // Undecodable bytes become U+FFFD; such lines route like any other text
            let line = String::from_utf8_lossy(&buf);
            let reply = self.handle_line(router, &line)?;
            self.write_reply(&mut output, &reply)?;
        }

        output.flush()?;
        let summary = self.summary();
        tracing::info!(
            session = %summary.id,
            turns = summary.turns,
            termination = ?summary.termination,
            "session ended"
        );
        Ok(summary)
    }

    fn write_reply<W: Write>(&self, output: &mut W, reply: &Reply) -> Result<()> {
        let mut lines = reply.text.lines();
        if let Some(first) = lines.next() {
            writeln!(output, "{}: {}", self.config.speaker, first)?;
        }
        for line in lines {
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }

    fn end(&mut self, termination: Termination) {
        self.state = SessionState::Terminated;
        self.termination = Some(termination);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            turns: self.turns,
            termination: self.termination.unwrap_or(Termination::EndOfInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{KeywordMatcher, Responder, StaticResponder};
    use std::io::Cursor;

    struct BrokenResponder;

    impl Responder for BrokenResponder {
        fn name(&self) -> &str {
            "broken"
        }

        fn respond(&self, _query: &str) -> Result<Reply> {
            Err(BuddyError::Responder("no data".into()))
        }
    }

    fn router() -> IntentRouter {
        let mut router = IntentRouter::new();
        router.register(KeywordMatcher::exact(["exit"]), StaticResponder::farewell("exit", "Bye!"));
        router.register(KeywordMatcher::contains(["help"]), StaticResponder::new("help", "Line one\nLine two"));
        router.register(KeywordMatcher::contains(["broken"]), BrokenResponder);
        router.set_fallback(StaticResponder::new("fallback", "Huh?"));
        router
    }

    fn config() -> SessionConfig {
        SessionConfig {
            speaker: "Bot".into(),
            prompt: "> ".into(),
            greeting: vec!["Hello".into()],
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  EXIT \n"), "exit");
        assert_eq!(normalize("Long-Term Growth?"), "long-term growth?");
    }

    #[test]
    fn test_session_creation() {
        let session = Session::new(SessionConfig::default());
        assert!(session.is_running());
        assert_eq!(session.turns(), 0);
        assert_eq!(session.config.prompt, "You: ");
    }

    #[test]
    fn test_exit_terminates() {
        let router = router();
        let mut session = Session::new(config());

        let reply = session.handle_line(&router, "  Exit  ").unwrap();
        assert_eq!(reply.text, "Bye!");
        assert_eq!(session.state(), SessionState::Terminated);
        assert!(matches!(session.handle_line(&router, "help"), Err(BuddyError::Session(_))));
    }

    #[test]
    fn test_run_transcript() {
        let router = router();
        let mut session = Session::new(config());
        let mut out = Vec::new();

        let summary = session
            .run(&router, Cursor::new("help\nbanana\nexit\nhelp\n"), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Hello\n> Bot: Line one\nLine two\n> Bot: Huh?\n> Bot: Bye!\n"
        );
        assert_eq!(summary.turns, 3);
        assert_eq!(summary.termination, Termination::Command);
    }

    #[test]
    fn test_run_end_of_input() {
        let router = router();
        let mut session = Session::new(config());
        let mut out = Vec::new();

        let summary = session.run(&router, Cursor::new("help"), &mut out).unwrap();

        assert_eq!(summary.turns, 1);
        assert_eq!(summary.termination, Termination::EndOfInput);
        assert!(String::from_utf8(out).unwrap().ends_with("> \n"));
    }

    #[test]
    fn test_invalid_utf8_line_falls_back() {
        let router = router();
        let mut session = Session::new(config());
        let mut out = Vec::new();

        let summary = session
            .run(&router, Cursor::new(&b"caf\xe9 coins?\nhelp\nexit\n"[..]), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Hello\n> Bot: Huh?\n> Bot: Line one\nLine two\n> Bot: Bye!\n"
        );
        assert_eq!(summary.turns, 3);
        assert_eq!(summary.termination, Termination::Command);
    }

    #[test]
    fn test_failed_turn_is_not_counted() {
        let router = router();
        let mut session = Session::new(config());

        session.handle_line(&router, "help").unwrap();
        assert!(matches!(session.handle_line(&router, "broken"), Err(BuddyError::Responder(_))));
        assert_eq!(session.turns(), 1);
        assert!(session.is_running());
    }

    #[test]
    fn test_many_turns_keep_no_history() {
        let router = router();
        let mut session = Session::new(config());
        let input = "banana\n".repeat(10_000);

        let summary = session.run(&router, Cursor::new(input), std::io::sink()).unwrap();

        assert_eq!(summary.turns, 10_000);
        assert_eq!(summary.termination, Termination::EndOfInput);
    }
}
