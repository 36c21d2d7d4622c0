//! Session value types: turns, per-turn outcomes, and configuration.

use std::fmt;

/// Shown when the prompt is empty or whitespace.
pub const EMPTY_INPUT_REPLY: &str = "Please enter a valid question.";

/// Shown when the model answered without usable text.
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't process that, please try again!";

/// One stored exchange entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    User(String),
    Assistant(String),
}

/// Renders the line used inside the prompt context.
impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::User(text) => write!(f, "User: {text}"),
            Turn::Assistant(text) => write!(f, "Chatbot: {text}"),
        }
    }
}

/// Outcome of a single `respond` call.
///
/// `Display` gives the user-visible string for every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Trimmed model text; recorded in history.
    Answer(String),
    /// Blank prompt; nothing recorded, no request made.
    EmptyInput,
    /// The model returned no text.
    EmptyReply,
    /// The request failed; carries the error detail.
    TransportFailure(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Answer(text) => f.write_str(text),
            Reply::EmptyInput => f.write_str(EMPTY_INPUT_REPLY),
            Reply::EmptyReply => f.write_str(EMPTY_REPLY_FALLBACK),
            Reply::TransportFailure(detail) => write!(f, "An error occurred: {detail}"),
        }
    }
}

/// Immutable per-session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub model_name: String,
    /// Prepend the localized system prompt to every context.
    pub include_system_prompt: bool,
    /// Number of stored turns replayed into each context.
    pub context_turns: usize,
}

impl SessionConfig {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            include_system_prompt: true,
            context_turns: 5,
        }
    }

    pub fn with_system_prompt(mut self, include: bool) -> Self {
        self.include_system_prompt = include;
        self
    }

    pub fn with_context_turns(mut self, turns: usize) -> Self {
        self.context_turns = turns;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new("gemini-1.5-pro-latest")
    }
}
