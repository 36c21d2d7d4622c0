//! ConversationSession struct, history access, and context assembly.

use crate::language::Language;
use crate::prompts::system_prompt;

use super::types::{SessionConfig, Turn};

/// A single conversation: append-only turn history plus fixed settings.
#[derive(Debug, Default)]
pub struct ConversationSession {
    /// Every turn in chronological order. Never reordered or pruned.
    pub(super) turns: Vec<Turn>,
    pub(super) config: SessionConfig,
}

impl ConversationSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            turns: Vec::new(),
            config,
        }
    }

    /// Get the full turn history.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of stored turns.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// The most recent stored turns that the next context will replay.
    pub fn context_window(&self) -> &[Turn] {
        let start = self.turns.len().saturating_sub(self.config.context_turns);
        &self.turns[start..]
    }

    /// Assemble the request text for `prompt`.
    ///
    /// Layout, one entry per line: the localized system prompt (when
    /// enabled), the context window, then `User: <prompt>`. Must be called
    /// before `prompt` itself is recorded.
    pub fn build_context(&self, prompt: &str, lang: Language) -> String {
        let window = self.context_window();
        let mut lines = Vec::with_capacity(window.len() + 2);

        if self.config.include_system_prompt {
            lines.push(system_prompt(lang).to_string());
        }
        lines.extend(window.iter().map(Turn::to_string));
        lines.push(Turn::User(prompt.to_string()).to_string());

        lines.join("\n")
    }
}
