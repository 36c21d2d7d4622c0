//! Conversation configuration types.

use serde::{Deserialize, Serialize};

/// Conversation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Prepend the localized medical-simulation prompt to every context.
    pub include_system_prompt: bool,
    /// Stored turns replayed into each context (valid range: 1-50).
    pub context_turns: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            include_system_prompt: true,
            context_turns: 5,
        }
    }
}
