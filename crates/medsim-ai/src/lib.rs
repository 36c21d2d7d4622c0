//! AI engine for medsim.
//!
//! Provides:
//! - the `AiClient` seam and a Gemini implementation of it
//! - `ConversationSession`, which bounds history and assembles the prompt
//!   context for every turn
//! - the Arabic/English language heuristic and the localized system prompts

pub mod gemini;
pub mod language;
pub mod prompts;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use language::{classify, Language};
pub use session::{ConversationSession, Reply, SessionConfig, Turn};

/// Generation backend: one request with the full context text, one reply.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, context: &str) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
