//! Generation model configuration types.

use serde::{Deserialize, Serialize};

/// Default Gemini model used for every turn.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Default Generative Language API endpoint (models collection).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Generation model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Maximum output tokens per reply (valid range: 1-8192).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.into(),
            max_tokens: 4096,
            temperature: 0.7,
            request_timeout_secs: 120,
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}
