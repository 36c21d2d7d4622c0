//! API credential loading.
//!
//! The Gemini key comes from the `APIKEY` environment variable. Env files
//! (`API_Key.env`, then `.env`) are read first; variables already present
//! in the process environment are never overwritten.

use std::path::PathBuf;

use medsim_common::ConfigError;
use tracing::{debug, info};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "APIKEY";

/// Env files consulted, in order, before the key is read.
pub const ENV_FILES: &[&str] = &["API_Key.env", ".env"];

/// Load every env file from [`ENV_FILES`] that exists. Returns the paths loaded.
pub fn load_env_files() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    for name in ENV_FILES {
        match dotenvy::from_filename(name) {
            Ok(path) => {
                info!("loaded environment from {}", path.display());
                loaded.push(path);
            }
            Err(e) => debug!("skipping {name}: {e}"),
        }
    }
    loaded
}

/// Read the API key from the process environment.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    resolve_api_key(|name| std::env::var(name).ok())
}

/// Resolve the API key through `lookup`; blank values count as missing.
pub fn resolve_api_key(lookup: impl FnOnce(&str) -> Option<String>) -> Result<String, ConfigError> {
    match lookup(API_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingCredential(API_KEY_VAR.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_key_is_returned_trimmed() {
        let key = resolve_api_key(|name| {
            assert_eq!(name, "APIKEY");
            Some("  abc123\n".into())
        })
        .unwrap();
        assert_eq!(key, "abc123");
    }

    #[test]
    fn absent_key_is_missing_credential() {
        let err = resolve_api_key(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref v) if v == "APIKEY"));
    }

    #[test]
    fn blank_key_is_missing_credential() {
        let err = resolve_api_key(|_| Some("   ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(_)));
    }

    #[test]
    fn api_key_file_is_consulted_first() {
        assert_eq!(ENV_FILES.first(), Some(&"API_Key.env"));
    }
}
