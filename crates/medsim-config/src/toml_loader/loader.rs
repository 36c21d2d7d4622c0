//! Core TOML config loading: read from path or platform default.

use crate::schema::MedsimConfig;
use crate::validation;
use medsim_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<MedsimConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: MedsimConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/medsim/config.toml`
/// On Linux: `~/.config/medsim/config.toml`
pub fn load_default() -> Result<MedsimConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// Load config from `path`, writing the commented template there first
/// when no file exists yet (defaults are returned in that case).
pub fn load_or_create(path: &Path) -> Result<MedsimConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(MedsimConfig::default())
        }
        other => other,
    }
}
