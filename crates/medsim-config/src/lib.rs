//! medsim configuration system.
//!
//! TOML-based configuration with validation and credential loading. All
//! config sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medsim_config::{api_key_from_env, load_config, load_env_files};
//!
//! load_env_files();
//! let config = load_config(None).expect("failed to load config");
//! let key = api_key_from_env().expect("APIKEY not set");
//! println!("{} ({} chars of key)", config.model.name, key.len());
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{api_key_from_env, load_env_files, resolve_api_key, API_KEY_VAR};
pub use schema::MedsimConfig;

use medsim_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template if no file exists yet. An
/// explicit path must exist. Out-of-range values are logged as warnings and
/// the parsed config is returned unchanged; only unreadable or unparseable
/// files are errors.
pub fn load_config(path: Option<&Path>) -> Result<MedsimConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_keeps_file_with_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[model]\nname = \"my-model\"\ntemperature = 9.0\n\n[chat]\ninclude_system_prompt = false\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.model.name, "my-model");
        assert_eq!(config.model.temperature, 9.0);
        assert!(!config.chat.include_system_prompt);
        assert!(validation::validate(&config).is_err());
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\ncontext_turns = 8\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.chat.context_turns, 8);
    }

    #[test]
    fn load_config_missing_explicit_path_is_error() {
        let err = load_config(Some(Path::new("/tmp/medsim_no_such_config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
