//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive scoped to the medsim crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "medsim=debug",
            LogLevel::Info => "medsim=info",
            LogLevel::Warning => "medsim=warn",
            LogLevel::Error => "medsim=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_uppercase() {
        let cfg: LoggingConfig = toml::from_str("level = \"WARNING\"").unwrap();
        assert_eq!(cfg.level, LogLevel::Warning);
        assert_eq!(cfg.level.directive(), "medsim=warn");
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().level.directive(), "medsim=info");
    }
}
