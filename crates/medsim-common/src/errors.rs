use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing credential: {0} is not set (add it to API_Key.env or the environment)")]
    MissingCredential(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MedsimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("chat.context_turns = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: chat.context_turns = 0"
        );
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = ConfigError::MissingCredential("APIKEY".into());
        let msg = err.to_string();
        assert!(msg.starts_with("missing credential: APIKEY is not set"));
        assert!(msg.contains("API_Key.env"));
    }

    #[test]
    fn medsim_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: MedsimError = config_err.into();
        assert!(matches!(err, MedsimError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn medsim_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: MedsimError = io_err.into();
        assert!(matches!(err, MedsimError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn medsim_error_ai_display() {
        let err = MedsimError::Ai("client build failed".into());
        assert_eq!(err.to_string(), "ai error: client build failed");
    }
}
