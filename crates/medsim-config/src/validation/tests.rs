//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = MedsimConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_model_name() {
    let mut config = MedsimConfig::default();
    config.model.name = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.name"));
}

#[test]
fn catches_max_tokens_zero() {
    let mut config = MedsimConfig::default();
    config.model.max_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_tokens"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = MedsimConfig::default();
    config.model.temperature = 3.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_non_http_base_url() {
    let mut config = MedsimConfig::default();
    config.model.base_url = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.base_url"));
}

#[test]
fn catches_context_turns_zero() {
    let mut config = MedsimConfig::default();
    config.chat.context_turns = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.context_turns"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = MedsimConfig::default();
    config.model.max_tokens = 0;
    config.chat.context_turns = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_tokens"));
    assert!(err.contains("chat.context_turns"));
    assert!(err.contains("; "));
}
