//! Model section validation (name, token budget, sampling, endpoint).

use crate::schema::MedsimConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &MedsimConfig) {
    let model = &config.model;

    if model.name.trim().is_empty() {
        errors.push("model.name must not be empty".into());
    }
    validate_range(errors, "model.max_tokens", model.max_tokens, 1, 8192);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "model.request_timeout_secs",
        model.request_timeout_secs,
        1,
        600,
    );
    if !(model.base_url.starts_with("https://") || model.base_url.starts_with("http://")) {
        errors.push(format!(
            "model.base_url = {:?} must be an http(s) URL",
            model.base_url
        ));
    }
}
