//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# medsim configuration
# Only override what you want to change -- missing fields use defaults.
# The API key is never stored here: set APIKEY in API_Key.env or the environment.

[model]
# name = "gemini-1.5-pro-latest"
# max_tokens = 4096             # 1-8192
# temperature = 0.7             # 0.0-2.0
# request_timeout_secs = 120    # 1-600
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"

[chat]
# include_system_prompt = true  # prepend the medical-simulation disclaimer
# context_turns = 5             # 1-50

[logging]
# level = "INFO"                # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
