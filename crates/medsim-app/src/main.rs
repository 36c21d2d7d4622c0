mod cli;
mod repl;

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use medsim_ai::{ConversationSession, GeminiClient, GeminiConfig, SessionConfig};
use medsim_common::MedsimError;
use medsim_config::MedsimConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn build_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("invalid log level {directive:?} ({e}), falling back to info");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

// stdout belongs to the conversation.
fn init_tracing(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(std::io::stderr)
        .init();
}

/// Load env files and the config file. Runs before the global subscriber
/// exists (the config picks the log level), so it logs through a scoped one.
///
/// An explicit `--config` path must load; an unparseable file at the
/// default location falls back to defaults.
fn load_config(args: &cli::Args) -> Result<MedsimConfig, MedsimError> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&args.log_directive(&MedsimConfig::default())))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::with_default(bootstrap, || -> Result<MedsimConfig, MedsimError> {
        medsim_config::load_env_files();
        match args.config.as_deref() {
            Some(path) => Ok(medsim_config::load_config(Some(path))?),
            None => Ok(medsim_config::load_config(None).unwrap_or_else(|e| {
                tracing::warn!("config load failed, using defaults: {e}");
                MedsimConfig::default()
            })),
        }
    })
}

fn gemini_config(api_key: String, config: &MedsimConfig) -> GeminiConfig {
    GeminiConfig::new(api_key)
        .with_model(config.model.name.clone())
        .with_base_url(config.model.base_url.clone())
        .with_max_tokens(config.model.max_tokens)
        .with_temperature(config.model.temperature)
        .with_request_timeout(Duration::from_secs(u64::from(
            config.model.request_timeout_secs,
        )))
}

fn session_config(config: &MedsimConfig) -> SessionConfig {
    SessionConfig::new(config.model.name.clone())
        .with_system_prompt(config.chat.include_system_prompt)
        .with_context_turns(config.chat.context_turns as usize)
}

/// Resolve the API key, build the client and session, then run the REPL.
/// Nothing is written to `output` unless the key is present.
async fn chat<R: BufRead, W: Write>(
    config: &MedsimConfig,
    lookup: impl FnOnce(&str) -> Option<String>,
    input: R,
    output: W,
) -> Result<(), MedsimError> {
    let api_key = medsim_config::resolve_api_key(lookup)?;

    let client = GeminiClient::new(gemini_config(api_key, config))
        .map_err(|e| MedsimError::Ai(e.to_string()))?;
    let mut session = ConversationSession::new(session_config(config));
    tracing::info!(
        model = %config.model.name,
        system_prompt = config.chat.include_system_prompt,
        context_turns = config.chat.context_turns,
        "session ready"
    );

    repl::run(&mut session, &client, input, output).await?;
    Ok(())
}

async fn run(args: cli::Args) -> Result<(), MedsimError> {
    let mut config = load_config(&args)?;
    args.apply_overrides(&mut config);

    init_tracing(&args.log_directive(&config));
    tracing::info!("medsim v{} starting...", env!("CARGO_PKG_VERSION"));

    let stdin = std::io::stdin();
    chat(
        &config,
        |name| std::env::var(name).ok(),
        stdin.lock(),
        std::io::stdout(),
    )
    .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("medsim: {e}");
            ExitCode::FAILURE
        }
    }
}
