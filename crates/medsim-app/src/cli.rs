use std::path::PathBuf;

use clap::Parser;
use medsim_config::MedsimConfig;

/// medsim: practise emergency medical scenarios with a Gemini-backed assistant.
#[derive(Parser, Debug)]
#[command(name = "medsim", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error, or a full filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Gemini model name override.
    #[arg(long)]
    pub model: Option<String>,

    /// Leave the localized medical-simulation prompt out of every request.
    #[arg(long)]
    pub no_system_prompt: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut MedsimConfig) {
        if let Some(ref model) = self.model {
            config.model.name = model.clone();
        }
        if self.no_system_prompt {
            config.chat.include_system_prompt = false;
        }
    }

    /// Log filter directive: the flag wins over the config file.
    pub fn log_directive(&self, config: &MedsimConfig) -> String {
        match self.log_level.as_deref() {
            Some(level) if level.contains('=') => level.to_string(),
            Some(level) => format!("medsim={level}"),
            None => config.logging.level.directive().to_string(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
