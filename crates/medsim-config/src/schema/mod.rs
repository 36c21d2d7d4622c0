//! Configuration schema types for medsim.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod logging;
mod model;

pub use chat::*;
pub use logging::*;
pub use model::*;

use serde::{Deserialize, Serialize};

/// Root configuration for medsim.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedsimConfig {
    pub model: ModelConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
