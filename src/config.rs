//! Global Configuration Singleton

use std::sync::OnceLock;

use crate::models::config::ScriptnavConfig;

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub max_file_size_bytes: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024,
        }
    }
}

impl From<&ScriptnavConfig> for RuntimeConfig {
    fn from(config: &ScriptnavConfig) -> Self {
        Self {
            max_file_size_bytes: config.parser.max_file_size_bytes(),
        }
    }
}

pub fn init(config: &ScriptnavConfig) {
    let _ = CONFIG.set(RuntimeConfig::from(config));
}

pub fn max_file_size_bytes() -> u64 {
    config().max_file_size_bytes
}

fn config() -> RuntimeConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
