//! Configuration service for scriptnav

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ConfigError;
use crate::models::config::{OutputConfig, ParserConfig, ScriptnavConfig};
use crate::models::settings::LanguageServerSettings;

pub trait ConfigService: Send + Sync {
    fn load(&self, global_only: bool) -> Result<ScriptnavConfig, ConfigError>;
    fn config_path(&self, global: bool) -> PathBuf;
    fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError>;
}

/// Project config file; sections it leaves out keep the global values
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    parser: Option<ParserConfig>,
    output: Option<OutputConfig>,
    settings: Option<LanguageServerSettings>,
}

pub struct DefaultConfigService {
    root: PathBuf,
    global_path: PathBuf,
}

impl DefaultConfigService {
    pub fn new(root: &Path) -> Self {
        Self::with_global_path(root, Self::global_config_path())
    }

    pub fn with_global_path(root: &Path, global_path: PathBuf) -> Self {
        Self {
            root: root.to_path_buf(),
            global_path,
        }
    }

    fn global_config_path() -> PathBuf {
        // XDG standard: ~/.config/scriptnav/config.toml
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scriptnav")
            .join("config.toml")
    }

    fn project_config_path(&self) -> PathBuf {
        self.root.join(".scriptnav").join("config.toml")
    }

    fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    fn write_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = ScriptnavConfig::default();
        let content =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl ConfigService for DefaultConfigService {
    fn load(&self, global_only: bool) -> Result<ScriptnavConfig, ConfigError> {
        let global: ScriptnavConfig =
            Self::load_from_path(&self.global_path)?.unwrap_or_default();
        if global_only {
            return Ok(global);
        }

        let config = match Self::load_from_path(&self.project_config_path())? {
            Some(project) => merge_config(global, project),
            None => global,
        };
        Ok(apply_env_overrides(config))
    }

    fn config_path(&self, global: bool) -> PathBuf {
        if global {
            self.global_path.clone()
        } else {
            self.project_config_path()
        }
    }

    fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError> {
        let path = self.config_path(global);

        if path.exists() && !force {
            return Err(ConfigError::InvalidValue {
                key: "config".to_string(),
                message: format!(
                    "Config already exists: {}. Use --force to overwrite.",
                    path.display()
                ),
            });
        }

        Self::write_default_config(&path)?;
        Ok(path)
    }
}

/// Sections present in the project file replace the global ones. A present
/// `[settings]` goes through the same full-replace update a client push would use.
fn merge_config(base: ScriptnavConfig, overlay: ConfigOverlay) -> ScriptnavConfig {
    let mut settings = base.settings;
    settings.update(overlay.settings.as_ref());

    ScriptnavConfig {
        parser: overlay.parser.unwrap_or(base.parser),
        output: overlay.output.unwrap_or(base.output),
        settings,
    }
}

fn apply_env_overrides(mut config: ScriptnavConfig) -> ScriptnavConfig {
    if let Ok(val) = std::env::var("SCRIPTNAV_OUTPUT_FORMAT") {
        config.output.format = val;
    }
    if let Ok(val) = std::env::var("SCRIPTNAV_MAX_FILE_SIZE_MB") {
        match val.parse() {
            Ok(size) => config.parser.max_file_size_mb = size,
            Err(_) => tracing::warn!("Ignoring invalid SCRIPTNAV_MAX_FILE_SIZE_MB: {}", val),
        }
    }
    config
}
