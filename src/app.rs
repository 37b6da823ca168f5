//! Application container for scriptnav

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::{OutputContext, OutputFormat};
use crate::config;
use crate::infra::ast::ScriptParser;
use crate::models::config::ScriptnavConfig;
use crate::services::config::{ConfigService, DefaultConfigService};
use crate::services::definition::{DefaultDefinitionService, DefinitionService};
use crate::services::settings::SettingsStore;

pub struct App {
    pub(crate) output: OutputContext,
    pub(crate) definitions: Arc<dyn DefinitionService>,
    pub(crate) settings: Arc<SettingsStore>,
    pub(crate) config_service: Arc<dyn ConfigService>,
    pub(crate) config: ScriptnavConfig,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let root = std::env::current_dir()?;
        Self::with_root(root)
    }

    pub fn with_root(root: PathBuf) -> anyhow::Result<Self> {
        tracing::debug!("Initializing scriptnav at {:?}", root);

        let config_service = Arc::new(DefaultConfigService::new(&root));
        let config = match config_service.load(false) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                ScriptnavConfig::default()
            }
        };

        let format: OutputFormat = config.output.format.parse().unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            OutputFormat::default()
        });
        let output = OutputContext::new(root.clone()).with_format(format);

        config::init(&config);

        let parser = ScriptParser::new()?;
        let definitions = Arc::new(DefaultDefinitionService::new(parser));
        let settings = Arc::new(SettingsStore::new(config.settings.clone()));

        Ok(Self {
            output,
            definitions,
            settings,
            config_service,
            config,
        })
    }

    /// Override the configured output format (e.g. from `--format`)
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output = self.output.clone().with_format(format);
    }

    pub fn config(&self) -> &ScriptnavConfig {
        &self.config
    }
}
