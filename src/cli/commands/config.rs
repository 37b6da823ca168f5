//! Config command implementation

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::app::App;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Initialize configuration file
    Init {
        /// Initialize global config (~/.config/scriptnav)
        #[arg(long)]
        global: bool,

        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Show {
        /// Show global config only
        #[arg(long)]
        global: bool,
    },

    /// Show config file path
    Path {
        /// Show global config path
        #[arg(long)]
        global: bool,
    },
}

#[derive(Serialize)]
struct ConfigInitResponse {
    status: &'static str,
    path: String,
    level: &'static str,
}

#[derive(Serialize)]
struct ConfigShowResponse {
    level: &'static str,
    config: serde_json::Value,
}

#[derive(Serialize)]
struct ConfigPathResponse {
    level: &'static str,
    path: String,
    exists: bool,
}

fn level(global: bool) -> &'static str {
    if global { "global" } else { "project" }
}

pub fn execute(args: ConfigArgs, app: &App) -> Result<()> {
    let ctx = &app.output;

    match args.command {
        ConfigCommand::Init { global, force } => match app.config_service.init(global, force) {
            Ok(path) => ctx.print_success_flat(ConfigInitResponse {
                status: "created",
                path: path.display().to_string(),
                level: level(global),
            }),
            Err(e) => ctx.print_error(&e.to_string()),
        },
        ConfigCommand::Show { global } => {
            let config = if global {
                app.config_service.load(true)
            } else {
                Ok(app.config().clone())
            };
            match config {
                Ok(config) => ctx.print_success_flat(ConfigShowResponse {
                    level: level(global),
                    config: serde_json::to_value(&config)?,
                }),
                Err(e) => ctx.print_error(&e.to_string()),
            }
        }
        ConfigCommand::Path { global } => {
            let path = app.config_service.config_path(global);
            ctx.print_success_flat(ConfigPathResponse {
                level: level(global),
                exists: path.exists(),
                path: path.display().to_string(),
            });
        }
    }

    Ok(())
}
