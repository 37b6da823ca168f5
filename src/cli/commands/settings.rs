//! Settings command implementation
//!
//! Inspect language server settings and apply configuration pushes.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};

use crate::app::App;
use crate::cli::response::SettingsResponse;

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show current settings
    Show,

    /// Apply a configuration payload ({"Powershell": {"analysis": {...}}})
    Apply {
        /// Inline JSON payload
        #[arg(required_unless_present = "file")]
        payload: Option<String>,

        /// Read the payload from a file
        #[arg(short, long, conflicts_with = "payload")]
        file: Option<PathBuf>,
    },
}

pub fn execute(args: SettingsArgs, app: &App) -> Result<()> {
    let ctx = &app.output;

    let result = match args.command {
        SettingsCommand::Show => app.settings.snapshot(),
        SettingsCommand::Apply { payload, file } => {
            let payload = match (payload, file) {
                (Some(payload), _) => payload,
                (None, Some(file)) => std::fs::read_to_string(&file)?,
                (None, None) => bail!("Provide a payload or --file"),
            };
            app.settings.apply_json(&payload)
        }
    };

    match result {
        Ok(settings) => ctx.print_success_flat(SettingsResponse::from(settings)),
        Err(e) => ctx.print_error(&e.to_string()),
    }

    Ok(())
}
