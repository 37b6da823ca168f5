//! CLI module for scriptnav
//!
//! Provides command-line interface using clap derive macros.

pub mod commands;
pub mod location;
pub mod output;
pub mod response;

pub use location::ParsedLocation;
pub use output::{OutputContext, OutputFormat};

use clap::{Parser, Subcommand};

use commands::{config::ConfigArgs, decl::DeclArgs, def::DefArgs, settings::SettingsArgs};

const LONG_ABOUT: &str = r#"
scriptnav - jump from a symbol in a shell script to its declaration

EXAMPLES:
  scriptnav def deploy.sh:42:7                  # Declaration of the symbol at the cursor
  scriptnav decl deploy.sh --name build         # Where is function 'build' declared?
  scriptnav decl deploy.sh -k variable -n TARGET
  scriptnav settings apply '{"Powershell":{"analysis":{"enabled":false}}}'

Matching is textual: the first declaration with the same kind and name wins.
"#;

/// scriptnav - jump from a symbol in a shell script to its declaration
#[derive(Parser, Debug)]
#[command(name = "scriptnav")]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
#[command(after_help = "Use 'scriptnav <COMMAND> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, compact); defaults to the configured format
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Verbose output (show debug info)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Go to the declaration of the symbol at a position
    Def(DefArgs),

    /// Find the declaration of a named symbol
    Decl(DeclArgs),

    /// Language server settings (show, apply)
    Settings(SettingsArgs),

    /// Configuration management
    Config(ConfigArgs),
}
