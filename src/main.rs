//! scriptnav - declaration lookup CLI for shell scripts
//!
//! Resolves the symbol under a cursor and prints where the script declares it.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptnav::app::App;
use scriptnav::cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Quiet by default; RUST_LOG=scriptnav=debug or --verbose for more.
    // Logs go to stderr so stdout stays valid JSON.
    let default_filter = if cli.verbose {
        "scriptnav=debug"
    } else {
        "scriptnav=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    if let Err(e) = run(cli) {
        let response = serde_json::json!({
            "success": false,
            "error": e.to_string()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| response.to_string())
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut app = App::new().map_err(|e| anyhow::anyhow!("Failed to initialize: {}", e))?;

    if let Some(format) = &cli.format {
        let format: OutputFormat = format.parse().map_err(anyhow::Error::msg)?;
        app.set_output_format(format);
    }

    execute_command(cli.command, &app)
}

fn execute_command(command: Commands, app: &App) -> anyhow::Result<()> {
    use scriptnav::cli::commands;

    match command {
        // Declaration lookup
        Commands::Def(args) => commands::def::execute(args, app),
        Commands::Decl(args) => commands::decl::execute(args, app),

        // Settings and configuration
        Commands::Settings(args) => commands::settings::execute(args, app),
        Commands::Config(args) => commands::config::execute(args, app),
    }
}
