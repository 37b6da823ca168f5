//! Decl command implementation
//!
//! Find the declaration of a named function or variable in a script.

use anyhow::{Context, Result};
use clap::Args;

use crate::app::App;
use crate::cli::response::{DeclarationResponse, SymbolOutput};
use crate::models::symbol::{SymbolKind, SymbolReference};

#[derive(Args, Debug)]
pub struct DeclArgs {
    /// Script file to search
    pub file: String,

    /// Symbol name, exactly as written at the declaration
    #[arg(short, long)]
    pub name: String,

    /// Symbol kind (function, variable)
    #[arg(short, long, default_value = "function")]
    pub kind: String,
}

pub fn execute(args: DeclArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let kind: SymbolKind = args.kind.parse().map_err(anyhow::Error::msg)?;

    let path = std::path::Path::new(&args.file);
    let path = path
        .canonicalize()
        .with_context(|| format!("File not found: {}", args.file))?;
    let file = ctx.relative_path(&path);

    let query = SymbolReference::named(kind, &args.name);
    match app.definitions.find_declaration(&path, &query) {
        Ok(declaration) => {
            let message = declaration
                .is_none()
                .then(|| format!("No {} declaration of {} in {}", kind, args.name, file));
            ctx.print_success_flat(DeclarationResponse {
                symbol: None,
                found: declaration.is_some(),
                declaration: declaration
                    .as_ref()
                    .map(|d| SymbolOutput::from_reference(d, file.clone())),
                message,
            });
        }
        Err(e) => ctx.print_error(&e.to_string()),
    }

    Ok(())
}
