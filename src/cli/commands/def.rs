//! Def command implementation
//!
//! Go to the declaration of the symbol under a cursor position.

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::ParsedLocation;
use crate::cli::response::{DeclarationResponse, SymbolOutput};

#[derive(Args, Debug)]
pub struct DefArgs {
    /// File path with position (file:line[:column])
    pub location: String,
}

pub fn execute(args: DefArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let loc = ParsedLocation::parse(&args.location)?.to_absolute()?;
    let file = ctx.relative_path(&loc.file);

    let lookup = match app.definitions.definition_at(&loc.file, loc.line, loc.column) {
        Ok(lookup) => lookup,
        Err(e) => {
            ctx.print_error(&e.to_string());
            return Ok(());
        }
    };

    let message = match (&lookup.query, &lookup.declaration) {
        (None, _) => Some(format!("No symbol at {}:{}:{}", file, loc.line, loc.column)),
        (Some(query), None) => Some(format!("No declaration of {} in {}", query.name(), file)),
        _ => None,
    };

    ctx.print_success_flat(DeclarationResponse {
        symbol: lookup
            .query
            .as_ref()
            .map(|q| SymbolOutput::from_reference(q, file.clone())),
        found: lookup.declaration.is_some(),
        declaration: lookup
            .declaration
            .as_ref()
            .map(|d| SymbolOutput::from_reference(d, file.clone())),
        message,
    });

    Ok(())
}
