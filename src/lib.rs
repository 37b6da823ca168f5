//! scriptnav - Declaration lookup for shell scripts
//!
//! Given a script syntax tree and a symbol reference (kind, source span,
//! name), finds the node that declares the symbol and returns the extent of
//! just the declared name.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod infra;
pub mod models;
pub mod services;

pub use error::{ScriptnavError, ScriptnavResult};
pub use models::{ScriptAst, ScriptExtent, SymbolKind, SymbolReference};
pub use services::declaration::{DeclarationFinder, find_declaration};
