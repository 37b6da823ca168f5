//! Data models for scriptnav
//!
//! Contains core type definitions used throughout the application.

pub mod ast;
pub mod config;
pub mod extent;
pub mod settings;
pub mod symbol;

// Re-export commonly used types
pub use ast::{AstNode, AstVisitor, ScriptAst, VisitAction};
pub use config::ScriptnavConfig;
pub use extent::ScriptExtent;
pub use settings::{LanguageServerSettings, ScriptAnalysisSettings, SettingsWrapper};
pub use symbol::{SymbolKind, SymbolReference};
