//! Response types for CLI output
//!
//! All types implement Serialize for consistent JSON output.

use serde::Serialize;

use crate::models::settings::LanguageServerSettings;
use crate::models::symbol::SymbolReference;

/// A symbol occurrence, flattened for output
#[derive(Debug, Clone, Serialize)]
pub struct SymbolOutput {
    pub kind: String,
    pub name: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SymbolOutput {
    pub fn from_reference(reference: &SymbolReference, file: impl Into<String>) -> Self {
        let extent = &reference.extent;
        Self {
            kind: reference.kind.to_string(),
            name: reference.name().to_string(),
            file: file.into(),
            line: extent.start_line,
            column: extent.start_column,
            end_line: extent.end_line,
            end_column: extent.end_column,
        }
    }
}

/// Response for `def` and `decl`
#[derive(Debug, Clone, Serialize)]
pub struct DeclarationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolOutput>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<SymbolOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response for `settings show` / `settings apply`
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_path: Option<String>,
    pub settings: LanguageServerSettings,
}

impl From<LanguageServerSettings> for SettingsResponse {
    fn from(settings: LanguageServerSettings) -> Self {
        Self {
            enabled: settings.script_analysis.is_enabled(),
            settings_path: settings.script_analysis.settings_path.clone(),
            settings,
        }
    }
}
