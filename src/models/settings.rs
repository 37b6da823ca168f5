//! Language server settings
//!
//! Settings pushed by an editor client. Updates replace the analysis fields
//! wholesale rather than merging them field by field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageServerSettings {
    #[serde(default, rename = "analysis", alias = "scriptAnalysis")]
    pub script_analysis: ScriptAnalysisSettings,
}

impl LanguageServerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold incoming settings into this one; `None` keeps everything as is
    pub fn update(&mut self, settings: Option<&LanguageServerSettings>) {
        if let Some(settings) = settings {
            self.script_analysis.update(Some(&settings.script_analysis));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptAnalysisSettings {
    /// `None` means the client sent no value; treated as enabled
    #[serde(default, rename = "enabled", alias = "enable")]
    pub enable: Option<bool>,

    #[serde(default)]
    pub settings_path: Option<String>,
}

impl Default for ScriptAnalysisSettings {
    fn default() -> Self {
        Self {
            enable: Some(true),
            settings_path: None,
        }
    }
}

impl ScriptAnalysisSettings {
    /// Overwrite both fields with the incoming values, including absent ones
    pub fn update(&mut self, settings: Option<&ScriptAnalysisSettings>) {
        if let Some(settings) = settings {
            self.enable = settings.enable;
            self.settings_path = settings.settings_path.clone();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enable.unwrap_or(true)
    }
}

/// Body of a configuration-change notification
///
/// The client names its section `Powershell`; the field is renamed explicitly
/// so host casing conventions never leak onto the wire. The lowercase
/// `powershell` key is accepted as an alias of the same field, so a payload
/// carrying both spellings is rejected as a duplicate field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsWrapper {
    #[serde(rename = "Powershell", alias = "powershell", default)]
    pub powershell: Option<LanguageServerSettings>,
}
