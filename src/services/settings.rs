//! Settings store
//!
//! Process-wide language server settings, updated by configuration pushes.
//! Writers are serialized by the lock; readers get a cloned snapshot.

use std::sync::RwLock;

use crate::error::SettingsError;
use crate::models::settings::{LanguageServerSettings, SettingsWrapper};

#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: RwLock<LanguageServerSettings>,
}

impl SettingsStore {
    pub fn new(initial: LanguageServerSettings) -> Self {
        Self {
            settings: RwLock::new(initial),
        }
    }

    pub fn snapshot(&self) -> Result<LanguageServerSettings, SettingsError> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|_| SettingsError::Poisoned)
    }

    /// Apply an update; `None` leaves the settings untouched
    pub fn apply(
        &self,
        update: Option<&LanguageServerSettings>,
    ) -> Result<LanguageServerSettings, SettingsError> {
        let mut settings = self.settings.write().map_err(|_| SettingsError::Poisoned)?;
        settings.update(update);

        tracing::debug!(
            "Settings updated: analysis enabled={} path={:?}",
            settings.script_analysis.is_enabled(),
            settings.script_analysis.settings_path
        );
        Ok(settings.clone())
    }

    /// Apply the body of a configuration-change notification
    pub fn apply_json(&self, payload: &str) -> Result<LanguageServerSettings, SettingsError> {
        let wrapper: SettingsWrapper = serde_json::from_str(payload)?;
        if wrapper.powershell.is_none() {
            tracing::debug!("Settings payload has no Powershell section; ignoring");
        }
        self.apply(wrapper.powershell.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ScriptAnalysisSettings;

    fn store_with_path(path: &str) -> SettingsStore {
        SettingsStore::new(LanguageServerSettings {
            script_analysis: ScriptAnalysisSettings {
                enable: Some(true),
                settings_path: Some(path.to_string()),
            },
        })
    }

    #[test]
    fn test_apply_none_keeps_state() {
        let store = store_with_path("a.psd1");
        let before = store.snapshot().unwrap();
        assert_eq!(store.apply(None).unwrap(), before);
    }

    #[test]
    fn test_apply_json_replaces_analysis() {
        let store = store_with_path("a.psd1");
        let after = store
            .apply_json(r#"{"Powershell":{"analysis":{"enabled":false}}}"#)
            .unwrap();

        assert_eq!(after.script_analysis.enable, Some(false));
        assert_eq!(after.script_analysis.settings_path, None);
        assert_eq!(store.snapshot().unwrap(), after);
    }

    #[test]
    fn test_apply_json_without_section_is_noop() {
        let store = store_with_path("a.psd1");
        let after = store.apply_json(r#"{"other":{}}"#).unwrap();
        assert_eq!(after.script_analysis.settings_path.as_deref(), Some("a.psd1"));
    }

    #[test]
    fn test_apply_json_rejects_malformed_payload() {
        let store = SettingsStore::default();
        assert!(matches!(
            store.apply_json("{not json"),
            Err(SettingsError::Payload(_))
        ));
        assert!(store.snapshot().unwrap().script_analysis.is_enabled());
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let store = std::sync::Arc::new(SettingsStore::default());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let payload = format!(
                        r#"{{"Powershell":{{"analysis":{{"enabled":true,"settingsPath":"{}.psd1"}}}}}}"#,
                        i
                    );
                    store.apply_json(&payload).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let path = store.snapshot().unwrap().script_analysis.settings_path.unwrap();
        assert!(path.ends_with(".psd1"));
    }
}
