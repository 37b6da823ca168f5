//! Error types for scriptnav

use std::path::PathBuf;

use thiserror::Error;

use crate::models::extent::ScriptExtent;

pub type ScriptnavResult<T> = std::result::Result<T, ScriptnavError>;

#[derive(Debug, Error)]
pub enum ScriptnavError {
    #[error("{0}")]
    Finder(#[from] FinderError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Declaration lookup failures. A missing declaration is not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinderError {
    #[error("Malformed syntax tree: function '{name}' does not occur in its own extent {extent}")]
    NameNotInExtent { name: String, extent: ScriptExtent },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to load script grammar: {0}")]
    Grammar(String),

    #[error("Failed to parse script: {0}")]
    Failed(String),

    #[error("File too large ({size_mb}MB > {limit_mb}MB limit): {}", .path.display())]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        limit_mb: u64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid settings payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Settings lock poisoned")]
    Poisoned,
}

impl ParseError {
    pub fn file_too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            size_mb: size / 1024 / 1024,
            limit_mb: limit / 1024 / 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_not_in_extent_message() {
        let err = FinderError::NameNotInExtent {
            name: "Foo".to_string(),
            extent: ScriptExtent::single_line(3, 1, 9, "function"),
        };
        assert_eq!(
            err.to_string(),
            "Malformed syntax tree: function 'Foo' does not occur in its own extent 3:1-9"
        );
    }

    #[test]
    fn test_file_too_large_rounds_to_megabytes() {
        let err = ParseError::file_too_large("big.sh", 12 * 1024 * 1024, 5 * 1024 * 1024);
        assert_eq!(
            err.to_string(),
            "File too large (12MB > 5MB limit): big.sh"
        );
    }

    #[test]
    fn test_errors_fold_into_top_level() {
        let err: ScriptnavError = ConfigError::Parse("config.toml: expected `]`".to_string()).into();
        assert!(matches!(err, ScriptnavError::Config(ConfigError::Parse(_))));
        assert_eq!(err.to_string(), "Config parse error: config.toml: expected `]`");
    }
}
