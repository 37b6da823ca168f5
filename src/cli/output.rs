//! Output formatting for CLI commands

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Single-line JSON
    Compact,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "pretty" => Ok(Self::Json),
            "compact" | "jsonl" => Ok(Self::Compact),
            _ => Err(format!("Unknown output format: {} (expected json or compact)", s)),
        }
    }
}

/// Output context for consistent formatting across commands
#[derive(Debug, Clone)]
pub struct OutputContext {
    /// Project root for relative path calculation
    root: PathBuf,
    format: OutputFormat,
}

impl OutputContext {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Convert an absolute path to relative (if within project root)
    pub fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    }

    /// Print a successful response with flat structure (data fields at top level)
    pub fn print_success_flat<T: Serialize>(&self, data: T) {
        println!("{}", self.render_success_flat(data));
    }

    /// Print an error response
    pub fn print_error(&self, message: &str) {
        println!("{}", self.render_error(message));
    }

    fn render_success_flat<T: Serialize>(&self, data: T) -> String {
        let mut response = serde_json::to_value(data).unwrap_or(serde_json::json!({}));
        if let Some(obj) = response.as_object_mut() {
            obj.insert("success".to_string(), serde_json::json!(true));
        }
        self.render(&response)
    }

    fn render_error(&self, message: &str) -> String {
        self.render(&serde_json::json!({
            "success": false,
            "error": message
        }))
    }

    fn render(&self, value: &serde_json::Value) -> String {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        };
        rendered.unwrap_or_else(|e| format!(r#"{{"success":false,"error":"Failed to serialize output: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        let ctx = OutputContext::new(PathBuf::from("/project"));

        assert_eq!(
            ctx.relative_path(Path::new("/project/bin/deploy.sh")),
            "bin/deploy.sh"
        );

        // Path outside project stays absolute
        assert_eq!(ctx.relative_path(Path::new("/other/x.sh")), "/other/x.sh");
    }

    #[test]
    fn test_render_success_flat_adds_flag() {
        let ctx = OutputContext::new(PathBuf::from("/")).with_format(OutputFormat::Compact);
        let rendered = ctx.render_success_flat(serde_json::json!({"found": false}));
        assert_eq!(rendered, r#"{"found":false,"success":true}"#);
    }

    #[test]
    fn test_render_error() {
        let ctx = OutputContext::new(PathBuf::from("/")).with_format(OutputFormat::Compact);
        assert_eq!(ctx.render_error("boom"), r#"{"error":"boom","success":false}"#);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("compact".parse::<OutputFormat>(), Ok(OutputFormat::Compact));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
