//! Location parsing for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// `file:line[:column]` with 1-indexed line and column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl ParsedLocation {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            bail!("Location cannot be empty");
        }

        // Split from the right so drive letters and colons in paths survive
        let segments: Vec<&str> = input.rsplitn(3, ':').collect();
        let (file, line, column) = match segments.as_slice() {
            [column, line, file] if is_number(line) && is_number(column) => (*file, *line, *column),
            _ => match input.rsplit_once(':') {
                Some((file, line)) => (file, line, "1"),
                None => bail!(
                    "Invalid location format. Expected: file:line[:column]\nExample: deploy.sh:10:5"
                ),
            },
        };

        if file.is_empty() {
            bail!("Location is missing a file path: {}", input);
        }

        Ok(Self {
            file: PathBuf::from(file),
            line: parse_position("line", line)?,
            column: parse_position("column", column)?,
        })
    }

    /// Resolve the file against the current directory
    pub fn to_absolute(&self) -> Result<Self> {
        let file = if self.file.is_absolute() {
            self.file.clone()
        } else {
            std::env::current_dir()
                .context("Failed to get current directory")?
                .join(&self.file)
        };

        let file = file
            .canonicalize()
            .with_context(|| format!("File not found: {}", self.file.display()))?;

        Ok(Self { file, ..self.clone() })
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_position(what: &str, value: &str) -> Result<u32> {
    let n: u32 = value.parse().map_err(|_| {
        anyhow::anyhow!(
            "Invalid {} number '{}': must be a positive integer (1-indexed)",
            what,
            value
        )
    })?;
    if n == 0 {
        bail!("{} number must be >= 1 (got 0). Positions are 1-indexed.", capitalize(what));
    }
    Ok(n)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let loc = ParsedLocation::parse("bin/deploy.sh:10:5").unwrap();
        assert_eq!(loc.file, PathBuf::from("bin/deploy.sh"));
        assert_eq!((loc.line, loc.column), (10, 5));
    }

    #[test]
    fn test_parse_line_only_defaults_column() {
        let loc = ParsedLocation::parse("deploy.sh:7").unwrap();
        assert_eq!((loc.line, loc.column), (7, 1));
    }

    #[test]
    fn test_parse_windows_path() {
        let loc = ParsedLocation::parse(r"C:\scripts\run.sh:3:4").unwrap();
        assert_eq!(loc.file, PathBuf::from(r"C:\scripts\run.sh"));
        assert_eq!((loc.line, loc.column), (3, 4));

        let loc = ParsedLocation::parse(r"C:\scripts\run.sh:3").unwrap();
        assert_eq!(loc.file, PathBuf::from(r"C:\scripts\run.sh"));
        assert_eq!(loc.line, 3);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(ParsedLocation::parse("").is_err());
        assert!(ParsedLocation::parse("deploy.sh").is_err());
        assert!(ParsedLocation::parse("deploy.sh:0:1").is_err());
        assert!(ParsedLocation::parse("deploy.sh:abc").is_err());
        assert!(ParsedLocation::parse(":3:1").is_err());
    }

    #[test]
    fn test_zero_column_message() {
        let err = ParsedLocation::parse("deploy.sh:1:0").unwrap_err();
        assert!(err.to_string().starts_with("Column number must be >= 1"));
    }

    #[test]
    fn test_to_absolute_missing_file() {
        let loc = ParsedLocation::parse("/definitely/not/here.sh:1:1").unwrap();
        assert!(loc.to_absolute().is_err());
    }
}
