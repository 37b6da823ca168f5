//! Source extent model
//!
//! A span over the original script text together with the literal text it covers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Span over script source (1-indexed lines, 1-indexed line-relative columns)
///
/// Columns count characters, not bytes. `end_column` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptExtent {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub text: String,
}

impl ScriptExtent {
    /// Create an extent starting at `line:column`, deriving the end from `text`
    pub fn new(line: u32, column: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let (end_line, end_column) = end_of(line, column, &text);
        Self {
            start_line: line,
            start_column: column,
            end_line,
            end_column,
            text,
        }
    }

    /// Create a single-line extent with explicit columns
    pub fn single_line(line: u32, start_column: u32, end_column: u32, text: impl Into<String>) -> Self {
        Self {
            start_line: line,
            start_column,
            end_line: line,
            end_column,
            text: text.into(),
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// Check whether `line:column` falls inside this extent (end exclusive)
    pub fn contains(&self, line: u32, column: u32) -> bool {
        if line < self.start_line || line > self.end_line {
            return false;
        }
        if line == self.start_line && column < self.start_column {
            return false;
        }
        if line == self.end_line && column >= self.end_column {
            return false;
        }
        true
    }

    /// Length of the covered text in characters
    pub fn char_len(&self) -> u32 {
        self.text.chars().count() as u32
    }
}

fn end_of(line: u32, column: u32, text: &str) -> (u32, u32) {
    match text.rfind('\n') {
        Some(last_newline) => {
            let breaks = text.matches('\n').count() as u32;
            let tail = text[last_newline + 1..].chars().count() as u32;
            (line + breaks, tail + 1)
        }
        None => (line, column + text.chars().count() as u32),
    }
}

impl fmt::Display for ScriptExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() {
            write!(f, "{}:{}-{}", self.start_line, self.start_column, self.end_column)
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.start_line, self.start_column, self.end_line, self.end_column
            )
        }
    }
}
