//! Symbol model definitions
//!
//! A symbol reference describes one named occurrence in a script, either a
//! usage site (the query) or a declaration site (the lookup result).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::extent::ScriptExtent;

/// Declarable symbol classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Variable,
    Parameter,
    Class,
    Enum,
    Property,
}

impl SymbolKind {
    /// All valid kind names for error messages
    pub fn all_kind_names() -> &'static [&'static str] {
        &["function", "variable", "parameter", "class", "enum", "property"]
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Parameter => "parameter",
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Property => "property",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SymbolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "function" | "fn" => Ok(Self::Function),
            "variable" | "var" => Ok(Self::Variable),
            "parameter" | "param" => Ok(Self::Parameter),
            "class" => Ok(Self::Class),
            "enum" => Ok(Self::Enum),
            "property" => Ok(Self::Property),
            _ => Err(format!(
                "Unknown symbol kind: {}. Expected one of: {}",
                s,
                Self::all_kind_names().join(", ")
            )),
        }
    }
}

/// A named occurrence of a symbol in a script
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolReference {
    pub kind: SymbolKind,
    pub extent: ScriptExtent,
    #[serde(default)]
    pub display_name: String,
}

impl SymbolReference {
    pub fn new(kind: SymbolKind, extent: ScriptExtent, display_name: impl Into<String>) -> Self {
        Self {
            kind,
            extent,
            display_name: display_name.into(),
        }
    }

    /// Query for `name` without a source position; the name is used both as
    /// extent text and as display name
    pub fn named(kind: SymbolKind, name: &str) -> Self {
        Self::new(kind, ScriptExtent::new(1, 1, name), name)
    }

    /// Textual identity: equal kinds and equal extent text.
    ///
    /// Not scope aware; two unrelated `$x` in different functions are the same symbol.
    pub fn same_symbol(&self, other: &SymbolReference) -> bool {
        self.kind == other.kind && self.extent.text == other.extent.text
    }

    /// Display name, falling back to the extent text when unnamed
    pub fn name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.extent.text
        } else {
            &self.display_name
        }
    }
}

impl fmt::Display for SymbolReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.kind, self.name(), self.extent)
    }
}
