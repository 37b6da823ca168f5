//! AST parsing infrastructure for scriptnav
//!
//! Tree-sitter based parsing of shell scripts into the script AST.

pub mod node_types;
pub mod parser;

pub use node_types::{NodeRole, NodeType, role_of};
pub use parser::{ScriptDocument, ScriptParser};
