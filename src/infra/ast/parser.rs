//! Shell script parser
//!
//! Parses scripts with tree-sitter-bash and lowers the concrete tree into a
//! [`ScriptAst`]. Columns are converted from tree-sitter byte columns to
//! 1-indexed character columns.

use std::path::Path;
use std::sync::Mutex;

use tree_sitter::{Language, Node, Parser, Point, Tree};

use super::node_types::{self, NodeRole};
use crate::error::ParseError;
use crate::models::ast::ScriptAst;
use crate::models::extent::ScriptExtent;
use crate::models::symbol::{SymbolKind, SymbolReference};

pub struct ScriptParser {
    parser: Mutex<Parser>,
    max_file_size: u64,
}

impl ScriptParser {
    pub fn new() -> Result<Self, ParseError> {
        Self::with_limit(crate::config::max_file_size_bytes())
    }

    pub fn with_limit(max_file_size: u64) -> Result<Self, ParseError> {
        Ok(Self {
            parser: Mutex::new(Self::create_parser(tree_sitter_bash::LANGUAGE.into())?),
            max_file_size,
        })
    }

    fn create_parser(language: Language) -> Result<Parser, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Grammar(e.to_string()))?;
        Ok(parser)
    }

    pub fn parse(&self, source: impl Into<String>) -> Result<ScriptDocument, ParseError> {
        let source = source.into();

        let tree = {
            let mut parser = self
                .parser
                .lock()
                .map_err(|_| ParseError::Failed("Parser lock poisoned".to_string()))?;
            parser
                .parse(&source, None)
                .ok_or_else(|| ParseError::Failed("Parser returned no tree".to_string()))?
        };

        if tree.root_node().has_error() {
            tracing::debug!("Script contains syntax errors; lowering recovered tree");
        }

        let ast = lower(tree.root_node(), &source);
        Ok(ScriptDocument { source, tree, ast })
    }

    pub fn parse_file(&self, path: &Path) -> Result<ScriptDocument, ParseError> {
        let size = std::fs::metadata(path)?.len();
        if size > self.max_file_size {
            tracing::warn!(
                "Skipping large file ({}MB): {}",
                size / 1024 / 1024,
                path.display()
            );
            return Err(ParseError::file_too_large(path, size, self.max_file_size));
        }

        let content = std::fs::read_to_string(path)?;
        self.parse(content)
    }
}

/// A parsed script: source text, concrete tree, and lowered AST
pub struct ScriptDocument {
    source: String,
    tree: Tree,
    ast: ScriptAst,
}

impl ScriptDocument {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &ScriptAst {
        &self.ast
    }

    /// Symbol under the cursor at 1-indexed `line:column`, as a lookup query
    pub fn symbol_at(&self, line: u32, column: u32) -> Option<SymbolReference> {
        let point = self.point_at(line, column)?;
        let node = self
            .tree
            .root_node()
            .named_descendant_for_point_range(point, point)?;

        let (kind, node) = self.classify(node)?;
        let extent = extent_of(node, &self.source);
        let display_name = extent.text.clone();

        tracing::debug!("Symbol at {}:{}: {} {}", line, column, kind, display_name);
        Some(SymbolReference::new(kind, extent, display_name))
    }

    fn classify<'t>(&self, node: Node<'t>) -> Option<(SymbolKind, Node<'t>)> {
        match node_types::role_of(node.kind()) {
            Some(NodeRole::Variable) => return Some((SymbolKind::Variable, node)),
            Some(NodeRole::Expansion) => {
                let mut cursor = node.walk();
                let variable = node
                    .named_children(&mut cursor)
                    .find(|c| c.kind() == node_types::VARIABLE_NAME)?;
                return Some((SymbolKind::Variable, variable));
            }
            Some(NodeRole::CommandName) => return Some((SymbolKind::Function, node)),
            _ => {}
        }

        let parent = node.parent()?;
        match node_types::role_of(parent.kind()) {
            Some(NodeRole::CommandName) => Some((SymbolKind::Function, node)),
            Some(NodeRole::FunctionDefinition)
                if parent.child_by_field_name(node_types::NAME_FIELD) == Some(node) =>
            {
                Some((SymbolKind::Function, node))
            }
            _ => None,
        }
    }

    fn point_at(&self, line: u32, column: u32) -> Option<Point> {
        let row = line.checked_sub(1)? as usize;
        let text = self.source.split('\n').nth(row)?;
        let byte_column = text
            .char_indices()
            .nth(column.checked_sub(1)? as usize)
            .map(|(i, _)| i)?;
        Some(Point::new(row, byte_column))
    }
}

fn lower(node: Node, source: &str) -> ScriptAst {
    let extent = extent_of(node, source);

    match node_types::role_of(node.kind()) {
        Some(NodeRole::FunctionDefinition) => {
            match node.child_by_field_name(node_types::NAME_FIELD) {
                Some(name) => ScriptAst::function(extent, text_of(name, source), lower_children(node, source)),
                // error recovery can produce a nameless definition
                None => ScriptAst::other(extent, lower_children(node, source)).with_label(node.kind()),
            }
        }
        Some(NodeRole::Variable) => ScriptAst::variable(extent),
        _ => ScriptAst::other(extent, lower_children(node, source)).with_label(node.kind()),
    }
}

fn lower_children(node: Node, source: &str) -> Vec<ScriptAst> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| lower(child, source))
        .collect()
}

fn text_of<'s>(node: Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn extent_of(node: Node, source: &str) -> ScriptExtent {
    let start = node.start_position();
    let line_start = node.start_byte() - start.column;
    let column = source
        .get(line_start..node.start_byte())
        .map_or(start.column, |prefix| prefix.chars().count()) as u32
        + 1;

    ScriptExtent::new(start.row as u32 + 1, column, text_of(node, source))
}
