//! Declaration lookup
//!
//! Walks a script tree in document order and stops at the first node that
//! declares the queried symbol. Matching is purely textual: kinds must be
//! equal and names must be equal, with no notion of scope.

use crate::error::FinderError;
use crate::models::ast::{AstVisitor, ScriptAst, VisitAction};
use crate::models::extent::ScriptExtent;
use crate::models::symbol::{SymbolKind, SymbolReference};

/// Finds the declaration of one symbol in a script tree
///
/// The finder only holds the query, so one instance can be reused across
/// trees and shared between threads.
#[derive(Debug, Clone)]
pub struct DeclarationFinder {
    query: SymbolReference,
}

impl DeclarationFinder {
    pub fn new(query: SymbolReference) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &SymbolReference {
        &self.query
    }

    /// Find the first declaration of the query symbol under `root`.
    ///
    /// Returns `Ok(None)` when nothing in the tree declares the symbol, and an
    /// error only when the tree itself is inconsistent.
    pub fn find(&self, root: &ScriptAst) -> Result<Option<SymbolReference>, FinderError> {
        let found = root.walk(self).transpose()?;

        match &found {
            Some(declaration) => tracing::debug!("Declaration of {} found at {}", self.query.name(), declaration.extent),
            None => tracing::debug!("No declaration of {} in {} nodes", self.query.name(), root.len()),
        }

        Ok(found)
    }
}

impl AstVisitor for DeclarationFinder {
    type Output = Result<SymbolReference, FinderError>;

    fn visit_function_definition(&self, node: &ScriptAst, name: &str) -> VisitAction<Self::Output> {
        let name_extent = match name_extent(node, name) {
            Ok(extent) => extent,
            Err(e) => return VisitAction::Stop(Err(e)),
        };

        tracing::trace!("Function candidate {} at {}", name, name_extent);

        if self.query.kind == SymbolKind::Function && name_extent.text == self.query.extent.text {
            return VisitAction::Stop(Ok(SymbolReference::new(
                SymbolKind::Function,
                name_extent,
                "",
            )));
        }

        VisitAction::Continue
    }

    // Compared against the query's display name, not its extent text.
    fn visit_variable_expression(&self, node: &ScriptAst) -> VisitAction<Self::Output> {
        if self.query.kind == SymbolKind::Variable && node.extent.text == self.query.display_name {
            return VisitAction::Stop(Ok(SymbolReference::new(
                SymbolKind::Variable,
                node.extent.clone(),
                "",
            )));
        }

        VisitAction::Continue
    }
}

/// Find the declaration of `query` in `root`
pub fn find_declaration(
    root: &ScriptAst,
    query: &SymbolReference,
) -> Result<Option<SymbolReference>, FinderError> {
    DeclarationFinder::new(query.clone()).find(root)
}

/// Extent of just the declared name inside a function definition.
///
/// Uses the first literal occurrence of `name` in the definition text. When
/// that occurrence sits on a later line of a multi-line definition, the
/// result moves to that line and counts its column from the line start
/// instead of keeping the definition's start line.
pub fn name_extent(node: &ScriptAst, name: &str) -> Result<ScriptExtent, FinderError> {
    let text = &node.extent.text;
    let offset = text
        .find(name)
        .filter(|_| !name.is_empty())
        .ok_or_else(|| FinderError::NameNotInExtent {
            name: name.to_string(),
            extent: node.extent.clone(),
        })?;

    let prefix = &text[..offset];
    let (line, column) = match prefix.rfind('\n') {
        Some(last_newline) => (
            node.extent.start_line + prefix.matches('\n').count() as u32,
            prefix[last_newline + 1..].chars().count() as u32 + 1,
        ),
        None => (
            node.extent.start_line,
            node.extent.start_column + prefix.chars().count() as u32,
        ),
    };

    let end_column = column + name.chars().count() as u32;
    Ok(ScriptExtent::single_line(line, column, end_column, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function_query(name: &str) -> SymbolReference {
        SymbolReference::new(SymbolKind::Function, ScriptExtent::new(20, 5, name), "")
    }

    fn variable_query(name: &str) -> SymbolReference {
        SymbolReference::new(SymbolKind::Variable, ScriptExtent::new(20, 5, name), name)
    }

    fn function_def(line: u32, text: &str, name: &str, body: Vec<ScriptAst>) -> ScriptAst {
        ScriptAst::function(ScriptExtent::new(line, 1, text), name, body)
    }

    fn variable(line: u32, column: u32, text: &str) -> ScriptAst {
        ScriptAst::variable(ScriptExtent::new(line, column, text))
    }

    fn script(children: Vec<ScriptAst>) -> ScriptAst {
        ScriptAst::other(ScriptExtent::new(1, 1, "<script>"), children)
    }

    /// ```text
    /// 1: $bar = 1
    /// 2:
    /// 3: function Foo { }
    /// 4: function Outer { function Inner { $baz } }
    /// ```
    fn sample() -> ScriptAst {
        script(vec![
            ScriptAst::other(ScriptExtent::new(1, 1, "$bar = 1"), vec![variable(1, 1, "$bar")]),
            function_def(3, "function Foo { }", "Foo", vec![]),
            function_def(
                4,
                "function Outer { function Inner { $baz } }",
                "Outer",
                vec![ScriptAst::function(
                    ScriptExtent::new(4, 18, "function Inner { $baz }"),
                    "Inner",
                    vec![variable(4, 35, "$baz")],
                )],
            ),
        ])
    }

    #[test]
    fn test_function_name_extent_is_narrowed() {
        let found = find_declaration(&sample(), &function_query("Foo")).unwrap().unwrap();

        assert_eq!(found.kind, SymbolKind::Function);
        assert_eq!(found.extent, ScriptExtent::single_line(3, 10, 13, "Foo"));
        assert_eq!(found.display_name, "");
    }

    #[test]
    fn test_function_span_within_declaration() {
        let tree = sample();
        let found = find_declaration(&tree, &function_query("Outer")).unwrap().unwrap();
        let declaration = &tree.children()[2].extent;

        assert_eq!(found.extent.text, "Outer");
        assert!(found.extent.start_column > declaration.start_column);
        assert!(found.extent.end_column < declaration.end_column);
    }

    #[test]
    fn test_nested_function_found_after_near_miss() {
        let found = find_declaration(&sample(), &function_query("Inner")).unwrap().unwrap();
        assert_eq!(found.extent, ScriptExtent::single_line(4, 27, 32, "Inner"));
    }

    #[test]
    fn test_variable_returns_node_extent() {
        let found = find_declaration(&sample(), &variable_query("$bar")).unwrap().unwrap();

        assert_eq!(found.kind, SymbolKind::Variable);
        assert_eq!(found.extent, ScriptExtent::new(1, 1, "$bar"));
        assert_eq!(found.display_name, "");
    }

    #[test]
    fn test_variable_inside_function_body() {
        let found = find_declaration(&sample(), &variable_query("$baz")).unwrap().unwrap();
        assert_eq!(found.extent, ScriptExtent::new(4, 35, "$baz"));
    }

    #[test]
    fn test_missing_variable_is_absent() {
        assert_eq!(find_declaration(&sample(), &variable_query("$missing")).unwrap(), None);
    }

    #[test]
    fn test_missing_function_is_absent() {
        assert_eq!(find_declaration(&sample(), &function_query("Nope")).unwrap(), None);
    }

    #[test]
    fn test_first_declaration_wins() {
        let tree = script(vec![
            function_def(2, "function Dup { 1 }", "Dup", vec![]),
            function_def(9, "function Dup { 2 }", "Dup", vec![]),
        ]);

        let found = find_declaration(&tree, &function_query("Dup")).unwrap().unwrap();
        assert_eq!(found.extent.start_line, 2);
    }

    #[test]
    fn test_function_matches_on_extent_text_not_display_name() {
        let query = SymbolReference::new(SymbolKind::Function, ScriptExtent::new(1, 1, "Foo"), "Other");
        assert!(find_declaration(&sample(), &query).unwrap().is_some());

        let query = SymbolReference::new(SymbolKind::Function, ScriptExtent::new(1, 1, "Other"), "Foo");
        assert!(find_declaration(&sample(), &query).unwrap().is_none());
    }

    #[test]
    fn test_variable_matches_on_display_name_not_extent_text() {
        let query = SymbolReference::new(SymbolKind::Variable, ScriptExtent::new(1, 1, "$zzz"), "$bar");
        assert!(find_declaration(&sample(), &query).unwrap().is_some());

        let query = SymbolReference::new(SymbolKind::Variable, ScriptExtent::new(1, 1, "$bar"), "");
        assert!(find_declaration(&sample(), &query).unwrap().is_none());
    }

    #[test]
    fn test_kind_must_match() {
        // A function named like a variable is never a variable declaration
        let tree = script(vec![function_def(1, "function x { }", "x", vec![]), variable(2, 1, "x")]);
        let query = SymbolReference::new(SymbolKind::Variable, ScriptExtent::new(5, 1, "x"), "x");

        let found = find_declaration(&tree, &query).unwrap().unwrap();
        assert_eq!(found.kind, SymbolKind::Variable);
        assert_eq!(found.extent.start_line, 2);
    }

    #[test]
    fn test_unhandled_kind_never_matches() {
        let query = SymbolReference::new(SymbolKind::Parameter, ScriptExtent::new(1, 1, "Foo"), "Foo");
        assert_eq!(find_declaration(&sample(), &query).unwrap(), None);
    }

    #[test]
    fn test_search_is_idempotent() {
        let tree = sample();
        let finder = DeclarationFinder::new(function_query("Inner"));
        assert_eq!(finder.find(&tree).unwrap(), finder.find(&tree).unwrap());
    }

    #[test]
    fn test_name_occurring_in_keyword_uses_first_occurrence() {
        // "fun" first occurs inside the keyword "function"
        let tree = script(vec![function_def(1, "function fun { }", "fun", vec![])]);
        let found = find_declaration(&tree, &function_query("fun")).unwrap().unwrap();
        assert_eq!(found.extent.start_column, 1);
    }

    #[test]
    fn test_name_on_later_line() {
        let node = ScriptAst::function(ScriptExtent::new(7, 3, "function\n    Spread {\n}"), "Spread", vec![]);
        let extent = name_extent(&node, "Spread").unwrap();
        assert_eq!(extent, ScriptExtent::single_line(8, 5, 11, "Spread"));
    }

    #[test]
    fn test_name_offset_counts_characters() {
        let node = ScriptAst::function(ScriptExtent::new(1, 1, "function é_x { }"), "é_x", vec![]);
        let extent = name_extent(&node, "é_x").unwrap();
        assert_eq!((extent.start_column, extent.end_column), (10, 13));
    }

    #[test]
    fn test_malformed_tree_fails_fast() {
        let tree = script(vec![
            function_def(1, "function { }", "Ghost", vec![]),
            function_def(2, "function Foo { }", "Foo", vec![]),
        ]);

        let err = find_declaration(&tree, &function_query("Foo")).unwrap_err();
        assert!(matches!(err, FinderError::NameNotInExtent { ref name, .. } if name == "Ghost"));
    }

    #[test]
    fn test_empty_function_name_is_malformed() {
        let node = ScriptAst::function(ScriptExtent::new(1, 1, "function { }"), "", vec![]);
        assert!(name_extent(&node, "").is_err());
    }

    #[test]
    fn test_finder_is_shareable_across_threads() {
        let tree = std::sync::Arc::new(sample());
        let finder = std::sync::Arc::new(DeclarationFinder::new(function_query("Foo")));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tree = tree.clone();
                let finder = finder.clone();
                std::thread::spawn(move || finder.find(&tree).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap().extent.text, "Foo");
        }
    }
}
