//! Script syntax tree
//!
//! A parser-independent tree over a script. Only the node shapes that can
//! declare a symbol are distinguished; everything else is `Other`.

use serde::{Deserialize, Serialize};

use super::extent::ScriptExtent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptAst {
    pub extent: ScriptExtent,
    pub node: AstNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AstNode {
    /// `function Foo { ... }` / `foo() { ... }`; the extent covers the whole definition
    FunctionDefinition { name: String, body: Vec<ScriptAst> },
    /// A variable occurrence; a leaf
    VariableExpression,
    /// Any other syntax, optionally with a label from the producing parser
    Other {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        children: Vec<ScriptAst>,
    },
}

impl ScriptAst {
    pub fn function(extent: ScriptExtent, name: impl Into<String>, body: Vec<ScriptAst>) -> Self {
        Self {
            extent,
            node: AstNode::FunctionDefinition {
                name: name.into(),
                body,
            },
        }
    }

    pub fn variable(extent: ScriptExtent) -> Self {
        Self {
            extent,
            node: AstNode::VariableExpression,
        }
    }

    pub fn other(extent: ScriptExtent, children: Vec<ScriptAst>) -> Self {
        Self {
            extent,
            node: AstNode::Other {
                label: None,
                children,
            },
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        if let AstNode::Other { label: slot, .. } = &mut self.node {
            *slot = Some(label.into());
        }
        self
    }

    pub fn children(&self) -> &[ScriptAst] {
        match &self.node {
            AstNode::FunctionDefinition { body, .. } => body,
            AstNode::VariableExpression => &[],
            AstNode::Other { children, .. } => children,
        }
    }

    /// Total node count including `self`
    pub fn len(&self) -> usize {
        1 + self.children().iter().map(ScriptAst::len).sum::<usize>()
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Walk the tree in document pre-order, stopping at the first `Stop`
    pub fn walk<V: AstVisitor>(&self, visitor: &V) -> Option<V::Output> {
        let action = match &self.node {
            AstNode::FunctionDefinition { name, .. } => {
                visitor.visit_function_definition(self, name)
            }
            AstNode::VariableExpression => visitor.visit_variable_expression(self),
            AstNode::Other { .. } => visitor.visit_other(self),
        };

        match action {
            VisitAction::Stop(output) => Some(output),
            VisitAction::SkipChildren => None,
            VisitAction::Continue => self
                .children()
                .iter()
                .find_map(|child| child.walk(visitor)),
        }
    }
}

/// Per-node traversal decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitAction<T> {
    /// Descend into children, then siblings
    Continue,
    /// Do not descend; move on to siblings
    SkipChildren,
    /// End the whole traversal with a result
    Stop(T),
}

/// Shape-specific hooks for [`ScriptAst::walk`]
///
/// Visitors take `&self`: any result is carried out through [`VisitAction::Stop`].
pub trait AstVisitor {
    type Output;

    fn visit_function_definition(&self, _node: &ScriptAst, _name: &str) -> VisitAction<Self::Output> {
        VisitAction::Continue
    }

    fn visit_variable_expression(&self, _node: &ScriptAst) -> VisitAction<Self::Output> {
        VisitAction::Continue
    }

    fn visit_other(&self, _node: &ScriptAst) -> VisitAction<Self::Output> {
        VisitAction::Continue
    }
}
