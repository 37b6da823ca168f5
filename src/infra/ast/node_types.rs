//! Tree-sitter Node Type Mappings
//!
//! Bash node types (tree-sitter-bash `src/node-types.json`) that matter when
//! lowering a concrete syntax tree to a [`ScriptAst`](crate::models::ast::ScriptAst).

/// How a concrete node is treated during lowering and cursor lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Lowered to a function definition
    FunctionDefinition,
    /// Lowered to a variable expression
    Variable,
    /// `$name` / `${name}`; the variable itself is a child
    Expansion,
    /// Head of a command; names a function at a call site
    CommandName,
}

/// Node type mapping entry
#[derive(Debug, Clone, Copy)]
pub struct NodeType {
    pub role: NodeRole,
    /// Actual tree-sitter node type
    pub node_type: &'static str,
}

impl NodeType {
    const fn new(role: NodeRole, node_type: &'static str) -> Self {
        Self { role, node_type }
    }
}

pub const FUNCTION_DEFINITION: &str = "function_definition";
pub const VARIABLE_NAME: &str = "variable_name";
pub const COMMAND_NAME: &str = "command_name";

/// Field holding the declared name of a `function_definition`
pub const NAME_FIELD: &str = "name";

const BASH: &[NodeType] = &[
    // my_func() {}
    NodeType::new(NodeRole::FunctionDefinition, FUNCTION_DEFINITION),
    // VAR=value
    NodeType::new(NodeRole::Variable, VARIABLE_NAME),
    // $VAR
    NodeType::new(NodeRole::Expansion, "simple_expansion"),
    // ${VAR:-x}
    NodeType::new(NodeRole::Expansion, "expansion"),
    // my_func arg
    NodeType::new(NodeRole::CommandName, COMMAND_NAME),
];

/// Role of a tree-sitter node kind, if it has one
pub fn role_of(kind: &str) -> Option<NodeRole> {
    BASH.iter().find(|n| n.node_type == kind).map(|n| n.role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_of() {
        assert_eq!(role_of("function_definition"), Some(NodeRole::FunctionDefinition));
        assert_eq!(role_of("variable_name"), Some(NodeRole::Variable));
        assert_eq!(role_of("simple_expansion"), Some(NodeRole::Expansion));
        assert_eq!(role_of("command_name"), Some(NodeRole::CommandName));
        assert_eq!(role_of("if_statement"), None);
    }

    #[test]
    fn test_node_types_are_unique() {
        let mut kinds: Vec<_> = BASH.iter().map(|n| n.node_type).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), BASH.len());
    }
}
