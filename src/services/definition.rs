//! Definition service
//!
//! Go-to-declaration over script files: parse, resolve the symbol under the
//! cursor, then run the declaration finder over the whole script.

use std::path::Path;

use serde::Serialize;

use super::declaration::DeclarationFinder;
use crate::error::ScriptnavResult;
use crate::infra::ast::ScriptParser;
use crate::models::symbol::SymbolReference;

/// Outcome of a cursor lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionLookup {
    /// Symbol under the cursor, if any
    pub query: Option<SymbolReference>,
    /// Its declaration, if the script declares it
    pub declaration: Option<SymbolReference>,
}

pub trait DefinitionService: Send + Sync {
    /// Declaration of the symbol at 1-indexed `line:column` in `file`
    fn definition_at(&self, file: &Path, line: u32, column: u32) -> ScriptnavResult<DefinitionLookup>;

    /// Declaration of an explicit query in `file`
    fn find_declaration(
        &self,
        file: &Path,
        query: &SymbolReference,
    ) -> ScriptnavResult<Option<SymbolReference>>;
}

pub struct DefaultDefinitionService {
    parser: ScriptParser,
}

impl DefaultDefinitionService {
    pub fn new(parser: ScriptParser) -> Self {
        Self { parser }
    }
}

impl DefinitionService for DefaultDefinitionService {
    fn definition_at(&self, file: &Path, line: u32, column: u32) -> ScriptnavResult<DefinitionLookup> {
        let document = self.parser.parse_file(file)?;

        let Some(query) = document.symbol_at(line, column) else {
            tracing::debug!("No symbol at {}:{}:{}", file.display(), line, column);
            return Ok(DefinitionLookup {
                query: None,
                declaration: None,
            });
        };

        let declaration = DeclarationFinder::new(query.clone()).find(document.ast())?;
        Ok(DefinitionLookup {
            query: Some(query),
            declaration,
        })
    }

    fn find_declaration(
        &self,
        file: &Path,
        query: &SymbolReference,
    ) -> ScriptnavResult<Option<SymbolReference>> {
        let document = self.parser.parse_file(file)?;
        Ok(DeclarationFinder::new(query.clone()).find(document.ast())?)
    }
}
