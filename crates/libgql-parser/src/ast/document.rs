use crate::ast::ast_node::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::TypeSystemDefinition;
use crate::source::Source;
use crate::source::Span;
use inherent::inherent;
use std::sync::Arc;

/// A parsed GraphQL document: zero or more definitions plus a handle to the
/// source text they were parsed from.
#[derive(Clone, Debug)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub source: Arc<Source>,
    pub span: Span,
}

impl Document {
    /// Iterates the executable operation definitions in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    /// Iterates the fragment definitions in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }
}

#[inherent]
impl AstNode for Document {
    pub fn span(&self) -> Span {
        self.span
    }
}

/// A top-level definition within a [`Document`].
#[derive(Clone, Debug)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    /// Type-system definitions parse for completeness but are never
    /// executed; validation rejects them in executable documents.
    TypeSystem(TypeSystemDefinition),
}
