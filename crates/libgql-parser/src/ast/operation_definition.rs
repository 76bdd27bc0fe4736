use crate::ast::ast_node::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::source::Span;
use inherent::inherent;

/// A `query` / `mutation` / `subscription` operation, named or anonymous.
///
/// Anonymous shorthand (`{ field }`) parses as a query with no name and no
/// variable definitions.
#[derive(Clone, Debug)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn span(&self) -> Span {
        self.span
    }
}

/// Which of the three operation types an [`OperationDefinition`] is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
