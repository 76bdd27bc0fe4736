use crate::ast::ast_node::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::source::Span;
use inherent::inherent;

/// A named fragment: `fragment Name on Type { ... }`.
#[derive(Clone, Debug)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn span(&self) -> Span {
        self.span
    }
}
