use crate::ast::ast_node::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::source::Span;
use inherent::inherent;

/// An inline fragment: `... on Type { ... }` (the type condition is
/// optional).
#[derive(Clone, Debug)]
pub struct InlineFragment {
    pub type_condition: Option<Name>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: Span,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn span(&self) -> Span {
        self.span
    }
}
