use crate::ast::ast_node::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::source::Span;
use inherent::inherent;

/// A `...FragmentName` spread.
#[derive(Clone, Debug)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: Span,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn span(&self) -> Span {
        self.span
    }
}
