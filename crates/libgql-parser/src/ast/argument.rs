use crate::ast::ast_node::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::source::Span;
use inherent::inherent;

/// A `name: value` pair in a field's or directive's argument list.
#[derive(Clone, Debug)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: Span,
}

#[inherent]
impl AstNode for Argument {
    pub fn span(&self) -> Span {
        self.span
    }
}
