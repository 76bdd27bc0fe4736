use crate::ast::ast_node::AstNode;
use crate::source::Span;
use inherent::inherent;

/// A GraphQL name (`[_A-Za-z][_A-Za-z0-9]*`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Name {
    pub value: String,
    pub span: Span,
}

impl Name {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

#[inherent]
impl AstNode for Name {
    pub fn span(&self) -> Span {
        self.span
    }
}
