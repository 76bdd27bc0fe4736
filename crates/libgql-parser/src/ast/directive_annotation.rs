use crate::ast::ast_node::AstNode;
use crate::ast::Argument;
use crate::ast::Name;
use crate::source::Span;
use inherent::inherent;

/// A `@directive(args...)` annotation attached to a definition, field, or
/// fragment.
#[derive(Clone, Debug)]
pub struct DirectiveAnnotation {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

impl DirectiveAnnotation {
    /// Looks up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.as_str() == name)
    }
}

#[inherent]
impl AstNode for DirectiveAnnotation {
    pub fn span(&self) -> Span {
        self.span
    }
}
