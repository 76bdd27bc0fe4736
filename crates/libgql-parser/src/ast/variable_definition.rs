use crate::ast::ast_node::AstNode;
use crate::ast::Name;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::source::Span;
use inherent::inherent;

/// One `$var: Type = default` entry in an operation's variable definitions.
///
/// `name` holds the variable name without the leading `$`.
#[derive(Clone, Debug)]
pub struct VariableDefinition {
    pub name: Name,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub span: Span,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn span(&self) -> Span {
        self.span
    }
}
