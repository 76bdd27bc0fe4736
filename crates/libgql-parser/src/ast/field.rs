use crate::ast::ast_node::AstNode;
use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::source::Span;
use inherent::inherent;

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection set.
#[derive(Clone, Debug)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
    pub span: Span,
}

impl Field {
    /// The key this field's value appears under in the response: the alias
    /// when present, the field name otherwise.
    pub fn response_key(&self) -> &str {
        self.alias
            .as_ref()
            .map(Name::as_str)
            .unwrap_or_else(|| self.name.as_str())
    }
}

#[inherent]
impl AstNode for Field {
    pub fn span(&self) -> Span {
        self.span
    }
}
