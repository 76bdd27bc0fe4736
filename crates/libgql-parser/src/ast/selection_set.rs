use crate::ast::ast_node::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::source::Span;
use inherent::inherent;

/// A `{ ... }` block of selections.
#[derive(Clone, Debug)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: Span,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn span(&self) -> Span {
        self.span
    }
}

/// One entry in a [`SelectionSet`].
#[derive(Clone, Debug)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn span(&self) -> Span {
        match self {
            Selection::Field(field) => field.span,
            Selection::FragmentSpread(spread) => spread.span,
            Selection::InlineFragment(inline) => inline.span,
        }
    }
}
