use crate::source::Span;

/// Common surface for all AST nodes.
///
/// Implemented with [`inherent::inherent`] on each node struct so the span
/// accessor is callable without importing this trait.
pub trait AstNode {
    /// The byte range this node covers in its source document.
    fn span(&self) -> Span;
}
