use crate::ast::ast_node::AstNode;
use crate::ast::Name;
use crate::source::Span;
use inherent::inherent;

/// A type reference as written in a document: `Name`, `[Inner]`, or
/// `Inner!`.
///
/// The grammar guarantees `NonNull` never wraps `NonNull`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(NamedTypeAnnotation),
    List(ListTypeAnnotation),
    NonNull(NonNullTypeAnnotation),
}

impl TypeAnnotation {
    pub fn span(&self) -> Span {
        match self {
            TypeAnnotation::Named(named) => named.name.span,
            TypeAnnotation::List(list) => list.span,
            TypeAnnotation::NonNull(non_null) => non_null.span,
        }
    }

    /// The innermost named type this annotation bottoms out at.
    pub fn innermost_name(&self) -> &Name {
        match self {
            TypeAnnotation::Named(named) => &named.name,
            TypeAnnotation::List(list) => list.inner.innermost_name(),
            TypeAnnotation::NonNull(non_null) => non_null.inner.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::Named(named) => f.write_str(named.name.as_str()),
            TypeAnnotation::List(list) => write!(f, "[{}]", list.inner),
            TypeAnnotation::NonNull(non_null) => write!(f, "{}!", non_null.inner),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub name: Name,
}

#[inherent]
impl AstNode for NamedTypeAnnotation {
    pub fn span(&self) -> Span {
        self.name.span
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub inner: Box<TypeAnnotation>,
    pub span: Span,
}

#[inherent]
impl AstNode for ListTypeAnnotation {
    pub fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullTypeAnnotation {
    pub inner: Box<TypeAnnotation>,
    pub span: Span,
}

#[inherent]
impl AstNode for NonNullTypeAnnotation {
    pub fn span(&self) -> Span {
        self.span
    }
}
