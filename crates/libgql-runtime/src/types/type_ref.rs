use crate::schema::Schema;
use crate::types::GraphQLType;

/// A reference to a type as used by field, argument, and member positions.
///
/// `Direct` embeds the referenced type value; `Named` is a lazy-resolution
/// node resolved against the finalized schema's type table, which is how
/// cyclic references are written without cyclic construction. `List` and
/// `NonNull` are the standard wrappers; `NonNull` wrapping `NonNull` is a
/// schema-construction error.
#[derive(Clone, Debug)]
pub enum TypeRef {
    Direct(GraphQLType),
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: impl Into<TypeRef>) -> Self {
        TypeRef::List(Box::new(inner.into()))
    }

    pub fn non_null(inner: impl Into<TypeRef>) -> Self {
        TypeRef::NonNull(Box::new(inner.into()))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Strips one `NonNull` wrapper, if present.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            TypeRef::NonNull(inner) => inner,
            other => other,
        }
    }

    /// The name of the innermost named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeRef::Direct(ty) => ty.name(),
            TypeRef::Named(name) => name.as_str(),
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.innermost_name(),
        }
    }

    /// Resolves the innermost named type against `schema`.
    pub fn innermost_type<'s>(&self, schema: &'s Schema) -> Option<&'s GraphQLType> {
        schema.type_named(self.innermost_name())
    }

    /// Whether two references are structurally equal: same wrappers, same
    /// innermost type name.
    pub fn is_equal(&self, other: &TypeRef) -> bool {
        match (self, other) {
            (TypeRef::List(a), TypeRef::List(b)) => a.is_equal(b),
            (TypeRef::NonNull(a), TypeRef::NonNull(b)) => a.is_equal(b),
            (TypeRef::List(_) | TypeRef::NonNull(_), _)
            | (_, TypeRef::List(_) | TypeRef::NonNull(_)) => false,
            (a, b) => a.innermost_name() == b.innermost_name(),
        }
    }
}

impl std::convert::From<GraphQLType> for TypeRef {
    fn from(ty: GraphQLType) -> Self {
        TypeRef::Direct(ty)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Direct(ty) => f.write_str(ty.name()),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
