use crate::schema::SchemaBuildError;
use crate::types::AppliedDirective;
use crate::types::EnumType;
use crate::types::Fields;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::sync::Arc;

/// A named GraphQL type. Cheap to clone: each variant is an `Arc` over the
/// immutable type value.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
    Interface(Arc<InterfaceType>),
    Union(Arc<UnionType>),
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Scalar(ty) => ty.name(),
            GraphQLType::Object(ty) => ty.name(),
            GraphQLType::Interface(ty) => ty.name(),
            GraphQLType::Union(ty) => ty.name(),
            GraphQLType::Enum(ty) => ty.name(),
            GraphQLType::InputObject(ty) => ty.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Scalar(ty) => ty.description(),
            GraphQLType::Object(ty) => ty.description(),
            GraphQLType::Interface(ty) => ty.description(),
            GraphQLType::Union(ty) => ty.description(),
            GraphQLType::Enum(ty) => ty.description(),
            GraphQLType::InputObject(ty) => ty.description(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            GraphQLType::Scalar(_) => TypeKind::Scalar,
            GraphQLType::Object(_) => TypeKind::Object,
            GraphQLType::Interface(_) => TypeKind::Interface,
            GraphQLType::Union(_) => TypeKind::Union,
            GraphQLType::Enum(_) => TypeKind::Enum,
            GraphQLType::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Scalars, enums, and input objects may appear in input positions.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Scalar(_) | GraphQLType::Enum(_) | GraphQLType::InputObject(_),
        )
    }

    /// Everything except input objects may appear in output positions.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, GraphQLType::InputObject(_))
    }

    /// Scalars and enums complete through `serialize`.
    pub fn is_leaf_type(&self) -> bool {
        matches!(self, GraphQLType::Scalar(_) | GraphQLType::Enum(_))
    }

    /// Objects, interfaces, and unions carry selection sets.
    pub fn is_composite_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Object(_) | GraphQLType::Interface(_) | GraphQLType::Union(_),
        )
    }

    /// Interfaces and unions resolve to a concrete object at runtime.
    pub fn is_abstract_type(&self) -> bool {
        matches!(self, GraphQLType::Interface(_) | GraphQLType::Union(_))
    }

    /// The field table, for objects and interfaces.
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            GraphQLType::Object(ty) => Some(ty.fields()),
            GraphQLType::Interface(ty) => Some(ty.fields()),
            _ => None,
        }
    }

    pub fn applied_directives(&self) -> &[AppliedDirective] {
        match self {
            GraphQLType::Scalar(ty) => ty.applied_directives(),
            GraphQLType::Object(ty) => ty.applied_directives(),
            GraphQLType::Interface(ty) => ty.applied_directives(),
            GraphQLType::Union(ty) => ty.applied_directives(),
            GraphQLType::Enum(ty) => ty.applied_directives(),
            GraphQLType::InputObject(ty) => ty.applied_directives(),
        }
    }

    /// The configuration error captured by this type's factory, if any.
    pub(crate) fn config_error(&self) -> Option<&SchemaBuildError> {
        match self {
            GraphQLType::Scalar(ty) => ty.config_error(),
            GraphQLType::Object(ty) => ty.config_error(),
            GraphQLType::Interface(ty) => ty.config_error(),
            GraphQLType::Union(ty) => ty.config_error(),
            GraphQLType::Enum(ty) => ty.config_error(),
            GraphQLType::InputObject(ty) => ty.config_error(),
        }
    }

    /// Identity comparison: two handles to the same type value.
    pub fn ptr_eq(&self, other: &GraphQLType) -> bool {
        match (self, other) {
            (GraphQLType::Scalar(a), GraphQLType::Scalar(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Object(a), GraphQLType::Object(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Interface(a), GraphQLType::Interface(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Union(a), GraphQLType::Union(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Enum(a), GraphQLType::Enum(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::InputObject(a), GraphQLType::InputObject(b)) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        match self {
            GraphQLType::Object(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&Arc<InterfaceType>> {
        match self {
            GraphQLType::Interface(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&Arc<UnionType>> {
        match self {
            GraphQLType::Union(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        match self {
            GraphQLType::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Arc<ScalarType>> {
        match self {
            GraphQLType::Scalar(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&Arc<InputObjectType>> {
        match self {
            GraphQLType::InputObject(ty) => Some(ty),
            _ => None,
        }
    }
}

/// The `__TypeKind` classification of a [`GraphQLType`] or wrapper.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }
}
