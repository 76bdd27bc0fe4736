//! The GraphQL type system: scalars, objects, interfaces, unions, enums,
//! input objects, plus the lazy reference machinery that lets cyclic
//! schemas be described without cyclic construction.
//!
//! Types are built through configuration factories (`ObjectType::new`,
//! `EnumType::new`, ...). Factories never fail: invalid configuration is
//! captured inside the type value and surfaced once by
//! [`Schema::new`](crate::Schema::new).

mod applied_directive;
mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod interface_type;
mod lazy;
mod object_type;
mod scalar_type;
mod type_ref;
mod union_type;

pub use applied_directive::AppliedDirective;
pub use applied_directive::DirectiveArgument;
pub use directive::Directive;
pub use directive::DirectiveConfig;
pub use directive::DirectiveLocation;
pub use directive::deprecated_directive;
pub use directive::include_directive;
pub use directive::omit_empty_directive;
pub use directive::skip_directive;
pub use directive::specified_directives;
pub use directive::DEFAULT_DEPRECATION_REASON;
pub use enum_type::EnumType;
pub use enum_type::EnumTypeConfig;
pub use enum_type::EnumValueDef;
pub use field::ArgumentDef;
pub use field::FieldDef;
pub use field::Fields;
pub use graphql_type::GraphQLType;
pub use graphql_type::TypeKind;
pub use input_object_type::InputFieldDef;
pub use input_object_type::InputFields;
pub use input_object_type::InputObjectType;
pub use input_object_type::InputObjectTypeConfig;
pub use interface_type::InterfaceType;
pub use interface_type::InterfaceTypeConfig;
pub use lazy::Lazy;
pub use object_type::ObjectType;
pub use object_type::ObjectTypeConfig;
pub use scalar_type::scalars;
pub use scalar_type::ParseLiteralFn;
pub use scalar_type::ParseValueFn;
pub use scalar_type::ScalarType;
pub use scalar_type::ScalarTypeConfig;
pub use scalar_type::SerializeFn;
pub use type_ref::TypeRef;
pub use union_type::UnionType;
pub use union_type::UnionTypeConfig;
