//! The typed, owned GraphQL AST.
//!
//! One file per node kind, mirroring the grammar. Every node carries a
//! byte-offset [`Span`](crate::Span); the [`Document`] additionally holds
//! the shared [`Source`](crate::Source) so positions can be derived from
//! any node's span.

mod argument;
mod ast_node;
mod directive_annotation;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod name;
mod operation_definition;
mod selection_set;
mod type_annotation;
mod type_system_defs;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Definition;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use name::Name;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::NonNullTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::TypeSystemDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use value::ListValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::Value;
pub use variable_definition::VariableDefinition;
