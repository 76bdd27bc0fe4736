//! Type-system definition nodes.
//!
//! These parse for completeness (a mixed document is not a grammar error)
//! but are never executed; the `ExecutableDefinitions` validation rule
//! rejects them in request documents.

use crate::ast::ast_node::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::source::Span;
use inherent::inherent;

#[derive(Clone, Debug)]
pub enum TypeSystemDefinition {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
}

impl TypeSystemDefinition {
    pub fn span(&self) -> Span {
        match self {
            TypeSystemDefinition::Schema(def) => def.span,
            TypeSystemDefinition::Type(def) => def.span(),
            TypeSystemDefinition::Directive(def) => def.span,
        }
    }
}

/// `schema { query: Query ... }`
#[derive(Clone, Debug)]
pub struct SchemaDefinition {
    pub directives: Vec<DirectiveAnnotation>,
    pub operation_types: Vec<RootOperationTypeDefinition>,
    pub span: Span,
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn span(&self) -> Span {
        self.span
    }
}

/// One `query: TypeName` entry in a schema definition.
#[derive(Clone, Debug)]
pub struct RootOperationTypeDefinition {
    pub operation: OperationKind,
    pub named_type: Name,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &Name {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TypeDefinition::Scalar(def) => def.span,
            TypeDefinition::Object(def) => def.span,
            TypeDefinition::Interface(def) => def.span,
            TypeDefinition::Union(def) => def.span,
            TypeDefinition::Enum(def) => def.span,
            TypeDefinition::InputObject(def) => def.span,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScalarTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct ObjectTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub interfaces: Vec<Name>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct InterfaceTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct UnionTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<Name>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct EnumTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValueDefinition>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct InputObjectTypeDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
    pub span: Span,
}

/// A field definition inside an object or interface type definition.
#[derive(Clone, Debug)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: Span,
}

/// An argument or input-field definition: `name: Type = default @dir`.
#[derive(Clone, Debug)]
pub struct InputValueDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: Span,
}

/// `directive @name(args...) on LOCATION | ...`
#[derive(Clone, Debug)]
pub struct DirectiveDefinition {
    pub description: Option<String>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<Name>,
    pub span: Span,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn span(&self) -> Span {
        self.span
    }
}
