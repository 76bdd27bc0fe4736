//! The shadow type state threaded through a validation walk.
//!
//! The walker pushes immediately before the rules' enter hooks and pops
//! immediately after their leave hooks, so hooks always observe the state
//! *at* their node: current parent type, field definition, expected input
//! type, enclosing directive, and current argument.

use crate::types::ArgumentDef;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::FieldDef;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use std::sync::Arc;

/// A field definition as seen by the walk: the defining parent type's name,
/// the field name, and the definition itself.
#[derive(Clone, Debug)]
pub(crate) struct WalkedFieldDef {
    pub(crate) parent_type_name: String,
    pub(crate) field_name: String,
    pub(crate) def: FieldDef,
}

/// The current argument: its name, and its definition when the argument is
/// known to the schema.
#[derive(Clone, Debug)]
pub(crate) struct WalkedArgument {
    pub(crate) name: String,
    pub(crate) def: Option<ArgumentDef>,
}

#[derive(Default)]
pub(crate) struct TypeInfo {
    /// Output types: operation roots, field types, fragment conditions.
    /// `None` entries mark positions the schema cannot type.
    type_stack: Vec<Option<TypeRef>>,
    /// Composite parent types, pushed at each selection set.
    parent_type_stack: Vec<Option<GraphQLType>>,
    /// Expected input types: variable definitions, arguments, and nested
    /// literal positions.
    input_type_stack: Vec<Option<TypeRef>>,
    field_def_stack: Vec<Option<WalkedFieldDef>>,
    directive: Option<Arc<Directive>>,
    directive_location: Option<DirectiveLocation>,
    argument: Option<WalkedArgument>,
}

impl TypeInfo {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The current output type (innermost pushed).
    pub(crate) fn current_type(&self) -> Option<&TypeRef> {
        self.type_stack.last().and_then(Option::as_ref)
    }

    /// The composite type enclosing the current selection.
    pub(crate) fn parent_type(&self) -> Option<&GraphQLType> {
        self.parent_type_stack.last().and_then(Option::as_ref)
    }

    /// The expected input type at the current value position.
    pub(crate) fn input_type(&self) -> Option<&TypeRef> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    pub(crate) fn field_def(&self) -> Option<&WalkedFieldDef> {
        self.field_def_stack.last().and_then(Option::as_ref)
    }

    pub(crate) fn directive(&self) -> Option<&Arc<Directive>> {
        self.directive.as_ref()
    }

    /// Where the directive currently being walked appears.
    pub(crate) fn directive_location(&self) -> Option<DirectiveLocation> {
        self.directive_location
    }

    pub(crate) fn argument(&self) -> Option<&WalkedArgument> {
        self.argument.as_ref()
    }

    // -------------------------------------------------------------------------
    // Walker-side mutations
    // -------------------------------------------------------------------------

    pub(crate) fn push_type(&mut self, ty: Option<TypeRef>) {
        self.type_stack.push(ty);
    }

    pub(crate) fn pop_type(&mut self) {
        self.type_stack.pop();
    }

    pub(crate) fn push_parent_type(&mut self, ty: Option<GraphQLType>) {
        self.parent_type_stack.push(ty);
    }

    pub(crate) fn pop_parent_type(&mut self) {
        self.parent_type_stack.pop();
    }

    pub(crate) fn push_input_type(&mut self, ty: Option<TypeRef>) {
        self.input_type_stack.push(ty);
    }

    pub(crate) fn pop_input_type(&mut self) {
        self.input_type_stack.pop();
    }

    pub(crate) fn push_field_def(&mut self, def: Option<WalkedFieldDef>) {
        self.field_def_stack.push(def);
    }

    pub(crate) fn pop_field_def(&mut self) {
        self.field_def_stack.pop();
    }

    pub(crate) fn set_directive(
        &mut self,
        directive: Option<Arc<Directive>>,
        location: Option<DirectiveLocation>,
    ) {
        self.directive = directive;
        self.directive_location = location;
    }

    pub(crate) fn set_argument(&mut self, argument: Option<WalkedArgument>) {
        self.argument = argument;
    }
}
