use crate::resolver::IsTypeOfFn;
use crate::schema::name_config_error;
use crate::schema::SchemaBuildError;
use crate::types::AppliedDirective;
use crate::types::Fields;
use crate::types::GraphQLType;
use crate::types::Lazy;
use crate::types::TypeRef;
use std::sync::Arc;

/// Configuration for [`ObjectType::new`].
///
/// `fields` and `interfaces` accept an eager table ([`Lazy::value`]) or a
/// thunk ([`Lazy::thunk`]) for cyclic schemas.
pub struct ObjectTypeConfig {
    pub name: String,
    pub description: Option<String>,
    pub fields: Lazy<Fields>,
    pub interfaces: Lazy<Vec<TypeRef>>,
    pub is_type_of: Option<IsTypeOfFn>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl std::default::Default for ObjectTypeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            fields: Lazy::default(),
            interfaces: Lazy::default(),
            is_type_of: None,
            applied_directives: vec![],
        }
    }
}

/// An object type: a named, ordered set of output fields, optionally
/// implementing interfaces.
pub struct ObjectType {
    name: String,
    description: Option<String>,
    fields: Lazy<Fields>,
    interfaces: Lazy<Vec<TypeRef>>,
    is_type_of: Option<IsTypeOfFn>,
    applied_directives: Vec<AppliedDirective>,
    config_error: Option<SchemaBuildError>,
}

impl ObjectType {
    /// Configuration factory. Never fails: an invalid configuration is
    /// captured inside the returned type and surfaced at schema
    /// construction.
    pub fn new(config: ObjectTypeConfig) -> GraphQLType {
        let config_error = name_config_error(&config.name, "Object");
        GraphQLType::Object(Arc::new(Self {
            name: config.name,
            description: config.description,
            fields: config.fields,
            interfaces: config.interfaces,
            is_type_of: config.is_type_of,
            applied_directives: config.applied_directives,
            config_error,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Materializes (on first touch) and returns the field table.
    pub fn fields(&self) -> &Fields {
        self.fields.get()
    }

    /// Materializes (on first touch) and returns the implemented
    /// interfaces.
    pub fn interfaces(&self) -> &[TypeRef] {
        self.interfaces.get()
    }

    pub fn is_type_of(&self) -> Option<&IsTypeOfFn> {
        self.is_type_of.as_ref()
    }

    pub fn applied_directives(&self) -> &[AppliedDirective] {
        &self.applied_directives
    }

    pub(crate) fn config_error(&self) -> Option<&SchemaBuildError> {
        self.config_error.as_ref()
    }
}

impl std::fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
