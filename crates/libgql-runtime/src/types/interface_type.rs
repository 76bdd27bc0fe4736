use crate::resolver::ResolveTypeFn;
use crate::schema::name_config_error;
use crate::schema::SchemaBuildError;
use crate::types::AppliedDirective;
use crate::types::Fields;
use crate::types::GraphQLType;
use crate::types::Lazy;
use std::sync::Arc;

/// Configuration for [`InterfaceType::new`].
pub struct InterfaceTypeConfig {
    pub name: String,
    pub description: Option<String>,
    pub fields: Lazy<Fields>,
    pub resolve_type: Option<ResolveTypeFn>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl std::default::Default for InterfaceTypeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            fields: Lazy::default(),
            resolve_type: None,
            applied_directives: vec![],
        }
    }
}

/// An interface type: a field contract objects can implement, resolved to
/// a concrete object at runtime via `resolve_type` or the implementers'
/// `is_type_of` predicates.
pub struct InterfaceType {
    name: String,
    description: Option<String>,
    fields: Lazy<Fields>,
    resolve_type: Option<ResolveTypeFn>,
    applied_directives: Vec<AppliedDirective>,
    config_error: Option<SchemaBuildError>,
}

impl InterfaceType {
    pub fn new(config: InterfaceTypeConfig) -> GraphQLType {
        let config_error = name_config_error(&config.name, "Interface");
        GraphQLType::Interface(Arc::new(Self {
            name: config.name,
            description: config.description,
            fields: config.fields,
            resolve_type: config.resolve_type,
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

    pub fn fields(&self) -> &Fields {
        self.fields.get()
    }

    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }

    pub fn applied_directives(&self) -> &[AppliedDirective] {
        &self.applied_directives
    }

    pub(crate) fn config_error(&self) -> Option<&SchemaBuildError> {
        self.config_error.as_ref()
    }
}

impl std::fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
