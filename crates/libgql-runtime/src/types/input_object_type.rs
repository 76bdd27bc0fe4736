use crate::schema::name_config_error;
use crate::schema::SchemaBuildError;
use crate::types::AppliedDirective;
use crate::types::GraphQLType;
use crate::types::Lazy;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::sync::Arc;

/// The ordered input-field table of an input object type.
pub type InputFields = IndexMap<String, InputFieldDef>;

/// One input field: type, optional default, metadata.
#[derive(Clone, Debug)]
pub struct InputFieldDef {
    pub description: Option<String>,
    pub input_type: TypeRef,
    pub default_value: Option<serde_json::Value>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl InputFieldDef {
    pub fn new(input_type: impl Into<TypeRef>) -> Self {
        Self {
            description: None,
            input_type: input_type.into(),
            default_value: None,
            applied_directives: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn applied_directive(mut self, directive: AppliedDirective) -> Self {
        self.applied_directives.push(directive);
        self
    }
}

/// Configuration for [`InputObjectType::new`].
pub struct InputObjectTypeConfig {
    pub name: String,
    pub description: Option<String>,
    pub fields: Lazy<InputFields>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl std::default::Default for InputObjectTypeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            fields: Lazy::default(),
            applied_directives: vec![],
        }
    }
}

/// An input object type: a named, ordered set of input fields.
pub struct InputObjectType {
    name: String,
    description: Option<String>,
    fields: Lazy<InputFields>,
    applied_directives: Vec<AppliedDirective>,
    config_error: Option<SchemaBuildError>,
}

impl InputObjectType {
    pub fn new(config: InputObjectTypeConfig) -> GraphQLType {
        let config_error = name_config_error(&config.name, "InputObject");
        GraphQLType::InputObject(Arc::new(Self {
            name: config.name,
            description: config.description,
            fields: config.fields,
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

    /// Materializes (on first touch) and returns the input-field table.
    pub fn fields(&self) -> &InputFields {
        self.fields.get()
    }

    pub fn applied_directives(&self) -> &[AppliedDirective] {
        &self.applied_directives
    }

    pub(crate) fn config_error(&self) -> Option<&SchemaBuildError> {
        self.config_error.as_ref()
    }
}

impl std::fmt::Debug for InputObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputObjectType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
