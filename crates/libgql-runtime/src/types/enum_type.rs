use crate::schema::name_config_error;
use crate::schema::valid_name_error;
use crate::schema::SchemaBuildError;
use crate::types::AppliedDirective;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::sync::Arc;

/// Configuration for [`EnumType::new`]. Keys of `values` are the enum
/// value names.
#[derive(Default)]
pub struct EnumTypeConfig {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValueDef>,
    pub applied_directives: Vec<AppliedDirective>,
}

/// One enum value: its internal value (defaults to the name itself),
/// deprecation state, and metadata.
#[derive(Clone, Debug, Default)]
pub struct EnumValueDef {
    pub description: Option<String>,
    /// The internal value resolvers produce and receive. `None` defaults
    /// to the value's own name.
    pub value: Option<serde_json::Value>,
    pub deprecation_reason: Option<String>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl EnumValueDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn applied_directive(mut self, directive: AppliedDirective) -> Self {
        self.applied_directives.push(directive);
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

/// An enum type: a closed, ordered set of names, each mapped to a unique
/// internal value for reverse lookup during serialization.
pub struct EnumType {
    name: String,
    description: Option<String>,
    values: IndexMap<String, EnumValueDef>,
    applied_directives: Vec<AppliedDirective>,
    config_error: Option<SchemaBuildError>,
}

impl EnumType {
    pub fn new(config: EnumTypeConfig) -> GraphQLType {
        let mut config_error = name_config_error(&config.name, "Enum");

        if config_error.is_none() {
            for value_name in config.values.keys() {
                if let Some(err) = valid_name_error(value_name) {
                    config_error = Some(err);
                    break;
                }
            }
        }
        if config_error.is_none() {
            // Internal values must be unique so serialization can reverse
            // internal value -> name.
            let mut seen: Vec<serde_json::Value> = vec![];
            for (value_name, def) in config.values.iter() {
                let internal = def
                    .value
                    .clone()
                    .unwrap_or_else(|| serde_json::Value::String(value_name.clone()));
                if seen.contains(&internal) {
                    config_error = Some(SchemaBuildError::DuplicateEnumValue {
                        type_name: config.name.clone(),
                        value: internal.to_string(),
                    });
                    break;
                }
                seen.push(internal);
            }
        }

        GraphQLType::Enum(Arc::new(Self {
            name: config.name,
            description: config.description,
            values: config.values,
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

    pub fn values(&self) -> &IndexMap<String, EnumValueDef> {
        &self.values
    }

    /// The internal value for an enum value name.
    pub fn value_of(&self, name: &str) -> Option<serde_json::Value> {
        self.values.get(name).map(|def| {
            def.value
                .clone()
                .unwrap_or_else(|| serde_json::Value::String(name.to_string()))
        })
    }

    /// Reverse lookup: the name whose internal value equals `internal`.
    pub fn name_of(&self, internal: &serde_json::Value) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, def)| match &def.value {
                Some(value) => value == internal,
                None => match internal {
                    serde_json::Value::String(s) => s == *name,
                    _ => false,
                },
            })
            .map(|(name, _)| name.as_str())
    }

    pub fn applied_directives(&self) -> &[AppliedDirective] {
        &self.applied_directives
    }

    pub(crate) fn config_error(&self) -> Option<&SchemaBuildError> {
        self.config_error.as_ref()
    }
}

impl std::fmt::Debug for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumType")
            .field("name", &self.name)
            .field("values", &self.values.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
