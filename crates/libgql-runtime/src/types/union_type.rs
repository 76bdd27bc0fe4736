use crate::resolver::ResolveTypeFn;
use crate::schema::name_config_error;
use crate::schema::SchemaBuildError;
use crate::types::AppliedDirective;
use crate::types::GraphQLType;
use crate::types::Lazy;
use crate::types::TypeRef;
use std::sync::Arc;

/// Configuration for [`UnionType::new`].
pub struct UnionTypeConfig {
    pub name: String,
    pub description: Option<String>,
    pub types: Lazy<Vec<TypeRef>>,
    pub resolve_type: Option<ResolveTypeFn>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl std::default::Default for UnionTypeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            types: Lazy::default(),
            resolve_type: None,
            applied_directives: vec![],
        }
    }
}

/// A union type: an explicit set of member object types.
pub struct UnionType {
    name: String,
    description: Option<String>,
    types: Lazy<Vec<TypeRef>>,
    resolve_type: Option<ResolveTypeFn>,
    applied_directives: Vec<AppliedDirective>,
    config_error: Option<SchemaBuildError>,
}

impl UnionType {
    pub fn new(config: UnionTypeConfig) -> GraphQLType {
        let config_error = name_config_error(&config.name, "Union");
        GraphQLType::Union(Arc::new(Self {
            name: config.name,
            description: config.description,
            types: config.types,
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

    /// Materializes (on first touch) and returns the member types.
    pub fn member_types(&self) -> &[TypeRef] {
        self.types.get()
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

impl std::fmt::Debug for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
