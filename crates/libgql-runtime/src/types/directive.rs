use crate::schema::name_config_error;
use crate::schema::SchemaBuildError;
use crate::types::scalars;
use crate::types::AppliedDirective;
use crate::types::ArgumentDef;
use crate::types::DirectiveArgument;
use crate::types::TypeRef;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::sync::Arc;

/// The reason recorded when `@deprecated` is applied without one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Where a directive may legally appear.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`Directive::new`].
#[derive(Default)]
pub struct DirectiveConfig {
    pub name: String,
    pub description: Option<String>,
    pub locations: Vec<DirectiveLocation>,
    pub args: IndexMap<String, ArgumentDef>,
    pub applied_directives: Vec<AppliedDirective>,
}

/// A directive definition: name, legal locations, and arguments.
pub struct Directive {
    name: String,
    description: Option<String>,
    locations: Vec<DirectiveLocation>,
    args: IndexMap<String, ArgumentDef>,
    applied_directives: Vec<AppliedDirective>,
    config_error: Option<SchemaBuildError>,
}

impl Directive {
    /// Configuration factory; invalid configuration is captured inside the
    /// value and surfaced at schema construction.
    pub fn new(config: DirectiveConfig) -> Arc<Directive> {
        let mut config_error = name_config_error(&config.name, "Directive");
        if config_error.is_none() && config.locations.is_empty() {
            config_error = Some(SchemaBuildError::DirectiveWithoutLocations {
                directive_name: config.name.clone(),
            });
        }
        Arc::new(Self {
            name: config.name,
            description: config.description,
            locations: config.locations,
            args: config.args,
            applied_directives: config.applied_directives,
            config_error,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn args(&self) -> &IndexMap<String, ArgumentDef> {
        &self.args
    }

    pub fn applied_directives(&self) -> &[AppliedDirective] {
        &self.applied_directives
    }

    pub(crate) fn config_error(&self) -> Option<&SchemaBuildError> {
        self.config_error.as_ref()
    }

    /// Turns this directive into applied-directive metadata for attachment
    /// to a schema element.
    pub fn apply(
        &self,
        args: impl IntoIterator<Item = DirectiveArgument>,
    ) -> AppliedDirective {
        AppliedDirective::new(self.name.clone(), args)
    }
}

impl std::fmt::Debug for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Directive")
            .field("name", &self.name)
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}

lazy_static! {
    static ref INCLUDE: Arc<Directive> = Directive::new(DirectiveConfig {
        name: "include".to_string(),
        description: Some(
            "Directs the executor to include this field or fragment only when \
             the `if` argument is true."
                .to_string(),
        ),
        locations: vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
        args: IndexMap::from([(
            "if".to_string(),
            ArgumentDef::new(TypeRef::non_null(scalars::boolean()))
                .description("Included when true."),
        )]),
        applied_directives: vec![],
    });
    static ref SKIP: Arc<Directive> = Directive::new(DirectiveConfig {
        name: "skip".to_string(),
        description: Some(
            "Directs the executor to skip this field or fragment when the `if` \
             argument is true."
                .to_string(),
        ),
        locations: vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
        args: IndexMap::from([(
            "if".to_string(),
            ArgumentDef::new(TypeRef::non_null(scalars::boolean()))
                .description("Skipped when true."),
        )]),
        applied_directives: vec![],
    });
    static ref DEPRECATED: Arc<Directive> = Directive::new(DirectiveConfig {
        name: "deprecated".to_string(),
        description: Some(
            "Marks an element of a GraphQL schema as no longer supported."
                .to_string(),
        ),
        locations: vec![
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::EnumValue,
        ],
        args: IndexMap::from([(
            "reason".to_string(),
            ArgumentDef::new(scalars::string())
                .description(
                    "Explains why this element was deprecated, usually also \
                     including a suggestion for how to access supported \
                     similar data.",
                )
                .default_value(DEFAULT_DEPRECATION_REASON),
        )]),
        applied_directives: vec![],
    });
    static ref OMIT_EMPTY: Arc<Directive> = Directive::new(DirectiveConfig {
        name: "omitEmpty".to_string(),
        description: Some(
            "Directs the executor to omit this field from the response when \
             its value resolves to null or an empty list."
                .to_string(),
        ),
        locations: vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
        args: IndexMap::new(),
        applied_directives: vec![],
    });
}

pub fn include_directive() -> Arc<Directive> {
    Arc::clone(&INCLUDE)
}

pub fn skip_directive() -> Arc<Directive> {
    Arc::clone(&SKIP)
}

pub fn deprecated_directive() -> Arc<Directive> {
    Arc::clone(&DEPRECATED)
}

pub fn omit_empty_directive() -> Arc<Directive> {
    Arc::clone(&OMIT_EMPTY)
}

/// The compiled-in directive set.
pub fn specified_directives() -> Vec<Arc<Directive>> {
    vec![
        include_directive(),
        skip_directive(),
        omit_empty_directive(),
        deprecated_directive(),
    ]
}
