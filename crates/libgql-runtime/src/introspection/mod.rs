//! The introspection overlay: `__Schema`, `__Type`, and friends, plus the
//! non-standard applied-directive extension (`__AppliedDirective`,
//! `__DirectiveArgument`).
//!
//! The meta-types are ordinary [`ObjectType`]s built with the same
//! configuration factories as user types; their resolvers read schema
//! snapshots passed through [`Resolved::Host`] handles. They are merged
//! into every schema at construction.

use crate::resolver::FieldError;
use crate::resolver::Resolved;
use crate::schema::Schema;
use crate::types::scalars;
use crate::types::ArgumentDef;
use crate::types::EnumType;
use crate::types::EnumTypeConfig;
use crate::types::EnumValueDef;
use crate::types::FieldDef;
use crate::types::GraphQLType;
use crate::types::Lazy;
use crate::types::ObjectType;
use crate::types::ObjectTypeConfig;
use crate::types::TypeRef;
use crate::values::json_to_graphql_literal;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde_json::Value as Json;
use std::sync::Arc;

/// The meta-types hidden from `__schema.types` unless
/// `includeNonStandard: true` is passed.
const NON_STANDARD_TYPE_NAMES: [&str; 2] = ["__AppliedDirective", "__DirectiveArgument"];

const INTROSPECTION_TYPE_NAMES: [&str; 10] = [
    "__Schema",
    "__Type",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__Directive",
    "__TypeKind",
    "__DirectiveLocation",
    "__AppliedDirective",
    "__DirectiveArgument",
];

pub(crate) fn is_introspection_type_name(name: &str) -> bool {
    INTROSPECTION_TYPE_NAMES.contains(&name)
}

/// Every type of the overlay, for schema registration.
pub(crate) fn meta_types() -> Vec<GraphQLType> {
    vec![
        SCHEMA_TYPE.clone(),
        TYPE_TYPE.clone(),
        FIELD_TYPE.clone(),
        INPUT_VALUE_TYPE.clone(),
        ENUM_VALUE_TYPE.clone(),
        DIRECTIVE_TYPE.clone(),
        TYPE_KIND_TYPE.clone(),
        DIRECTIVE_LOCATION_TYPE.clone(),
        APPLIED_DIRECTIVE_TYPE.clone(),
        DIRECTIVE_ARGUMENT_TYPE.clone(),
    ]
}

/// The implicit fields available on the query root (`__schema`, `__type`)
/// and on every selectable type (`__typename`).
pub(crate) fn meta_field_def(
    field_name: &str,
    is_query_root: bool,
) -> Option<&'static FieldDef> {
    match field_name {
        "__schema" if is_query_root => Some(&*SCHEMA_META_FIELD),
        "__type" if is_query_root => Some(&*TYPE_META_FIELD),
        "__typename" => Some(&*TYPENAME_META_FIELD),
        _ => None,
    }
}

// =============================================================================
// Host handles
// =============================================================================

/// A type position: a named type or a wrapper chain around one.
#[derive(Clone, Debug)]
pub(crate) enum TypeValue {
    Named(GraphQLType),
    List(Box<TypeValue>),
    NonNull(Box<TypeValue>),
}

pub(crate) fn type_value(schema: &Schema, type_ref: &TypeRef) -> Option<TypeValue> {
    match type_ref {
        TypeRef::Direct(ty) => Some(TypeValue::Named(ty.clone())),
        TypeRef::Named(name) => {
            schema.type_named(name).cloned().map(TypeValue::Named)
        }
        TypeRef::List(inner) => {
            type_value(schema, inner).map(|v| TypeValue::List(Box::new(v)))
        }
        TypeRef::NonNull(inner) => {
            type_value(schema, inner).map(|v| TypeValue::NonNull(Box::new(v)))
        }
    }
}

struct SchemaHandle {
    schema: Schema,
}

struct TypeHandle {
    schema: Schema,
    value: TypeValue,
}

struct FieldHandle {
    schema: Schema,
    name: String,
    def: FieldDef,
}

struct InputValueHandle {
    schema: Schema,
    name: String,
    description: Option<String>,
    input_type: TypeRef,
    default_value: Option<Json>,
    applied_directives: Vec<crate::types::AppliedDirective>,
}

struct EnumValueHandle {
    name: String,
    def: EnumValueDef,
}

struct DirectiveHandle {
    schema: Schema,
    directive: Arc<crate::types::Directive>,
}

fn host_error() -> FieldError {
    FieldError::new("Introspection resolver received an unexpected source value.")
}

fn type_host(schema: &Schema, value: TypeValue) -> Resolved {
    Resolved::host(TypeHandle {
        schema: schema.clone(),
        value,
    })
}

fn input_value_hosts(
    schema: &Schema,
    args: &IndexMap<String, ArgumentDef>,
) -> Resolved {
    Resolved::Items(
        args.iter()
            .map(|(name, arg)| {
                Resolved::host(InputValueHandle {
                    schema: schema.clone(),
                    name: name.clone(),
                    description: arg.description.clone(),
                    input_type: arg.arg_type.clone(),
                    default_value: arg.default_value.clone(),
                    applied_directives: arg.applied_directives.clone(),
                })
            })
            .collect(),
    )
}

fn applied_directive_hosts(applied: &[crate::types::AppliedDirective]) -> Resolved {
    Resolved::Items(applied.iter().cloned().map(Resolved::host).collect())
}

fn string_value(value: impl Into<String>) -> Resolved {
    Resolved::Value(Json::String(value.into()))
}

fn optional_string(value: Option<&str>) -> Resolved {
    match value {
        Some(text) => string_value(text),
        None => Resolved::null(),
    }
}

// =============================================================================
// Meta-type definitions
// =============================================================================

lazy_static! {
    static ref SCHEMA_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__Schema".to_string(),
        description: Some(
            "A GraphQL Schema defines the capabilities of a GraphQL server. \
             It exposes all available types and directives on the server, as \
             well as the entry points for query, mutation, and subscription \
             operations."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "types".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__Type"),
                    ))))
                    .description("A list of all types supported by this server.")
                    .arg(
                        "includeNonStandard",
                        ArgumentDef::new(scalars::boolean()).default_value(false),
                    )
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<SchemaHandle>()
                            .ok_or_else(host_error)?;
                        let include_non_standard = params
                            .arg("includeNonStandard")
                            .and_then(Json::as_bool)
                            .unwrap_or(false);
                        Ok(Resolved::Items(
                            handle
                                .schema
                                .types()
                                .values()
                                .filter(|ty| {
                                    include_non_standard
                                        || !NON_STANDARD_TYPE_NAMES
                                            .contains(&ty.name())
                                })
                                .map(|ty| {
                                    type_host(
                                        &handle.schema,
                                        TypeValue::Named(ty.clone()),
                                    )
                                })
                                .collect(),
                        ))
                    }),
                ),
                (
                    "queryType".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::named("__Type")))
                        .description("The type that query operations will be rooted at.")
                        .resolver(|params| {
                            let handle = params
                                .source
                                .downcast_host::<SchemaHandle>()
                                .ok_or_else(host_error)?;
                            Ok(type_host(
                                &handle.schema,
                                TypeValue::Named(handle.schema.query_type().clone()),
                            ))
                        }),
                ),
                (
                    "mutationType".to_string(),
                    FieldDef::new(TypeRef::named("__Type"))
                        .description(
                            "If this server supports mutation, the type that \
                             mutation operations will be rooted at.",
                        )
                        .resolver(|params| {
                            let handle = params
                                .source
                                .downcast_host::<SchemaHandle>()
                                .ok_or_else(host_error)?;
                            Ok(match handle.schema.mutation_type() {
                                Some(ty) => type_host(
                                    &handle.schema,
                                    TypeValue::Named(ty.clone()),
                                ),
                                None => Resolved::null(),
                            })
                        }),
                ),
                (
                    "subscriptionType".to_string(),
                    FieldDef::new(TypeRef::named("__Type"))
                        .description(
                            "If this server supports subscription, the type \
                             that subscription operations will be rooted at.",
                        )
                        .resolver(|params| {
                            let handle = params
                                .source
                                .downcast_host::<SchemaHandle>()
                                .ok_or_else(host_error)?;
                            Ok(match handle.schema.subscription_type() {
                                Some(ty) => type_host(
                                    &handle.schema,
                                    TypeValue::Named(ty.clone()),
                                ),
                                None => Resolved::null(),
                            })
                        }),
                ),
                (
                    "directives".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__Directive"),
                    ))))
                    .description("A list of all directives supported by this server.")
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<SchemaHandle>()
                            .ok_or_else(host_error)?;
                        Ok(Resolved::Items(
                            handle
                                .schema
                                .directives()
                                .iter()
                                .map(|directive| {
                                    Resolved::host(DirectiveHandle {
                                        schema: handle.schema.clone(),
                                        directive: Arc::clone(directive),
                                    })
                                })
                                .collect(),
                        ))
                    }),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref TYPE_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__Type".to_string(),
        description: Some(
            "The fundamental unit of any GraphQL Schema is the type. There \
             are many kinds of types in GraphQL. Depending on the kind of a \
             type, certain fields describe information about that type."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "kind".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::named("__TypeKind")))
                        .resolver(|params| {
                            let handle = params
                                .source
                                .downcast_host::<TypeHandle>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(match &handle.value {
                                TypeValue::Named(ty) => ty.kind().as_str(),
                                TypeValue::List(_) => "LIST",
                                TypeValue::NonNull(_) => "NON_NULL",
                            }))
                        }),
                ),
                (
                    "name".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        Ok(match &handle.value {
                            TypeValue::Named(ty) => string_value(ty.name()),
                            _ => Resolved::null(),
                        })
                    }),
                ),
                (
                    "description".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        Ok(match &handle.value {
                            TypeValue::Named(ty) => optional_string(ty.description()),
                            _ => Resolved::null(),
                        })
                    }),
                ),
                (
                    "fields".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::non_null(TypeRef::named(
                        "__Field",
                    ))))
                    .arg(
                        "includeDeprecated",
                        ArgumentDef::new(scalars::boolean()).default_value(false),
                    )
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        let include_deprecated = params
                            .arg("includeDeprecated")
                            .and_then(Json::as_bool)
                            .unwrap_or(false);
                        let TypeValue::Named(ty) = &handle.value else {
                            return Ok(Resolved::null());
                        };
                        let Some(fields) = ty.fields() else {
                            return Ok(Resolved::null());
                        };
                        Ok(Resolved::Items(
                            fields
                                .iter()
                                .filter(|(_, def)| {
                                    include_deprecated || !def.is_deprecated()
                                })
                                .map(|(name, def)| {
                                    Resolved::host(FieldHandle {
                                        schema: handle.schema.clone(),
                                        name: name.clone(),
                                        def: def.clone(),
                                    })
                                })
                                .collect(),
                        ))
                    }),
                ),
                (
                    "interfaces".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::non_null(TypeRef::named(
                        "__Type",
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        let TypeValue::Named(GraphQLType::Object(object)) =
                            &handle.value
                        else {
                            return Ok(Resolved::null());
                        };
                        Ok(Resolved::Items(
                            object
                                .interfaces()
                                .iter()
                                .filter_map(|interface_ref| {
                                    type_value(&handle.schema, interface_ref)
                                })
                                .map(|value| type_host(&handle.schema, value))
                                .collect(),
                        ))
                    }),
                ),
                (
                    "possibleTypes".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::non_null(TypeRef::named(
                        "__Type",
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        let TypeValue::Named(ty) = &handle.value else {
                            return Ok(Resolved::null());
                        };
                        if !ty.is_abstract_type() {
                            return Ok(Resolved::null());
                        }
                        Ok(Resolved::Items(
                            handle
                                .schema
                                .possible_types(ty.name())
                                .into_iter()
                                .map(|possible| {
                                    type_host(
                                        &handle.schema,
                                        TypeValue::Named(possible.clone()),
                                    )
                                })
                                .collect(),
                        ))
                    }),
                ),
                (
                    "enumValues".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::non_null(TypeRef::named(
                        "__EnumValue",
                    ))))
                    .arg(
                        "includeDeprecated",
                        ArgumentDef::new(scalars::boolean()).default_value(false),
                    )
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        let include_deprecated = params
                            .arg("includeDeprecated")
                            .and_then(Json::as_bool)
                            .unwrap_or(false);
                        let TypeValue::Named(GraphQLType::Enum(enum_type)) =
                            &handle.value
                        else {
                            return Ok(Resolved::null());
                        };
                        Ok(Resolved::Items(
                            enum_type
                                .values()
                                .iter()
                                .filter(|(_, def)| {
                                    include_deprecated || !def.is_deprecated()
                                })
                                .map(|(name, def)| {
                                    Resolved::host(EnumValueHandle {
                                        name: name.clone(),
                                        def: def.clone(),
                                    })
                                })
                                .collect(),
                        ))
                    }),
                ),
                (
                    "inputFields".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::non_null(TypeRef::named(
                        "__InputValue",
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        let TypeValue::Named(GraphQLType::InputObject(input_object)) =
                            &handle.value
                        else {
                            return Ok(Resolved::null());
                        };
                        Ok(Resolved::Items(
                            input_object
                                .fields()
                                .iter()
                                .map(|(name, field)| {
                                    Resolved::host(InputValueHandle {
                                        schema: handle.schema.clone(),
                                        name: name.clone(),
                                        description: field.description.clone(),
                                        input_type: field.input_type.clone(),
                                        default_value: field.default_value.clone(),
                                        applied_directives: field
                                            .applied_directives
                                            .clone(),
                                    })
                                })
                                .collect(),
                        ))
                    }),
                ),
                (
                    "ofType".to_string(),
                    FieldDef::new(TypeRef::named("__Type")).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        Ok(match &handle.value {
                            TypeValue::List(inner) | TypeValue::NonNull(inner) => {
                                type_host(&handle.schema, (**inner).clone())
                            }
                            TypeValue::Named(_) => Resolved::null(),
                        })
                    }),
                ),
                (
                    "appliedDirectives".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__AppliedDirective"),
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<TypeHandle>()
                            .ok_or_else(host_error)?;
                        Ok(match &handle.value {
                            TypeValue::Named(ty) => {
                                applied_directive_hosts(ty.applied_directives())
                            }
                            _ => Resolved::Items(vec![]),
                        })
                    }),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref FIELD_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__Field".to_string(),
        description: Some(
            "Object and Interface types are described by a list of Fields, \
             each of which has a name, potentially a list of arguments, and \
             a return type."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "name".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::string())).resolver(
                        |params| {
                            let handle = params
                                .source
                                .downcast_host::<FieldHandle>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(handle.name.clone()))
                        },
                    ),
                ),
                (
                    "description".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<FieldHandle>()
                            .ok_or_else(host_error)?;
                        Ok(optional_string(handle.def.description.as_deref()))
                    }),
                ),
                (
                    "args".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__InputValue"),
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<FieldHandle>()
                            .ok_or_else(host_error)?;
                        Ok(input_value_hosts(&handle.schema, &handle.def.args))
                    }),
                ),
                (
                    "type".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::named("__Type")))
                        .resolver(|params| {
                            let handle = params
                                .source
                                .downcast_host::<FieldHandle>()
                                .ok_or_else(host_error)?;
                            let value =
                                type_value(&handle.schema, &handle.def.field_type)
                                    .ok_or_else(host_error)?;
                            Ok(type_host(&handle.schema, value))
                        }),
                ),
                (
                    "isDeprecated".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::boolean())).resolver(
                        |params| {
                            let handle = params
                                .source
                                .downcast_host::<FieldHandle>()
                                .ok_or_else(host_error)?;
                            Ok(Resolved::Value(Json::Bool(handle.def.is_deprecated())))
                        },
                    ),
                ),
                (
                    "deprecationReason".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<FieldHandle>()
                            .ok_or_else(host_error)?;
                        Ok(optional_string(handle.def.deprecation_reason.as_deref()))
                    }),
                ),
                (
                    "appliedDirectives".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__AppliedDirective"),
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<FieldHandle>()
                            .ok_or_else(host_error)?;
                        Ok(applied_directive_hosts(&handle.def.applied_directives))
                    }),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref INPUT_VALUE_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__InputValue".to_string(),
        description: Some(
            "Arguments provided to Fields or Directives and the input fields \
             of an InputObject are represented as Input Values which describe \
             their type and optionally a default value."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "name".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::string())).resolver(
                        |params| {
                            let handle = params
                                .source
                                .downcast_host::<InputValueHandle>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(handle.name.clone()))
                        },
                    ),
                ),
                (
                    "description".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<InputValueHandle>()
                            .ok_or_else(host_error)?;
                        Ok(optional_string(handle.description.as_deref()))
                    }),
                ),
                (
                    "type".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::named("__Type")))
                        .resolver(|params| {
                            let handle = params
                                .source
                                .downcast_host::<InputValueHandle>()
                                .ok_or_else(host_error)?;
                            let value = type_value(&handle.schema, &handle.input_type)
                                .ok_or_else(host_error)?;
                            Ok(type_host(&handle.schema, value))
                        }),
                ),
                (
                    "defaultValue".to_string(),
                    FieldDef::new(scalars::string())
                        .description(
                            "A GraphQL-formatted string representing the \
                             default value for this input value.",
                        )
                        .resolver(|params| {
                            let handle = params
                                .source
                                .downcast_host::<InputValueHandle>()
                                .ok_or_else(host_error)?;
                            Ok(match &handle.default_value {
                                Some(value) => {
                                    string_value(json_to_graphql_literal(value))
                                }
                                None => Resolved::null(),
                            })
                        }),
                ),
                (
                    "appliedDirectives".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__AppliedDirective"),
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<InputValueHandle>()
                            .ok_or_else(host_error)?;
                        Ok(applied_directive_hosts(&handle.applied_directives))
                    }),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref ENUM_VALUE_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__EnumValue".to_string(),
        description: Some(
            "One possible value for a given Enum. Enum values are unique \
             values, not a placeholder for a string or numeric value."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "name".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::string())).resolver(
                        |params| {
                            let handle = params
                                .source
                                .downcast_host::<EnumValueHandle>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(handle.name.clone()))
                        },
                    ),
                ),
                (
                    "description".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<EnumValueHandle>()
                            .ok_or_else(host_error)?;
                        Ok(optional_string(handle.def.description.as_deref()))
                    }),
                ),
                (
                    "isDeprecated".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::boolean())).resolver(
                        |params| {
                            let handle = params
                                .source
                                .downcast_host::<EnumValueHandle>()
                                .ok_or_else(host_error)?;
                            Ok(Resolved::Value(Json::Bool(handle.def.is_deprecated())))
                        },
                    ),
                ),
                (
                    "deprecationReason".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<EnumValueHandle>()
                            .ok_or_else(host_error)?;
                        Ok(optional_string(handle.def.deprecation_reason.as_deref()))
                    }),
                ),
                (
                    "appliedDirectives".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__AppliedDirective"),
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<EnumValueHandle>()
                            .ok_or_else(host_error)?;
                        Ok(applied_directive_hosts(&handle.def.applied_directives))
                    }),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref DIRECTIVE_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__Directive".to_string(),
        description: Some(
            "A Directive provides a way to describe alternate runtime \
             execution and type validation behavior in a GraphQL document."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "name".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::string())).resolver(
                        |params| {
                            let handle = params
                                .source
                                .downcast_host::<DirectiveHandle>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(handle.directive.name()))
                        },
                    ),
                ),
                (
                    "description".to_string(),
                    FieldDef::new(scalars::string()).resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<DirectiveHandle>()
                            .ok_or_else(host_error)?;
                        Ok(optional_string(handle.directive.description()))
                    }),
                ),
                (
                    "locations".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__DirectiveLocation"),
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<DirectiveHandle>()
                            .ok_or_else(host_error)?;
                        Ok(Resolved::Items(
                            handle
                                .directive
                                .locations()
                                .iter()
                                .map(|location| string_value(location.as_str()))
                                .collect(),
                        ))
                    }),
                ),
                (
                    "args".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__InputValue"),
                    ))))
                    .resolver(|params| {
                        let handle = params
                            .source
                            .downcast_host::<DirectiveHandle>()
                            .ok_or_else(host_error)?;
                        Ok(input_value_hosts(&handle.schema, handle.directive.args()))
                    }),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref TYPE_KIND_TYPE: GraphQLType = EnumType::new(EnumTypeConfig {
        name: "__TypeKind".to_string(),
        description: Some(
            "An enum describing what kind of type a given `__Type` is."
                .to_string(),
        ),
        values: IndexMap::from([
            (
                "SCALAR".to_string(),
                EnumValueDef::new().description("Indicates this type is a scalar."),
            ),
            (
                "OBJECT".to_string(),
                EnumValueDef::new().description(
                    "Indicates this type is an object. `fields` and \
                     `interfaces` are valid fields.",
                ),
            ),
            (
                "INTERFACE".to_string(),
                EnumValueDef::new().description(
                    "Indicates this type is an interface. `fields` and \
                     `possibleTypes` are valid fields.",
                ),
            ),
            (
                "UNION".to_string(),
                EnumValueDef::new().description(
                    "Indicates this type is a union. `possibleTypes` is a \
                     valid field.",
                ),
            ),
            (
                "ENUM".to_string(),
                EnumValueDef::new().description(
                    "Indicates this type is an enum. `enumValues` is a valid \
                     field.",
                ),
            ),
            (
                "INPUT_OBJECT".to_string(),
                EnumValueDef::new().description(
                    "Indicates this type is an input object. `inputFields` is \
                     a valid field.",
                ),
            ),
            (
                "LIST".to_string(),
                EnumValueDef::new().description(
                    "Indicates this type is a list. `ofType` is a valid field.",
                ),
            ),
            (
                "NON_NULL".to_string(),
                EnumValueDef::new().description(
                    "Indicates this type is a non-null. `ofType` is a valid \
                     field.",
                ),
            ),
        ]),
        applied_directives: vec![],
    });

    static ref DIRECTIVE_LOCATION_TYPE: GraphQLType = EnumType::new(EnumTypeConfig {
        name: "__DirectiveLocation".to_string(),
        description: Some(
            "A Directive can be adjacent to many parts of the GraphQL \
             language, a __DirectiveLocation describes one such possible \
             adjacency."
                .to_string(),
        ),
        values: IndexMap::from([
            ("QUERY".to_string(), EnumValueDef::new()),
            ("MUTATION".to_string(), EnumValueDef::new()),
            ("SUBSCRIPTION".to_string(), EnumValueDef::new()),
            ("FIELD".to_string(), EnumValueDef::new()),
            ("FRAGMENT_DEFINITION".to_string(), EnumValueDef::new()),
            ("FRAGMENT_SPREAD".to_string(), EnumValueDef::new()),
            ("INLINE_FRAGMENT".to_string(), EnumValueDef::new()),
            ("SCHEMA".to_string(), EnumValueDef::new()),
            ("SCALAR".to_string(), EnumValueDef::new()),
            ("OBJECT".to_string(), EnumValueDef::new()),
            ("FIELD_DEFINITION".to_string(), EnumValueDef::new()),
            ("ARGUMENT_DEFINITION".to_string(), EnumValueDef::new()),
            ("INTERFACE".to_string(), EnumValueDef::new()),
            ("UNION".to_string(), EnumValueDef::new()),
            ("ENUM".to_string(), EnumValueDef::new()),
            ("ENUM_VALUE".to_string(), EnumValueDef::new()),
            ("INPUT_OBJECT".to_string(), EnumValueDef::new()),
            ("INPUT_FIELD_DEFINITION".to_string(), EnumValueDef::new()),
        ]),
        applied_directives: vec![],
    });

    static ref APPLIED_DIRECTIVE_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__AppliedDirective".to_string(),
        description: Some(
            "A directive applied to a schema element, exposed through \
             introspection as metadata."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "name".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::string())).resolver(
                        |params| {
                            let applied = params
                                .source
                                .downcast_host::<crate::types::AppliedDirective>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(applied.name.clone()))
                        },
                    ),
                ),
                (
                    "args".to_string(),
                    FieldDef::new(TypeRef::non_null(TypeRef::list(TypeRef::non_null(
                        TypeRef::named("__DirectiveArgument"),
                    ))))
                    .resolver(|params| {
                        let applied = params
                            .source
                            .downcast_host::<crate::types::AppliedDirective>()
                            .ok_or_else(host_error)?;
                        Ok(Resolved::Items(
                            applied
                                .args
                                .iter()
                                .cloned()
                                .map(Resolved::host)
                                .collect(),
                        ))
                    }),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref DIRECTIVE_ARGUMENT_TYPE: GraphQLType = ObjectType::new(ObjectTypeConfig {
        name: "__DirectiveArgument".to_string(),
        description: Some(
            "One named argument value of an applied directive, rendered as a \
             string."
                .to_string(),
        ),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "name".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::string())).resolver(
                        |params| {
                            let arg = params
                                .source
                                .downcast_host::<crate::types::DirectiveArgument>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(arg.name.clone()))
                        },
                    ),
                ),
                (
                    "value".to_string(),
                    FieldDef::new(TypeRef::non_null(scalars::string())).resolver(
                        |params| {
                            let arg = params
                                .source
                                .downcast_host::<crate::types::DirectiveArgument>()
                                .ok_or_else(host_error)?;
                            Ok(string_value(match &arg.value {
                                Json::String(text) => text.clone(),
                                other => other.to_string(),
                            }))
                        },
                    ),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });

    static ref SCHEMA_META_FIELD: FieldDef =
        FieldDef::new(TypeRef::non_null(TypeRef::named("__Schema")))
            .description("Access the current type schema of this server.")
            .resolver(|params| {
                Ok(Resolved::host(SchemaHandle {
                    schema: params.info.schema.clone(),
                }))
            });

    static ref TYPE_META_FIELD: FieldDef = FieldDef::new(TypeRef::named("__Type"))
        .description("Request the type information of a single type.")
        .arg("name", ArgumentDef::new(TypeRef::non_null(scalars::string())))
        .resolver(|params| {
            let name = params
                .arg("name")
                .and_then(Json::as_str)
                .ok_or_else(|| FieldError::new("Argument \"name\" must be a String."))?;
            Ok(match params.info.schema.type_named(name) {
                Some(ty) => Resolved::host(TypeHandle {
                    schema: params.info.schema.clone(),
                    value: TypeValue::Named(ty.clone()),
                }),
                None => Resolved::null(),
            })
        });

    static ref TYPENAME_META_FIELD: FieldDef =
        FieldDef::new(TypeRef::non_null(scalars::string()))
            .description("The name of the current Object type at runtime.")
            .resolver(|params| {
                Ok(string_value(params.info.parent_type_name))
            });
}
