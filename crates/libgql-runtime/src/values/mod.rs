//! Value coercion between the three value surfaces: AST literals, external
//! JSON (variables), and internal values.
//!
//! Absent and explicit-`null` inputs are distinct: defaults substitute only
//! for *absent* values, and explicit `null` is rejected only by `NonNull`
//! types.

use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::ArgumentDef;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::print_value;
use libgql_parser::Source;
use serde_json::Value as Json;

pub(crate) type JsonMap = serde_json::Map<String, Json>;

/// Builds a lazy [`TypeRef`] from a document type annotation.
pub(crate) fn type_from_ast(annotation: &ast::TypeAnnotation) -> TypeRef {
    match annotation {
        ast::TypeAnnotation::Named(named) => TypeRef::named(named.name.as_str()),
        ast::TypeAnnotation::List(list) => TypeRef::list(type_from_ast(&list.inner)),
        ast::TypeAnnotation::NonNull(non_null) => {
            TypeRef::non_null(type_from_ast(&non_null.inner))
        }
    }
}

/// Renders an internal value as GraphQL literal text (used for
/// `__InputValue.defaultValue` and error messages).
pub(crate) fn json_to_graphql_literal(value: &Json) -> String {
    match value {
        Json::Null => "null".to_string(),
        Json::Bool(b) => b.to_string(),
        Json::Number(n) => n.to_string(),
        Json::String(s) => format!("{s:?}"),
        Json::Array(items) => {
            let printed: Vec<String> =
                items.iter().map(json_to_graphql_literal).collect();
            format!("[{}]", printed.join(", "))
        }
        Json::Object(fields) => {
            let printed: Vec<String> = fields
                .iter()
                .map(|(key, val)| format!("{key}: {}", json_to_graphql_literal(val)))
                .collect();
            format!("{{{}}}", printed.join(", "))
        }
    }
}

// =============================================================================
// AST literal -> internal value
// =============================================================================

/// Coerces an AST literal against `type_ref`.
///
/// Returns `None` when no value results: an invalid literal, or a variable
/// that was not provided. Explicit `null` yields `Some(Json::Null)` except
/// under `NonNull`, where it is invalid.
pub(crate) fn coerce_literal(
    schema: &Schema,
    type_ref: &TypeRef,
    literal: &ast::Value,
    variables: Option<&JsonMap>,
) -> Option<Json> {
    if let ast::Value::Variable(name) = literal {
        let value = variables.and_then(|vars| vars.get(name.as_str()))?;
        if value.is_null() && type_ref.is_non_null() {
            return None;
        }
        return Some(value.clone());
    }

    match type_ref {
        TypeRef::NonNull(inner) => {
            if literal.is_null() {
                None
            } else {
                coerce_literal(schema, inner, literal, variables)
            }
        }
        _ if literal.is_null() => Some(Json::Null),
        TypeRef::List(inner) => match literal {
            ast::Value::List(list) => {
                let mut items = Vec::with_capacity(list.values.len());
                for item in &list.values {
                    match coerce_literal(schema, inner, item, variables) {
                        Some(value) => items.push(value),
                        // An unprovided variable yields null for nullable
                        // items and invalidates the whole list otherwise.
                        None if !inner.is_non_null() && item.is_variable() => {
                            items.push(Json::Null)
                        }
                        None => return None,
                    }
                }
                Some(Json::Array(items))
            }
            // A single value coerces as a one-element list.
            single => {
                coerce_literal(schema, inner, single, variables)
                    .map(|value| Json::Array(vec![value]))
            }
        },
        named => {
            let ty = named.innermost_type(schema)?;
            coerce_named_literal(schema, ty, literal, variables)
        }
    }
}

fn coerce_named_literal(
    schema: &Schema,
    ty: &GraphQLType,
    literal: &ast::Value,
    variables: Option<&JsonMap>,
) -> Option<Json> {
    match ty {
        GraphQLType::Scalar(scalar) => scalar.parse_literal(literal),
        GraphQLType::Enum(enum_type) => match literal {
            ast::Value::Enum { value, .. } => enum_type.value_of(value),
            _ => None,
        },
        GraphQLType::InputObject(input_object) => {
            let ast::Value::Object(object) = literal else {
                return None;
            };
            let mut coerced = JsonMap::new();
            for (field_name, field) in input_object.fields() {
                // A field given an unprovided variable counts as absent.
                let ast_field = object.field(field_name).filter(|ast_field| {
                    !is_missing_variable(&ast_field.value, variables)
                });
                match ast_field {
                    Some(ast_field) => {
                        let value = coerce_literal(
                            schema,
                            &field.input_type,
                            &ast_field.value,
                            variables,
                        )?;
                        coerced.insert(field_name.clone(), value);
                    }
                    None => {
                        if let Some(default) = &field.default_value {
                            coerced.insert(field_name.clone(), default.clone());
                        } else if field.input_type.is_non_null() {
                            return None;
                        }
                    }
                }
            }
            Some(Json::Object(coerced))
        }
        // Output types never appear in input positions post-validation.
        _ => None,
    }
}

fn is_missing_variable(value: &ast::Value, variables: Option<&JsonMap>) -> bool {
    match value {
        ast::Value::Variable(name) => variables
            .map(|vars| !vars.contains_key(name.as_str()))
            .unwrap_or(true),
        _ => false,
    }
}

// =============================================================================
// Literal validity (used by validation rules)
// =============================================================================

/// Checks an AST literal against `type_ref`, returning zero or more
/// human-readable problems. Variables are accepted unexamined; their
/// compatibility is the `VariablesInAllowedPosition` rule's concern.
pub(crate) fn literal_errors(
    schema: &Schema,
    type_ref: &TypeRef,
    literal: &ast::Value,
) -> Vec<String> {
    if literal.is_variable() {
        return vec![];
    }

    match type_ref {
        TypeRef::NonNull(inner) => {
            if literal.is_null() {
                vec![format!(
                    "Expected \"{type_ref}\", found null.",
                )]
            } else {
                literal_errors(schema, inner, literal)
            }
        }
        _ if literal.is_null() => vec![],
        TypeRef::List(inner) => match literal {
            ast::Value::List(list) => list
                .values
                .iter()
                .enumerate()
                .flat_map(|(index, item)| {
                    literal_errors(schema, inner, item)
                        .into_iter()
                        .map(move |msg| format!("In element #{index}: {msg}"))
                })
                .collect(),
            single => literal_errors(schema, inner, single),
        },
        named => {
            let Some(ty) = named.innermost_type(schema) else {
                // Unknown types are KnownTypeNames' concern.
                return vec![];
            };
            named_literal_errors(schema, ty, literal)
        }
    }
}

fn named_literal_errors(
    schema: &Schema,
    ty: &GraphQLType,
    literal: &ast::Value,
) -> Vec<String> {
    match ty {
        GraphQLType::Scalar(scalar) => match scalar.parse_literal(literal) {
            Some(_) => vec![],
            None => vec![format!(
                "Expected type \"{}\", found {}.",
                scalar.name(),
                print_value(literal),
            )],
        },
        GraphQLType::Enum(enum_type) => {
            let valid = matches!(
                literal,
                ast::Value::Enum { value, .. } if enum_type.value_of(value).is_some(),
            );
            if valid {
                vec![]
            } else {
                vec![format!(
                    "Expected type \"{}\", found {}.",
                    enum_type.name(),
                    print_value(literal),
                )]
            }
        }
        GraphQLType::InputObject(input_object) => {
            let ast::Value::Object(object) = literal else {
                return vec![format!(
                    "Expected \"{}\", found {}.",
                    input_object.name(),
                    print_value(literal),
                )];
            };
            let fields = input_object.fields();
            let mut errors = vec![];
            for ast_field in &object.fields {
                if !fields.contains_key(ast_field.name.as_str()) {
                    errors.push(format!(
                        "In field \"{}\": Unknown field.",
                        ast_field.name.as_str(),
                    ));
                }
            }
            for (field_name, field) in fields {
                match object.field(field_name) {
                    Some(ast_field) => {
                        errors.extend(
                            literal_errors(schema, &field.input_type, &ast_field.value)
                                .into_iter()
                                .map(|msg| format!("In field \"{field_name}\": {msg}")),
                        );
                    }
                    None => {
                        if field.input_type.is_non_null()
                            && field.default_value.is_none()
                        {
                            errors.push(format!(
                                "In field \"{field_name}\": Expected \"{}\", found null.",
                                field.input_type,
                            ));
                        }
                    }
                }
            }
            errors
        }
        other => vec![format!(
            "Expected type \"{}\", found {}.",
            other.name(),
            print_value(literal),
        )],
    }
}

// =============================================================================
// External JSON -> internal value
// =============================================================================

/// Coerces one external (variable) value against `type_ref`. Error strings
/// describe the innermost problem, prefixed with its location within the
/// value.
pub(crate) fn coerce_input_value(
    schema: &Schema,
    type_ref: &TypeRef,
    value: &Json,
) -> Result<Json, Vec<String>> {
    match type_ref {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                Err(vec![format!(
                    "Expected non-nullable type \"{type_ref}\" not to be null.",
                )])
            } else {
                coerce_input_value(schema, inner, value)
            }
        }
        _ if value.is_null() => Ok(Json::Null),
        TypeRef::List(inner) => match value {
            Json::Array(items) => {
                let mut coerced = Vec::with_capacity(items.len());
                let mut errors = vec![];
                for (index, item) in items.iter().enumerate() {
                    match coerce_input_value(schema, inner, item) {
                        Ok(value) => coerced.push(value),
                        Err(messages) => errors.extend(
                            messages
                                .into_iter()
                                .map(|msg| format!("In element #{index}: {msg}")),
                        ),
                    }
                }
                if errors.is_empty() {
                    Ok(Json::Array(coerced))
                } else {
                    Err(errors)
                }
            }
            // A single value coerces as a one-element list.
            single => {
                coerce_input_value(schema, inner, single)
                    .map(|value| Json::Array(vec![value]))
            }
        },
        named => {
            let ty = named
                .innermost_type(schema)
                .ok_or_else(|| vec![format!("Unknown type \"{named}\".")])?;
            coerce_named_input_value(schema, ty, value)
        }
    }
}

fn coerce_named_input_value(
    schema: &Schema,
    ty: &GraphQLType,
    value: &Json,
) -> Result<Json, Vec<String>> {
    match ty {
        GraphQLType::Scalar(scalar) => scalar.parse_value(value).ok_or_else(|| {
            vec![format!(
                "Expected type \"{}\", found {}.",
                scalar.name(),
                json_to_graphql_literal(value),
            )]
        }),
        GraphQLType::Enum(enum_type) => match value {
            Json::String(name) => enum_type.value_of(name).ok_or_else(|| {
                vec![format!(
                    "Expected type \"{}\", found {name:?}.",
                    enum_type.name(),
                )]
            }),
            other => Err(vec![format!(
                "Expected type \"{}\", found {}.",
                enum_type.name(),
                json_to_graphql_literal(other),
            )]),
        },
        GraphQLType::InputObject(input_object) => {
            let Json::Object(object) = value else {
                return Err(vec![format!(
                    "Expected \"{}\" to be an object.",
                    input_object.name(),
                )]);
            };
            let fields = input_object.fields();
            let mut errors: Vec<String> = object
                .keys()
                .filter(|key| !fields.contains_key(key.as_str()))
                .map(|key| {
                    format!(
                        "In field \"{key}\": Unknown field \"{key}\" on type \"{}\".",
                        input_object.name(),
                    )
                })
                .collect();

            let mut coerced = JsonMap::new();
            for (field_name, field) in fields {
                match object.get(field_name) {
                    Some(field_value) => {
                        match coerce_input_value(schema, &field.input_type, field_value)
                        {
                            Ok(value) => {
                                coerced.insert(field_name.clone(), value);
                            }
                            Err(messages) => errors.extend(messages.into_iter().map(
                                |msg| format!("In field \"{field_name}\": {msg}"),
                            )),
                        }
                    }
                    None => {
                        if let Some(default) = &field.default_value {
                            coerced.insert(field_name.clone(), default.clone());
                        } else if field.input_type.is_non_null() {
                            errors.push(format!(
                                "In field \"{field_name}\": Expected \"{}\" not to be null.",
                                field.input_type,
                            ));
                        }
                    }
                }
            }
            if errors.is_empty() {
                Ok(Json::Object(coerced))
            } else {
                Err(errors)
            }
        }
        other => Err(vec![format!(
            "Type \"{}\" cannot be used as an input type.",
            other.name(),
        )]),
    }
}

// =============================================================================
// Variable coercion
// =============================================================================

/// Coerces every variable of `operation` from the external inputs, applying
/// defaults for absent variables. Coercion is applied exactly once per
/// variable, before execution; it is idempotent for the built-in scalars.
pub(crate) fn coerce_variable_values(
    schema: &Schema,
    operation: &ast::OperationDefinition,
    inputs: &JsonMap,
    source: &Source,
) -> Result<JsonMap, Vec<GraphQLError>> {
    let mut coerced = JsonMap::new();
    let mut errors = vec![];

    for var_def in &operation.variable_definitions {
        let var_name = var_def.name.as_str();
        let var_type = type_from_ast(&var_def.type_annotation);

        let is_input = var_type
            .innermost_type(schema)
            .is_some_and(GraphQLType::is_input_type);
        if !is_input {
            errors.push(GraphQLError::at_spans(
                format!(
                    "Variable \"${var_name}\" expected value of type \
                     \"{}\" which cannot be used as an input type.",
                    var_def.type_annotation,
                ),
                &[var_def.span],
                source,
            ));
            continue;
        }

        match inputs.get(var_name) {
            None => {
                if let Some(default) = &var_def.default_value {
                    if let Some(value) = coerce_literal(schema, &var_type, default, None)
                    {
                        coerced.insert(var_name.to_string(), value);
                    }
                } else if var_type.is_non_null() {
                    errors.push(GraphQLError::at_spans(
                        format!(
                            "Variable \"${var_name}\" of required type \
                             \"{}\" was not provided.",
                            var_def.type_annotation,
                        ),
                        &[var_def.span],
                        source,
                    ));
                }
                // Absent nullable variables stay absent: `undefined`, not
                // `null`.
            }
            Some(value) => match coerce_input_value(schema, &var_type, value) {
                Ok(value) => {
                    coerced.insert(var_name.to_string(), value);
                }
                Err(messages) => {
                    let detail = messages.join("\n");
                    errors.push(GraphQLError::at_spans(
                        format!(
                            "Variable \"${var_name}\" got invalid value {}.\n{detail}",
                            serde_json::to_string(value)
                                .unwrap_or_else(|_| "<unserializable>".to_string()),
                        ),
                        &[var_def.span],
                        source,
                    ));
                }
            },
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

// =============================================================================
// Argument coercion
// =============================================================================

/// Coerces a field's (or directive's) arguments from their AST values and
/// the coerced variable map. Fails on the first missing required argument
/// or invalid literal.
pub(crate) fn coerce_argument_values(
    schema: &Schema,
    arg_defs: &IndexMap<String, ArgumentDef>,
    ast_args: &[ast::Argument],
    variables: &JsonMap,
) -> Result<JsonMap, String> {
    let mut coerced = JsonMap::new();

    for (arg_name, arg_def) in arg_defs {
        let ast_arg = ast_args.iter().find(|arg| arg.name.as_str() == arg_name);

        let provided = match ast_arg {
            Some(arg) => match &arg.value {
                ast::Value::Variable(var_name) => variables
                    .get(var_name.as_str())
                    .cloned()
                    .map(ProvidedValue::Value)
                    .or(Some(ProvidedValue::MissingVariable(
                        var_name.as_str().to_string(),
                    ))),
                literal => coerce_literal(schema, &arg_def.arg_type, literal, Some(variables))
                    .map(ProvidedValue::Value)
                    .or(Some(ProvidedValue::Invalid(print_value(literal)))),
            },
            None => None,
        };

        match provided {
            Some(ProvidedValue::Value(value)) => {
                if value.is_null() && arg_def.arg_type.is_non_null() {
                    return Err(format!(
                        "Argument \"{arg_name}\" of non-null type \"{}\" must \
                         not be null.",
                        arg_def.arg_type,
                    ));
                }
                coerced.insert(arg_name.clone(), value);
            }
            Some(ProvidedValue::Invalid(printed)) => {
                return Err(format!(
                    "Argument \"{arg_name}\" has invalid value {printed}.",
                ));
            }
            // Absent arguments (including unprovided variables) take the
            // declared default when one exists.
            Some(ProvidedValue::MissingVariable(var_name)) => {
                if let Some(default) = &arg_def.default_value {
                    coerced.insert(arg_name.clone(), default.clone());
                } else if arg_def.arg_type.is_non_null() {
                    return Err(format!(
                        "Argument \"{arg_name}\" of required type \"{}\" was \
                         provided the variable \"${var_name}\" which was not \
                         provided a runtime value.",
                        arg_def.arg_type,
                    ));
                }
            }
            None => {
                if let Some(default) = &arg_def.default_value {
                    coerced.insert(arg_name.clone(), default.clone());
                } else if arg_def.arg_type.is_non_null() {
                    return Err(format!(
                        "Argument \"{arg_name}\" of required type \"{}\" was \
                         not provided.",
                        arg_def.arg_type,
                    ));
                }
            }
        }
    }

    Ok(coerced)
}

enum ProvidedValue {
    Value(Json),
    Invalid(String),
    MissingVariable(String),
}
