use crate::schema::name_config_error;
use crate::schema::SchemaBuildError;
use crate::types::AppliedDirective;
use crate::types::GraphQLType;
use libgql_parser::ast;
use serde_json::Value as Json;
use std::sync::Arc;

/// Serializes an internal value to its wire form. Returning `Json::Null`
/// means "cannot serialize"; completion turns that into a `null` result
/// without an error.
pub type SerializeFn = Arc<dyn Fn(&Json) -> Json + Send + Sync>;

/// Coerces an external (variable) value to the internal form. `None` marks
/// the input as invalid for this scalar.
pub type ParseValueFn = Arc<dyn Fn(&Json) -> Option<Json> + Send + Sync>;

/// Coerces an AST literal to the internal form. `None` marks the literal
/// as invalid for this scalar.
pub type ParseLiteralFn = Arc<dyn Fn(&ast::Value) -> Option<Json> + Send + Sync>;

/// Configuration for [`ScalarType::new`].
pub struct ScalarTypeConfig {
    pub name: String,
    pub description: Option<String>,
    pub serialize: SerializeFn,
    pub parse_value: ParseValueFn,
    pub parse_literal: ParseLiteralFn,
    pub applied_directives: Vec<AppliedDirective>,
}

/// A leaf type defined by its three coercion functions.
pub struct ScalarType {
    name: String,
    description: Option<String>,
    serialize: SerializeFn,
    parse_value: ParseValueFn,
    parse_literal: ParseLiteralFn,
    applied_directives: Vec<AppliedDirective>,
    config_error: Option<SchemaBuildError>,
}

impl ScalarType {
    pub fn new(config: ScalarTypeConfig) -> GraphQLType {
        let config_error = name_config_error(&config.name, "Scalar");
        GraphQLType::Scalar(Arc::new(Self {
            name: config.name,
            description: config.description,
            serialize: config.serialize,
            parse_value: config.parse_value,
            parse_literal: config.parse_literal,
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

    pub fn serialize(&self, value: &Json) -> Json {
        (self.serialize)(value)
    }

    pub fn parse_value(&self, value: &Json) -> Option<Json> {
        (self.parse_value)(value)
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<Json> {
        (self.parse_literal)(value)
    }

    pub fn applied_directives(&self) -> &[AppliedDirective] {
        &self.applied_directives
    }

    pub(crate) fn config_error(&self) -> Option<&SchemaBuildError> {
        self.config_error.as_ref()
    }
}

impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The five built-in scalars.
pub mod scalars {
    use super::*;
    use lazy_static::lazy_static;

    /// GraphQL Int is a signed 32-bit integer.
    const INT_MIN: i64 = i32::MIN as i64;
    const INT_MAX: i64 = i32::MAX as i64;

    fn coerce_int(value: &Json) -> Option<Json> {
        match value {
            Json::Number(number) => {
                if let Some(int) = number.as_i64() {
                    (INT_MIN..=INT_MAX).contains(&int).then(|| Json::from(int))
                } else {
                    // Accept integral floats such as `3.0`.
                    let float = number.as_f64()?;
                    (float.fract() == 0.0
                        && (INT_MIN as f64..=INT_MAX as f64).contains(&float))
                    .then(|| Json::from(float as i64))
                }
            }
            _ => None,
        }
    }

    fn coerce_float(value: &Json) -> Option<Json> {
        match value {
            Json::Number(number) => number.as_f64().map(Json::from),
            _ => None,
        }
    }

    fn serialize_string(value: &Json) -> Json {
        match value {
            Json::String(s) => Json::String(s.clone()),
            Json::Number(n) => Json::String(n.to_string()),
            Json::Bool(b) => Json::String(b.to_string()),
            _ => Json::Null,
        }
    }

    fn coerce_id(value: &Json) -> Option<Json> {
        match value {
            Json::String(s) => Some(Json::String(s.clone())),
            Json::Number(n) if n.as_i64().is_some() => {
                Some(Json::String(n.to_string()))
            }
            _ => None,
        }
    }

    lazy_static! {
        static ref INT: GraphQLType = ScalarType::new(ScalarTypeConfig {
            name: "Int".to_string(),
            description: Some(
                "The `Int` scalar type represents non-fractional signed whole \
                 numeric values. Int can represent values between -(2^31) and \
                 2^31 - 1."
                    .to_string(),
            ),
            serialize: Arc::new(|value| coerce_int(value).unwrap_or(Json::Null)),
            parse_value: Arc::new(coerce_int),
            parse_literal: Arc::new(|literal| match literal {
                ast::Value::Int { value, .. } => {
                    (INT_MIN..=INT_MAX).contains(value).then(|| Json::from(*value))
                }
                _ => None,
            }),
            applied_directives: vec![],
        });
        static ref FLOAT: GraphQLType = ScalarType::new(ScalarTypeConfig {
            name: "Float".to_string(),
            description: Some(
                "The `Float` scalar type represents signed double-precision \
                 fractional values as specified by IEEE 754."
                    .to_string(),
            ),
            serialize: Arc::new(|value| coerce_float(value).unwrap_or(Json::Null)),
            parse_value: Arc::new(coerce_float),
            parse_literal: Arc::new(|literal| match literal {
                ast::Value::Float { value, .. } => Some(Json::from(*value)),
                ast::Value::Int { value, .. } => Some(Json::from(*value as f64)),
                _ => None,
            }),
            applied_directives: vec![],
        });
        static ref STRING: GraphQLType = ScalarType::new(ScalarTypeConfig {
            name: "String".to_string(),
            description: Some(
                "The `String` scalar type represents textual data, represented \
                 as UTF-8 character sequences."
                    .to_string(),
            ),
            serialize: Arc::new(serialize_string),
            parse_value: Arc::new(|value| match value {
                Json::String(s) => Some(Json::String(s.clone())),
                _ => None,
            }),
            parse_literal: Arc::new(|literal| match literal {
                ast::Value::String { value, .. } => Some(Json::String(value.clone())),
                _ => None,
            }),
            applied_directives: vec![],
        });
        static ref BOOLEAN: GraphQLType = ScalarType::new(ScalarTypeConfig {
            name: "Boolean".to_string(),
            description: Some(
                "The `Boolean` scalar type represents `true` or `false`."
                    .to_string(),
            ),
            serialize: Arc::new(|value| match value {
                Json::Bool(b) => Json::Bool(*b),
                Json::Number(n) => Json::Bool(n.as_f64() != Some(0.0)),
                _ => Json::Null,
            }),
            parse_value: Arc::new(|value| match value {
                Json::Bool(b) => Some(Json::Bool(*b)),
                _ => None,
            }),
            parse_literal: Arc::new(|literal| match literal {
                ast::Value::Boolean { value, .. } => Some(Json::Bool(*value)),
                _ => None,
            }),
            applied_directives: vec![],
        });
        static ref ID: GraphQLType = ScalarType::new(ScalarTypeConfig {
            name: "ID".to_string(),
            description: Some(
                "The `ID` scalar type represents a unique identifier, often \
                 used to refetch an object or as key for a cache."
                    .to_string(),
            ),
            serialize: Arc::new(|value| coerce_id(value).unwrap_or(Json::Null)),
            parse_value: Arc::new(coerce_id),
            parse_literal: Arc::new(|literal| match literal {
                ast::Value::String { value, .. } => Some(Json::String(value.clone())),
                ast::Value::Int { value, .. } => {
                    Some(Json::String(value.to_string()))
                }
                _ => None,
            }),
            applied_directives: vec![],
        });
    }

    pub fn int() -> GraphQLType {
        INT.clone()
    }

    pub fn float() -> GraphQLType {
        FLOAT.clone()
    }

    pub fn string() -> GraphQLType {
        STRING.clone()
    }

    pub fn boolean() -> GraphQLType {
        BOOLEAN.clone()
    }

    pub fn id() -> GraphQLType {
        ID.clone()
    }

    /// All five built-in scalars, for registration walks.
    pub fn all() -> Vec<GraphQLType> {
        vec![int(), float(), string(), boolean(), id()]
    }
}
