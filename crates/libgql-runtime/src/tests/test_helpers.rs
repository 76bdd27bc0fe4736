//! Shared fixtures for the runtime tests.

use crate::execute;
use crate::scalars;
use crate::types::InterfaceTypeConfig;
use crate::types::UnionTypeConfig;
use crate::ArgumentDef;
use crate::FieldDef;
use crate::GraphQLError;
use crate::InputFieldDef;
use crate::InputObjectType;
use crate::InputObjectTypeConfig;
use crate::InterfaceType;
use crate::Lazy;
use crate::ObjectType;
use crate::ObjectTypeConfig;
use crate::Request;
use crate::Resolved;
use crate::Response;
use crate::Schema;
use crate::SchemaConfig;
use crate::TypeRef;
use crate::UnionType;
use indexmap::IndexMap;
use serde_json::json;
use serde_json::Value as Json;
use std::sync::Arc;

/// `Query.hello: String` resolving to `"world"`.
pub(crate) fn hello_schema() -> Schema {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "hello".to_string(),
            FieldDef::new(scalars::string())
                .resolver(|_params| Ok(Resolved::Value(json!("world")))),
        )])),
        ..ObjectTypeConfig::default()
    });
    Schema::new(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .expect("hello schema builds")
}

/// The pets-and-commands schema the validation tests run against.
///
/// Covers interfaces with implementers, a union, an enum, an input object
/// with a required field, list and non-null argument shapes, and a couple
/// of plain scalar fields.
pub(crate) fn validation_schema() -> Schema {
    let pet = InterfaceType::new(InterfaceTypeConfig {
        name: "Pet".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "name".to_string(),
            FieldDef::new(TypeRef::non_null(scalars::string())),
        )])),
        ..InterfaceTypeConfig::default()
    });

    let dog = ObjectType::new(ObjectTypeConfig {
        name: "Dog".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "name".to_string(),
                FieldDef::new(TypeRef::non_null(scalars::string())),
            ),
            ("barkVolume".to_string(), FieldDef::new(scalars::int())),
            (
                "doesKnowCommand".to_string(),
                FieldDef::new(scalars::boolean()).arg(
                    "dogCommand",
                    ArgumentDef::new(TypeRef::non_null(TypeRef::named("DogCommand"))),
                ),
            ),
            (
                "isHousetrained".to_string(),
                FieldDef::new(scalars::boolean()).arg(
                    "atOtherHomes",
                    ArgumentDef::new(scalars::boolean()).default_value(true),
                ),
            ),
        ])),
        interfaces: Lazy::value(vec![TypeRef::named("Pet")]),
        ..ObjectTypeConfig::default()
    });

    let cat = ObjectType::new(ObjectTypeConfig {
        name: "Cat".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "name".to_string(),
                FieldDef::new(TypeRef::non_null(scalars::string())),
            ),
            ("meowVolume".to_string(), FieldDef::new(scalars::int())),
        ])),
        interfaces: Lazy::value(vec![TypeRef::named("Pet")]),
        ..ObjectTypeConfig::default()
    });

    let cat_or_dog = UnionType::new(UnionTypeConfig {
        name: "CatOrDog".to_string(),
        types: Lazy::value(vec![TypeRef::named("Dog"), TypeRef::named("Cat")]),
        resolve_type: Some(Arc::new(|_params| Some("Dog".to_string()))),
        ..UnionTypeConfig::default()
    });

    let dog_command = crate::EnumType::new(crate::EnumTypeConfig {
        name: "DogCommand".to_string(),
        values: IndexMap::from([
            ("SIT".to_string(), crate::EnumValueDef::new()),
            ("DOWN".to_string(), crate::EnumValueDef::new()),
            ("HEEL".to_string(), crate::EnumValueDef::new()),
        ]),
        ..crate::EnumTypeConfig::default()
    });

    let complex_input = InputObjectType::new(InputObjectTypeConfig {
        name: "ComplexInput".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "requiredField".to_string(),
                InputFieldDef::new(TypeRef::non_null(scalars::boolean())),
            ),
            (
                "stringField".to_string(),
                InputFieldDef::new(scalars::string()),
            ),
            ("intField".to_string(), InputFieldDef::new(scalars::int())),
        ])),
        ..InputObjectTypeConfig::default()
    });

    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([
            ("dog".to_string(), FieldDef::new(TypeRef::named("Dog"))),
            ("pet".to_string(), FieldDef::new(TypeRef::named("Pet"))),
            (
                "catOrDog".to_string(),
                FieldDef::new(TypeRef::named("CatOrDog")),
            ),
            (
                "stringArg".to_string(),
                FieldDef::new(scalars::string())
                    .arg("s", ArgumentDef::new(scalars::string())),
            ),
            (
                "complex".to_string(),
                FieldDef::new(scalars::string()).arg(
                    "input",
                    ArgumentDef::new(TypeRef::named("ComplexInput")),
                ),
            ),
            (
                "stringList".to_string(),
                FieldDef::new(TypeRef::list(scalars::string())),
            ),
            (
                "nonNullIntArg".to_string(),
                FieldDef::new(scalars::int())
                    .arg("x", ArgumentDef::new(TypeRef::non_null(scalars::int()))),
            ),
        ])),
        ..ObjectTypeConfig::default()
    });

    Schema::new(SchemaConfig {
        query: Some(query),
        types: vec![
            dog,
            cat,
            pet,
            cat_or_dog,
            dog_command,
            complex_input,
            scalars::float(),
            scalars::id(),
        ],
        ..SchemaConfig::default()
    })
    .expect("validation schema builds")
}

pub(crate) fn run(schema: &Schema, source: &str) -> Response {
    execute(Request::new(schema).source(source))
}

pub(crate) fn run_with_variables(
    schema: &Schema,
    source: &str,
    variables: Json,
) -> Response {
    let Json::Object(variables) = variables else {
        panic!("variables fixture must be a JSON object");
    };
    execute(
        Request::new(schema)
            .source(source)
            .variable_values(variables),
    )
}

pub(crate) fn response_json(response: &Response) -> Json {
    serde_json::to_value(response).expect("responses serialize")
}

pub(crate) fn error_messages(errors: &[GraphQLError]) -> Vec<String> {
    errors.iter().map(|error| error.message.clone()).collect()
}
