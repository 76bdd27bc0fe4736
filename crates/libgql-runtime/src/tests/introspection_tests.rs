use crate::scalars;
use crate::tests::test_helpers::hello_schema;
use crate::tests::test_helpers::run;
use crate::tests::test_helpers::validation_schema;
use crate::ArgumentDef;
use crate::Directive;
use crate::DirectiveArgument;
use crate::DirectiveConfig;
use crate::DirectiveLocation;
use crate::FieldDef;
use crate::Lazy;
use crate::ObjectType;
use crate::ObjectTypeConfig;
use crate::Resolved;
use crate::Schema;
use crate::SchemaConfig;
use indexmap::IndexMap;
use serde_json::json;

#[test]
fn schema_introspection_names_the_query_root() {
    let schema = hello_schema();
    let response = run(&schema, "{ __schema { queryType { name } } }");
    assert!(!response.has_errors(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        json!({"__schema": {"queryType": {"name": "Query"}}}),
    );
}

#[test]
fn type_lookup_by_name() {
    let schema = validation_schema();
    let response = run(
        &schema,
        "{ __type(name: \"Dog\") { kind name interfaces { name } } }",
    );
    assert!(!response.has_errors(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        json!({
            "__type": {
                "kind": "OBJECT",
                "name": "Dog",
                "interfaces": [{"name": "Pet"}],
            },
        }),
    );

    let response = run(&schema, "{ __type(name: \"Missing\") { name } }");
    assert_eq!(response.data, json!({"__type": null}));
}

#[test]
fn wrapped_types_expose_of_type_chains() {
    let schema = validation_schema();
    let response = run(
        &schema,
        "{ __type(name: \"Query\") { fields { name type { kind ofType { kind name } } } } }",
    );
    assert!(!response.has_errors(), "{:?}", response.errors);

    let fields = response.data["__type"]["fields"].as_array().unwrap();
    let string_list = fields
        .iter()
        .find(|field| field["name"] == json!("stringList"))
        .unwrap();
    assert_eq!(string_list["type"]["kind"], json!("LIST"));
    assert_eq!(string_list["type"]["ofType"]["kind"], json!("SCALAR"));
    assert_eq!(string_list["type"]["ofType"]["name"], json!("String"));
}

#[test]
fn possible_types_and_enum_values() {
    let schema = validation_schema();
    let response = run(
        &schema,
        "{ union: __type(name: \"CatOrDog\") { possibleTypes { name } } \
           command: __type(name: \"DogCommand\") { enumValues { name } } }",
    );
    assert!(!response.has_errors(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        json!({
            "union": {"possibleTypes": [{"name": "Dog"}, {"name": "Cat"}]},
            "command": {
                "enumValues": [{"name": "SIT"}, {"name": "DOWN"}, {"name": "HEEL"}],
            },
        }),
    );
}

fn deprecation_schema() -> Schema {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "current".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Ok(Resolved::Value(json!("y")))),
            ),
            (
                "old".to_string(),
                FieldDef::new(scalars::string()).deprecated("Use `current`."),
            ),
        ])),
        ..ObjectTypeConfig::default()
    });
    Schema::new(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap()
}

#[test]
fn deprecated_fields_hide_unless_asked_for() {
    let schema = deprecation_schema();

    let response = run(&schema, "{ __type(name: \"Query\") { fields { name } } }");
    assert_eq!(
        response.data,
        json!({"__type": {"fields": [{"name": "current"}]}}),
    );

    let response = run(
        &schema,
        "{ __type(name: \"Query\") { fields(includeDeprecated: true) { name isDeprecated deprecationReason } } }",
    );
    assert_eq!(
        response.data,
        json!({
            "__type": {
                "fields": [
                    {
                        "name": "current",
                        "isDeprecated": false,
                        "deprecationReason": null,
                    },
                    {
                        "name": "old",
                        "isDeprecated": true,
                        "deprecationReason": "Use `current`.",
                    },
                ],
            },
        }),
    );
}

#[test]
fn directives_list_the_compiled_in_set() {
    let schema = hello_schema();
    let response = run(
        &schema,
        "{ __schema { directives { name locations args { name type { kind ofType { name } } } } } }",
    );
    assert!(!response.has_errors(), "{:?}", response.errors);

    let directives = response.data["__schema"]["directives"].as_array().unwrap();
    let names: Vec<&str> = directives
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["include", "skip", "omitEmpty", "deprecated"]);

    let include = &directives[0];
    assert_eq!(
        include["locations"],
        json!(["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]),
    );
    assert_eq!(include["args"][0]["name"], json!("if"));
    assert_eq!(include["args"][0]["type"]["kind"], json!("NON_NULL"));
    assert_eq!(include["args"][0]["type"]["ofType"]["name"], json!("Boolean"));
}

#[test]
fn non_standard_meta_types_hide_by_default() {
    let schema = hello_schema();

    let response = run(&schema, "{ __schema { types { name } } }");
    let names: Vec<&str> = response.data["__schema"]["types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ty| ty["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Query"));
    assert!(names.contains(&"__Schema"));
    assert!(!names.contains(&"__AppliedDirective"));
    assert!(!names.contains(&"__DirectiveArgument"));

    let response = run(
        &schema,
        "{ __schema { types(includeNonStandard: true) { name } } }",
    );
    let names: Vec<&str> = response.data["__schema"]["types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ty| ty["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"__AppliedDirective"));
    assert!(names.contains(&"__DirectiveArgument"));
}

#[test]
fn applied_directives_surface_through_introspection() {
    let length = Directive::new(DirectiveConfig {
        name: "length".to_string(),
        description: Some(
            "Used to specify the minimum and/or maximum length for an input \
             field or argument."
                .to_string(),
        ),
        locations: vec![DirectiveLocation::FieldDefinition],
        args: IndexMap::from([
            ("min".to_string(), ArgumentDef::new(scalars::int())),
            ("max".to_string(), ArgumentDef::new(scalars::int())),
        ]),
        ..DirectiveConfig::default()
    });

    let droid = ObjectType::new(ObjectTypeConfig {
        name: "DroidType".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "name".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Ok(Resolved::Value(json!("R2-D2")))),
            ),
            (
                "customField".to_string(),
                FieldDef::new(scalars::string()).applied_directive(length.apply([
                    DirectiveArgument::new("min", 103),
                    DirectiveArgument::new("max", 999),
                ])),
            ),
        ])),
        ..ObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "root".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "hero".to_string(),
            FieldDef::new(droid),
        )])),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(query),
        directives: vec![length],
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(
        &schema,
        "{ __type(name: \"DroidType\") { fields { name appliedDirectives { name args { name value } } } } }",
    );
    assert!(!response.has_errors(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        json!({
            "__type": {
                "fields": [
                    {"name": "name", "appliedDirectives": []},
                    {
                        "name": "customField",
                        "appliedDirectives": [{
                            "name": "length",
                            "args": [
                                {"name": "min", "value": "103"},
                                {"name": "max", "value": "999"},
                            ],
                        }],
                    },
                ],
            },
        }),
    );
}

#[test]
fn applied_directives_never_change_execution() {
    let tag = Directive::new(DirectiveConfig {
        name: "tag".to_string(),
        locations: vec![DirectiveLocation::FieldDefinition],
        args: IndexMap::new(),
        ..DirectiveConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "tagged".to_string(),
            FieldDef::new(scalars::string())
                .applied_directive(tag.apply([]))
                .resolver(|_| Ok(Resolved::Value(json!("still works")))),
        )])),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(query),
        directives: vec![tag],
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(&schema, "{ tagged }");
    assert!(!response.has_errors());
    assert_eq!(response.data, json!({"tagged": "still works"}));
}

#[test]
fn typename_meta_field_names_the_concrete_type() {
    let schema = hello_schema();
    let response = run(&schema, "{ __typename hello }");
    assert_eq!(
        response.data,
        json!({"__typename": "Query", "hello": "world"}),
    );
}

#[test]
fn introspection_round_trips_the_public_surface() {
    // The classic smoke test: enough of the introspection query to
    // reconstruct the schema's shape, run against the pets schema.
    let schema = validation_schema();
    let response = run(
        &schema,
        r#"
        {
            __schema {
                queryType { name }
                types {
                    kind
                    name
                    fields(includeDeprecated: true) {
                        name
                        args { name type { kind name ofType { name } } defaultValue }
                        type { kind name ofType { kind name } }
                    }
                    inputFields { name defaultValue }
                    possibleTypes { name }
                    enumValues { name }
                }
                directives { name locations }
            }
        }
        "#,
    );
    assert!(!response.has_errors(), "{:?}", response.errors);

    let types = response.data["__schema"]["types"].as_array().unwrap();
    let find = |name: &str| {
        types
            .iter()
            .find(|ty| ty["name"] == json!(name))
            .unwrap_or_else(|| panic!("type {name} missing from introspection"))
    };

    assert_eq!(find("Dog")["kind"], json!("OBJECT"));
    assert_eq!(find("Pet")["possibleTypes"].as_array().unwrap().len(), 2);
    assert_eq!(find("ComplexInput")["kind"], json!("INPUT_OBJECT"));
    assert_eq!(
        find("ComplexInput")["inputFields"].as_array().unwrap().len(),
        3,
    );
    let housetrained = find("Dog")["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == json!("isHousetrained"))
        .unwrap()
        .clone();
    assert_eq!(housetrained["args"][0]["defaultValue"], json!("true"));
}
