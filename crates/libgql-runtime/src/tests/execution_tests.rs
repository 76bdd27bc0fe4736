use crate::scalars;
use crate::tests::test_helpers::error_messages;
use crate::tests::test_helpers::hello_schema;
use crate::tests::test_helpers::response_json;
use crate::tests::test_helpers::run;
use crate::tests::test_helpers::run_with_variables;
use crate::ArgumentDef;
use crate::Context;
use crate::FieldDef;
use crate::InterfaceType;
use crate::InterfaceTypeConfig;
use crate::Lazy;
use crate::ObjectType;
use crate::ObjectTypeConfig;
use crate::PathSegment;
use crate::Request;
use crate::Resolved;
use crate::Schema;
use crate::SchemaConfig;
use crate::TypeRef;
use indexmap::IndexMap;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

fn single_field_schema(name: &str, field: FieldDef) -> Schema {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(name.to_string(), field)])),
        ..ObjectTypeConfig::default()
    });
    Schema::new(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .expect("test schema builds")
}

#[test]
fn hello_world() {
    let schema = hello_schema();
    let response = run(&schema, "{ hello }");
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"data":{"hello":"world"}}"#,
    );
}

#[test]
fn partial_success_keeps_data_and_errors_together() {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "good".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Ok(Resolved::Value(json!("ok")))),
            ),
            (
                "bad".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Err("boom".into())),
            ),
        ])),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(&schema, "{ good bad }");
    assert_eq!(response.data, json!({"good": "ok", "bad": null}));
    assert_eq!(error_messages(&response.errors), vec!["boom"]);
    assert_eq!(
        response.errors[0].path,
        vec![PathSegment::Field("bad".to_string())],
    );
}

#[test]
fn panicking_non_null_resolver_nulls_the_whole_data() {
    let schema = single_field_schema(
        "nonNullSync",
        FieldDef::new(TypeRef::non_null(scalars::string()))
            .resolver(|_| panic!("sync")),
    );

    let response = run(&schema, "query Q { nonNullSync }");
    assert_eq!(
        response_json(&response),
        json!({
            "data": null,
            "errors": [{
                "message": "sync",
                "locations": [{"line": 1, "column": 11}],
                "path": ["nonNullSync"],
            }],
        }),
    );
}

fn nest_schema() -> Schema {
    // DataType.nest: DataType, DataType.test: [Int!] resolving to
    // [1, null, 2].
    let data_type = ObjectType::new(ObjectTypeConfig {
        name: "DataType".to_string(),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                (
                    "nest".to_string(),
                    FieldDef::new(TypeRef::named("DataType"))
                        .resolver(|_| Ok(Resolved::Value(json!({})))),
                ),
                (
                    "test".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::non_null(scalars::int())))
                        .resolver(|_| Ok(Resolved::Value(json!([1, null, 2])))),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });
    Schema::new(SchemaConfig {
        query: Some(data_type),
        ..SchemaConfig::default()
    })
    .unwrap()
}

#[test]
fn null_element_in_non_null_list_nulls_the_list() {
    let schema = nest_schema();
    let response = run(&schema, "{ nest { test } }");

    assert_eq!(response.data, json!({"nest": {"test": null}}));
    assert_eq!(
        error_messages(&response.errors),
        vec!["Cannot return null for non-nullable field DataType.test."],
    );
    assert_eq!(
        response.errors[0].path,
        vec![
            PathSegment::Field("nest".to_string()),
            PathSegment::Field("test".to_string()),
            PathSegment::Index(1),
        ],
    );
}

#[test]
fn null_propagates_to_the_nearest_nullable_ancestor() {
    // a.b.c chain where b and c are non-null and c fails: the error path
    // names c, and a (the nearest nullable ancestor) becomes null.
    let c_holder = ObjectType::new(ObjectTypeConfig {
        name: "CHolder".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "c".to_string(),
            FieldDef::new(TypeRef::non_null(scalars::string()))
                .resolver(|_| Ok(Resolved::null())),
        )])),
        ..ObjectTypeConfig::default()
    });
    let b_holder = ObjectType::new(ObjectTypeConfig {
        name: "BHolder".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "b".to_string(),
            FieldDef::new(TypeRef::non_null(c_holder))
                .resolver(|_| Ok(Resolved::Value(json!({})))),
        )])),
        ..ObjectTypeConfig::default()
    });
    let schema = single_field_schema(
        "a",
        FieldDef::new(b_holder).resolver(|_| Ok(Resolved::Value(json!({})))),
    );

    let response = run(&schema, "{ a { b { c } } }");
    assert_eq!(response.data, json!({"a": null}));
    assert_eq!(
        error_messages(&response.errors),
        vec!["Cannot return null for non-nullable field CHolder.c."],
    );
    assert_eq!(
        response.errors[0].path,
        vec![
            PathSegment::Field("a".to_string()),
            PathSegment::Field("b".to_string()),
            PathSegment::Field("c".to_string()),
        ],
    );
}

#[test]
fn skip_and_include_directives_drop_fields() {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "a".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Ok(Resolved::Value(json!("a")))),
            ),
            (
                "b".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Ok(Resolved::Value(json!("b")))),
            ),
            (
                "c".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Ok(Resolved::Value(json!("c")))),
            ),
        ])),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(&schema, "{ a @skip(if: true) b @include(if: false) c }");
    assert!(!response.has_errors());
    assert_eq!(response.data, json!({"c": "c"}));
}

#[test]
fn variable_defaults_reach_resolvers() {
    let schema = single_field_schema(
        "echo",
        FieldDef::new(scalars::int())
            .arg("x", ArgumentDef::new(scalars::int()))
            .resolver(|params| {
                Ok(Resolved::Value(params.arg("x").cloned().unwrap_or(json!(null))))
            }),
    );

    let response =
        run(&schema, "query Q($x: Int = 7) { echo(x: $x) }");
    assert!(!response.has_errors());
    assert_eq!(response.data, json!({"echo": 7}));

    let response = run_with_variables(
        &schema,
        "query Q($x: Int = 7) { echo(x: $x) }",
        json!({"x": 3}),
    );
    assert_eq!(response.data, json!({"echo": 3}));
}

#[test]
fn absent_and_explicit_null_arguments_are_distinct() {
    let schema = single_field_schema(
        "probe",
        FieldDef::new(scalars::string())
            .arg("x", ArgumentDef::new(scalars::int()))
            .resolver(|params| {
                Ok(Resolved::Value(json!(match params.arg("x") {
                    None => "absent",
                    Some(serde_json::Value::Null) => "null",
                    Some(_) => "value",
                })))
            }),
    );

    assert_eq!(run(&schema, "{ probe }").data, json!({"probe": "absent"}));
    assert_eq!(
        run(&schema, "{ probe(x: null) }").data,
        json!({"probe": "null"}),
    );
    assert_eq!(
        run(&schema, "{ probe(x: 1) }").data,
        json!({"probe": "value"}),
    );
}

#[test]
fn mutations_execute_sequentially_in_document_order() {
    let counter = Arc::new(Mutex::new(0));

    let bump = |counter: Arc<Mutex<i32>>| {
        FieldDef::new(scalars::int()).resolver(move |params| {
            let mut guard = counter.lock().unwrap();
            *guard += params
                .arg("by")
                .and_then(serde_json::Value::as_i64)
                .unwrap_or(1) as i32;
            Ok(Resolved::Value(json!(*guard)))
        })
        .arg("by", ArgumentDef::new(scalars::int()))
    };

    let mutation = ObjectType::new(ObjectTypeConfig {
        name: "Mutation".to_string(),
        fields: Lazy::value(IndexMap::from([
            ("first".to_string(), bump(Arc::clone(&counter))),
            ("second".to_string(), bump(Arc::clone(&counter))),
            ("third".to_string(), bump(Arc::clone(&counter))),
        ])),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(hello_schema().query_type().clone()),
        mutation: Some(mutation),
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(
        &schema,
        "mutation M { first(by: 1) second(by: 10) third(by: 100) }",
    );
    assert!(!response.has_errors());
    assert_eq!(
        response.data,
        json!({"first": 1, "second": 11, "third": 111}),
    );
}

#[test]
fn response_keys_preserve_document_order_under_parallelism() {
    let mut fields = IndexMap::new();
    for name in ["zulu", "alpha", "mike", "bravo", "yankee", "charlie"] {
        fields.insert(
            name.to_string(),
            FieldDef::new(scalars::string()).resolver(move |params| {
                Ok(Resolved::Value(json!(params.info.field_name)))
            }),
        );
    }
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(fields),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(&schema, "{ yankee charlie zulu aliased: alpha mike }");
    let serde_json::Value::Object(map) = &response.data else {
        panic!("expected object data");
    };
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, ["yankee", "charlie", "zulu", "aliased", "mike"]);
}

#[test]
fn list_elements_preserve_order_under_parallelism() {
    let schema = single_field_schema(
        "range",
        FieldDef::new(TypeRef::list(scalars::int())).resolver(|_| {
            Ok(Resolved::Items(
                (0..64).map(|i| Resolved::Value(json!(i))).collect(),
            ))
        }),
    );
    let response = run(&schema, "{ range }");
    let expected: Vec<i64> = (0..64).collect();
    assert_eq!(response.data, json!({ "range": expected }));
}

#[test]
fn fragments_spread_against_concrete_and_abstract_types() {
    let named = InterfaceType::new(InterfaceTypeConfig {
        name: "Named".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "name".to_string(),
            FieldDef::new(scalars::string()),
        )])),
        resolve_type: Some(Arc::new(|params| {
            params
                .value
                .as_value()
                .and_then(|v| v.get("kind"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })),
        ..InterfaceTypeConfig::default()
    });
    let person = ObjectType::new(ObjectTypeConfig {
        name: "Person".to_string(),
        fields: Lazy::value(IndexMap::from([
            ("name".to_string(), FieldDef::new(scalars::string())),
            ("age".to_string(), FieldDef::new(scalars::int())),
        ])),
        interfaces: Lazy::value(vec![TypeRef::named("Named")]),
        ..ObjectTypeConfig::default()
    });
    let robot = ObjectType::new(ObjectTypeConfig {
        name: "Robot".to_string(),
        fields: Lazy::value(IndexMap::from([
            ("name".to_string(), FieldDef::new(scalars::string())),
            ("model".to_string(), FieldDef::new(scalars::string())),
        ])),
        interfaces: Lazy::value(vec![TypeRef::named("Named")]),
        ..ObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "anyone".to_string(),
            FieldDef::new(named).resolver(|_| {
                Ok(Resolved::Value(json!({
                    "kind": "Robot",
                    "name": "R2",
                    "model": "astromech",
                })))
            }),
        )])),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(query),
        types: vec![person, robot],
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(
        &schema,
        "{ anyone { name ...personBits ... on Robot { model } } } \
         fragment personBits on Person { age }",
    );
    assert!(!response.has_errors(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        json!({"anyone": {"name": "R2", "model": "astromech"}}),
    );
}

#[test]
fn union_members_resolve_via_is_type_of() {
    let dog = ObjectType::new(ObjectTypeConfig {
        name: "Dog".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "barks".to_string(),
            FieldDef::new(scalars::boolean()),
        )])),
        is_type_of: Some(Arc::new(|params| {
            params
                .value
                .as_value()
                .is_some_and(|v| v.get("barks").is_some())
        })),
        ..ObjectTypeConfig::default()
    });
    let cat = ObjectType::new(ObjectTypeConfig {
        name: "Cat".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "meows".to_string(),
            FieldDef::new(scalars::boolean()),
        )])),
        is_type_of: Some(Arc::new(|params| {
            params
                .value
                .as_value()
                .is_some_and(|v| v.get("meows").is_some())
        })),
        ..ObjectTypeConfig::default()
    });
    let pet = crate::UnionType::new(crate::UnionTypeConfig {
        name: "Pet".to_string(),
        types: Lazy::value(vec![TypeRef::Direct(dog), TypeRef::Direct(cat)]),
        ..crate::UnionTypeConfig::default()
    });
    let schema = single_field_schema(
        "pet",
        FieldDef::new(pet).resolver(|_| Ok(Resolved::Value(json!({"meows": true})))),
    );

    let response = run(
        &schema,
        "{ pet { __typename ... on Dog { barks } ... on Cat { meows } } }",
    );
    assert!(!response.has_errors(), "{:?}", response.errors);
    assert_eq!(
        response.data,
        json!({"pet": {"__typename": "Cat", "meows": true}}),
    );
}

#[test]
fn default_resolver_reads_json_properties_and_defers_run() {
    let inner = ObjectType::new(ObjectTypeConfig {
        name: "Inner".to_string(),
        fields: Lazy::value(IndexMap::from([
            ("title".to_string(), FieldDef::new(scalars::string())),
            ("count".to_string(), FieldDef::new(scalars::int())),
        ])),
        ..ObjectTypeConfig::default()
    });
    let schema = single_field_schema(
        "thing",
        FieldDef::new(inner).resolver(|_| {
            Ok(Resolved::defer(|| {
                Ok(Resolved::Value(json!({"title": "t", "count": 3})))
            }))
        }),
    );

    let response = run(&schema, "{ thing { title count } }");
    assert!(!response.has_errors());
    assert_eq!(response.data, json!({"thing": {"title": "t", "count": 3}}));
}

#[test]
fn omit_empty_drops_null_and_empty_list_fields() {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([
            (
                "nothing".to_string(),
                FieldDef::new(scalars::string()).resolver(|_| Ok(Resolved::null())),
            ),
            (
                "emptyList".to_string(),
                FieldDef::new(TypeRef::list(scalars::int()))
                    .resolver(|_| Ok(Resolved::Items(vec![]))),
            ),
            (
                "something".to_string(),
                FieldDef::new(scalars::string())
                    .resolver(|_| Ok(Resolved::Value(json!("here")))),
            ),
        ])),
        ..ObjectTypeConfig::default()
    });
    let schema = Schema::new(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap();

    let response = run(
        &schema,
        "{ nothing @omitEmpty emptyList @omitEmpty something @omitEmpty kept: nothing }",
    );
    assert!(!response.has_errors());
    assert_eq!(response.data, json!({"something": "here", "kept": null}));
}

#[test]
fn cancelled_context_short_circuits_execution() {
    let schema = hello_schema();
    let context = Context::new();
    context.cancellation_handle().cancel();

    let response = crate::execute(
        Request::new(&schema)
            .source("{ hello }")
            .context(context),
    );
    assert_eq!(response.data, json!(null));
    assert_eq!(
        error_messages(&response.errors),
        vec!["Execution was cancelled."],
    );
}

#[test]
fn context_values_reach_resolvers() {
    let schema = single_field_schema(
        "whoami",
        FieldDef::new(scalars::string()).resolver(|params| {
            Ok(Resolved::Value(
                params
                    .context
                    .value("user")
                    .cloned()
                    .unwrap_or(json!(null)),
            ))
        }),
    );
    let response = crate::execute(
        Request::new(&schema)
            .source("{ whoami }")
            .context(Context::with_values([(
                "user".to_string(),
                json!("ada"),
            )])),
    );
    assert_eq!(response.data, json!({"whoami": "ada"}));
}

#[test]
fn selecting_an_operation_by_name() {
    let schema = hello_schema();
    let source = "query A { hello } query B { withAlias: hello }";

    let response = crate::execute(
        Request::new(&schema).source(source).operation_name("B"),
    );
    assert_eq!(response.data, json!({"withAlias": "world"}));

    let response = run(&schema, source);
    assert_eq!(
        error_messages(&response.errors),
        vec!["Must provide operation name if query contains multiple operations."],
    );

    let response = crate::execute(
        Request::new(&schema).source(source).operation_name("C"),
    );
    assert_eq!(
        error_messages(&response.errors),
        vec!["Unknown operation named \"C\"."],
    );
}

#[test]
fn syntax_errors_return_in_the_envelope() {
    let schema = hello_schema();
    let response = run(&schema, "{ hello");
    assert_eq!(response.data, json!(null));
    assert_eq!(
        error_messages(&response.errors),
        vec!["Expected Name, found <EOF>."],
    );

    let response = run(&schema, "");
    assert_eq!(
        error_messages(&response.errors),
        vec!["Must provide an operation."],
    );
}

#[test]
fn resolver_errors_carry_extensions() {
    let schema = single_field_schema(
        "guarded",
        FieldDef::new(scalars::string()).resolver(|_| {
            let mut extensions = serde_json::Map::new();
            extensions.insert("code".to_string(), json!("FORBIDDEN"));
            Err(crate::FieldError::new("not allowed").with_extensions(extensions))
        }),
    );
    let response = run(&schema, "{ guarded }");
    assert_eq!(
        response_json(&response)["errors"][0]["extensions"]["code"],
        json!("FORBIDDEN"),
    );
}

#[test]
fn pre_parsed_documents_and_root_values() {
    let schema = single_field_schema(
        "root",
        FieldDef::new(scalars::string()).resolver(|params| {
            Ok(params
                .info
                .root_value
                .as_value()
                .and_then(|value| value.get("seed"))
                .cloned()
                .map(Resolved::Value)
                .unwrap_or_else(Resolved::null))
        }),
    );
    let doc = libgql_parser::parse("{ root }").unwrap();
    let response = crate::execute(
        Request::new(&schema)
            .document(doc)
            .root_value(Resolved::Value(json!({"seed": "planted"}))),
    );
    assert!(!response.has_errors());
    assert_eq!(response.data, json!({"root": "planted"}));
}

#[test]
fn concurrent_executions_share_one_schema() {
    let schema = hello_schema();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let schema = schema.clone();
            std::thread::spawn(move || {
                for _ in 0..50 {
                    let response = run(&schema, "{ hello }");
                    assert_eq!(response.data, json!({"hello": "world"}));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
