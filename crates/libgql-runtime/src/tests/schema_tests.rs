use crate::scalars;
use crate::tests::test_helpers::hello_schema;
use crate::ArgumentDef;
use crate::FieldDef;
use crate::InterfaceType;
use crate::InterfaceTypeConfig;
use crate::Lazy;
use crate::ObjectType;
use crate::ObjectTypeConfig;
use crate::Schema;
use crate::SchemaBuildError;
use crate::SchemaConfig;
use crate::TypeRef;
use crate::UnionType;
use crate::UnionTypeConfig;
use indexmap::IndexMap;
use std::sync::Arc;

fn build(config: SchemaConfig) -> Result<Schema, SchemaBuildError> {
    Schema::new(config)
}

fn string_field() -> FieldDef {
    FieldDef::new(scalars::string())
}

#[test]
fn builds_a_minimal_schema() {
    let schema = hello_schema();
    assert_eq!(schema.query_type().name(), "Query");
    assert!(schema.mutation_type().is_none());
    assert!(schema.type_named("String").is_some());
    assert!(schema.type_named("__Schema").is_some());
    assert!(schema.directive_named("include").is_some());
    assert!(schema.directive_named("skip").is_some());
    assert!(schema.directive_named("deprecated").is_some());
    assert!(schema.directive_named("omitEmpty").is_some());
}

#[test]
fn requires_a_query_root() {
    let err = build(SchemaConfig::default()).unwrap_err();
    assert_eq!(err, SchemaBuildError::MissingQueryType);
}

#[test]
fn rejects_non_object_query_root() {
    let err = build(SchemaConfig {
        query: Some(scalars::string()),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::QueryTypeMustBeObject {
            type_name: "String".to_string(),
        },
    );
}

#[test]
fn factories_capture_invalid_names_until_schema_construction() {
    // Construction itself never fails...
    let bad = ObjectType::new(ObjectTypeConfig {
        name: "Bad Name".to_string(),
        fields: Lazy::value(IndexMap::from([("f".to_string(), string_field())])),
        ..ObjectTypeConfig::default()
    });

    // ...the error surfaces when a schema touches the type.
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "bad".to_string(),
            FieldDef::new(bad),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::InvalidName {
            name: "Bad Name".to_string(),
        },
    );
}

#[test]
fn rejects_reserved_type_names() {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "f".to_string(),
            FieldDef::new(ObjectType::new(ObjectTypeConfig {
                name: "__Sneaky".to_string(),
                fields: Lazy::value(IndexMap::from([(
                    "g".to_string(),
                    string_field(),
                )])),
                ..ObjectTypeConfig::default()
            })),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::ReservedName {
            name: "__Sneaky".to_string(),
        },
    );
}

#[test]
fn rejects_two_distinct_types_sharing_a_name() {
    let make_thing = || {
        ObjectType::new(ObjectTypeConfig {
            name: "Thing".to_string(),
            fields: Lazy::value(IndexMap::from([("f".to_string(), string_field())])),
            ..ObjectTypeConfig::default()
        })
    };
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([
            ("a".to_string(), FieldDef::new(make_thing())),
            ("b".to_string(), FieldDef::new(make_thing())),
        ])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::DuplicateTypeName {
            type_name: "Thing".to_string(),
        },
    );
}

#[test]
fn registering_the_same_type_value_twice_is_fine() {
    let thing = ObjectType::new(ObjectTypeConfig {
        name: "Thing".to_string(),
        fields: Lazy::value(IndexMap::from([("f".to_string(), string_field())])),
        ..ObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([
            ("a".to_string(), FieldDef::new(thing.clone())),
            ("b".to_string(), FieldDef::new(thing.clone())),
        ])),
        ..ObjectTypeConfig::default()
    });
    let schema = build(SchemaConfig {
        query: Some(query),
        types: vec![thing],
        ..SchemaConfig::default()
    })
    .unwrap();
    assert!(schema.type_named("Thing").is_some());
}

#[test]
fn resolves_cycles_through_named_refs_and_thunks() {
    // Person.friends: [Person] and Person.employer: Company,
    // Company.employees: [Person] -- a cycle written with named refs
    // inside a thunked field table.
    let person = ObjectType::new(ObjectTypeConfig {
        name: "Person".to_string(),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                ("name".to_string(), FieldDef::new(scalars::string())),
                (
                    "friends".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::named("Person"))),
                ),
                (
                    "employer".to_string(),
                    FieldDef::new(TypeRef::named("Company")),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });
    let company = ObjectType::new(ObjectTypeConfig {
        name: "Company".to_string(),
        fields: Lazy::thunk(|| {
            IndexMap::from([
                ("name".to_string(), FieldDef::new(scalars::string())),
                (
                    "employees".to_string(),
                    FieldDef::new(TypeRef::list(TypeRef::named("Person"))),
                ),
            ])
        }),
        ..ObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "me".to_string(),
            FieldDef::new(person),
        )])),
        ..ObjectTypeConfig::default()
    });

    let schema = build(SchemaConfig {
        query: Some(query),
        types: vec![company],
        ..SchemaConfig::default()
    })
    .unwrap();

    let person_fields = schema
        .type_named("Person")
        .and_then(|ty| ty.fields())
        .unwrap();
    assert_eq!(person_fields.len(), 3);
}

#[test]
fn rejects_dangling_named_refs() {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "ghost".to_string(),
            FieldDef::new(TypeRef::named("Ghost")),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::UnknownType {
            type_name: "Ghost".to_string(),
            referenced_from: "Query.ghost".to_string(),
        },
    );
}

#[test]
fn rejects_non_null_wrapping_non_null() {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "f".to_string(),
            FieldDef::new(TypeRef::NonNull(Box::new(TypeRef::non_null(
                scalars::int(),
            )))),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::NonNullWrapsNonNull {
            location: "Query.f".to_string(),
        },
    );
}

#[test]
fn rejects_objects_without_fields() {
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, SchemaBuildError::EmptyFields { .. }));
}

#[test]
fn rejects_input_types_in_output_positions() {
    let input = crate::InputObjectType::new(crate::InputObjectTypeConfig {
        name: "Filter".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "q".to_string(),
            crate::InputFieldDef::new(scalars::string()),
        )])),
        ..crate::InputObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "f".to_string(),
            FieldDef::new(input),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::NotOutputType {
            location: "Query.f".to_string(),
            type_name: "Filter".to_string(),
        },
    );
}

#[test]
fn rejects_output_types_in_argument_positions() {
    let thing = ObjectType::new(ObjectTypeConfig {
        name: "Thing".to_string(),
        fields: Lazy::value(IndexMap::from([("f".to_string(), string_field())])),
        ..ObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "f".to_string(),
            string_field().arg("bad", ArgumentDef::new(thing.clone())),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        types: vec![thing],
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::NotInputType {
            location: "Query.f(bad:)".to_string(),
            type_name: "Thing".to_string(),
        },
    );
}

fn named_interface() -> crate::GraphQLType {
    InterfaceType::new(InterfaceTypeConfig {
        name: "Named".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "name".to_string(),
            FieldDef::new(TypeRef::non_null(scalars::string())),
        )])),
        ..InterfaceTypeConfig::default()
    })
}

#[test]
fn validates_interface_implementations() {
    // Missing the interface's field entirely.
    let bad = ObjectType::new(ObjectTypeConfig {
        name: "Widget".to_string(),
        fields: Lazy::value(IndexMap::from([("id".to_string(), string_field())])),
        interfaces: Lazy::value(vec![TypeRef::named("Named")]),
        ..ObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "w".to_string(),
            FieldDef::new(bad),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        types: vec![named_interface()],
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::MissingInterfaceField {
            object: "Widget".to_string(),
            interface: "Named".to_string(),
            field: "name".to_string(),
        },
    );
}

#[test]
fn interface_field_types_are_covariant() {
    // String where String! is required: not a subtype.
    let bad = ObjectType::new(ObjectTypeConfig {
        name: "Widget".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "name".to_string(),
            FieldDef::new(scalars::string()),
        )])),
        interfaces: Lazy::value(vec![TypeRef::named("Named")]),
        ..ObjectTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "w".to_string(),
            FieldDef::new(bad),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        types: vec![named_interface()],
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::IncompatibleInterfaceFieldType { .. },
    ));
}

#[test]
fn unions_need_runtime_resolution() {
    let a = ObjectType::new(ObjectTypeConfig {
        name: "A".to_string(),
        fields: Lazy::value(IndexMap::from([("f".to_string(), string_field())])),
        ..ObjectTypeConfig::default()
    });
    let unresolvable = UnionType::new(UnionTypeConfig {
        name: "U".to_string(),
        types: Lazy::value(vec![TypeRef::Direct(a.clone())]),
        ..UnionTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "u".to_string(),
            FieldDef::new(unresolvable),
        )])),
        ..ObjectTypeConfig::default()
    });
    let err = build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SchemaBuildError::UnresolvableUnionMember {
            union_name: "U".to_string(),
            member: "A".to_string(),
        },
    );

    // A union-level resolve_type fixes it.
    let b = ObjectType::new(ObjectTypeConfig {
        name: "A".to_string(),
        fields: Lazy::value(IndexMap::from([("f".to_string(), string_field())])),
        ..ObjectTypeConfig::default()
    });
    let resolvable = UnionType::new(UnionTypeConfig {
        name: "U".to_string(),
        types: Lazy::value(vec![TypeRef::Direct(b)]),
        resolve_type: Some(Arc::new(|_params| Some("A".to_string()))),
        ..UnionTypeConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([(
            "u".to_string(),
            FieldDef::new(resolvable),
        )])),
        ..ObjectTypeConfig::default()
    });
    assert!(build(SchemaConfig {
        query: Some(query),
        ..SchemaConfig::default()
    })
    .is_ok());
}

#[test]
fn custom_directives_replace_customs_but_keep_the_required_three() {
    let length = crate::Directive::new(crate::DirectiveConfig {
        name: "length".to_string(),
        locations: vec![crate::DirectiveLocation::FieldDefinition],
        args: IndexMap::from([
            ("min".to_string(), ArgumentDef::new(scalars::int())),
            ("max".to_string(), ArgumentDef::new(scalars::int())),
        ]),
        ..crate::DirectiveConfig::default()
    });
    let query = ObjectType::new(ObjectTypeConfig {
        name: "Query".to_string(),
        fields: Lazy::value(IndexMap::from([("f".to_string(), string_field())])),
        ..ObjectTypeConfig::default()
    });
    let schema = build(SchemaConfig {
        query: Some(query),
        directives: vec![length],
        ..SchemaConfig::default()
    })
    .unwrap();

    assert!(schema.directive_named("length").is_some());
    assert!(schema.directive_named("include").is_some());
    assert!(schema.directive_named("skip").is_some());
    assert!(schema.directive_named("deprecated").is_some());
    // omitEmpty was a default custom; providing directives replaced it.
    assert!(schema.directive_named("omitEmpty").is_none());
}

#[test]
fn indexes_possible_types() {
    let schema = crate::tests::test_helpers::validation_schema();
    let possible: Vec<&str> = schema
        .possible_types("Pet")
        .into_iter()
        .map(|ty| ty.name())
        .collect();
    assert!(possible.contains(&"Dog"));
    assert!(possible.contains(&"Cat"));
    assert!(schema.is_possible_type("CatOrDog", "Dog"));
    assert!(!schema.is_possible_type("CatOrDog", "Query"));
}

#[test]
fn schemas_share_across_threads() {
    let schema = hello_schema();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = schema.clone();
            std::thread::spawn(move || {
                let response = crate::tests::test_helpers::run(&schema, "{ hello }");
                assert!(!response.has_errors());
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
