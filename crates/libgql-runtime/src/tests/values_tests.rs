use crate::tests::test_helpers::validation_schema;
use crate::values::coerce_input_value;
use crate::values::coerce_literal;
use crate::values::json_to_graphql_literal;
use crate::values::type_from_ast;
use crate::TypeRef;
use libgql_parser::ast;
use serde_json::json;

fn literal(source: &str) -> ast::Value {
    // Parse the literal through a carrier document.
    let doc = libgql_parser::parse(format!("{{ f(x: {source}) }}").as_str()).unwrap();
    let op = doc.operations().next().unwrap();
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    field.arguments[0].value.clone()
}

#[test]
fn coerces_scalar_literals() {
    let schema = validation_schema();
    let int = TypeRef::named("Int");
    assert_eq!(coerce_literal(&schema, &int, &literal("42"), None), Some(json!(42)));
    assert_eq!(coerce_literal(&schema, &int, &literal("\"42\""), None), None);
    assert_eq!(
        coerce_literal(&schema, &TypeRef::named("Float"), &literal("42"), None),
        Some(json!(42.0)),
    );
    assert_eq!(
        coerce_literal(&schema, &TypeRef::named("Boolean"), &literal("true"), None),
        Some(json!(true)),
    );
    assert_eq!(
        coerce_literal(&schema, &TypeRef::named("ID"), &literal("7"), None),
        Some(json!("7")),
    );
}

#[test]
fn coerces_enum_literals_by_name() {
    let schema = validation_schema();
    let command = TypeRef::named("DogCommand");
    assert_eq!(
        coerce_literal(&schema, &command, &literal("SIT"), None),
        Some(json!("SIT")),
    );
    // Strings are not enum literals.
    assert_eq!(coerce_literal(&schema, &command, &literal("\"SIT\""), None), None);
}

#[test]
fn non_null_rejects_null_literals() {
    let schema = validation_schema();
    let non_null_int = TypeRef::non_null(TypeRef::named("Int"));
    assert_eq!(coerce_literal(&schema, &non_null_int, &literal("null"), None), None);
    assert_eq!(
        coerce_literal(&schema, &TypeRef::named("Int"), &literal("null"), None),
        Some(json!(null)),
    );
}

#[test]
fn list_coercion_wraps_single_values() {
    let schema = validation_schema();
    let int_list = TypeRef::list(TypeRef::named("Int"));
    assert_eq!(
        coerce_literal(&schema, &int_list, &literal("[1, 2]"), None),
        Some(json!([1, 2])),
    );
    assert_eq!(
        coerce_literal(&schema, &int_list, &literal("1"), None),
        Some(json!([1])),
    );
}

#[test]
fn input_objects_apply_defaults_and_require_required_fields() {
    let schema = validation_schema();
    let input = TypeRef::named("ComplexInput");
    assert_eq!(
        coerce_literal(
            &schema,
            &input,
            &literal("{requiredField: true, intField: 3}"),
            None,
        ),
        Some(json!({"requiredField": true, "intField": 3})),
    );
    // Missing the required field invalidates the object.
    assert_eq!(
        coerce_literal(&schema, &input, &literal("{intField: 3}"), None),
        None,
    );
}

#[test]
fn variables_resolve_from_the_coerced_map() {
    let schema = validation_schema();
    let variables = serde_json::Map::from_iter([("x".to_string(), json!(5))]);
    assert_eq!(
        coerce_literal(
            &schema,
            &TypeRef::named("Int"),
            &literal("$x"),
            Some(&variables),
        ),
        Some(json!(5)),
    );
    // Unprovided variables coerce to nothing at all.
    assert_eq!(
        coerce_literal(
            &schema,
            &TypeRef::named("Int"),
            &literal("$missing"),
            Some(&variables),
        ),
        None,
    );
}

#[test]
fn input_value_coercion_reports_nested_problems() {
    let schema = validation_schema();
    let input = TypeRef::named("ComplexInput");

    let err = coerce_input_value(
        &schema,
        &input,
        &json!({"requiredField": true, "intField": "nope"}),
    )
    .unwrap_err();
    assert_eq!(
        err,
        vec!["In field \"intField\": Expected type \"Int\", found \"nope\".".to_string()],
    );

    let err = coerce_input_value(&schema, &input, &json!({"intField": 3})).unwrap_err();
    assert_eq!(
        err,
        vec![
            "In field \"requiredField\": Expected \"Boolean!\" not to be null."
                .to_string(),
        ],
    );
}

#[test]
fn input_coercion_is_idempotent_for_builtin_scalars() {
    let schema = validation_schema();
    for (type_name, value) in [
        ("Int", json!(41)),
        ("Float", json!(1.25)),
        ("String", json!("s")),
        ("Boolean", json!(false)),
        ("ID", json!("an-id")),
    ] {
        let ty = TypeRef::named(type_name);
        let once = coerce_input_value(&schema, &ty, &value).unwrap();
        let twice = coerce_input_value(&schema, &ty, &once).unwrap();
        assert_eq!(once, twice, "{type_name} coercion is not idempotent");
    }
}

#[test]
fn maps_ast_annotations_to_type_refs() {
    let doc =
        libgql_parser::parse("query Q($a: [[Int!]]!, $b: String) { stringArg(s: $b) }")
            .unwrap();
    let op = doc.operations().next().unwrap();
    let a = type_from_ast(&op.variable_definitions[0].type_annotation);
    assert_eq!(a.to_string(), "[[Int!]]!");
    let b = type_from_ast(&op.variable_definitions[1].type_annotation);
    assert_eq!(b.to_string(), "String");
}

#[test]
fn renders_json_as_graphql_literals() {
    assert_eq!(json_to_graphql_literal(&json!(null)), "null");
    assert_eq!(json_to_graphql_literal(&json!(7)), "7");
    assert_eq!(json_to_graphql_literal(&json!("x")), "\"x\"");
    assert_eq!(
        json_to_graphql_literal(&json!({"a": [1, true]})),
        "{a: [1, true]}",
    );
}
