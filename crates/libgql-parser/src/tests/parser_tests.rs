use crate::ast;
use crate::parse;

fn parse_err(source: &str) -> crate::SyntaxError {
    parse(source).expect_err("should fail to parse")
}

#[test]
fn parses_anonymous_shorthand() {
    let doc = parse("{ hello }").unwrap();
    assert_eq!(doc.definitions.len(), 1);

    let op = doc.operations().next().unwrap();
    assert_eq!(op.kind, ast::OperationKind::Query);
    assert!(op.name.is_none());
    assert_eq!(op.selection_set.selections.len(), 1);
}

#[test]
fn parses_named_operation_with_variables() {
    let doc = parse("query Hero($id: ID!, $limit: Int = 10) { hero(id: $id) { name } }")
        .unwrap();
    let op = doc.operations().next().unwrap();

    assert_eq!(op.name.as_ref().unwrap().as_str(), "Hero");
    assert_eq!(op.variable_definitions.len(), 2);

    let limit = &op.variable_definitions[1];
    assert_eq!(limit.name.as_str(), "limit");
    assert_eq!(limit.type_annotation.to_string(), "Int");
    assert!(matches!(
        limit.default_value,
        Some(ast::Value::Int { value: 10, .. }),
    ));
}

#[test]
fn parses_aliases_arguments_and_directives() {
    let doc = parse(r#"{ r2: hero(episode: EMPIRE) @include(if: true) { name } }"#)
        .unwrap();
    let op = doc.operations().next().unwrap();

    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.alias.as_ref().unwrap().as_str(), "r2");
    assert_eq!(field.name.as_str(), "hero");
    assert_eq!(field.response_key(), "r2");
    assert_eq!(field.arguments.len(), 1);
    assert!(matches!(
        field.arguments[0].value,
        ast::Value::Enum { ref value, .. } if value == "EMPIRE",
    ));
    assert_eq!(field.directives.len(), 1);
    assert_eq!(field.directives[0].name.as_str(), "include");
}

#[test]
fn parses_fragments_and_spreads() {
    let doc = parse(
        "query Q { hero { ...heroFields ... on Droid { primaryFunction } } }\n\
         fragment heroFields on Character { name }",
    )
    .unwrap();

    let frag = doc.fragments().next().unwrap();
    assert_eq!(frag.name.as_str(), "heroFields");
    assert_eq!(frag.type_condition.as_str(), "Character");

    let op = doc.operations().next().unwrap();
    let ast::Selection::Field(hero) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    let nested = hero.selection_set.as_ref().unwrap();
    assert!(matches!(nested.selections[0], ast::Selection::FragmentSpread(_)));
    assert!(matches!(nested.selections[1], ast::Selection::InlineFragment(_)));
}

#[test]
fn parses_all_value_kinds() {
    let doc = parse(
        r#"{ f(a: 1, b: 1.5, c: "s", d: true, e: null, f: RED, g: [1, 2], h: {x: 1, y: $v}) }"#,
    )
    .unwrap();
    let op = doc.operations().next().unwrap();
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field selection");
    };
    assert_eq!(field.arguments.len(), 8);
    assert!(matches!(field.arguments[7].value, ast::Value::Object(_)));
}

#[test]
fn parses_nested_type_annotations() {
    let doc = parse("query Q($a: [[Int!]]!) { f(x: $a) }").unwrap();
    let op = doc.operations().next().unwrap();
    assert_eq!(op.variable_definitions[0].type_annotation.to_string(), "[[Int!]]!");
}

#[test]
fn parses_type_system_definitions() {
    let doc = parse(
        r#"
        "A simple type"
        type Query implements Node & Named @tag(name: "root") {
          hello(times: Int = 1): String!
        }

        union Pet = Dog | Cat

        enum Episode { NEWHOPE EMPIRE JEDI }

        input Point { x: Int! y: Int! }

        directive @length(min: Int, max: Int) on FIELD_DEFINITION
        "#,
    )
    .unwrap();

    assert_eq!(doc.definitions.len(), 5);
    let ast::Definition::TypeSystem(ast::TypeSystemDefinition::Type(
        ast::TypeDefinition::Object(object),
    )) = &doc.definitions[0]
    else {
        panic!("expected an object type definition");
    };
    assert_eq!(object.description.as_deref(), Some("A simple type"));
    assert_eq!(object.interfaces.len(), 2);
    assert_eq!(object.fields[0].arguments.len(), 1);
}

#[test]
fn rejects_unexpected_tokens_naming_both_kinds() {
    let err = parse_err("{ hello ");
    assert_eq!(err.message(), "Expected Name, found <EOF>.");

    let err = parse_err("query { f(x:) }");
    assert_eq!(err.message(), "Expected value, found \")\".");

    let err = parse_err("fragment on on Foo { x }");
    assert_eq!(err.message(), "Expected fragment name, found Name \"on\".");
}

#[test]
fn rejects_empty_delimited_lists() {
    assert_eq!(parse_err("{ }").message(), "Expected selection, found \"}\".");
    assert_eq!(
        parse_err("query Q() { f }").message(),
        "Expected variable definition, found \")\".",
    );
    assert_eq!(
        parse_err("{ f() }").message(),
        "Expected argument, found \")\".",
    );
}

#[test]
fn rejects_variables_in_const_positions() {
    let err = parse_err("query Q($a: Int = $b) { f }");
    assert_eq!(err.message(), "Expected constant value, found \"$\".");
}

#[test]
fn reports_error_positions() {
    let err = parse_err("{\n  hello(:1)\n}");
    let position = err.position();
    assert_eq!((position.line, position.column), (2, 9));
}

#[test]
fn guards_against_pathological_nesting() {
    let deep = format!("{}1{}", "[".repeat(200), "]".repeat(200));
    let err = parse_err(&format!("query Q($v: Int = {deep}) {{ f }}"));
    assert_eq!(
        err.message(),
        "Document nesting exceeds maximum allowed depth.",
    );
}
