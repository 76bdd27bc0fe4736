use crate::parse;
use crate::print_document;

/// Parse → print → parse → print must be a fixed point: the second print
/// equals the first, and both parse to equivalent trees.
fn assert_round_trips(source: &str) {
    let doc = parse(source).expect("source parses");
    let printed = print_document(&doc);
    let reparsed = parse(printed.as_str())
        .unwrap_or_else(|err| panic!("printed output failed to parse: {err}\n{printed}"));
    assert_eq!(print_document(&reparsed), printed);
}

#[test]
fn prints_shorthand_query() {
    let doc = parse("{ a b c }").unwrap();
    assert_eq!(print_document(&doc), "{\n  a\n  b\n  c\n}");
}

#[test]
fn prints_named_operation_with_everything() {
    let doc = parse(
        "query Hero($id:ID!,$limit:Int=10)@cached{r2:hero(id:$id){name,friends@include(if:true){name}}}",
    )
    .unwrap();
    assert_eq!(
        print_document(&doc),
        "query Hero($id: ID!, $limit: Int = 10) @cached {\n  \
         r2: hero(id: $id) {\n    \
         name\n    \
         friends @include(if: true) {\n      \
         name\n    \
         }\n  \
         }\n\
         }",
    );
}

#[test]
fn prints_fragments_and_inline_fragments() {
    let doc = parse(
        "query Q { hero { ...f ... on Droid @skip(if: $b) { fn } } } fragment f on C { name }",
    )
    .unwrap();
    assert_eq!(
        print_document(&doc),
        "query Q {\n  hero {\n    ...f\n    ... on Droid @skip(if: $b) {\n      fn\n    }\n  }\n}\n\n\
         fragment f on C {\n  name\n}",
    );
}

#[test]
fn prints_value_literals_canonically() {
    let doc = parse(
        r#"{ f(a: 1, b: 2.5, c: "s\"x", d: [1, 2], e: {p: RED, q: null}, g: true) }"#,
    )
    .unwrap();
    assert_eq!(
        print_document(&doc),
        "{\n  f(a: 1, b: 2.5, c: \"s\\\"x\", d: [1, 2], e: {p: RED, q: null}, g: true)\n}",
    );
}

#[test]
fn float_values_survive_round_trips() {
    assert_round_trips("{ f(a: 1.0, b: 1e10, c: -0.25, d: 2.5e-3) }");
}

#[test]
fn round_trips_operations() {
    assert_round_trips("{ hello }");
    assert_round_trips("mutation M { bump(by: 2) { value } }");
    assert_round_trips("subscription S($ch: String!) { onMessage(channel: $ch) { body } }");
    assert_round_trips(
        r#"query Search($text: String = "default", $opts: SearchOptions = {limit: 10, tags: ["a", "b"]}) {
            search(text: $text, options: $opts) {
                ... on Person { name age }
                ...pageInfo @include(if: true)
            }
        }
        fragment pageInfo on Page { next prev }"#,
    );
}

#[test]
fn round_trips_type_system_definitions() {
    assert_round_trips(
        r#"
        schema { query: Q mutation: M }

        "Docs"
        type Q implements Node { id: ID! things(first: Int = 10): [Thing!] @weight(value: 2) }

        interface Node { id: ID! }

        union Thing = A | B

        enum Color { RED GREEN @deprecated BLUE }

        input Filter { field: String! value: String = "*" }

        scalar Time @specifiedBy(url: "https://example.test")

        directive @weight(value: Int!) on FIELD_DEFINITION | OBJECT
        "#,
    );
}
