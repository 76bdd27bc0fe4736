use crate::Lexer;
use crate::Source;
use crate::TokenKind;
use std::sync::Arc;

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(Arc::new(Source::new(source)))
        .tokenize()
        .expect("lexes cleanly")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn lex_error(source: &str) -> String {
    Lexer::new(Arc::new(Source::new(source)))
        .tokenize()
        .expect_err("should fail to lex")
        .message()
        .to_string()
}

#[test]
fn lexes_punctuators() {
    assert_eq!(
        kinds("! $ ( ) ... : = @ [ ] { | } &"),
        vec![
            TokenKind::Bang,
            TokenKind::Dollar,
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            TokenKind::Ellipsis,
            TokenKind::Colon,
            TokenKind::Equals,
            TokenKind::At,
            TokenKind::BracketOpen,
            TokenKind::BracketClose,
            TokenKind::BraceOpen,
            TokenKind::Pipe,
            TokenKind::BraceClose,
            TokenKind::Ampersand,
            TokenKind::Eof,
        ],
    );
}

#[test]
fn skips_insignificant_trivia() {
    // Commas, comments, and a BOM are all trivia.
    assert_eq!(
        kinds("\u{FEFF} foo,,, # a comment\n\tbar\r\n"),
        vec![
            TokenKind::Name("foo".to_string()),
            TokenKind::Name("bar".to_string()),
            TokenKind::Eof,
        ],
    );
}

#[test]
fn lexes_numbers() {
    assert_eq!(
        kinds("0 -42 7 3.25 -0.5 1e10 2.5e-3"),
        vec![
            TokenKind::Int(0),
            TokenKind::Int(-42),
            TokenKind::Int(7),
            TokenKind::Float(3.25),
            TokenKind::Float(-0.5),
            TokenKind::Float(1e10),
            TokenKind::Float(2.5e-3),
            TokenKind::Eof,
        ],
    );
}

#[test]
fn rejects_leading_zero() {
    assert_eq!(
        lex_error("01"),
        "Invalid number, unexpected digit after 0: \"1\".",
    );
}

#[test]
fn rejects_trailing_dot() {
    assert_eq!(
        lex_error("1."),
        "Invalid number, expected digit but did not find one.",
    );
}

#[test]
fn lexes_strings_with_escapes() {
    assert_eq!(
        kinds(r#""simple" "with \"escapes\" \n é""#),
        vec![
            TokenKind::Str {
                value: "simple".to_string(),
                block: false,
            },
            TokenKind::Str {
                value: "with \"escapes\" \n \u{e9}".to_string(),
                block: false,
            },
            TokenKind::Eof,
        ],
    );
}

#[test]
fn lexes_surrogate_pair_escapes() {
    assert_eq!(
        kinds(r#""\ud83c\udf89""#),
        vec![
            TokenKind::Str {
                value: "\u{1F389}".to_string(),
                block: false,
            },
            TokenKind::Eof,
        ],
    );
}

#[test]
fn rejects_unterminated_string() {
    assert_eq!(lex_error("\"oops"), "Unterminated string.");
    assert_eq!(lex_error("\"line\nbreak\""), "Unterminated string.");
}

#[test]
fn lexes_block_string_with_dedent() {
    let source = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n\"\"\"";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Str {
                value: "Hello,\n  World!\n\nYours,\n  GraphQL.".to_string(),
                block: true,
            },
            TokenKind::Eof,
        ],
    );
}

#[test]
fn block_string_preserves_escaped_triple_quote() {
    assert_eq!(
        kinds("\"\"\"contains \\\"\"\" quote\"\"\""),
        vec![
            TokenKind::Str {
                value: "contains \"\"\" quote".to_string(),
                block: true,
            },
            TokenKind::Eof,
        ],
    );
}

#[test]
fn reports_unexpected_characters() {
    assert_eq!(lex_error("?"), "Cannot parse the unexpected character '?'.");
    assert_eq!(lex_error(".."), "Cannot parse the unexpected character \".\".");
}

#[test]
fn positions_derive_lazily_from_offsets() {
    let source = Source::new("foo\n  bar");
    let tokens = Lexer::new(Arc::new(Source::new("foo\n  bar")))
        .tokenize()
        .unwrap();

    let bar = &tokens[1];
    assert_eq!(bar.span.start, 6);
    let position = source.position_of(bar.span.start);
    assert_eq!((position.line, position.column), (2, 3));
}
