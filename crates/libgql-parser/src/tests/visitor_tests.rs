use crate::ast;
use crate::parse;
use crate::print_document;
use crate::visit::visit;
use crate::visit::ParallelVisitor;
use crate::visit::VisitAction;
use crate::visit::Visitor;

/// Records enter/leave calls as `"enter:name"` / `"leave:name"` strings.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    skip_field: Option<String>,
    break_on_field: Option<String>,
}

impl Visitor for Recorder {
    fn enter_field(&mut self, node: &ast::Field) -> VisitAction<ast::Field> {
        self.events.push(format!("enter:{}", node.name.as_str()));
        if self.skip_field.as_deref() == Some(node.name.as_str()) {
            return VisitAction::Skip;
        }
        if self.break_on_field.as_deref() == Some(node.name.as_str()) {
            return VisitAction::Break;
        }
        VisitAction::NoChange
    }

    fn leave_field(&mut self, node: &ast::Field) -> VisitAction<ast::Field> {
        self.events.push(format!("leave:{}", node.name.as_str()));
        VisitAction::NoChange
    }
}

#[test]
fn walks_fields_depth_first() {
    let doc = parse("{ a { b { c } } d }").unwrap();
    let mut recorder = Recorder::default();
    assert!(visit(&doc, &mut recorder).is_none());
    assert_eq!(
        recorder.events,
        vec![
            "enter:a", "enter:b", "enter:c", "leave:c", "leave:b", "leave:a",
            "enter:d", "leave:d",
        ],
    );
}

#[test]
fn skip_suppresses_children_and_own_leave() {
    let doc = parse("{ a { b } d }").unwrap();
    let mut recorder = Recorder {
        skip_field: Some("a".to_string()),
        ..Recorder::default()
    };
    assert!(visit(&doc, &mut recorder).is_none());
    assert_eq!(recorder.events, vec!["enter:a", "enter:d", "leave:d"]);
}

#[test]
fn break_aborts_the_walk() {
    let doc = parse("{ a { b } d }").unwrap();
    let mut recorder = Recorder {
        break_on_field: Some("b".to_string()),
        ..Recorder::default()
    };
    assert!(visit(&doc, &mut recorder).is_none());
    assert_eq!(recorder.events, vec!["enter:a", "enter:b"]);
}

struct AliasRewriter;
impl Visitor for AliasRewriter {
    fn enter_field(&mut self, node: &ast::Field) -> VisitAction<ast::Field> {
        if node.name.as_str() == "old" {
            let mut renamed = node.clone();
            renamed.name = ast::Name::new("new", node.name.span);
            return VisitAction::Update(renamed);
        }
        VisitAction::NoChange
    }
}

#[test]
fn update_rebuilds_a_new_tree() {
    let doc = parse("{ old keep }").unwrap();
    let rewritten = visit(&doc, &mut AliasRewriter).expect("an edit occurred");
    assert_eq!(print_document(&rewritten), "{\n  new\n  keep\n}");
    // The original tree is untouched.
    assert_eq!(print_document(&doc), "{\n  old\n  keep\n}");
}

struct FieldRemover(&'static str);
impl Visitor for FieldRemover {
    fn enter_field(&mut self, node: &ast::Field) -> VisitAction<ast::Field> {
        if node.name.as_str() == self.0 {
            VisitAction::Remove
        } else {
            VisitAction::NoChange
        }
    }
}

#[test]
fn remove_drops_list_elements() {
    let doc = parse("{ a secret b }").unwrap();
    let rewritten = visit(&doc, &mut FieldRemover("secret")).expect("an edit occurred");
    assert_eq!(print_document(&rewritten), "{\n  a\n  b\n}");
}

#[test]
fn unedited_walks_return_no_new_tree() {
    let doc = parse("{ a b }").unwrap();
    assert!(visit(&doc, &mut FieldRemover("missing")).is_none());
}

#[test]
fn parallel_visitor_skips_only_when_all_skip() {
    let doc = parse("{ a { b } }").unwrap();

    // One visitor skips `a`, the other keeps walking: children are still
    // visited for the non-skipping visitor.
    let mut parallel = ParallelVisitor::new(vec![
        Box::new(Recorder {
            skip_field: Some("a".to_string()),
            ..Recorder::default()
        }),
        Box::new(Recorder::default()),
    ]);
    assert!(visit(&doc, &mut parallel).is_none());

    let doc = parse("{ a { b } }").unwrap();
    let mut both_skip = ParallelVisitor::new(vec![
        Box::new(Recorder {
            skip_field: Some("a".to_string()),
            ..Recorder::default()
        }),
        Box::new(Recorder {
            skip_field: Some("a".to_string()),
            ..Recorder::default()
        }),
    ]);
    assert!(visit(&doc, &mut both_skip).is_none());
}

#[test]
fn parallel_visitor_break_only_deactivates_one_member() {
    let doc = parse("{ a { b } d }").unwrap();

    // The breaking visitor must not stop the editing one: `d` is still
    // removed after the first visitor broke at `a`.
    let breaker = Recorder {
        break_on_field: Some("a".to_string()),
        ..Recorder::default()
    };
    let mut parallel =
        ParallelVisitor::new(vec![Box::new(breaker), Box::new(FieldRemover("d"))]);
    let rewritten = visit(&doc, &mut parallel).expect("the non-broken visitor edited");
    assert_eq!(print_document(&rewritten), "{\n  a {\n    b\n  }\n}");
}
