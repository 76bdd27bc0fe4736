//! Depth-first AST traversal with enter/leave hooks and structural edits.
//!
//! A [`Visitor`] receives each node on the way down (`enter_*`) and on the
//! way back up (`leave_*`), and steers the walk through the returned
//! [`VisitAction`]:
//!
//! - `NoChange` continues normally.
//! - `Skip` (enter only) does not descend into the node's children; the
//!   node's own `leave_*` hook is not called.
//! - `Break` aborts the remainder of the walk.
//! - `Update(node)` replaces the node in the result tree.
//! - `Remove` deletes the node; meaningful only for nodes held in lists
//!   (selections, arguments, directives, values); elsewhere it is ignored.
//!
//! The AST is immutable: [`visit`] rebuilds and returns a new document only
//! when some hook produced an edit, and returns `None` otherwise.
//!
//! [`ParallelVisitor`] runs several visitors in one pass, tracking
//! skip/break state per visitor: a subtree is skipped only once every
//! still-active visitor has skipped it.

mod parallel;
mod walker;

pub use parallel::ParallelVisitor;
pub use walker::visit;

use crate::ast;

/// The action returned from an enter/leave hook.
#[derive(Debug)]
pub enum VisitAction<N> {
    NoChange,
    Skip,
    Break,
    Update(N),
    Remove,
}

macro_rules! visitor_hooks {
    ($( $enter:ident / $leave:ident : $node:ty ),* $(,)?) => {
        /// Enter/leave hooks for every visitable node kind. All hooks
        /// default to [`VisitAction::NoChange`].
        pub trait Visitor {
            $(
                #[allow(unused_variables)]
                fn $enter(&mut self, node: &$node) -> VisitAction<$node> {
                    VisitAction::NoChange
                }

                #[allow(unused_variables)]
                fn $leave(&mut self, node: &$node) -> VisitAction<$node> {
                    VisitAction::NoChange
                }
            )*
        }
    };
}

visitor_hooks! {
    enter_document / leave_document: ast::Document,
    enter_operation_definition / leave_operation_definition: ast::OperationDefinition,
    enter_variable_definition / leave_variable_definition: ast::VariableDefinition,
    enter_fragment_definition / leave_fragment_definition: ast::FragmentDefinition,
    enter_selection_set / leave_selection_set: ast::SelectionSet,
    enter_field / leave_field: ast::Field,
    enter_fragment_spread / leave_fragment_spread: ast::FragmentSpread,
    enter_inline_fragment / leave_inline_fragment: ast::InlineFragment,
    enter_directive / leave_directive: ast::DirectiveAnnotation,
    enter_argument / leave_argument: ast::Argument,
    enter_value / leave_value: ast::Value,
    enter_type_annotation / leave_type_annotation: ast::TypeAnnotation,
}
