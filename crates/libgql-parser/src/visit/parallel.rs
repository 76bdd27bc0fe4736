use crate::ast;
use crate::visit::VisitAction;
use crate::visit::Visitor;

/// Runs several visitors as one, in a single traversal.
///
/// Each wrapped visitor keeps its own skip/break state:
/// - a visitor that returned `Skip` stops receiving hooks until the walk
///   leaves the subtree it skipped;
/// - a visitor that returned `Break` stops receiving hooks for the rest of
///   the walk, without stopping the others.
///
/// The combined visitor only skips a subtree when every still-active
/// visitor skipped it, and only breaks once every visitor has broken.
/// When multiple visitors edit the same node, the first edit wins and the
/// rest are dropped for that hook.
pub struct ParallelVisitor<'a> {
    slots: Vec<Slot<'a>>,
    depth: usize,
}

struct Slot<'a> {
    visitor: Box<dyn Visitor + 'a>,
    skip_depth: Option<usize>,
    broken: bool,
}

impl<'a> ParallelVisitor<'a> {
    pub fn new(visitors: Vec<Box<dyn Visitor + 'a>>) -> Self {
        Self {
            slots: visitors
                .into_iter()
                .map(|visitor| Slot {
                    visitor,
                    skip_depth: None,
                    broken: false,
                })
                .collect(),
            depth: 0,
        }
    }

    fn on_enter<N>(
        &mut self,
        dispatch: &mut dyn FnMut(&mut dyn Visitor) -> VisitAction<N>,
    ) -> VisitAction<N> {
        self.depth += 1;
        let mut edit: Option<VisitAction<N>> = None;
        let mut descending = false;

        for slot in self.slots.iter_mut() {
            if slot.broken || slot.skip_depth.is_some() {
                continue;
            }
            match dispatch(slot.visitor.as_mut()) {
                VisitAction::NoChange => descending = true,
                VisitAction::Skip => slot.skip_depth = Some(self.depth),
                VisitAction::Break => slot.broken = true,
                action @ (VisitAction::Update(_) | VisitAction::Remove) => {
                    descending = true;
                    if edit.is_none() {
                        edit = Some(action);
                    }
                }
            }
        }

        if let Some(action) = edit {
            if matches!(action, VisitAction::Remove) {
                // The walker will not descend or call leave for a removed
                // node, so unwind this depth's bookkeeping now.
                self.clear_skips_at(self.depth);
                self.depth -= 1;
            }
            return action;
        }
        if self.slots.iter().all(|slot| slot.broken) {
            self.depth -= 1;
            return VisitAction::Break;
        }
        if !descending {
            // Every active visitor skipped: the subtree is not walked and
            // no leave hook will fire for this node.
            self.clear_skips_at(self.depth);
            self.depth -= 1;
            return VisitAction::Skip;
        }
        VisitAction::NoChange
    }

    fn on_leave<N>(
        &mut self,
        dispatch: &mut dyn FnMut(&mut dyn Visitor) -> VisitAction<N>,
    ) -> VisitAction<N> {
        let depth = self.depth;
        let mut edit: Option<VisitAction<N>> = None;

        for slot in self.slots.iter_mut() {
            if slot.broken {
                continue;
            }
            if let Some(skip_depth) = slot.skip_depth {
                if skip_depth == depth {
                    // This visitor skipped exactly this node; its subtree is
                    // done, but its own leave hook stays suppressed.
                    slot.skip_depth = None;
                }
                continue;
            }
            match dispatch(slot.visitor.as_mut()) {
                VisitAction::NoChange | VisitAction::Skip => (),
                VisitAction::Break => slot.broken = true,
                action @ (VisitAction::Update(_) | VisitAction::Remove) => {
                    if edit.is_none() {
                        edit = Some(action);
                    }
                }
            }
        }

        self.depth -= 1;
        if let Some(action) = edit {
            return action;
        }
        if self.slots.iter().all(|slot| slot.broken) {
            return VisitAction::Break;
        }
        VisitAction::NoChange
    }

    fn clear_skips_at(&mut self, depth: usize) {
        for slot in self.slots.iter_mut() {
            if slot.skip_depth == Some(depth) {
                slot.skip_depth = None;
            }
        }
    }
}

macro_rules! parallel_hooks {
    ($( $enter:ident / $leave:ident : $node:ty ),* $(,)?) => {
        impl Visitor for ParallelVisitor<'_> {
            $(
                fn $enter(&mut self, node: &$node) -> VisitAction<$node> {
                    self.on_enter(&mut |visitor| visitor.$enter(node))
                }

                fn $leave(&mut self, node: &$node) -> VisitAction<$node> {
                    self.on_leave(&mut |visitor| visitor.$leave(node))
                }
            )*
        }
    };
}

parallel_hooks! {
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
