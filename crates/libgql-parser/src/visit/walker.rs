use crate::ast;
use crate::visit::VisitAction;
use crate::visit::Visitor;

/// Walks `document` depth-first with `visitor`.
///
/// Returns `Some(new_document)` when any hook edited the tree, `None` when
/// the walk finished (or broke) without edits.
pub fn visit<V: Visitor>(document: &ast::Document, visitor: &mut V) -> Option<ast::Document> {
    let mut walker = Walker {
        visitor,
        changed: false,
        broke: false,
    };
    let rebuilt = walker.walk_document(document);
    if walker.changed {
        // The document root itself is never removable.
        Some(rebuilt.expect("document root is never removed"))
    } else {
        None
    }
}

struct Walker<'v, V: Visitor> {
    visitor: &'v mut V,
    changed: bool,
    broke: bool,
}

/// Expands the shared enter/children/leave plumbing for one node kind.
/// `None` from a walk function means the node was removed.
macro_rules! walk_node {
    ($self:ident, $node:ident, $enter:ident, $leave:ident, |$cur:ident| $children:block) => {{
        if $self.broke {
            return Some($node.clone());
        }
        #[allow(unused_mut)]
        let mut $cur = match $self.visitor.$enter($node) {
            VisitAction::NoChange => $node.clone(),
            VisitAction::Skip => return Some($node.clone()),
            VisitAction::Break => {
                $self.broke = true;
                return Some($node.clone());
            }
            VisitAction::Update(new_node) => {
                $self.changed = true;
                new_node
            }
            // Remove in a non-removable position degrades to NoChange; the
            // list walkers handle removal before calling leave hooks.
            VisitAction::Remove => {
                $self.changed = true;
                return None;
            }
        };
        $children
        if $self.broke {
            return Some($cur);
        }
        match $self.visitor.$leave(&$cur) {
            VisitAction::NoChange | VisitAction::Skip => Some($cur),
            VisitAction::Break => {
                $self.broke = true;
                Some($cur)
            }
            VisitAction::Update(new_node) => {
                $self.changed = true;
                Some(new_node)
            }
            VisitAction::Remove => {
                $self.changed = true;
                None
            }
        }
    }};
}

impl<V: Visitor> Walker<'_, V> {
    /// Maps a node list through a walk function, dropping removed entries.
    /// After a break, remaining entries pass through untouched.
    fn walk_list<T: Clone>(
        &mut self,
        items: &[T],
        mut walk: impl FnMut(&mut Self, &T) -> Option<T>,
    ) -> Vec<T> {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if self.broke {
                out.push(item.clone());
                continue;
            }
            if let Some(new_item) = walk(self, item) {
                out.push(new_item);
            } else {
                self.changed = true;
            }
        }
        out
    }

    fn walk_document(&mut self, node: &ast::Document) -> Option<ast::Document> {
        walk_node!(self, node, enter_document, leave_document, |cur| {
            cur.definitions = self.walk_list(&cur.definitions, |walker, def| {
                match def {
                    ast::Definition::Operation(op) => walker
                        .walk_operation_definition(op)
                        .map(ast::Definition::Operation),
                    ast::Definition::Fragment(frag) => walker
                        .walk_fragment_definition(frag)
                        .map(ast::Definition::Fragment),
                    // Type-system definitions are carried through unvisited.
                    ast::Definition::TypeSystem(_) => Some(def.clone()),
                }
            });
        })
    }

    fn walk_operation_definition(
        &mut self,
        node: &ast::OperationDefinition,
    ) -> Option<ast::OperationDefinition> {
        walk_node!(
            self,
            node,
            enter_operation_definition,
            leave_operation_definition,
            |cur| {
                cur.variable_definitions = self
                    .walk_list(&cur.variable_definitions, |walker, def| {
                        walker.walk_variable_definition(def)
                    });
                cur.directives = self
                    .walk_list(&cur.directives, |walker, dir| walker.walk_directive(dir));
                if !self.broke {
                    if let Some(set) = self.walk_selection_set(&cur.selection_set) {
                        cur.selection_set = set;
                    }
                }
            }
        )
    }

    fn walk_variable_definition(
        &mut self,
        node: &ast::VariableDefinition,
    ) -> Option<ast::VariableDefinition> {
        walk_node!(
            self,
            node,
            enter_variable_definition,
            leave_variable_definition,
            |cur| {
                if !self.broke {
                    if let Some(annotation) =
                        self.walk_type_annotation(&cur.type_annotation)
                    {
                        cur.type_annotation = annotation;
                    }
                }
                if !self.broke {
                    if let Some(default) = &cur.default_value {
                        cur.default_value = self.walk_value(default);
                    }
                }
            }
        )
    }

    fn walk_fragment_definition(
        &mut self,
        node: &ast::FragmentDefinition,
    ) -> Option<ast::FragmentDefinition> {
        walk_node!(
            self,
            node,
            enter_fragment_definition,
            leave_fragment_definition,
            |cur| {
                cur.directives = self
                    .walk_list(&cur.directives, |walker, dir| walker.walk_directive(dir));
                if !self.broke {
                    if let Some(set) = self.walk_selection_set(&cur.selection_set) {
                        cur.selection_set = set;
                    }
                }
            }
        )
    }

    fn walk_selection_set(
        &mut self,
        node: &ast::SelectionSet,
    ) -> Option<ast::SelectionSet> {
        walk_node!(self, node, enter_selection_set, leave_selection_set, |cur| {
            cur.selections = self.walk_list(&cur.selections, |walker, selection| {
                match selection {
                    ast::Selection::Field(field) => {
                        walker.walk_field(field).map(ast::Selection::Field)
                    }
                    ast::Selection::FragmentSpread(spread) => walker
                        .walk_fragment_spread(spread)
                        .map(ast::Selection::FragmentSpread),
                    ast::Selection::InlineFragment(inline) => walker
                        .walk_inline_fragment(inline)
                        .map(ast::Selection::InlineFragment),
                }
            });
        })
    }

    fn walk_field(&mut self, node: &ast::Field) -> Option<ast::Field> {
        walk_node!(self, node, enter_field, leave_field, |cur| {
            cur.arguments = self
                .walk_list(&cur.arguments, |walker, arg| walker.walk_argument(arg));
            cur.directives = self
                .walk_list(&cur.directives, |walker, dir| walker.walk_directive(dir));
            if !self.broke {
                if let Some(set) = &cur.selection_set {
                    cur.selection_set = self.walk_selection_set(set);
                }
            }
        })
    }

    fn walk_fragment_spread(
        &mut self,
        node: &ast::FragmentSpread,
    ) -> Option<ast::FragmentSpread> {
        walk_node!(
            self,
            node,
            enter_fragment_spread,
            leave_fragment_spread,
            |cur| {
                cur.directives = self
                    .walk_list(&cur.directives, |walker, dir| walker.walk_directive(dir));
            }
        )
    }

    fn walk_inline_fragment(
        &mut self,
        node: &ast::InlineFragment,
    ) -> Option<ast::InlineFragment> {
        walk_node!(
            self,
            node,
            enter_inline_fragment,
            leave_inline_fragment,
            |cur| {
                cur.directives = self
                    .walk_list(&cur.directives, |walker, dir| walker.walk_directive(dir));
                if !self.broke {
                    if let Some(set) = self.walk_selection_set(&cur.selection_set) {
                        cur.selection_set = set;
                    }
                }
            }
        )
    }

    fn walk_directive(
        &mut self,
        node: &ast::DirectiveAnnotation,
    ) -> Option<ast::DirectiveAnnotation> {
        walk_node!(self, node, enter_directive, leave_directive, |cur| {
            cur.arguments = self
                .walk_list(&cur.arguments, |walker, arg| walker.walk_argument(arg));
        })
    }

    fn walk_argument(&mut self, node: &ast::Argument) -> Option<ast::Argument> {
        walk_node!(self, node, enter_argument, leave_argument, |cur| {
            if !self.broke {
                if let Some(value) = self.walk_value(&cur.value) {
                    cur.value = value;
                }
            }
        })
    }

    fn walk_value(&mut self, node: &ast::Value) -> Option<ast::Value> {
        walk_node!(self, node, enter_value, leave_value, |cur| {
            match &mut cur {
                ast::Value::List(list) => {
                    list.values = self
                        .walk_list(&list.values, |walker, value| walker.walk_value(value));
                }
                ast::Value::Object(object) => {
                    object.fields =
                        self.walk_list(&object.fields, |walker, field| {
                            if walker.broke {
                                return Some(field.clone());
                            }
                            walker.walk_value(&field.value).map(|value| {
                                ast::ObjectField {
                                    name: field.name.clone(),
                                    value,
                                    span: field.span,
                                }
                            })
                        });
                }
                _ => (),
            }
        })
    }

    fn walk_type_annotation(
        &mut self,
        node: &ast::TypeAnnotation,
    ) -> Option<ast::TypeAnnotation> {
        walk_node!(
            self,
            node,
            enter_type_annotation,
            leave_type_annotation,
            |cur| {}
        )
    }
}
