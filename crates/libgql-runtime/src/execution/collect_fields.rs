//! Field collection: flattening a selection set (with fragment spreads,
//! inline fragments, and `@skip`/`@include`) into the ordered grouped
//! field set for one concrete object type.

use crate::execution::ExecutionContext;
use crate::types::ObjectType;
use indexmap::IndexMap;
use libgql_parser::ast;
use std::collections::HashSet;

/// Groups the fields to execute for `object`, keyed by response key in
/// first-occurrence document order. Fields with the same key merge into one
/// group and execute once; merged field nodes contribute their selection
/// sets jointly, which is why multiple sets can be collected at once.
pub(crate) fn collect_fields<'a>(
    ctx: &ExecutionContext<'a>,
    object: &ObjectType,
    selection_sets: impl IntoIterator<Item = &'a ast::SelectionSet>,
) -> IndexMap<&'a str, Vec<&'a ast::Field>> {
    let mut grouped = IndexMap::new();
    let mut visited_fragments = HashSet::new();
    for selection_set in selection_sets {
        collect_into(ctx, object, selection_set, &mut grouped, &mut visited_fragments);
    }
    grouped
}

fn collect_into<'a>(
    ctx: &ExecutionContext<'a>,
    object: &ObjectType,
    selection_set: &'a ast::SelectionSet,
    grouped: &mut IndexMap<&'a str, Vec<&'a ast::Field>>,
    visited_fragments: &mut HashSet<&'a str>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if !should_include(ctx, &field.directives) {
                    continue;
                }
                grouped
                    .entry(field.response_key())
                    .or_insert_with(Vec::new)
                    .push(field);
            }
            ast::Selection::FragmentSpread(spread) => {
                if !should_include(ctx, &spread.directives) {
                    continue;
                }
                let name = spread.name.as_str();
                if !visited_fragments.insert(name) {
                    continue;
                }
                let Some(fragment) = ctx.fragments.get(name) else {
                    continue;
                };
                if !type_condition_applies(
                    ctx,
                    object,
                    Some(fragment.type_condition.as_str()),
                ) {
                    continue;
                }
                collect_into(
                    ctx,
                    object,
                    &fragment.selection_set,
                    grouped,
                    visited_fragments,
                );
            }
            ast::Selection::InlineFragment(inline) => {
                if !should_include(ctx, &inline.directives) {
                    continue;
                }
                let condition = inline
                    .type_condition
                    .as_ref()
                    .map(ast::Name::as_str);
                if !type_condition_applies(ctx, object, condition) {
                    continue;
                }
                collect_into(
                    ctx,
                    object,
                    &inline.selection_set,
                    grouped,
                    visited_fragments,
                );
            }
        }
    }
}

/// Evaluates `@skip(if:)` and `@include(if:)`: skipped when `@skip` is true
/// or `@include` is false.
fn should_include(
    ctx: &ExecutionContext<'_>,
    directives: &[ast::DirectiveAnnotation],
) -> bool {
    for directive in directives {
        match directive.name.as_str() {
            "skip" => {
                if directive_if_value(ctx, directive) == Some(true) {
                    return false;
                }
            }
            "include" => {
                if directive_if_value(ctx, directive) == Some(false) {
                    return false;
                }
            }
            _ => (),
        }
    }
    true
}

fn directive_if_value(
    ctx: &ExecutionContext<'_>,
    directive: &ast::DirectiveAnnotation,
) -> Option<bool> {
    match &directive.argument("if")?.value {
        ast::Value::Boolean { value, .. } => Some(*value),
        ast::Value::Variable(name) => {
            ctx.variables.get(name.as_str()).and_then(|v| v.as_bool())
        }
        _ => None,
    }
}

/// Whether a fragment's type condition keeps it for `object`: the named
/// type itself, an implemented interface, or a union it belongs to.
fn type_condition_applies(
    ctx: &ExecutionContext<'_>,
    object: &ObjectType,
    condition: Option<&str>,
) -> bool {
    let Some(condition) = condition else {
        return true;
    };
    if condition == object.name() {
        return true;
    }
    ctx.schema.is_possible_type(condition, object.name())
}
