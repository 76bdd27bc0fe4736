//! Conflict detection for merged selection sets.
//!
//! Two selections under the same response key must be mergeable: the same
//! field with the same arguments, returning types of compatible shape, and
//! recursively mergeable sub-selections. Fields reached through fragment
//! spreads and inline fragments participate with their own parent types;
//! two fields whose parent types are *distinct object types* can never
//! apply to the same runtime object and are exempt.

use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use libgql_parser::print_value;
use libgql_parser::Span;
use std::collections::HashSet;

#[derive(Default)]
pub(crate) struct OverlappingFieldsCanBeMerged {
    /// Span-start pairs already reported, so a conflict inside a fragment
    /// spread from several places reports once.
    reported: HashSet<(usize, usize)>,
}

/// One field occurrence in the flattened view of a selection set.
#[derive(Clone)]
struct FlatField<'a> {
    /// The type the field was selected on (through its fragment
    /// condition), when known.
    parent_type: Option<GraphQLType>,
    field: &'a ast::Field,
    field_type: Option<TypeRef>,
}

impl ValidationRule for OverlappingFieldsCanBeMerged {
    fn enter_selection_set<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::SelectionSet,
    ) {
        let parent_type = ctx.type_info.parent_type().cloned();
        let mut flattened = vec![];
        let mut visited_fragments = HashSet::new();
        flatten(ctx, node, parent_type, &mut flattened, &mut visited_fragments);

        let mut groups: Vec<(&str, Vec<FlatField<'_>>)> = vec![];
        for flat in flattened {
            let key = flat.field.response_key();
            match groups.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, group)) => group.push(flat),
                None => groups.push((key, vec![flat])),
            }
        }

        let mut findings = vec![];
        for (key, group) in &groups {
            for i in 0..group.len() {
                for j in (i + 1)..group.len() {
                    if let Some(reason) =
                        find_conflict(ctx, &group[i], &group[j])
                    {
                        let pair = (group[i].field.span.start, group[j].field.span.start);
                        if self.reported.insert(pair) {
                            findings.push((
                                format!(
                                    "Fields \"{key}\" conflict because {reason}. \
                                     Use different aliases on the fields to fetch \
                                     both if this was intentional.",
                                ),
                                [group[i].field.span, group[j].field.span],
                            ));
                        }
                    }
                }
            }
        }
        for (message, spans) in findings {
            ctx.report_error(message, &spans);
        }
    }
}

/// Flattens a selection set one level: fields directly present, plus the
/// fields of spreads and inline fragments (tagged with their condition
/// types).
fn flatten<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a ast::SelectionSet,
    parent_type: Option<GraphQLType>,
    into: &mut Vec<FlatField<'a>>,
    visited_fragments: &mut HashSet<&'a str>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                let field_type = parent_type
                    .as_ref()
                    .and_then(GraphQLType::fields)
                    .and_then(|fields| fields.get(field.name.as_str()))
                    .map(|def| def.field_type.clone());
                into.push(FlatField {
                    parent_type: parent_type.clone(),
                    field,
                    field_type,
                });
            }
            ast::Selection::FragmentSpread(spread) => {
                let name = spread.name.as_str();
                if !visited_fragments.insert(name) {
                    continue;
                }
                let Some(fragment) = ctx.fragment(name) else {
                    continue;
                };
                let condition_type = ctx
                    .schema
                    .type_named(fragment.type_condition.as_str())
                    .cloned();
                flatten(
                    ctx,
                    &fragment.selection_set,
                    condition_type,
                    into,
                    visited_fragments,
                );
            }
            ast::Selection::InlineFragment(inline) => {
                let condition_type = match &inline.type_condition {
                    Some(condition) => {
                        ctx.schema.type_named(condition.as_str()).cloned()
                    }
                    None => parent_type.clone(),
                };
                flatten(
                    ctx,
                    &inline.selection_set,
                    condition_type,
                    into,
                    visited_fragments,
                );
            }
        }
    }
}

/// Decides whether two same-key fields conflict, returning the reason.
fn find_conflict<'a>(
    ctx: &ValidationContext<'a>,
    a: &FlatField<'a>,
    b: &FlatField<'a>,
) -> Option<String> {
    // Two distinct object parents can never both describe one runtime
    // value, so their selections never actually merge.
    if let (Some(pa), Some(pb)) = (&a.parent_type, &b.parent_type) {
        let both_objects = matches!(pa, GraphQLType::Object(_))
            && matches!(pb, GraphQLType::Object(_));
        if both_objects && pa.name() != pb.name() {
            return None;
        }
    }

    if a.field.name.as_str() != b.field.name.as_str() {
        return Some(format!(
            "\"{}\" and \"{}\" are different fields",
            a.field.name.as_str(),
            b.field.name.as_str(),
        ));
    }

    if !same_arguments(&a.field.arguments, &b.field.arguments) {
        return Some("they have differing arguments".to_string());
    }

    if let (Some(ta), Some(tb)) = (&a.field_type, &b.field_type) {
        if types_conflict(ta, tb, ctx) {
            return Some(format!(
                "they return conflicting types \"{ta}\" and \"{tb}\"",
            ));
        }
    }

    // Merge and compare sub-selections.
    let sub_sets: Vec<&ast::SelectionSet> = [a, b]
        .iter()
        .filter_map(|flat| flat.field.selection_set.as_ref())
        .collect();
    if sub_sets.len() == 2 {
        let sub_parent_a = a
            .field_type
            .as_ref()
            .and_then(|ty| ty.innermost_type(ctx.schema))
            .cloned();
        let sub_parent_b = b
            .field_type
            .as_ref()
            .and_then(|ty| ty.innermost_type(ctx.schema))
            .cloned();

        let mut flattened = vec![];
        let mut visited = HashSet::new();
        flatten(ctx, sub_sets[0], sub_parent_a, &mut flattened, &mut visited);
        let from_a = flattened.len();
        flatten(ctx, sub_sets[1], sub_parent_b, &mut flattened, &mut visited);

        for fa in &flattened[..from_a] {
            for fb in &flattened[from_a..] {
                if fa.field.response_key() != fb.field.response_key() {
                    continue;
                }
                if let Some(reason) = find_conflict(ctx, fa, fb) {
                    return Some(format!(
                        "subfields \"{}\" conflict because {reason}",
                        fa.field.response_key(),
                    ));
                }
            }
        }
    }

    None
}

/// Arguments are the same when both sides provide the same names with
/// textually identical values.
fn same_arguments(a: &[ast::Argument], b: &[ast::Argument]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|arg_a| {
        b.iter().any(|arg_b| {
            arg_a.name.as_str() == arg_b.name.as_str()
                && print_value(&arg_a.value) == print_value(&arg_b.value)
        })
    })
}

/// Whether two return types can never merge: differing list/non-null
/// shapes, or distinct leaf types.
fn types_conflict(a: &TypeRef, b: &TypeRef, ctx: &ValidationContext<'_>) -> bool {
    match (a, b) {
        (TypeRef::List(inner_a), TypeRef::List(inner_b)) => {
            types_conflict(inner_a, inner_b, ctx)
        }
        (TypeRef::NonNull(inner_a), TypeRef::NonNull(inner_b)) => {
            types_conflict(inner_a, inner_b, ctx)
        }
        (TypeRef::List(_), _)
        | (_, TypeRef::List(_))
        | (TypeRef::NonNull(_), _)
        | (_, TypeRef::NonNull(_)) => true,
        (a, b) => {
            let name_a = a.innermost_name();
            let name_b = b.innermost_name();
            let leaf = |name: &str| {
                ctx.schema
                    .type_named(name)
                    .is_some_and(GraphQLType::is_leaf_type)
            };
            (leaf(name_a) || leaf(name_b)) && name_a != name_b
        }
    }
}
