use crate::types::GraphQLType;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// A fragment may only be spread where its type condition could possibly
/// apply (the condition and the surrounding type overlap).
pub(crate) struct PossibleFragmentSpreads;

fn types_cannot_overlap(
    ctx: &ValidationContext<'_>,
    parent: &GraphQLType,
    fragment: &GraphQLType,
) -> bool {
    parent.is_composite_type()
        && fragment.is_composite_type()
        && !ctx.schema.do_types_overlap(parent, fragment)
}

impl ValidationRule for PossibleFragmentSpreads {
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentSpread,
    ) {
        let Some(fragment) = ctx.fragment(node.name.as_str()) else {
            return;
        };
        let Some(fragment_type) = ctx
            .schema
            .type_named(fragment.type_condition.as_str())
            .cloned()
        else {
            return;
        };
        let Some(parent_type) = ctx.type_info.parent_type().cloned() else {
            return;
        };
        if types_cannot_overlap(ctx, &parent_type, &fragment_type) {
            ctx.report_error(
                format!(
                    "Fragment \"{}\" cannot be spread here as objects of type \
                     \"{}\" can never be of type \"{}\".",
                    node.name.as_str(),
                    parent_type.name(),
                    fragment_type.name(),
                ),
                &[node.span],
            );
        }
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::InlineFragment,
    ) {
        let Some(condition) = &node.type_condition else {
            return;
        };
        let Some(fragment_type) = ctx.schema.type_named(condition.as_str()).cloned()
        else {
            return;
        };
        let Some(parent_type) = ctx.type_info.parent_type().cloned() else {
            return;
        };
        if types_cannot_overlap(ctx, &parent_type, &fragment_type) {
            ctx.report_error(
                format!(
                    "Fragment cannot be spread here as objects of type \"{}\" \
                     can never be of type \"{}\".",
                    parent_type.name(),
                    fragment_type.name(),
                ),
                &[node.span],
            );
        }
    }
}
