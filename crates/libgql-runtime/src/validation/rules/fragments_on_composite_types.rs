use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Fragments can only condition on object, interface, or union types.
pub(crate) struct FragmentsOnCompositeTypes;

impl ValidationRule for FragmentsOnCompositeTypes {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentDefinition,
    ) {
        let condition = node.type_condition.as_str();
        let Some(ty) = ctx.schema.type_named(condition) else {
            return;
        };
        if !ty.is_composite_type() {
            ctx.report_error(
                format!(
                    "Fragment \"{}\" cannot condition on non composite type \
                     \"{condition}\".",
                    node.name.as_str(),
                ),
                &[node.type_condition.span],
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
        let Some(ty) = ctx.schema.type_named(condition.as_str()) else {
            return;
        };
        if !ty.is_composite_type() {
            ctx.report_error(
                format!(
                    "Fragment cannot condition on non composite type \"{}\".",
                    condition.as_str(),
                ),
                &[condition.span],
            );
        }
    }
}
