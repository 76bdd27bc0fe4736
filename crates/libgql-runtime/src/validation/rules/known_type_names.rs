use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Every named type referenced by a document must exist in the schema.
pub(crate) struct KnownTypeNames;

impl KnownTypeNames {
    fn check(ctx: &mut ValidationContext<'_>, name: &ast::Name) {
        if ctx.schema.type_named(name.as_str()).is_none() {
            ctx.report_error(
                format!("Unknown type \"{}\".", name.as_str()),
                &[name.span],
            );
        }
    }
}

impl ValidationRule for KnownTypeNames {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::VariableDefinition,
    ) {
        Self::check(ctx, node.type_annotation.innermost_name());
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentDefinition,
    ) {
        Self::check(ctx, &node.type_condition);
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::InlineFragment,
    ) {
        if let Some(condition) = &node.type_condition {
            Self::check(ctx, condition);
        }
    }
}
