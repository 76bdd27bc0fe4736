use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use std::collections::HashMap;

/// A directive may appear at most once per location.
pub(crate) struct UniqueDirectivesPerLocation;

fn check(ctx: &mut ValidationContext<'_>, directives: &[ast::DirectiveAnnotation]) {
    let mut known = HashMap::new();
    for directive in directives {
        let name = directive.name.as_str();
        match known.get(name) {
            Some(first) => ctx.report_error(
                format!(
                    "The directive \"{name}\" can only be used once at this \
                     location.",
                ),
                &[*first, directive.span],
            ),
            None => {
                known.insert(name, directive.span);
            }
        }
    }
}

impl ValidationRule for UniqueDirectivesPerLocation {
    fn enter_operation_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::OperationDefinition,
    ) {
        check(ctx, &node.directives);
    }

    fn enter_field(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Field) {
        check(ctx, &node.directives);
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentDefinition,
    ) {
        check(ctx, &node.directives);
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentSpread,
    ) {
        check(ctx, &node.directives);
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::InlineFragment,
    ) {
        check(ctx, &node.directives);
    }
}
