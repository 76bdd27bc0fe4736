use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use std::collections::HashMap;

/// Argument names must be unique per field or directive.
pub(crate) struct UniqueArgumentNames;

fn check(ctx: &mut ValidationContext<'_>, arguments: &[ast::Argument]) {
    let mut known = HashMap::new();
    for argument in arguments {
        let name = argument.name.as_str();
        match known.get(name) {
            Some(first) => ctx.report_error(
                format!("There can be only one argument named \"{name}\"."),
                &[*first, argument.name.span],
            ),
            None => {
                known.insert(name, argument.name.span);
            }
        }
    }
}

impl ValidationRule for UniqueArgumentNames {
    fn enter_field(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Field) {
        check(ctx, &node.arguments);
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::DirectiveAnnotation,
    ) {
        check(ctx, &node.arguments);
    }
}
