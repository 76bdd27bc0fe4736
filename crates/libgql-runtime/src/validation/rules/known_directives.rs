use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Directives must be defined and legal at the location they appear.
pub(crate) struct KnownDirectives;

impl ValidationRule for KnownDirectives {
    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::DirectiveAnnotation,
    ) {
        let Some(directive) = ctx.type_info.directive().cloned() else {
            ctx.report_error(
                format!("Unknown directive \"{}\".", node.name.as_str()),
                &[node.span],
            );
            return;
        };
        let Some(location) = ctx.type_info.directive_location() else {
            return;
        };
        if !directive.locations().contains(&location) {
            ctx.report_error(
                format!(
                    "Directive \"{}\" may not be used on {location}.",
                    node.name.as_str(),
                ),
                &[node.span],
            );
        }
    }
}
