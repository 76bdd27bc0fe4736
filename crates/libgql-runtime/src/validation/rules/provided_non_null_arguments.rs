use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Required (non-null, defaultless) arguments must be provided.
pub(crate) struct ProvidedNonNullArguments;

impl ValidationRule for ProvidedNonNullArguments {
    fn leave_field(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Field) {
        let Some(field) = ctx.type_info.field_def().cloned() else {
            return;
        };
        for (arg_name, arg_def) in &field.def.args {
            if !arg_def.is_required() {
                continue;
            }
            let provided = node
                .arguments
                .iter()
                .any(|argument| argument.name.as_str() == arg_name);
            if !provided {
                ctx.report_error(
                    format!(
                        "Field \"{}\" argument \"{arg_name}\" of type \"{}\" \
                         is required but not provided.",
                        node.name.as_str(),
                        arg_def.arg_type,
                    ),
                    &[node.span],
                );
            }
        }
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::DirectiveAnnotation,
    ) {
        let Some(directive) = ctx.type_info.directive().cloned() else {
            return;
        };
        for (arg_name, arg_def) in directive.args() {
            if !arg_def.is_required() {
                continue;
            }
            let provided = node
                .arguments
                .iter()
                .any(|argument| argument.name.as_str() == arg_name);
            if !provided {
                ctx.report_error(
                    format!(
                        "Directive \"@{}\" argument \"{arg_name}\" of type \
                         \"{}\" is required but not provided.",
                        directive.name(),
                        arg_def.arg_type,
                    ),
                    &[node.span],
                );
            }
        }
    }
}
