use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::values::literal_errors;
use libgql_parser::ast;
use libgql_parser::print_value;

/// Argument literals must coerce to their declared input type.
pub(crate) struct ArgumentsOfCorrectType;

impl ValidationRule for ArgumentsOfCorrectType {
    fn enter_argument(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Argument) {
        let Some(arg_type) = ctx
            .type_info
            .argument()
            .and_then(|argument| argument.def.as_ref())
            .map(|def| def.arg_type.clone())
        else {
            return;
        };
        let problems = literal_errors(ctx.schema, &arg_type, &node.value);
        if problems.is_empty() {
            return;
        }
        ctx.report_error(
            format!(
                "Argument \"{}\" has invalid value {}.\n{}",
                node.name.as_str(),
                print_value(&node.value),
                problems.join("\n"),
            ),
            &[node.value.span()],
        );
    }
}
