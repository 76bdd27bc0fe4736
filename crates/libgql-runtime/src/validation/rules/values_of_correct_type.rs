use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::values::literal_errors;
use crate::values::type_from_ast;
use libgql_parser::ast;
use libgql_parser::print_value;

/// Variable default values must coerce to the variable's declared type,
/// and required variables take no default at all.
pub(crate) struct ValuesOfCorrectType;

impl ValidationRule for ValuesOfCorrectType {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::VariableDefinition,
    ) {
        let Some(default) = &node.default_value else {
            return;
        };
        let var_type = type_from_ast(&node.type_annotation);

        if var_type.is_non_null() {
            ctx.report_error(
                format!(
                    "Variable \"${}\" of type \"{}\" is required and will not \
                     use the default value.",
                    node.name.as_str(),
                    node.type_annotation,
                ),
                &[default.span()],
            );
        }

        let problems = literal_errors(ctx.schema, var_type.nullable(), default);
        if !problems.is_empty() {
            ctx.report_error(
                format!(
                    "Variable \"${}\" of type \"{}\" has invalid default \
                     value {}.\n{}",
                    node.name.as_str(),
                    node.type_annotation,
                    print_value(default),
                    problems.join("\n"),
                ),
                &[default.span()],
            );
        }
    }
}
