use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use std::collections::HashSet;

/// Every variable an operation defines must be used somewhere reachable
/// from it.
#[derive(Default)]
pub(crate) struct NoUnusedVariables;

impl ValidationRule for NoUnusedVariables {
    fn leave_operation_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::OperationDefinition,
    ) {
        let used: HashSet<String> = ctx
            .recursive_variable_usages(node)
            .into_iter()
            .map(|usage| usage.name)
            .collect();

        for var_def in &node.variable_definitions {
            let name = var_def.name.as_str();
            if used.contains(name) {
                continue;
            }
            let message = match &node.name {
                Some(op_name) => format!(
                    "Variable \"${name}\" is never used in operation \"{}\".",
                    op_name.as_str(),
                ),
                None => format!("Variable \"${name}\" is never used."),
            };
            ctx.report_error(message, &[var_def.span]);
        }
    }
}
