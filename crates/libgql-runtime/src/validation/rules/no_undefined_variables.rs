use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use std::collections::HashSet;

/// Every variable used (directly or through fragments) must be defined by
/// the operation.
#[derive(Default)]
pub(crate) struct NoUndefinedVariables {
    defined: HashSet<String>,
}

impl ValidationRule for NoUndefinedVariables {
    fn enter_operation_definition(
        &mut self,
        _ctx: &mut ValidationContext<'_>,
        node: &ast::OperationDefinition,
    ) {
        self.defined = node
            .variable_definitions
            .iter()
            .map(|var_def| var_def.name.as_str().to_string())
            .collect();
    }

    fn leave_operation_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::OperationDefinition,
    ) {
        let mut reported = HashSet::new();
        for usage in ctx.recursive_variable_usages(node) {
            if self.defined.contains(&usage.name) || !reported.insert(usage.name.clone())
            {
                continue;
            }
            let message = match &node.name {
                Some(op_name) => format!(
                    "Variable \"${}\" is not defined by operation \"{}\".",
                    usage.name,
                    op_name.as_str(),
                ),
                None => format!("Variable \"${}\" is not defined.", usage.name),
            };
            ctx.report_error(message, &[usage.span, node.span]);
        }
    }
}
