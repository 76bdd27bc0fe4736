use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use std::collections::HashMap;

/// An operation's variables must be named uniquely.
pub(crate) struct UniqueVariableNames;

impl ValidationRule for UniqueVariableNames {
    fn enter_operation_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::OperationDefinition,
    ) {
        let mut known = HashMap::new();
        for var_def in &node.variable_definitions {
            let name = var_def.name.as_str();
            match known.get(name) {
                Some(first) => ctx.report_error(
                    format!("There can be only one variable named \"${name}\"."),
                    &[*first, var_def.name.span],
                ),
                None => {
                    known.insert(name, var_def.name.span);
                }
            }
        }
    }
}
