use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use libgql_parser::Span;
use std::collections::HashMap;

/// Named operations must be named uniquely within a document.
#[derive(Default)]
pub(crate) struct UniqueOperationNames {
    known: HashMap<String, Span>,
}

impl ValidationRule for UniqueOperationNames {
    fn enter_operation_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::OperationDefinition,
    ) {
        let Some(name) = &node.name else {
            return;
        };
        match self.known.get(name.as_str()) {
            Some(first) => ctx.report_error(
                format!(
                    "There can be only one operation named \"{}\".",
                    name.as_str(),
                ),
                &[*first, name.span],
            ),
            None => {
                self.known.insert(name.as_str().to_string(), name.span);
            }
        }
    }
}
