use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// The anonymous operation shorthand may only be used alone.
#[derive(Default)]
pub(crate) struct LoneAnonymousOperation {
    operation_count: usize,
}

impl ValidationRule for LoneAnonymousOperation {
    fn enter_document(&mut self, _ctx: &mut ValidationContext<'_>, node: &ast::Document) {
        self.operation_count = node.operations().count();
    }

    fn enter_operation_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::OperationDefinition,
    ) {
        if node.name.is_none() && self.operation_count > 1 {
            ctx.report_error(
                "This anonymous operation must be the only defined operation.",
                &[node.span],
            );
        }
    }
}
