use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Every field selection must exist on the enclosing composite type.
pub(crate) struct FieldsOnCorrectType;

impl ValidationRule for FieldsOnCorrectType {
    fn enter_field(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Field) {
        let Some(parent_type) = ctx.type_info.parent_type() else {
            return;
        };
        if !parent_type.is_composite_type() {
            return;
        }
        if ctx.type_info.field_def().is_none() {
            let message = format!(
                "Cannot query field \"{}\" on type \"{}\".",
                node.name.as_str(),
                parent_type.name(),
            );
            ctx.report_error(message, &[node.name.span]);
        }
    }
}
