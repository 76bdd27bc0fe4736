use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Arguments must be defined on the field or directive they are given to.
pub(crate) struct KnownArgumentNames;

impl ValidationRule for KnownArgumentNames {
    fn enter_argument(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Argument) {
        let known = ctx
            .type_info
            .argument()
            .is_some_and(|argument| argument.def.is_some());
        if known {
            return;
        }

        if let Some(directive) = ctx.type_info.directive() {
            let message = format!(
                "Unknown argument \"{}\" on directive \"@{}\".",
                node.name.as_str(),
                directive.name(),
            );
            ctx.report_error(message, &[node.name.span]);
            return;
        }

        // With no enclosing directive the argument belongs to a field;
        // unknown fields are FieldsOnCorrectType's finding.
        let Some(field) = ctx.type_info.field_def() else {
            return;
        };
        let message = format!(
            "Unknown argument \"{}\" on field \"{}\" of type \"{}\".",
            node.name.as_str(),
            field.field_name,
            field.parent_type_name,
        );
        ctx.report_error(message, &[node.name.span]);
    }
}
