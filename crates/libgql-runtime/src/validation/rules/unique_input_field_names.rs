use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use std::collections::HashMap;

/// Input object literals must not repeat field names.
pub(crate) struct UniqueInputFieldNames;

impl ValidationRule for UniqueInputFieldNames {
    fn enter_value(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Value) {
        let ast::Value::Object(object) = node else {
            return;
        };
        let mut known = HashMap::new();
        for field in &object.fields {
            let name = field.name.as_str();
            match known.get(name) {
                Some(first) => ctx.report_error(
                    format!("There can be only one input field named \"{name}\"."),
                    &[*first, field.name.span],
                ),
                None => {
                    known.insert(name, field.name.span);
                }
            }
        }
    }
}
