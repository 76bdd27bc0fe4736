use crate::types::TypeRef;
use crate::validation::allowed_variable_usage;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::values::type_from_ast;
use libgql_parser::ast;
use libgql_parser::Span;
use std::collections::HashMap;

/// A variable may only flow into positions its declared type satisfies,
/// with the June-2018 default-value allowance for non-null positions.
#[derive(Default)]
pub(crate) struct VariablesInAllowedPosition {
    var_defs: HashMap<String, (TypeRef, bool, Span)>,
}

impl ValidationRule for VariablesInAllowedPosition {
    fn enter_operation_definition(
        &mut self,
        _ctx: &mut ValidationContext<'_>,
        node: &ast::OperationDefinition,
    ) {
        self.var_defs = node
            .variable_definitions
            .iter()
            .map(|var_def| {
                (
                    var_def.name.as_str().to_string(),
                    (
                        type_from_ast(&var_def.type_annotation),
                        var_def.default_value.is_some(),
                        var_def.span,
                    ),
                )
            })
            .collect();
    }

    fn leave_operation_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::OperationDefinition,
    ) {
        for usage in ctx.recursive_variable_usages(node) {
            let Some((var_type, var_has_default, def_span)) =
                self.var_defs.get(&usage.name)
            else {
                continue;
            };
            let Some(location_type) = &usage.input_type else {
                continue;
            };
            if !allowed_variable_usage(
                ctx.schema,
                var_type,
                *var_has_default,
                location_type,
                usage.has_location_default,
            ) {
                ctx.report_error(
                    format!(
                        "Variable \"${}\" of type \"{var_type}\" used in \
                         position expecting type \"{location_type}\".",
                        usage.name,
                    ),
                    &[*def_span, usage.span],
                );
            }
        }
    }
}
