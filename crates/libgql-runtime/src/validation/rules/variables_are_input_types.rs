use crate::types::GraphQLType;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Variables may only declare input types (scalar, enum, input object,
/// possibly wrapped).
pub(crate) struct VariablesAreInputTypes;

impl ValidationRule for VariablesAreInputTypes {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::VariableDefinition,
    ) {
        let named = node.type_annotation.innermost_name();
        // Unknown type names are KnownTypeNames' finding.
        let Some(ty) = ctx.schema.type_named(named.as_str()) else {
            return;
        };
        if !GraphQLType::is_input_type(ty) {
            ctx.report_error(
                format!(
                    "Variable \"${}\" cannot be non-input type \"{}\".",
                    node.name.as_str(),
                    node.type_annotation,
                ),
                &[node.type_annotation.span()],
            );
        }
    }
}
