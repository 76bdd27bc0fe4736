use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// A request document may contain only operations and fragments.
pub(crate) struct ExecutableDefinitions;

impl ValidationRule for ExecutableDefinitions {
    fn enter_document(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Document) {
        for definition in &node.definitions {
            let ast::Definition::TypeSystem(def) = definition else {
                continue;
            };
            let def_name = match def {
                ast::TypeSystemDefinition::Schema(_) => "schema".to_string(),
                ast::TypeSystemDefinition::Type(type_def) => {
                    format!("\"{}\"", type_def.name().as_str())
                }
                ast::TypeSystemDefinition::Directive(directive_def) => {
                    format!("\"@{}\"", directive_def.name.as_str())
                }
            };
            ctx.report_error(
                format!("The {def_name} definition is not executable."),
                &[def.span()],
            );
        }
    }
}
