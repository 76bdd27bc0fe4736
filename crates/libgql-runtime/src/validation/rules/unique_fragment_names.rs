use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use libgql_parser::Span;
use std::collections::HashMap;

/// Fragments must be named uniquely within a document.
#[derive(Default)]
pub(crate) struct UniqueFragmentNames {
    known: HashMap<String, Span>,
}

impl ValidationRule for UniqueFragmentNames {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentDefinition,
    ) {
        let name = node.name.as_str();
        match self.known.get(name) {
            Some(first) => ctx.report_error(
                format!("There can be only one fragment named \"{name}\"."),
                &[*first, node.name.span],
            ),
            None => {
                self.known.insert(name.to_string(), node.name.span);
            }
        }
    }
}
