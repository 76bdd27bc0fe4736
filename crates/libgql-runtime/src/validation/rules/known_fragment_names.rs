use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Every spread must name a fragment defined in the document.
pub(crate) struct KnownFragmentNames;

impl ValidationRule for KnownFragmentNames {
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentSpread,
    ) {
        let name = node.name.as_str();
        if ctx.fragment(name).is_none() {
            ctx.report_error(
                format!("Unknown fragment \"{name}\"."),
                &[node.name.span],
            );
        }
    }
}
