use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use std::collections::HashSet;

/// Every fragment defined in the document must be reachable from some
/// operation.
pub(crate) struct NoUnusedFragments;

fn collect_spreads<'a>(selection_set: &'a ast::SelectionSet, into: &mut HashSet<&'a str>) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if let Some(nested) = &field.selection_set {
                    collect_spreads(nested, into);
                }
            }
            ast::Selection::FragmentSpread(spread) => {
                into.insert(spread.name.as_str());
            }
            ast::Selection::InlineFragment(inline) => {
                collect_spreads(&inline.selection_set, into);
            }
        }
    }
}

impl ValidationRule for NoUnusedFragments {
    fn leave_document<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: &'a ast::Document) {
        // Transitive closure of spreads reachable from the operations.
        let mut reachable: HashSet<&str> = HashSet::new();
        let mut frontier: HashSet<&str> = HashSet::new();
        for operation in node.operations() {
            collect_spreads(&operation.selection_set, &mut frontier);
        }
        while !frontier.is_empty() {
            let mut next = HashSet::new();
            for name in frontier {
                if reachable.insert(name) {
                    if let Some(fragment) = ctx.fragment(name) {
                        collect_spreads(&fragment.selection_set, &mut next);
                    }
                }
            }
            frontier = next;
        }

        let unused: Vec<(String, libgql_parser::Span)> = node
            .fragments()
            .filter(|fragment| !reachable.contains(fragment.name.as_str()))
            .map(|fragment| (fragment.name.as_str().to_string(), fragment.name.span))
            .collect();
        for (name, span) in unused {
            ctx.report_error(format!("Fragment \"{name}\" is never used."), &[span]);
        }
    }
}
