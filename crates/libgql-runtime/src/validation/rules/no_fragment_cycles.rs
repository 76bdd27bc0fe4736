use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;
use libgql_parser::Span;
use std::collections::HashSet;

/// Fragment spreads must not form cycles.
#[derive(Default)]
pub(crate) struct NoFragmentCycles {
    /// Fragments already fully checked; cycles through them were reported
    /// at their own definition.
    visited: HashSet<String>,
}

impl NoFragmentCycles {
    fn detect(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        fragment_name: &str,
        selection_set: &ast::SelectionSet,
        spread_path: &mut Vec<(String, Span)>,
        path_members: &mut HashSet<String>,
    ) {
        let mut spreads = vec![];
        collect_direct_spreads(selection_set, &mut spreads);

        for (spread_name, span) in spreads {
            if spread_name == fragment_name {
                let via = if spread_path.is_empty() {
                    String::new()
                } else {
                    format!(
                        " via {}",
                        spread_path
                            .iter()
                            .map(|(name, _)| name.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    )
                };
                let mut spans: Vec<Span> =
                    spread_path.iter().map(|(_, span)| *span).collect();
                spans.push(span);
                ctx.report_error(
                    format!(
                        "Cannot spread fragment \"{fragment_name}\" within itself{via}.",
                    ),
                    &spans,
                );
                continue;
            }
            if self.visited.contains(&spread_name)
                || path_members.contains(&spread_name)
            {
                continue;
            }
            let Some(next) = ctx.fragment(&spread_name) else {
                continue;
            };
            let next_set = next.selection_set.clone();
            spread_path.push((spread_name.clone(), span));
            path_members.insert(spread_name.clone());
            self.detect(ctx, fragment_name, &next_set, spread_path, path_members);
            path_members.remove(&spread_name);
            spread_path.pop();
        }
    }
}

fn collect_direct_spreads(
    selection_set: &ast::SelectionSet,
    into: &mut Vec<(String, Span)>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if let Some(nested) = &field.selection_set {
                    collect_direct_spreads(nested, into);
                }
            }
            ast::Selection::FragmentSpread(spread) => {
                into.push((spread.name.as_str().to_string(), spread.span));
            }
            ast::Selection::InlineFragment(inline) => {
                collect_direct_spreads(&inline.selection_set, into);
            }
        }
    }
}

impl ValidationRule for NoFragmentCycles {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        node: &ast::FragmentDefinition,
    ) {
        let name = node.name.as_str().to_string();
        if self.visited.contains(&name) {
            return;
        }
        let selection_set = node.selection_set.clone();
        let mut spread_path = vec![];
        let mut path_members = HashSet::new();
        self.detect(ctx, &name, &selection_set, &mut spread_path, &mut path_members);
        self.visited.insert(name);
    }
}
