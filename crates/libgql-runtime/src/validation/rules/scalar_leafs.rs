use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use libgql_parser::ast;

/// Leaf fields take no sub-selection; composite fields require one.
pub(crate) struct ScalarLeafs;

impl ValidationRule for ScalarLeafs {
    fn enter_field(&mut self, ctx: &mut ValidationContext<'_>, node: &ast::Field) {
        let Some(field_type) = ctx.type_info.current_type().cloned() else {
            return;
        };
        let Some(named_type) = field_type.innermost_type(ctx.schema) else {
            return;
        };

        if named_type.is_leaf_type() {
            if node.selection_set.is_some() {
                ctx.report_error(
                    format!(
                        "Field \"{}\" must not have a selection since type \
                         \"{field_type}\" has no subfields.",
                        node.name.as_str(),
                    ),
                    &[node.span],
                );
            }
        } else if node.selection_set.is_none() {
            ctx.report_error(
                format!(
                    "Field \"{}\" of type \"{field_type}\" must have a \
                     selection of subfields. Did you mean \"{} {{ ... }}\"?",
                    node.name.as_str(),
                    node.name.as_str(),
                ),
                &[node.span],
            );
        }
    }
}
