//! Request validation: every rule from GraphQL spec §5 runs in a single
//! AST walk that threads a [`TypeInfo`] shadow state past each rule's
//! enter/leave hooks. All findings are returned together; any finding
//! skips execution.

mod context;
mod rules;
mod type_info;
mod walker;

pub(crate) use context::allowed_variable_usage;
pub(crate) use context::ValidationContext;
pub(crate) use context::VariableUsage;
pub(crate) use type_info::TypeInfo;

use crate::error::GraphQLError;
use crate::schema::Schema;
use libgql_parser::ast;

/// A validation rule: a stateful visitor over one document walk.
///
/// Hooks default to no-ops; rules implement only what they observe. Rules
/// report through [`ValidationContext::report_error`]. Node references
/// share the context's document lifetime so rules can chase fragments and
/// collect usages.
#[allow(unused_variables)]
pub(crate) trait ValidationRule {
    fn enter_document<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: &'a ast::Document) {}
    fn leave_document<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: &'a ast::Document) {}
    fn enter_operation_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::OperationDefinition,
    ) {
    }
    fn leave_operation_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::OperationDefinition,
    ) {
    }
    fn enter_variable_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::VariableDefinition,
    ) {
    }
    fn enter_fragment_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::FragmentDefinition,
    ) {
    }
    fn leave_fragment_definition<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::FragmentDefinition,
    ) {
    }
    fn enter_selection_set<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::SelectionSet,
    ) {
    }
    fn enter_field<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: &'a ast::Field) {}
    fn leave_field<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: &'a ast::Field) {}
    fn enter_fragment_spread<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::FragmentSpread,
    ) {
    }
    fn enter_inline_fragment<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::InlineFragment,
    ) {
    }
    fn enter_directive<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: &'a ast::DirectiveAnnotation,
    ) {
    }
    fn enter_argument<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: &'a ast::Argument) {}
    fn enter_value<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: &'a ast::Value) {}
}

/// Runs the full specified rule set over `document`.
pub(crate) fn validate(schema: &Schema, document: &ast::Document) -> Vec<GraphQLError> {
    validate_with_rules(schema, document, rules::specified_rules())
}

pub(crate) fn validate_with_rules(
    schema: &Schema,
    document: &ast::Document,
    rules: Vec<Box<dyn ValidationRule>>,
) -> Vec<GraphQLError> {
    let mut ctx = ValidationContext::new(schema, document);
    walker::walk(&mut ctx, rules, document);
    ctx.into_errors()
}
