//! The single-pass walk driving every rule with [`TypeInfo`] kept current:
//! pushes happen immediately before the enter hooks, pops immediately
//! after the leave hooks.

use crate::introspection;
use crate::types::DirectiveLocation;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::validation::type_info::WalkedArgument;
use crate::validation::type_info::WalkedFieldDef;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::values::type_from_ast;
use libgql_parser::ast;
use std::sync::Arc;

type Rules = Vec<Box<dyn ValidationRule>>;

pub(crate) fn walk<'a>(
    ctx: &mut ValidationContext<'a>,
    mut rules: Rules,
    document: &'a ast::Document,
) {
    for rule in rules.iter_mut() {
        rule.enter_document(ctx, document);
    }
    for definition in &document.definitions {
        match definition {
            ast::Definition::Operation(operation) => {
                walk_operation(ctx, &mut rules, operation);
            }
            ast::Definition::Fragment(fragment) => {
                walk_fragment_definition(ctx, &mut rules, fragment);
            }
            // Type-system definitions are rejected by
            // ExecutableDefinitions via the document hook; nothing inside
            // them is walked.
            ast::Definition::TypeSystem(_) => (),
        }
    }
    for rule in rules.iter_mut() {
        rule.leave_document(ctx, document);
    }
}

fn walk_operation<'a>(
    ctx: &mut ValidationContext<'a>,
    rules: &mut Rules,
    operation: &'a ast::OperationDefinition,
) {
    let root_type = match operation.kind {
        ast::OperationKind::Query => Some(ctx.schema.query_type()),
        ast::OperationKind::Mutation => ctx.schema.mutation_type(),
        ast::OperationKind::Subscription => ctx.schema.subscription_type(),
    };
    ctx.type_info
        .push_type(root_type.cloned().map(TypeRef::Direct));

    for rule in rules.iter_mut() {
        rule.enter_operation_definition(ctx, operation);
    }
    for var_def in &operation.variable_definitions {
        walk_variable_definition(ctx, rules, var_def);
    }
    let directive_location = match operation.kind {
        ast::OperationKind::Query => DirectiveLocation::Query,
        ast::OperationKind::Mutation => DirectiveLocation::Mutation,
        ast::OperationKind::Subscription => DirectiveLocation::Subscription,
    };
    walk_directives(ctx, rules, &operation.directives, directive_location);
    walk_selection_set(ctx, rules, &operation.selection_set);
    for rule in rules.iter_mut() {
        rule.leave_operation_definition(ctx, operation);
    }

    ctx.type_info.pop_type();
}

fn walk_variable_definition<'a>(
    ctx: &mut ValidationContext<'a>,
    rules: &mut Rules,
    var_def: &'a ast::VariableDefinition,
) {
    ctx.type_info
        .push_input_type(Some(type_from_ast(&var_def.type_annotation)));
    for rule in rules.iter_mut() {
        rule.enter_variable_definition(ctx, var_def);
    }
    if let Some(default) = &var_def.default_value {
        walk_value(ctx, rules, default);
    }
    ctx.type_info.pop_input_type();
}

fn walk_fragment_definition<'a>(
    ctx: &mut ValidationContext<'a>,
    rules: &mut Rules,
    fragment: &'a ast::FragmentDefinition,
) {
    let condition_type = ctx
        .schema
        .type_named(fragment.type_condition.as_str())
        .cloned();
    ctx.type_info.push_type(condition_type.map(TypeRef::Direct));

    for rule in rules.iter_mut() {
        rule.enter_fragment_definition(ctx, fragment);
    }
    walk_directives(
        ctx,
        rules,
        &fragment.directives,
        DirectiveLocation::FragmentDefinition,
    );
    walk_selection_set(ctx, rules, &fragment.selection_set);
    for rule in rules.iter_mut() {
        rule.leave_fragment_definition(ctx, fragment);
    }

    ctx.type_info.pop_type();
}

fn walk_selection_set<'a>(
    ctx: &mut ValidationContext<'a>,
    rules: &mut Rules,
    selection_set: &'a ast::SelectionSet,
) {
    let parent_type = ctx
        .type_info
        .current_type()
        .and_then(|ty| ty.innermost_type(ctx.schema))
        .cloned();
    ctx.type_info.push_parent_type(parent_type);

    for rule in rules.iter_mut() {
        rule.enter_selection_set(ctx, selection_set);
    }
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => walk_field(ctx, rules, field),
            ast::Selection::FragmentSpread(spread) => {
                for rule in rules.iter_mut() {
                    rule.enter_fragment_spread(ctx, spread);
                }
                walk_directives(
                    ctx,
                    rules,
                    &spread.directives,
                    DirectiveLocation::FragmentSpread,
                );
            }
            ast::Selection::InlineFragment(inline) => {
                walk_inline_fragment(ctx, rules, inline);
            }
        }
    }

    ctx.type_info.pop_parent_type();
}

fn walk_field<'a>(ctx: &mut ValidationContext<'a>, rules: &mut Rules, field: &'a ast::Field) {
    let field_def = lookup_field_def(ctx, field.name.as_str());
    let field_type = field_def.as_ref().map(|def| def.def.field_type.clone());
    ctx.type_info.push_field_def(field_def);
    ctx.type_info.push_type(field_type);

    for rule in rules.iter_mut() {
        rule.enter_field(ctx, field);
    }
    for argument in &field.arguments {
        walk_argument(ctx, rules, argument);
    }
    walk_directives(ctx, rules, &field.directives, DirectiveLocation::Field);
    if let Some(nested) = &field.selection_set {
        walk_selection_set(ctx, rules, nested);
    }
    for rule in rules.iter_mut() {
        rule.leave_field(ctx, field);
    }

    ctx.type_info.pop_type();
    ctx.type_info.pop_field_def();
}

/// Field-definition lookup including the implicit meta fields: `__schema`
/// and `__type` on the query root, `__typename` on any composite type.
fn lookup_field_def(
    ctx: &ValidationContext<'_>,
    field_name: &str,
) -> Option<WalkedFieldDef> {
    let parent_type = ctx.type_info.parent_type()?;
    let is_query_root = parent_type.name() == ctx.schema.query_type().name();

    if let Some(meta) = introspection::meta_field_def(field_name, is_query_root) {
        if field_name != "__typename" || parent_type.is_composite_type() {
            return Some(WalkedFieldDef {
                parent_type_name: parent_type.name().to_string(),
                field_name: field_name.to_string(),
                def: meta.clone(),
            });
        }
    }

    parent_type
        .fields()
        .and_then(|fields| fields.get(field_name))
        .map(|def| WalkedFieldDef {
            parent_type_name: parent_type.name().to_string(),
            field_name: field_name.to_string(),
            def: def.clone(),
        })
}

fn walk_inline_fragment<'a>(
    ctx: &mut ValidationContext<'a>,
    rules: &mut Rules,
    inline: &'a ast::InlineFragment,
) {
    let fragment_type = match &inline.type_condition {
        Some(condition) => ctx
            .schema
            .type_named(condition.as_str())
            .cloned()
            .map(TypeRef::Direct),
        None => ctx
            .type_info
            .parent_type()
            .cloned()
            .map(TypeRef::Direct),
    };
    ctx.type_info.push_type(fragment_type);

    for rule in rules.iter_mut() {
        rule.enter_inline_fragment(ctx, inline);
    }
    walk_directives(
        ctx,
        rules,
        &inline.directives,
        DirectiveLocation::InlineFragment,
    );
    walk_selection_set(ctx, rules, &inline.selection_set);

    ctx.type_info.pop_type();
}

fn walk_directives<'a>(
    ctx: &mut ValidationContext<'a>,
    rules: &mut Rules,
    directives: &'a [ast::DirectiveAnnotation],
    location: DirectiveLocation,
) {
    for directive in directives {
        let directive_def = ctx
            .schema
            .directive_named(directive.name.as_str())
            .map(Arc::clone);
        ctx.type_info.set_directive(directive_def, Some(location));

        for rule in rules.iter_mut() {
            rule.enter_directive(ctx, directive);
        }
        for argument in &directive.arguments {
            walk_argument(ctx, rules, argument);
        }

        ctx.type_info.set_directive(None, None);
    }
}

fn walk_argument<'a>(
    ctx: &mut ValidationContext<'a>,
    rules: &mut Rules,
    argument: &'a ast::Argument,
) {
    let arg_def = match ctx.type_info.directive() {
        Some(directive) => directive.args().get(argument.name.as_str()).cloned(),
        None => ctx
            .type_info
            .field_def()
            .and_then(|field| field.def.args.get(argument.name.as_str()).cloned()),
    };
    ctx.type_info.push_input_type(
        arg_def.as_ref().map(|def| def.arg_type.clone()),
    );
    ctx.type_info.set_argument(Some(WalkedArgument {
        name: argument.name.as_str().to_string(),
        def: arg_def,
    }));

    for rule in rules.iter_mut() {
        rule.enter_argument(ctx, argument);
    }
    walk_value(ctx, rules, &argument.value);

    ctx.type_info.set_argument(None);
    ctx.type_info.pop_input_type();
}

fn walk_value<'a>(ctx: &mut ValidationContext<'a>, rules: &mut Rules, value: &'a ast::Value) {
    for rule in rules.iter_mut() {
        rule.enter_value(ctx, value);
    }
    match value {
        ast::Value::List(list) => {
            let item_type = ctx.type_info.input_type().and_then(|ty| {
                match ty.nullable() {
                    TypeRef::List(inner) => Some((**inner).clone()),
                    _ => None,
                }
            });
            for item in &list.values {
                ctx.type_info.push_input_type(item_type.clone());
                walk_value(ctx, rules, item);
                ctx.type_info.pop_input_type();
            }
        }
        ast::Value::Object(object) => {
            let input_object = ctx
                .type_info
                .input_type()
                .and_then(|ty| ty.innermost_type(ctx.schema))
                .and_then(GraphQLType::as_input_object)
                .cloned();
            for field in &object.fields {
                let field_type = input_object.as_ref().and_then(|io| {
                    io.fields()
                        .get(field.name.as_str())
                        .map(|def| def.input_type.clone())
                });
                ctx.type_info.push_input_type(field_type);
                walk_value(ctx, rules, &field.value);
                ctx.type_info.pop_input_type();
            }
        }
        _ => (),
    }
}
