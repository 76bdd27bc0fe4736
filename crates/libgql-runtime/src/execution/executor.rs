//! Field resolution and value completion.
//!
//! Completion absorbs failures at nullable positions and propagates them
//! past `NonNull` ones: `Err(())` from any function here means "a non-null
//! constraint was violated beneath this point; the nearest nullable
//! ancestor becomes null". The violating field's error is recorded exactly
//! once, where the violation happened.

use crate::execution::collect_fields;
use crate::execution::ExecutionContext;
use crate::error::PathSegment;
use crate::error::ResponsePath;
use crate::introspection;
use crate::resolver::FieldError;
use crate::resolver::IsTypeOfParams;
use crate::resolver::Resolved;
use crate::resolver::ResolveInfo;
use crate::resolver::ResolveParams;
use crate::resolver::ResolveTypeParams;
use crate::types::FieldDef;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::values::coerce_argument_values;
use crate::values::JsonMap;
use libgql_parser::ast;
use libgql_parser::Span;
use rayon::prelude::*;
use serde_json::Value as Json;
use std::panic::catch_unwind;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Names the field currently being completed, for error messages and
/// locations.
#[derive(Clone, Copy)]
struct FieldContext<'a> {
    parent_type_name: &'a str,
    field_name: &'a str,
    span: Span,
}

/// Executes the root selection set; `serial` for top-level mutation
/// fields.
pub(crate) fn execute_root<'a>(
    ctx: &ExecutionContext<'a>,
    root: &Arc<ObjectType>,
    selection_set: &'a ast::SelectionSet,
    serial: bool,
) -> Json {
    let grouped = collect_fields(ctx, root, [selection_set]);
    let path = ResponsePath::new();
    match execute_fields(ctx, root, ctx.root_value, &grouped, &path, serial) {
        Ok(map) => Json::Object(map),
        Err(()) => Json::Null,
    }
}

/// Resolves one grouped field set against `object`. Sibling fields run in
/// parallel unless `serial`; response keys keep first-occurrence document
/// order either way.
fn execute_fields<'a>(
    ctx: &ExecutionContext<'a>,
    object: &Arc<ObjectType>,
    source: &Resolved,
    grouped: &indexmap::IndexMap<&'a str, Vec<&'a ast::Field>>,
    path: &ResponsePath,
    serial: bool,
) -> Result<JsonMap, ()> {
    let entries: Vec<(&str, &[&ast::Field])> = grouped
        .iter()
        .map(|(key, nodes)| (*key, nodes.as_slice()))
        .collect();

    let results: Vec<Result<Option<Json>, ()>> = if serial || entries.len() <= 1 {
        entries
            .iter()
            .map(|&(key, nodes)| resolve_field(ctx, object, source, key, nodes, path))
            .collect()
    } else {
        entries
            .par_iter()
            .map(|&(key, nodes)| resolve_field(ctx, object, source, key, nodes, path))
            .collect()
    };

    let mut map = JsonMap::new();
    let mut failed = false;
    for ((key, _), result) in entries.iter().zip(results) {
        match result {
            Ok(Some(value)) => {
                map.insert((*key).to_string(), value);
            }
            // Omitted by @omitEmpty or skipped after cancellation.
            Ok(None) => (),
            Err(()) => failed = true,
        }
    }
    if failed {
        Err(())
    } else {
        Ok(map)
    }
}

/// Resolves and completes one response key. `Ok(None)` omits the key from
/// the response object.
fn resolve_field<'a>(
    ctx: &ExecutionContext<'a>,
    object: &Arc<ObjectType>,
    source: &Resolved,
    response_key: &str,
    nodes: &[&'a ast::Field],
    parent_path: &ResponsePath,
) -> Result<Option<Json>, ()> {
    let node = nodes[0];
    let field_name = node.name.as_str();
    let mut path = parent_path.clone();
    path.push(PathSegment::Field(response_key.to_string()));

    // Cancellation gates each field launch; pending fields never start.
    if ctx.context.is_cancelled() {
        return Ok(None);
    }

    let is_query_root = object.name() == ctx.schema.query_type().name();
    let meta_def = introspection::meta_field_def(field_name, is_query_root);
    let field_def = match object.fields().get(field_name) {
        Some(def) => def,
        None => match meta_def {
            Some(def) => def,
            None => {
                ctx.push_field_error(
                    format!(
                        "Cannot query field \"{field_name}\" on type \"{}\".",
                        object.name(),
                    ),
                    node.name.span,
                    &path,
                    None,
                );
                return Ok(None);
            }
        },
    };

    let field_ctx = FieldContext {
        parent_type_name: object.name(),
        field_name,
        span: node.span,
    };

    let args = match coerce_argument_values(
        ctx.schema,
        &field_def.args,
        &node.arguments,
        &ctx.variables,
    ) {
        Ok(args) => args,
        Err(message) => {
            ctx.push_field_error(message, node.span, &path, None);
            return fail_or_null(field_def.field_type.is_non_null());
        }
    };

    let resolved = match invoke_resolver(
        ctx,
        object,
        source,
        field_def,
        response_key,
        nodes,
        &args,
        &path,
    ) {
        Ok(resolved) => resolved,
        Err(error) => {
            ctx.push_field_error(error.message, node.span, &path, error.extensions);
            return fail_or_null(field_def.field_type.is_non_null());
        }
    };

    let completed =
        complete_value(ctx, &field_def.field_type, nodes, &path, &field_ctx, resolved)?;

    if ctx.context.is_cancelled() {
        return Ok(None);
    }

    if has_omit_empty(node) && is_empty_response_value(&completed) {
        return Ok(None);
    }
    Ok(Some(completed))
}

fn fail_or_null(non_null: bool) -> Result<Option<Json>, ()> {
    if non_null {
        Err(())
    } else {
        Ok(Some(Json::Null))
    }
}

fn has_omit_empty(node: &ast::Field) -> bool {
    node.directives
        .iter()
        .any(|directive| directive.name.as_str() == "omitEmpty")
}

fn is_empty_response_value(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Invokes the field's resolver (or the default property lookup) with
/// panic recovery, then normalizes any deferred computation.
#[allow(clippy::too_many_arguments)]
fn invoke_resolver<'a>(
    ctx: &ExecutionContext<'a>,
    object: &Arc<ObjectType>,
    source: &Resolved,
    field_def: &FieldDef,
    response_key: &str,
    nodes: &[&'a ast::Field],
    args: &JsonMap,
    path: &ResponsePath,
) -> Result<Resolved, FieldError> {
    let info = ResolveInfo {
        field_name: nodes[0].name.as_str(),
        field_nodes: nodes,
        path,
        return_type: &field_def.field_type,
        parent_type_name: object.name(),
        schema: ctx.schema,
        fragments: &ctx.fragments,
        root_value: ctx.root_value,
        operation: ctx.operation,
        variable_values: &ctx.variables,
    };

    let resolved = match &field_def.resolver {
        Some(resolver) => {
            let params = ResolveParams {
                source,
                args,
                context: ctx.context,
                info,
            };
            match catch_unwind(AssertUnwindSafe(|| resolver(params))) {
                Ok(result) => result?,
                Err(payload) => {
                    return Err(FieldError::new(panic_message(payload)));
                }
            }
        }
        None => default_resolver(source, info.field_name, response_key),
    };
    normalize(resolved)
}

/// The default resolver reads `source[response_key]`, falling back to
/// `source[field_name]`, out of JSON object sources.
fn default_resolver(source: &Resolved, field_name: &str, response_key: &str) -> Resolved {
    match source {
        Resolved::Value(Json::Object(map)) => map
            .get(response_key)
            .or_else(|| map.get(field_name))
            .cloned()
            .map(Resolved::Value)
            .unwrap_or_else(Resolved::null),
        _ => Resolved::null(),
    }
}

/// Runs deferred computations (with panic recovery) until a concrete
/// variant remains.
fn normalize(mut resolved: Resolved) -> Result<Resolved, FieldError> {
    loop {
        match resolved {
            Resolved::Defer(thunk) => {
                resolved = match catch_unwind(AssertUnwindSafe(thunk)) {
                    Ok(result) => result?,
                    Err(payload) => {
                        return Err(FieldError::new(panic_message(payload)));
                    }
                };
            }
            other => return Ok(other),
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "resolver panicked".to_string()
    }
}

/// Completes a resolved value against its declared type.
fn complete_value<'a>(
    ctx: &ExecutionContext<'a>,
    type_ref: &TypeRef,
    nodes: &[&'a ast::Field],
    path: &ResponsePath,
    field_ctx: &FieldContext<'_>,
    resolved: Resolved,
) -> Result<Json, ()> {
    match type_ref {
        TypeRef::NonNull(inner) => {
            let value = complete_inner(ctx, inner, nodes, path, field_ctx, resolved)?;
            if value.is_null() {
                ctx.push_field_error(
                    format!(
                        "Cannot return null for non-nullable field {}.{}.",
                        field_ctx.parent_type_name, field_ctx.field_name,
                    ),
                    field_ctx.span,
                    path,
                    None,
                );
                return Err(());
            }
            Ok(value)
        }
        nullable => {
            // A failure below a nullable position stops here: this value
            // becomes null, with the inner error already recorded.
            match complete_inner(ctx, nullable, nodes, path, field_ctx, resolved) {
                Ok(value) => Ok(value),
                Err(()) => Ok(Json::Null),
            }
        }
    }
}

fn complete_inner<'a>(
    ctx: &ExecutionContext<'a>,
    type_ref: &TypeRef,
    nodes: &[&'a ast::Field],
    path: &ResponsePath,
    field_ctx: &FieldContext<'_>,
    resolved: Resolved,
) -> Result<Json, ()> {
    if resolved.is_null() {
        return Ok(Json::Null);
    }

    match type_ref {
        TypeRef::NonNull(_) => {
            // Non-null inside non-null is rejected at schema build.
            complete_value(ctx, type_ref, nodes, path, field_ctx, resolved)
        }
        TypeRef::List(item_type) => {
            complete_list(ctx, item_type, nodes, path, field_ctx, resolved)
        }
        named => {
            let Some(ty) = named.innermost_type(ctx.schema).cloned() else {
                ctx.push_field_error(
                    format!("Unknown type \"{named}\"."),
                    field_ctx.span,
                    path,
                    None,
                );
                return Err(());
            };
            complete_named(ctx, &ty, nodes, path, field_ctx, resolved)
        }
    }
}

/// Eager, order-preserving list completion: every element completes before
/// the list is returned, so an element-level violation propagates
/// synchronously to the nearest nullable ancestor.
fn complete_list<'a>(
    ctx: &ExecutionContext<'a>,
    item_type: &TypeRef,
    nodes: &[&'a ast::Field],
    path: &ResponsePath,
    field_ctx: &FieldContext<'_>,
    resolved: Resolved,
) -> Result<Json, ()> {
    let items: Vec<Resolved> = match resolved {
        Resolved::Items(items) => items,
        Resolved::Value(Json::Array(values)) => {
            values.into_iter().map(Resolved::Value).collect()
        }
        _ => {
            ctx.push_field_error(
                format!(
                    "User Error: expected iterable, but did not find one for field {}.{}.",
                    field_ctx.parent_type_name, field_ctx.field_name,
                ),
                field_ctx.span,
                path,
                None,
            );
            return Err(());
        }
    };

    let complete_item = |(index, item): (usize, Resolved)| -> Result<Json, ()> {
        let mut item_path = path.clone();
        item_path.push(PathSegment::Index(index));
        match normalize(item) {
            Ok(item_resolved) => complete_value(
                ctx,
                item_type,
                nodes,
                &item_path,
                field_ctx,
                item_resolved,
            ),
            Err(error) => {
                ctx.push_field_error(
                    error.message,
                    field_ctx.span,
                    &item_path,
                    error.extensions,
                );
                if item_type.is_non_null() {
                    Err(())
                } else {
                    Ok(Json::Null)
                }
            }
        }
    };

    let results: Vec<Result<Json, ()>> = if items.len() > 1 {
        items
            .into_par_iter()
            .enumerate()
            .map(complete_item)
            .collect()
    } else {
        items.into_iter().enumerate().map(complete_item).collect()
    };

    let mut values = Vec::with_capacity(results.len());
    for result in results {
        values.push(result?);
    }
    Ok(Json::Array(values))
}

fn complete_named<'a>(
    ctx: &ExecutionContext<'a>,
    ty: &GraphQLType,
    nodes: &[&'a ast::Field],
    path: &ResponsePath,
    field_ctx: &FieldContext<'_>,
    resolved: Resolved,
) -> Result<Json, ()> {
    match ty {
        GraphQLType::Scalar(scalar) => Ok(match resolved.as_value() {
            Some(value) => scalar.serialize(value),
            None => Json::Null,
        }),
        GraphQLType::Enum(enum_type) => Ok(match resolved.as_value() {
            Some(value) => enum_type
                .name_of(value)
                .map(|name| Json::String(name.to_string()))
                .unwrap_or(Json::Null),
            None => Json::Null,
        }),
        GraphQLType::Object(object) => {
            complete_object(ctx, object, nodes, path, field_ctx, &resolved)
        }
        GraphQLType::Interface(_) | GraphQLType::Union(_) => {
            let object = resolve_runtime_type(ctx, ty, &resolved, path, field_ctx)?;
            complete_object(ctx, &object, nodes, path, field_ctx, &resolved)
        }
        GraphQLType::InputObject(input_object) => {
            ctx.push_field_error(
                format!(
                    "Input object type \"{}\" cannot be completed as output.",
                    input_object.name(),
                ),
                field_ctx.span,
                path,
                None,
            );
            Err(())
        }
    }
}

fn complete_object<'a>(
    ctx: &ExecutionContext<'a>,
    object: &Arc<ObjectType>,
    nodes: &[&'a ast::Field],
    path: &ResponsePath,
    field_ctx: &FieldContext<'_>,
    resolved: &Resolved,
) -> Result<Json, ()> {
    if let Some(predicate) = object.is_type_of() {
        let applies = predicate(IsTypeOfParams {
            value: resolved,
            context: ctx.context,
            schema: ctx.schema,
        });
        if !applies {
            ctx.push_field_error(
                format!("Expected value of type \"{}\".", object.name()),
                field_ctx.span,
                path,
                None,
            );
            return Err(());
        }
    }

    let sub_selections = nodes
        .iter()
        .filter_map(|node| node.selection_set.as_ref());
    let grouped = collect_fields(ctx, object, sub_selections);
    execute_fields(ctx, object, resolved, &grouped, path, false).map(Json::Object)
}

/// Resolves the concrete object type for an abstract (interface/union)
/// position: `resolve_type` when present, otherwise the possible types'
/// `is_type_of` predicates in declaration order.
fn resolve_runtime_type(
    ctx: &ExecutionContext<'_>,
    abstract_type: &GraphQLType,
    value: &Resolved,
    path: &ResponsePath,
    field_ctx: &FieldContext<'_>,
) -> Result<Arc<ObjectType>, ()> {
    let resolve_type = match abstract_type {
        GraphQLType::Interface(interface) => interface.resolve_type(),
        GraphQLType::Union(union_type) => union_type.resolve_type(),
        _ => None,
    };

    let resolved_name = match resolve_type {
        Some(resolver) => resolver(ResolveTypeParams {
            value,
            context: ctx.context,
            schema: ctx.schema,
        }),
        None => ctx
            .schema
            .possible_types(abstract_type.name())
            .into_iter()
            .find(|possible| {
                possible.as_object().is_some_and(|object| {
                    object.is_type_of().is_some_and(|predicate| {
                        predicate(IsTypeOfParams {
                            value,
                            context: ctx.context,
                            schema: ctx.schema,
                        })
                    })
                })
            })
            .map(|possible| possible.name().to_string()),
    };

    let object = resolved_name.as_deref().and_then(|name| {
        if ctx.schema.is_possible_type(abstract_type.name(), name) {
            ctx.schema
                .type_named(name)
                .and_then(GraphQLType::as_object)
                .cloned()
        } else {
            None
        }
    });

    match object {
        Some(object) => Ok(object),
        None => {
            ctx.push_field_error(
                format!(
                    "Abstract type \"{}\" must resolve to an Object type at \
                     runtime for field \"{}.{}\".",
                    abstract_type.name(),
                    field_ctx.parent_type_name,
                    field_ctx.field_name,
                ),
                field_ctx.span,
                path,
                None,
            );
            Err(())
        }
    }
}
