//! Operation selection and the execution driver.
//!
//! Top-level mutation fields run strictly sequentially in document order;
//! everything else (sibling fields, list elements) completes in parallel on
//! the rayon pool. Each execution owns its mutable state: the response tree
//! under construction and the error list behind a mutex.

mod collect_fields;
mod executor;

pub(crate) use collect_fields::collect_fields;

use crate::context::Context;
use crate::error::sort_errors;
use crate::error::GraphQLError;
use crate::error::ResponsePath;
use crate::resolver::Resolved;
use crate::schema::Schema;
use crate::values::coerce_variable_values;
use crate::values::JsonMap;
use crate::Response;
use libgql_parser::ast;
use libgql_parser::Span;
use serde_json::Value as Json;
use std::collections::HashMap;
use std::sync::Mutex;

/// Shared, read-only view of one execution, plus the mutex-guarded error
/// sink concurrent workers append to.
pub(crate) struct ExecutionContext<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) document: &'a ast::Document,
    pub(crate) operation: &'a ast::OperationDefinition,
    pub(crate) fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub(crate) variables: JsonMap,
    pub(crate) root_value: &'a Resolved,
    pub(crate) context: &'a Context,
    errors: Mutex<Vec<GraphQLError>>,
}

impl<'a> ExecutionContext<'a> {
    pub(crate) fn push_error(&self, error: GraphQLError) {
        self.errors
            .lock()
            .expect("error sink poisoned")
            .push(error);
    }

    /// Records an execution error carrying the field's location and
    /// response path.
    pub(crate) fn push_field_error(
        &self,
        message: impl Into<String>,
        span: Span,
        path: &ResponsePath,
        extensions: Option<serde_json::Map<String, Json>>,
    ) {
        let mut error = GraphQLError::at_spans(
            message,
            &[span],
            &self.document.source,
        )
        .with_path(path.iter().cloned());
        error.extensions = extensions;
        self.push_error(error);
    }

    fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
            .into_inner()
            .expect("error sink poisoned")
    }
}

/// Runs one already-validated request document against `schema`.
pub(crate) fn execute_request(
    schema: &Schema,
    document: &ast::Document,
    operation_name: Option<&str>,
    variable_values: &JsonMap,
    root_value: &Resolved,
    context: &Context,
) -> Response {
    let operation = match select_operation(document, operation_name) {
        Ok(operation) => operation,
        Err(message) => {
            return Response::from_errors(vec![GraphQLError::new(message)]);
        }
    };

    let variables = match coerce_variable_values(
        schema,
        operation,
        variable_values,
        &document.source,
    ) {
        Ok(variables) => variables,
        Err(errors) => return Response::from_errors(errors),
    };

    let root_type = match operation.kind {
        ast::OperationKind::Query => Some(schema.query_type()),
        ast::OperationKind::Mutation => schema.mutation_type(),
        ast::OperationKind::Subscription => schema.subscription_type(),
    };
    let Some(root_type) = root_type else {
        return Response::from_errors(vec![GraphQLError::new(format!(
            "Schema is not configured for {}s.",
            operation.kind,
        ))]);
    };
    let root_object = root_type
        .as_object()
        .expect("root operation types are objects by construction");

    let ctx = ExecutionContext {
        schema,
        document,
        operation,
        fragments: document
            .fragments()
            .map(|frag| (frag.name.as_str(), frag))
            .collect(),
        variables,
        root_value,
        context,
        errors: Mutex::new(vec![]),
    };

    log::debug!(
        "executing {} operation{}",
        operation.kind,
        operation
            .name
            .as_ref()
            .map(|name| format!(" \"{}\"", name.as_str()))
            .unwrap_or_default(),
    );

    let serial = operation.kind == ast::OperationKind::Mutation;
    let data = executor::execute_root(&ctx, root_object, &operation.selection_set, serial);

    // On cancellation the partial tree is discarded in favor of a single
    // top-level error.
    if context.is_cancelled() {
        return Response::from_errors(vec![GraphQLError::new(
            "Execution was cancelled.",
        )]);
    }

    let mut errors = ctx.into_errors();
    sort_errors(&mut errors);
    Response {
        data,
        errors,
        extensions: None,
    }
}

/// Picks the operation to run: by name, or the only one present.
fn select_operation<'a>(
    document: &'a ast::Document,
    operation_name: Option<&str>,
) -> Result<&'a ast::OperationDefinition, String> {
    let mut operations = document.operations();
    match operation_name {
        Some(name) => operations
            .find(|op| {
                op.name
                    .as_ref()
                    .is_some_and(|op_name| op_name.as_str() == name)
            })
            .ok_or_else(|| format!("Unknown operation named \"{name}\".")),
        None => {
            let first = operations.next().ok_or("Must provide an operation.")?;
            if operations.next().is_some() {
                return Err(
                    "Must provide operation name if query contains multiple operations."
                        .to_string(),
                );
            }
            Ok(first)
        }
    }
}
