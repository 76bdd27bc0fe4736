//! The resolver surface: what user field resolvers receive and return.

use crate::context::Context;
use crate::error::ResponsePath;
use crate::schema::Schema;
use crate::types::TypeRef;
use libgql_parser::ast;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A resolver's successful return value, normalized by the executor at the
/// edge of completion.
///
/// Plain data comes back as [`Resolved::Value`] JSON. The other variants
/// cover the dynamic shapes resolvers are allowed to produce: opaque host
/// objects re-fed to child resolvers, deferred computations invoked before
/// completion, and lists mixing any of the above.
pub enum Resolved {
    /// A JSON value completed directly against the field's declared type.
    Value(serde_json::Value),
    /// An opaque host object. The executor never inspects it; child
    /// resolvers downcast it back out of `source`.
    Host(Arc<dyn Any + Send + Sync>),
    /// A deferred computation, invoked (once) before completion.
    Defer(Box<dyn FnOnce() -> Result<Resolved, FieldError> + Send + Sync>),
    /// A list whose elements complete independently.
    Items(Vec<Resolved>),
}

impl Resolved {
    pub fn null() -> Self {
        Resolved::Value(serde_json::Value::Null)
    }

    /// Wraps a host object for downcast-based access in child resolvers.
    pub fn host<T: Any + Send + Sync>(value: T) -> Self {
        Resolved::Host(Arc::new(value))
    }

    /// Wraps a deferred computation.
    pub fn defer(
        thunk: impl FnOnce() -> Result<Resolved, FieldError> + Send + Sync + 'static,
    ) -> Self {
        Resolved::Defer(Box::new(thunk))
    }

    /// Downcasts a [`Resolved::Host`] back to its concrete type.
    pub fn downcast_host<T: Any + Send + Sync>(&self) -> Option<&T> {
        match self {
            Resolved::Host(host) => host.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The JSON value, when this is a plain value.
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            Resolved::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Resolved::Value(serde_json::Value::Null))
    }
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolved::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Resolved::Host(_) => f.write_str("Host(..)"),
            Resolved::Defer(_) => f.write_str("Defer(..)"),
            Resolved::Items(items) => f.debug_tuple("Items").field(items).finish(),
        }
    }
}

impl std::convert::From<serde_json::Value> for Resolved {
    fn from(value: serde_json::Value) -> Self {
        Resolved::Value(value)
    }
}

impl std::default::Default for Resolved {
    fn default() -> Self {
        Resolved::null()
    }
}

/// The error half of a resolver's return value.
///
/// Becomes a [`GraphQLError`](crate::GraphQLError) with the field's
/// location and response path attached; the field's value becomes `null`
/// (subject to `NonNull` propagation).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub message: String,
    pub extensions: Option<serde_json::Map<String, serde_json::Value>>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: None,
        }
    }

    pub fn with_extensions(
        mut self,
        extensions: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.extensions = Some(extensions);
        self
    }
}

impl std::convert::From<&str> for FieldError {
    fn from(message: &str) -> Self {
        FieldError::new(message)
    }
}
impl std::convert::From<String> for FieldError {
    fn from(message: String) -> Self {
        FieldError::new(message)
    }
}

/// A field resolver.
pub type ResolverFn =
    Arc<dyn Fn(ResolveParams<'_>) -> Result<Resolved, FieldError> + Send + Sync>;

/// A type resolver for interfaces and unions; returns the concrete object
/// type's name.
pub type ResolveTypeFn =
    Arc<dyn Fn(ResolveTypeParams<'_>) -> Option<String> + Send + Sync>;

/// A per-object membership predicate used when no `resolve_type` exists.
pub type IsTypeOfFn = Arc<dyn Fn(IsTypeOfParams<'_>) -> bool + Send + Sync>;

/// Everything a resolver gets to see.
pub struct ResolveParams<'a> {
    /// The parent object's resolved value.
    pub source: &'a Resolved,
    /// Coerced argument values for this field.
    pub args: &'a serde_json::Map<String, serde_json::Value>,
    /// Cancellation and request-scoped data.
    pub context: &'a Context,
    /// Static information about the surrounding execution.
    pub info: ResolveInfo<'a>,
}

impl ResolveParams<'_> {
    /// Convenience accessor for one coerced argument.
    pub fn arg(&self, name: &str) -> Option<&serde_json::Value> {
        self.args.get(name)
    }
}

/// Read-only execution metadata handed to resolvers.
#[derive(Clone, Copy)]
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,
    pub field_nodes: &'a [&'a ast::Field],
    pub path: &'a ResponsePath,
    pub return_type: &'a TypeRef,
    pub parent_type_name: &'a str,
    pub schema: &'a Schema,
    pub fragments: &'a HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub root_value: &'a Resolved,
    pub operation: &'a ast::OperationDefinition,
    pub variable_values: &'a serde_json::Map<String, serde_json::Value>,
}

pub struct ResolveTypeParams<'a> {
    pub value: &'a Resolved,
    pub context: &'a Context,
    pub schema: &'a Schema,
}

pub struct IsTypeOfParams<'a> {
    pub value: &'a Resolved,
    pub context: &'a Context,
    pub schema: &'a Schema,
}
