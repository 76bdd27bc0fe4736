//! A GraphQL server-side runtime: schema construction, request validation,
//! and execution against user-supplied resolvers.
//!
//! The core surface is [`execute`]: given a [`Schema`] and a request (source
//! text or pre-parsed document, plus variables, a root value, and a
//! [`Context`]), it parses, validates, coerces variables, executes, and
//! returns a [`Response`] in the wire shape mandated by the GraphQL spec.
//! It never returns `Err`: syntax, validation, and execution problems all
//! land in [`Response::errors`], and partial success (`data` plus `errors`)
//! is normal.
//!
//! Transport, subscriptions, and persistence are the embedding
//! application's concern.
//!
//! # Example
//!
//! ```
//! use libgql_runtime::scalars;
//! use libgql_runtime::execute;
//! use libgql_runtime::FieldDef;
//! use libgql_runtime::Lazy;
//! use libgql_runtime::ObjectType;
//! use libgql_runtime::ObjectTypeConfig;
//! use libgql_runtime::Request;
//! use libgql_runtime::Resolved;
//! use libgql_runtime::Schema;
//! use libgql_runtime::SchemaConfig;
//! use indexmap::IndexMap;
//!
//! let query = ObjectType::new(ObjectTypeConfig {
//!     name: "Query".to_string(),
//!     fields: Lazy::value(IndexMap::from([(
//!         "hello".to_string(),
//!         FieldDef::new(scalars::string())
//!             .resolver(|_params| Ok(Resolved::Value("world".into()))),
//!     )])),
//!     ..ObjectTypeConfig::default()
//! });
//! let schema = Schema::new(SchemaConfig {
//!     query: Some(query),
//!     ..SchemaConfig::default()
//! })
//! .unwrap();
//!
//! let response = execute(Request::new(&schema).source("{ hello }"));
//! assert!(!response.has_errors());
//! assert_eq!(
//!     serde_json::to_string(&response).unwrap(),
//!     r#"{"data":{"hello":"world"}}"#,
//! );
//! ```

mod context;
mod error;
mod execution;
mod introspection;
mod resolver;
mod schema;
mod types;
mod validation;
mod values;

pub use context::CancellationHandle;
pub use context::Context;
pub use error::ErrorLocation;
pub use error::GraphQLError;
pub use error::PathSegment;
pub use error::ResponsePath;
pub use resolver::FieldError;
pub use resolver::IsTypeOfFn;
pub use resolver::IsTypeOfParams;
pub use resolver::Resolved;
pub use resolver::ResolveInfo;
pub use resolver::ResolveParams;
pub use resolver::ResolverFn;
pub use resolver::ResolveTypeFn;
pub use resolver::ResolveTypeParams;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaConfig;
pub use types::deprecated_directive;
pub use types::include_directive;
pub use types::omit_empty_directive;
pub use types::scalars;
pub use types::skip_directive;
pub use types::specified_directives;
pub use types::AppliedDirective;
pub use types::ArgumentDef;
pub use types::Directive;
pub use types::DirectiveArgument;
pub use types::DirectiveConfig;
pub use types::DirectiveLocation;
pub use types::EnumType;
pub use types::EnumTypeConfig;
pub use types::EnumValueDef;
pub use types::FieldDef;
pub use types::Fields;
pub use types::GraphQLType;
pub use types::InputFieldDef;
pub use types::InputFields;
pub use types::InputObjectType;
pub use types::InputObjectTypeConfig;
pub use types::InterfaceType;
pub use types::InterfaceTypeConfig;
pub use types::Lazy;
pub use types::ObjectType;
pub use types::ObjectTypeConfig;
pub use types::ParseLiteralFn;
pub use types::ParseValueFn;
pub use types::ScalarType;
pub use types::ScalarTypeConfig;
pub use types::SerializeFn;
pub use types::TypeKind;
pub use types::TypeRef;
pub use types::UnionType;
pub use types::UnionTypeConfig;
pub use types::DEFAULT_DEPRECATION_REASON;

use libgql_parser::ast;
use serde::Serialize;
use serde_json::Value as Json;

/// One GraphQL request: the schema to run against, the request document
/// (source text or pre-parsed), and the execution inputs.
pub struct Request<'schema> {
    schema: &'schema Schema,
    source: Option<String>,
    document: Option<ast::Document>,
    operation_name: Option<String>,
    variable_values: serde_json::Map<String, Json>,
    root_value: Resolved,
    context: Context,
}

impl<'schema> Request<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            schema,
            source: None,
            document: None,
            operation_name: None,
            variable_values: serde_json::Map::new(),
            root_value: Resolved::null(),
            context: Context::new(),
        }
    }

    /// The request source text. Mutually exclusive with [`Request::document`];
    /// when both are set, the pre-parsed document wins.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// A pre-parsed request document.
    pub fn document(mut self, document: ast::Document) -> Self {
        self.document = Some(document);
        self
    }

    /// Selects the operation when the document defines more than one.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// External variable inputs, coerced once before execution.
    pub fn variable_values(
        mut self,
        variables: serde_json::Map<String, Json>,
    ) -> Self {
        self.variable_values = variables;
        self
    }

    /// The root value handed to top-level resolvers.
    pub fn root_value(mut self, root: Resolved) -> Self {
        self.root_value = root;
        self
    }

    /// Cancellation and request-scoped data for resolvers.
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }
}

/// The response envelope: `data`, `errors` (omitted when empty), and
/// `extensions` (omitted when absent).
#[derive(Debug, Serialize)]
pub struct Response {
    pub data: Json,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, Json>>,
}

impl Response {
    pub(crate) fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: Json::Null,
            errors,
            extensions: None,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses, validates, and executes one request. Never returns `Err`; all
/// failures are reported through [`Response::errors`].
pub fn execute(request: Request<'_>) -> Response {
    let Request {
        schema,
        source,
        document,
        operation_name,
        variable_values,
        root_value,
        context,
    } = request;

    let document = match document {
        Some(document) => document,
        None => {
            let source_text = source.unwrap_or_default();
            match libgql_parser::parse(source_text.as_str()) {
                Ok(document) => document,
                Err(syntax_error) => {
                    return Response::from_errors(vec![syntax_error.into()]);
                }
            }
        }
    };

    let validation_errors = validation::validate(schema, &document);
    if !validation_errors.is_empty() {
        return Response::from_errors(validation_errors);
    }

    execution::execute_request(
        schema,
        &document,
        operation_name.as_deref(),
        &variable_values,
        &root_value,
        &context,
    )
}

#[cfg(test)]
mod tests;
