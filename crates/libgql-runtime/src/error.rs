//! The GraphQL error envelope.
//!
//! Every failure surfaced to a client becomes a [`GraphQLError`] with a
//! message, optional 1-based source locations, an optional response path
//! (execution errors only), and optional extensions. Serialization follows
//! the GraphQL spec's envelope: empty members are omitted.

use libgql_parser::Source;
use libgql_parser::Span;
use serde::Serialize;
use smallvec::SmallVec;

/// One step in a response path: a response key for object fields, a 0-based
/// index for list elements.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A response path. Paths are short in practice; eight inline segments
/// cover typical nesting without allocation.
pub type ResponsePath = SmallVec<[PathSegment; 8]>;

/// A 1-based line/column location within the request document.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// A client-facing error in the shape mandated by the GraphQL spec.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, serde_json::Value>>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
            extensions: None,
        }
    }

    /// Builds an error located at the given spans of `source`.
    pub fn at_spans(
        message: impl Into<String>,
        spans: &[Span],
        source: &Source,
    ) -> Self {
        let locations = spans
            .iter()
            .map(|span| {
                let position = source.position_of(span.start);
                ErrorLocation {
                    line: position.line,
                    column: position.column,
                }
            })
            .collect();
        Self {
            message: message.into(),
            locations,
            path: vec![],
            extensions: None,
        }
    }

    pub fn with_path(mut self, path: impl IntoIterator<Item = PathSegment>) -> Self {
        self.path = path.into_iter().collect();
        self
    }

    pub fn with_extensions(
        mut self,
        extensions: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.extensions = Some(extensions);
        self
    }
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GraphQLError {}

impl std::convert::From<libgql_parser::SyntaxError> for GraphQLError {
    fn from(err: libgql_parser::SyntaxError) -> Self {
        GraphQLError::at_spans(err.message(), &[err.span()], err.source())
    }
}

/// Orders errors by (path, first location, message) so that concurrent
/// executions produce deterministic error lists.
pub(crate) fn sort_errors(errors: &mut [GraphQLError]) {
    errors.sort_by(|a, b| {
        a.path
            .cmp(&b.path)
            .then_with(|| a.locations.cmp(&b.locations))
            .then_with(|| a.message.cmp(&b.message))
    });
}
