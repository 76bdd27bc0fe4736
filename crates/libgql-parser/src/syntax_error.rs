use crate::source::Position;
use crate::source::Source;
use crate::source::Span;
use std::sync::Arc;

/// A lexing or parsing failure, anchored to the byte range where the
/// offending text was found.
///
/// The error retains a handle to the [`Source`] so that the 1-based
/// line/column location can be derived on demand.
#[derive(Clone, Debug, thiserror::Error)]
#[error("Syntax Error: {message}")]
pub struct SyntaxError {
    message: String,
    span: Span,
    src: Arc<Source>,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        span: Span,
        source: Arc<Source>,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            src: source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.src
    }

    /// The line/column where the error begins.
    pub fn position(&self) -> Position {
        self.src.position_of(self.span.start)
    }
}
