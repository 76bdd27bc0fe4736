use std::sync::OnceLock;

/// A GraphQL source text plus the name it is referred to by in error
/// messages.
///
/// Line/column positions are not tracked while lexing; they are derived
/// lazily from byte offsets via [`Source::position_of`], which indexes the
/// line-start table on first use.
#[derive(Debug)]
pub struct Source {
    body: String,
    name: String,
    line_starts: OnceLock<Vec<usize>>,
}

impl Source {
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, "GraphQL request")
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
            line_starts: OnceLock::new(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Translates a byte offset into a 1-based line/column [`Position`].
    ///
    /// Columns count Unicode characters, not bytes. Offsets past the end of
    /// the body clamp to the final position.
    pub fn position_of(&self, byte_offset: usize) -> Position {
        let line_starts = self.line_starts.get_or_init(|| {
            let mut starts = vec![0];
            let bytes = self.body.as_bytes();
            let mut idx = 0;
            while idx < bytes.len() {
                match bytes[idx] {
                    b'\n' => starts.push(idx + 1),
                    // \r\n counts as a single line terminator.
                    b'\r' => {
                        if bytes.get(idx + 1) == Some(&b'\n') {
                            idx += 1;
                        }
                        starts.push(idx + 1);
                    }
                    _ => (),
                }
                idx += 1;
            }
            starts
        });

        let offset = byte_offset.min(self.body.len());
        let line_idx = match line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = line_starts[line_idx];
        let column = self.body[line_start..offset].chars().count() + 1;
        Position {
            line: line_idx + 1,
            column,
        }
    }
}

impl std::convert::From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}
impl std::convert::From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

/// A 1-based line/column pair derived from a byte offset.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A half-open `[start, end)` byte range within a [`Source`] body.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
