//! Byte-walking lexer for GraphQL source text.
//!
//! The lexer skips insignificant trivia (whitespace, commas, `#` comments,
//! and a leading BOM) and produces [`Token`]s carrying decoded literal
//! values and byte-offset spans. The first invalid construct aborts lexing
//! with a [`SyntaxError`].

use crate::source::Source;
use crate::source::Span;
use crate::syntax_error::SyntaxError;
use crate::token::Token;
use crate::token::TokenKind;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SyntaxError>;

pub struct Lexer {
    source: Arc<Source>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: Arc<Source>) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// Lexes the entire source into a token vector ending with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.source.body().as_bytes()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn slice(&self, span: Span) -> &str {
        &self.source.body()[span.start..span.end]
    }

    fn error(&self, message: impl Into<String>, span: Span) -> SyntaxError {
        SyntaxError::new(message, span, Arc::clone(&self.source))
    }

    fn error_here(&self, message: impl Into<String>) -> SyntaxError {
        let end = (self.pos + 1).min(self.bytes().len());
        self.error(message, Span::new(self.pos, end))
    }

    /// Scans the next significant token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia();

        let start = self.pos;
        let Some(byte) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, Span::new(start, start)));
        };

        let kind = match byte {
            b'!' => self.punctuator(TokenKind::Bang),
            b'$' => self.punctuator(TokenKind::Dollar),
            b'&' => self.punctuator(TokenKind::Ampersand),
            b'(' => self.punctuator(TokenKind::ParenOpen),
            b')' => self.punctuator(TokenKind::ParenClose),
            b':' => self.punctuator(TokenKind::Colon),
            b'=' => self.punctuator(TokenKind::Equals),
            b'@' => self.punctuator(TokenKind::At),
            b'[' => self.punctuator(TokenKind::BracketOpen),
            b']' => self.punctuator(TokenKind::BracketClose),
            b'{' => self.punctuator(TokenKind::BraceOpen),
            b'|' => self.punctuator(TokenKind::Pipe),
            b'}' => self.punctuator(TokenKind::BraceClose),

            b'.' => {
                if self.peek_at(1) == Some(b'.') && self.peek_at(2) == Some(b'.') {
                    self.pos += 3;
                    TokenKind::Ellipsis
                } else {
                    return Err(self.error_here(
                        "Cannot parse the unexpected character \".\".",
                    ));
                }
            }

            b'"' => self.scan_string(start)?,

            b'-' | b'0'..=b'9' => self.scan_number(start)?,

            b'_' | b'a'..=b'z' | b'A'..=b'Z' => self.scan_name(start),

            _ => {
                let ch = self.source.body()[self.pos..]
                    .chars()
                    .next()
                    .unwrap_or('\u{FFFD}');
                return Err(self.error_here(format!(
                    "Cannot parse the unexpected character {ch:?}.",
                )));
            }
        };

        Ok(Token::new(kind, Span::new(start, self.pos)))
    }

    fn punctuator(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Skips whitespace (space, tab, CR, LF), commas, comments, and a
    /// leading UTF-8 BOM.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n' | b',') => self.advance(),
                Some(b'#') => {
                    while let Some(byte) = self.peek() {
                        if byte == b'\n' || byte == b'\r' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some(0xEF)
                    if self.peek_at(1) == Some(0xBB)
                        && self.peek_at(2) == Some(0xBF) =>
                {
                    self.pos += 3;
                }
                _ => break,
            }
        }
    }

    fn scan_name(&mut self, start: usize) -> TokenKind {
        while let Some(byte) = self.peek() {
            if byte == b'_' || byte.is_ascii_alphanumeric() {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Name(self.slice(Span::new(start, self.pos)).to_string())
    }

    /// Scans `IntValue` / `FloatValue` per the GraphQL grammar
    /// (`-?(0|[1-9][0-9]*)` with optional fraction and exponent).
    fn scan_number(&mut self, start: usize) -> Result<TokenKind> {
        let mut is_float = false;

        if self.peek() == Some(b'-') {
            self.advance();
        }

        match self.peek() {
            Some(b'0') => {
                self.advance();
                if let Some(next @ b'0'..=b'9') = self.peek() {
                    return Err(self.error_here(format!(
                        "Invalid number, unexpected digit after 0: \"{}\".",
                        next as char,
                    )));
                }
            }
            Some(b'1'..=b'9') => {
                while let Some(b'0'..=b'9') = self.peek() {
                    self.advance();
                }
            }
            _ => {
                return Err(self.error(
                    "Invalid number, expected digit but did not find one.",
                    Span::new(start, self.pos + 1),
                ));
            }
        }

        if self.peek() == Some(b'.') {
            is_float = true;
            self.advance();
            self.scan_digits(start)?;
        }

        if let Some(b'e' | b'E') = self.peek() {
            is_float = true;
            self.advance();
            if let Some(b'+' | b'-') = self.peek() {
                self.advance();
            }
            self.scan_digits(start)?;
        }

        let span = Span::new(start, self.pos);
        let text = self.slice(span);
        if is_float {
            let value = text.parse::<f64>().map_err(|_| {
                self.error(format!("Invalid float value \"{text}\"."), span)
            })?;
            Ok(TokenKind::Float(value))
        } else {
            let value = text.parse::<i64>().map_err(|_| {
                self.error(format!("Invalid integer value \"{text}\"."), span)
            })?;
            Ok(TokenKind::Int(value))
        }
    }

    fn scan_digits(&mut self, number_start: usize) -> Result<()> {
        if !matches!(self.peek(), Some(b'0'..=b'9')) {
            return Err(self.error(
                "Invalid number, expected digit but did not find one.",
                Span::new(number_start, self.pos + 1),
            ));
        }
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
        Ok(())
    }

    fn scan_string(&mut self, start: usize) -> Result<TokenKind> {
        if self.peek_at(1) == Some(b'"') && self.peek_at(2) == Some(b'"') {
            self.pos += 3;
            return self.scan_block_string(start);
        }

        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some(b'\n') | Some(b'\r') => {
                    return Err(self.error(
                        "Unterminated string.",
                        Span::new(start, self.pos),
                    ));
                }
                Some(b'"') => {
                    self.advance();
                    return Ok(TokenKind::Str {
                        value,
                        block: false,
                    });
                }
                Some(b'\\') => {
                    self.advance();
                    self.scan_escape(&mut value)?;
                }
                Some(byte) if byte < 0x20 && byte != b'\t' => {
                    return Err(self.error_here(format!(
                        "Invalid character within String: {:?}.",
                        byte as char,
                    )));
                }
                Some(_) => {
                    let ch = self.source.body()[self.pos..]
                        .chars()
                        .next()
                        .expect("in-bounds char boundary");
                    value.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    /// Decodes the escape sequence following a consumed backslash.
    fn scan_escape(&mut self, value: &mut String) -> Result<()> {
        let escape_start = self.pos - 1;
        let Some(byte) = self.peek() else {
            return Err(self.error(
                "Unterminated string.",
                Span::new(escape_start, self.pos),
            ));
        };
        self.advance();
        match byte {
            b'"' => value.push('"'),
            b'\\' => value.push('\\'),
            b'/' => value.push('/'),
            b'b' => value.push('\u{0008}'),
            b'f' => value.push('\u{000C}'),
            b'n' => value.push('\n'),
            b'r' => value.push('\r'),
            b't' => value.push('\t'),
            b'u' => {
                let code = self.scan_hex4(escape_start)?;
                // A surrogate pair is written as two adjacent \uXXXX escapes.
                let ch = if (0xD800..=0xDBFF).contains(&code) {
                    if self.peek() == Some(b'\\') && self.peek_at(1) == Some(b'u') {
                        self.pos += 2;
                        let low = self.scan_hex4(escape_start)?;
                        if !(0xDC00..=0xDFFF).contains(&low) {
                            return Err(self.invalid_escape(escape_start));
                        }
                        let combined = 0x10000
                            + ((code - 0xD800) << 10)
                            + (low - 0xDC00);
                        char::from_u32(combined)
                            .ok_or_else(|| self.invalid_escape(escape_start))?
                    } else {
                        return Err(self.invalid_escape(escape_start));
                    }
                } else {
                    char::from_u32(code)
                        .ok_or_else(|| self.invalid_escape(escape_start))?
                };
                value.push(ch);
            }
            other => {
                return Err(self.error(
                    format!(
                        "Invalid character escape sequence: \"\\{}\".",
                        other as char,
                    ),
                    Span::new(escape_start, self.pos),
                ));
            }
        }
        Ok(())
    }

    fn scan_hex4(&mut self, escape_start: usize) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let Some(byte) = self.peek() else {
                return Err(self.invalid_escape(escape_start));
            };
            let digit = match byte {
                b'0'..=b'9' => (byte - b'0') as u32,
                b'a'..=b'f' => (byte - b'a') as u32 + 10,
                b'A'..=b'F' => (byte - b'A') as u32 + 10,
                _ => return Err(self.invalid_escape(escape_start)),
            };
            code = (code << 4) | digit;
            self.advance();
        }
        Ok(code)
    }

    fn invalid_escape(&self, escape_start: usize) -> SyntaxError {
        self.error(
            "Invalid character escape sequence.",
            Span::new(escape_start, self.pos),
        )
    }

    /// Scans a `"""` block string (the opening quotes are already consumed)
    /// and applies the common-indent stripping rule.
    fn scan_block_string(&mut self, start: usize) -> Result<TokenKind> {
        let mut raw = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(self.error(
                        "Unterminated string.",
                        Span::new(start, self.pos),
                    ));
                }
                Some(b'"')
                    if self.peek_at(1) == Some(b'"')
                        && self.peek_at(2) == Some(b'"') =>
                {
                    self.pos += 3;
                    return Ok(TokenKind::Str {
                        value: dedent_block_string(&raw),
                        block: true,
                    });
                }
                Some(b'\\')
                    if self.peek_at(1) == Some(b'"')
                        && self.peek_at(2) == Some(b'"')
                        && self.peek_at(3) == Some(b'"') =>
                {
                    raw.push_str("\"\"\"");
                    self.pos += 4;
                }
                Some(_) => {
                    let ch = self.source.body()[self.pos..]
                        .chars()
                        .next()
                        .expect("in-bounds char boundary");
                    raw.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }
}

/// Implements the `BlockStringValue` algorithm: strip the common indentation
/// of all lines after the first, then drop leading and trailing blank lines.
fn dedent_block_string(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if indent < line.len() {
            common_indent = Some(match common_indent {
                Some(current) => current.min(indent),
                None => indent,
            });
        }
    }

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                *line
            } else {
                let indent = common_indent.unwrap_or(0).min(line.len());
                &line[indent..]
            }
        })
        .collect();

    while dedented
        .first()
        .is_some_and(|line| line.trim_matches([' ', '\t']).is_empty())
    {
        dedented.remove(0);
    }
    while dedented
        .last()
        .is_some_and(|line| line.trim_matches([' ', '\t']).is_empty())
    {
        dedented.pop();
    }

    dedented.join("\n")
}
