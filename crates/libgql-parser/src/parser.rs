//! Recursive descent parser for GraphQL documents.
//!
//! One token of lookahead, fail-fast: the first grammar violation aborts
//! with a [`SyntaxError`] naming the expected and encountered token kinds.
//! Grammar only; no semantic checks happen here.

use crate::ast;
use crate::lexer::Lexer;
use crate::source::Source;
use crate::source::Span;
use crate::syntax_error::SyntaxError;
use crate::token::Token;
use crate::token::TokenKind;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SyntaxError>;

/// Parses a GraphQL document from source text.
///
/// # Example
///
/// ```
/// let doc = libgql_parser::parse("{ hello }").unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub fn parse(source: impl Into<Source>) -> Result<ast::Document> {
    parse_source(Arc::new(source.into()))
}

/// Parses a GraphQL document from an already-shared [`Source`].
pub fn parse_source(source: Arc<Source>) -> Result<ast::Document> {
    Parser::new(source)?.parse_document()
}

pub struct Parser {
    lexer: Lexer,
    source: Arc<Source>,
    current: Token,
    prev_end: usize,
    depth: usize,
}

impl Parser {
    /// Nesting limit shared by selection sets, values, and type
    /// annotations. Guards against stack overflow on adversarial inputs
    /// like `[[[[[...`.
    const MAX_DEPTH: usize = 128;

    pub fn new(source: Arc<Source>) -> Result<Self> {
        let mut lexer = Lexer::new(Arc::clone(&source));
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            source,
            current,
            prev_end: 0,
            depth: 0,
        })
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    /// Consumes the current token and returns it, pulling the next one from
    /// the lexer.
    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        let consumed = std::mem::replace(&mut self.current, next);
        self.prev_end = consumed.span.end;
        Ok(consumed)
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        SyntaxError::new(
            format!("Expected {expected}, found {}.", self.current.kind.describe()),
            self.current.span,
            Arc::clone(&self.source),
        )
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consumes the current token when it matches `kind`.
    fn skip_if(&mut self, kind: &TokenKind) -> Result<bool> {
        if &self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_name(&mut self) -> Result<ast::Name> {
        match &self.current.kind {
            TokenKind::Name(_) => {
                let token = self.advance()?;
                let TokenKind::Name(value) = token.kind else {
                    unreachable!("matched Name above");
                };
                Ok(ast::Name::new(value, token.span))
            }
            _ => Err(self.unexpected("Name")),
        }
    }

    /// Consumes a `Name` token whose value must equal `keyword`.
    fn expect_keyword(&mut self, keyword: &str) -> Result<Token> {
        if self.current.name_value() == Some(keyword) {
            self.advance()
        } else {
            Err(self.unexpected(&format!("\"{keyword}\"")))
        }
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.current.name_value() == Some(keyword)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end)
    }

    fn enter_nested(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > Self::MAX_DEPTH {
            return Err(SyntaxError::new(
                "Document nesting exceeds maximum allowed depth.",
                self.current.span,
                Arc::clone(&self.source),
            ));
        }
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Documents and definitions
    // =========================================================================

    pub fn parse_document(mut self) -> Result<ast::Document> {
        let start = self.current.span.start;
        let mut definitions = Vec::new();
        while !self.current.is_eof() {
            definitions.push(self.parse_definition()?);
        }
        Ok(ast::Document {
            definitions,
            span: Span::new(start, self.current.span.end),
            source: self.source,
        })
    }

    fn parse_definition(&mut self) -> Result<ast::Definition> {
        match &self.current.kind {
            TokenKind::BraceOpen => {
                // Anonymous operation shorthand.
                let start = self.current.span.start;
                let selection_set = self.parse_selection_set()?;
                Ok(ast::Definition::Operation(ast::OperationDefinition {
                    kind: ast::OperationKind::Query,
                    name: None,
                    variable_definitions: vec![],
                    directives: vec![],
                    selection_set,
                    span: self.span_from(start),
                }))
            }
            TokenKind::Name(name) => match name.as_str() {
                "query" | "mutation" | "subscription" => {
                    Ok(ast::Definition::Operation(self.parse_operation_definition()?))
                }
                "fragment" => {
                    Ok(ast::Definition::Fragment(self.parse_fragment_definition()?))
                }
                "schema" | "scalar" | "type" | "interface" | "union" | "enum"
                | "input" | "directive" => Ok(ast::Definition::TypeSystem(
                    self.parse_type_system_definition(None)?,
                )),
                _ => Err(self.unexpected("definition")),
            },
            TokenKind::Str { .. } => {
                // A description string preceding a type-system definition.
                let description = self.parse_description()?;
                Ok(ast::Definition::TypeSystem(
                    self.parse_type_system_definition(description)?,
                ))
            }
            _ => Err(self.unexpected("definition")),
        }
    }

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition> {
        let start = self.current.span.start;
        let kind = match self.current.name_value() {
            Some("query") => ast::OperationKind::Query,
            Some("mutation") => ast::OperationKind::Mutation,
            Some("subscription") => ast::OperationKind::Subscription,
            _ => return Err(self.unexpected("operation type")),
        };
        self.advance()?;

        let name = match &self.current.kind {
            TokenKind::Name(_) => Some(self.expect_name()?),
            _ => None,
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>> {
        if !self.skip_if(&TokenKind::ParenOpen)? {
            return Ok(vec![]);
        }
        if self.current.kind == TokenKind::ParenClose {
            return Err(self.unexpected("variable definition"));
        }
        let mut definitions = Vec::new();
        while !self.skip_if(&TokenKind::ParenClose)? {
            definitions.push(self.parse_variable_definition()?);
        }
        Ok(definitions)
    }

    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition> {
        let start = self.current.span.start;
        self.expect(TokenKind::Dollar, "\"$\"")?;
        let name = self.expect_name()?;
        self.expect(TokenKind::Colon, "\":\"")?;
        let type_annotation = self.parse_type_annotation()?;
        let default_value = if self.skip_if(&TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        Ok(ast::VariableDefinition {
            name,
            type_annotation,
            default_value,
            span: self.span_from(start),
        })
    }

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("fragment")?;
        if self.at_keyword("on") {
            return Err(self.unexpected("fragment name"));
        }
        let name = self.expect_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet> {
        self.enter_nested()?;
        let start = self.current.span.start;
        self.expect(TokenKind::BraceOpen, "\"{\"")?;
        if self.current.kind == TokenKind::BraceClose {
            return Err(self.unexpected("selection"));
        }
        let mut selections = Vec::new();
        while !self.skip_if(&TokenKind::BraceClose)? {
            selections.push(self.parse_selection()?);
        }
        self.exit_nested();
        Ok(ast::SelectionSet {
            selections,
            span: self.span_from(start),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection> {
        if self.current.kind == TokenKind::Ellipsis {
            self.parse_fragment_selection()
        } else {
            Ok(ast::Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> Result<ast::Field> {
        let start = self.current.span.start;
        let name_or_alias = self.expect_name()?;
        let (alias, name) = if self.skip_if(&TokenKind::Colon)? {
            (Some(name_or_alias), self.expect_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = match self.current.kind {
            TokenKind::BraceOpen => Some(self.parse_selection_set()?),
            _ => None,
        };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    /// Parses the selection after a consumed-to-be `...`: either a fragment
    /// spread or an inline fragment.
    fn parse_fragment_selection(&mut self) -> Result<ast::Selection> {
        let start = self.current.span.start;
        self.expect(TokenKind::Ellipsis, "\"...\"")?;

        if let TokenKind::Name(name) = &self.current.kind {
            if name != "on" {
                let name = self.expect_name()?;
                let directives = self.parse_directives(false)?;
                return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                    name,
                    directives,
                    span: self.span_from(start),
                }));
            }
        }

        let type_condition = if self.at_keyword("on") {
            self.advance()?;
            Some(self.expect_name()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        }))
    }

    // =========================================================================
    // Arguments, directives, values, types
    // =========================================================================

    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<ast::Argument>> {
        if !self.skip_if(&TokenKind::ParenOpen)? {
            return Ok(vec![]);
        }
        if self.current.kind == TokenKind::ParenClose {
            return Err(self.unexpected("argument"));
        }
        let mut arguments = Vec::new();
        while !self.skip_if(&TokenKind::ParenClose)? {
            arguments.push(self.parse_argument(is_const)?);
        }
        Ok(arguments)
    }

    fn parse_argument(&mut self, is_const: bool) -> Result<ast::Argument> {
        let start = self.current.span.start;
        let name = self.expect_name()?;
        self.expect(TokenKind::Colon, "\":\"")?;
        let value = self.parse_value(is_const)?;
        Ok(ast::Argument {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_directives(
        &mut self,
        is_const: bool,
    ) -> Result<Vec<ast::DirectiveAnnotation>> {
        let mut directives = Vec::new();
        while self.current.kind == TokenKind::At {
            let start = self.current.span.start;
            self.advance()?;
            let name = self.expect_name()?;
            let arguments = self.parse_arguments(is_const)?;
            directives.push(ast::DirectiveAnnotation {
                name,
                arguments,
                span: self.span_from(start),
            });
        }
        Ok(directives)
    }

    /// Parses a value literal. With `is_const` set, variables are rejected
    /// (default values and type-system positions).
    fn parse_value(&mut self, is_const: bool) -> Result<ast::Value> {
        self.enter_nested()?;
        let value = match &self.current.kind {
            TokenKind::Dollar => {
                if is_const {
                    return Err(self.unexpected("constant value"));
                }
                self.advance()?;
                ast::Value::Variable(self.expect_name()?)
            }
            TokenKind::Int(_) => {
                let token = self.advance()?;
                let TokenKind::Int(value) = token.kind else {
                    unreachable!("matched Int above");
                };
                ast::Value::Int {
                    value,
                    span: token.span,
                }
            }
            TokenKind::Float(_) => {
                let token = self.advance()?;
                let TokenKind::Float(value) = token.kind else {
                    unreachable!("matched Float above");
                };
                ast::Value::Float {
                    value,
                    span: token.span,
                }
            }
            TokenKind::Str { .. } => {
                let token = self.advance()?;
                let TokenKind::Str { value, block } = token.kind else {
                    unreachable!("matched Str above");
                };
                ast::Value::String {
                    value,
                    block,
                    span: token.span,
                }
            }
            TokenKind::Name(name) => match name.as_str() {
                "true" | "false" => {
                    let token = self.advance()?;
                    let TokenKind::Name(text) = token.kind else {
                        unreachable!("matched Name above");
                    };
                    ast::Value::Boolean {
                        value: text == "true",
                        span: token.span,
                    }
                }
                "null" => {
                    let token = self.advance()?;
                    ast::Value::Null { span: token.span }
                }
                _ => {
                    let name = self.expect_name()?;
                    ast::Value::Enum {
                        value: name.value,
                        span: name.span,
                    }
                }
            },
            TokenKind::BracketOpen => {
                let start = self.current.span.start;
                self.advance()?;
                let mut values = Vec::new();
                while !self.skip_if(&TokenKind::BracketClose)? {
                    values.push(self.parse_value(is_const)?);
                }
                ast::Value::List(ast::ListValue {
                    values,
                    span: self.span_from(start),
                })
            }
            TokenKind::BraceOpen => {
                let start = self.current.span.start;
                self.advance()?;
                let mut fields = Vec::new();
                while !self.skip_if(&TokenKind::BraceClose)? {
                    let field_start = self.current.span.start;
                    let name = self.expect_name()?;
                    self.expect(TokenKind::Colon, "\":\"")?;
                    let value = self.parse_value(is_const)?;
                    fields.push(ast::ObjectField {
                        name,
                        value,
                        span: self.span_from(field_start),
                    });
                }
                ast::Value::Object(ast::ObjectValue {
                    fields,
                    span: self.span_from(start),
                })
            }
            _ => return Err(self.unexpected("value")),
        };
        self.exit_nested();
        Ok(value)
    }

    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation> {
        self.enter_nested()?;
        let start = self.current.span.start;
        let inner = if self.skip_if(&TokenKind::BracketOpen)? {
            let inner = self.parse_type_annotation()?;
            self.expect(TokenKind::BracketClose, "\"]\"")?;
            ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                inner: Box::new(inner),
                span: self.span_from(start),
            })
        } else {
            ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
                name: self.expect_name()?,
            })
        };
        self.exit_nested();

        if self.skip_if(&TokenKind::Bang)? {
            Ok(ast::TypeAnnotation::NonNull(ast::NonNullTypeAnnotation {
                inner: Box::new(inner),
                span: self.span_from(start),
            }))
        } else {
            Ok(inner)
        }
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn parse_description(&mut self) -> Result<Option<String>> {
        match &self.current.kind {
            TokenKind::Str { .. } => {
                let token = self.advance()?;
                let TokenKind::Str { value, .. } = token.kind else {
                    unreachable!("matched Str above");
                };
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    fn parse_type_system_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::TypeSystemDefinition> {
        match self.current.name_value() {
            Some("schema") => Ok(ast::TypeSystemDefinition::Schema(
                self.parse_schema_definition()?,
            )),
            Some("scalar") => Ok(ast::TypeSystemDefinition::Type(
                ast::TypeDefinition::Scalar(self.parse_scalar_definition(description)?),
            )),
            Some("type") => Ok(ast::TypeSystemDefinition::Type(
                ast::TypeDefinition::Object(self.parse_object_definition(description)?),
            )),
            Some("interface") => Ok(ast::TypeSystemDefinition::Type(
                ast::TypeDefinition::Interface(
                    self.parse_interface_definition(description)?,
                ),
            )),
            Some("union") => Ok(ast::TypeSystemDefinition::Type(
                ast::TypeDefinition::Union(self.parse_union_definition(description)?),
            )),
            Some("enum") => Ok(ast::TypeSystemDefinition::Type(
                ast::TypeDefinition::Enum(self.parse_enum_definition(description)?),
            )),
            Some("input") => Ok(ast::TypeSystemDefinition::Type(
                ast::TypeDefinition::InputObject(
                    self.parse_input_object_definition(description)?,
                ),
            )),
            Some("directive") => Ok(ast::TypeSystemDefinition::Directive(
                self.parse_directive_definition(description)?,
            )),
            _ => Err(self.unexpected("type-system definition")),
        }
    }

    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        self.expect(TokenKind::BraceOpen, "\"{\"")?;
        let mut operation_types = Vec::new();
        while !self.skip_if(&TokenKind::BraceClose)? {
            let entry_start = self.current.span.start;
            let operation = match self.current.name_value() {
                Some("query") => ast::OperationKind::Query,
                Some("mutation") => ast::OperationKind::Mutation,
                Some("subscription") => ast::OperationKind::Subscription,
                _ => return Err(self.unexpected("operation type")),
            };
            self.advance()?;
            self.expect(TokenKind::Colon, "\":\"")?;
            let named_type = self.expect_name()?;
            operation_types.push(ast::RootOperationTypeDefinition {
                operation,
                named_type,
                span: self.span_from(entry_start),
            });
        }
        Ok(ast::SchemaDefinition {
            directives,
            operation_types,
            span: self.span_from(start),
        })
    }

    fn parse_scalar_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::ScalarTypeDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("scalar")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            span: self.span_from(start),
        })
    }

    fn parse_implements_interfaces(&mut self) -> Result<Vec<ast::Name>> {
        if !self.at_keyword("implements") {
            return Ok(vec![]);
        }
        self.advance()?;
        self.skip_if(&TokenKind::Ampersand)?;
        let mut interfaces = vec![self.expect_name()?];
        while self.skip_if(&TokenKind::Ampersand)? {
            interfaces.push(self.expect_name()?);
        }
        Ok(interfaces)
    }

    fn parse_object_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::ObjectTypeDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("type")?;
        let name = self.expect_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_field_definitions()?;
        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_interface_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::InterfaceTypeDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("interface")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_field_definitions()?;
        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_field_definitions(&mut self) -> Result<Vec<ast::FieldDefinition>> {
        if !self.skip_if(&TokenKind::BraceOpen)? {
            return Ok(vec![]);
        }
        let mut fields = Vec::new();
        while !self.skip_if(&TokenKind::BraceClose)? {
            let start = self.current.span.start;
            let description = self.parse_description()?;
            let name = self.expect_name()?;
            let arguments = self.parse_input_value_definitions(TokenKind::ParenOpen)?;
            self.expect(TokenKind::Colon, "\":\"")?;
            let field_type = self.parse_type_annotation()?;
            let directives = self.parse_directives(true)?;
            fields.push(ast::FieldDefinition {
                description,
                name,
                arguments,
                field_type,
                directives,
                span: self.span_from(start),
            });
        }
        Ok(fields)
    }

    fn parse_input_value_definitions(
        &mut self,
        open: TokenKind,
    ) -> Result<Vec<ast::InputValueDefinition>> {
        let close = match open {
            TokenKind::ParenOpen => TokenKind::ParenClose,
            _ => TokenKind::BraceClose,
        };
        if !self.skip_if(&open)? {
            return Ok(vec![]);
        }
        let mut defs = Vec::new();
        while !self.skip_if(&close)? {
            let start = self.current.span.start;
            let description = self.parse_description()?;
            let name = self.expect_name()?;
            self.expect(TokenKind::Colon, "\":\"")?;
            let value_type = self.parse_type_annotation()?;
            let default_value = if self.skip_if(&TokenKind::Equals)? {
                Some(self.parse_value(true)?)
            } else {
                None
            };
            let directives = self.parse_directives(true)?;
            defs.push(ast::InputValueDefinition {
                description,
                name,
                value_type,
                default_value,
                directives,
                span: self.span_from(start),
            });
        }
        Ok(defs)
    }

    fn parse_union_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::UnionTypeDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("union")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let mut members = Vec::new();
        if self.skip_if(&TokenKind::Equals)? {
            self.skip_if(&TokenKind::Pipe)?;
            members.push(self.expect_name()?);
            while self.skip_if(&TokenKind::Pipe)? {
                members.push(self.expect_name()?);
            }
        }
        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            span: self.span_from(start),
        })
    }

    fn parse_enum_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::EnumTypeDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("enum")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let mut values = Vec::new();
        if self.skip_if(&TokenKind::BraceOpen)? {
            while !self.skip_if(&TokenKind::BraceClose)? {
                let value_start = self.current.span.start;
                let description = self.parse_description()?;
                let value_name = self.expect_name()?;
                let value_directives = self.parse_directives(true)?;
                values.push(ast::EnumValueDefinition {
                    description,
                    name: value_name,
                    directives: value_directives,
                    span: self.span_from(value_start),
                });
            }
        }
        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            span: self.span_from(start),
        })
    }

    fn parse_input_object_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::InputObjectTypeDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("input")?;
        let name = self.expect_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_value_definitions(TokenKind::BraceOpen)?;
        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: self.span_from(start),
        })
    }

    fn parse_directive_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<ast::DirectiveDefinition> {
        let start = self.current.span.start;
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At, "\"@\"")?;
        let name = self.expect_name()?;
        let arguments = self.parse_input_value_definitions(TokenKind::ParenOpen)?;
        self.expect_keyword("on")?;
        self.skip_if(&TokenKind::Pipe)?;
        let mut locations = vec![self.expect_name()?];
        while self.skip_if(&TokenKind::Pipe)? {
            locations.push(self.expect_name()?);
        }
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            locations,
            span: self.span_from(start),
        })
    }
}
