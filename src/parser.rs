//! Recursive-descent JSON parser.
//!
//! Consumes a token sequence and builds exactly one [`Node`] root using
//! one token of lookahead and no backtracking. A [`Parser`] is built per
//! token sequence and consumed by [`Parser::parse`]; the cursor never
//! survives a parse.
//!
//! Grammar:
//!
//! ```text
//! Value  := Object | Array | String | Number | True | False | Null
//! Object := '{' (Pair (',' Pair)*)? '}'
//! Pair   := String ':' Value
//! Array  := '[' (Value (',' Value)*)? ']'
//! ```
//!
//! Any `Value` is accepted at the top level, so bare scalars like `true`
//! or `0` are complete documents. Tokens left over after the root value
//! are rejected.

use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::node::{Node, Pair};
use crate::token::{Token, TokenKind};

/// Parser over one token sequence.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with its cursor at the first token.
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the token sequence into a single root value.
    ///
    /// Consumes the parser. Fails on empty input, on any grammar
    /// violation, and on tokens remaining after the root.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let root = self.parse_value()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingToken {
                lexeme: token.lexeme.to_string(),
                line: token.line,
                index: token.index,
            });
        }

        Ok(root)
    }

    /// Peek at the current token without consuming it.
    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// True if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().map(|t| t.kind) == Some(kind)
    }

    /// Consume and return the current token.
    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Build the error for finding `token` (or end of input) where
    /// something else was required.
    fn unexpected(
        token: Option<&Token<'a>>,
        expected: &'static str,
        build: impl FnOnce(String, usize, usize) -> ParseError,
    ) -> ParseError {
        match token {
            Some(t) => build(t.lexeme.to_string(), t.line, t.index),
            None => ParseError::UnexpectedEnd { expected },
        }
    }

    /// Parse one `Value` production.
    fn parse_value(&mut self) -> Result<Node, ParseError> {
        let token = match self.peek() {
            Some(t) => *t,
            None => return Err(ParseError::UnexpectedEnd { expected: "a value" }),
        };

        match token.kind {
            TokenKind::BraceOpen => self.parse_object(),
            TokenKind::BracketOpen => self.parse_array(),
            TokenKind::String => {
                self.advance();
                Ok(Node::String(token.lexeme.to_string()))
            }
            TokenKind::Number => {
                self.advance();
                // The lexer only emits lexemes matching the number
                // grammar, all of which parse as f64.
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    ParseError::UnexpectedToken {
                        lexeme: token.lexeme.to_string(),
                        line: token.line,
                        index: token.index,
                    }
                })?;
                Ok(Node::Number(value))
            }
            TokenKind::True => {
                self.advance();
                Ok(Node::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Node::Bool(false))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Node::Null)
            }
            _ => Err(ParseError::UnexpectedToken {
                lexeme: token.lexeme.to_string(),
                line: token.line,
                index: token.index,
            }),
        }
    }

    /// Parse an `Object` production. The opening brace is the current token.
    fn parse_object(&mut self) -> Result<Node, ParseError> {
        self.advance(); // '{'

        let mut pairs = Vec::new();

        if self.matches(TokenKind::BraceClose) {
            return Ok(Node::Object(pairs));
        }

        loop {
            pairs.push(self.parse_pair()?);

            if self.matches(TokenKind::Comma) {
                // A closer right after the comma is a trailing comma.
                if let Some(token) = self.peek() {
                    if token.kind == TokenKind::BraceClose {
                        return Err(ParseError::TrailingComma {
                            lexeme: token.lexeme.to_string(),
                            line: token.line,
                            index: token.index,
                        });
                    }
                }
            } else if self.matches(TokenKind::BraceClose) {
                break;
            } else {
                return Err(Self::unexpected(
                    self.peek(),
                    "',' or '}'",
                    |lexeme, line, index| ParseError::MissingComma {
                        lexeme,
                        line,
                        index,
                    },
                ));
            }
        }

        Ok(Node::Object(pairs))
    }

    /// Parse a `Pair` production: a string key, a colon, and a value.
    fn parse_pair(&mut self) -> Result<Pair, ParseError> {
        let key = match self.peek() {
            Some(token) if token.kind == TokenKind::String => {
                let key = token.lexeme.to_string();
                self.advance();
                key
            }
            other => {
                return Err(Self::unexpected(
                    other,
                    "a string key",
                    |lexeme, line, index| ParseError::NonStringKey {
                        lexeme,
                        line,
                        index,
                    },
                ));
            }
        };

        if !self.matches(TokenKind::Colon) {
            return Err(Self::unexpected(
                self.peek(),
                "':'",
                |lexeme, line, index| ParseError::MissingColon {
                    lexeme,
                    line,
                    index,
                },
            ));
        }

        let value = self.parse_value()?;
        Ok(Pair { key, value })
    }

    /// Parse an `Array` production. The opening bracket is the current token.
    fn parse_array(&mut self) -> Result<Node, ParseError> {
        self.advance(); // '['

        let mut elements = Vec::new();

        if self.matches(TokenKind::BracketClose) {
            return Ok(Node::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);

            if self.matches(TokenKind::Comma) {
                if let Some(token) = self.peek() {
                    if token.kind == TokenKind::BracketClose {
                        return Err(ParseError::TrailingComma {
                            lexeme: token.lexeme.to_string(),
                            line: token.line,
                            index: token.index,
                        });
                    }
                }
            } else if self.matches(TokenKind::BracketClose) {
                break;
            } else {
                return Err(Self::unexpected(
                    self.peek(),
                    "',' or ']'",
                    |lexeme, line, index| ParseError::MissingComma {
                        lexeme,
                        line,
                        index,
                    },
                ));
            }
        }

        Ok(Node::Array(elements))
    }
}

/// Tokenize and parse `input` into one AST root.
pub fn parse(input: &str) -> Result<Node, crate::error::Error> {
    let tokens = Lexer::new(input).tokenize()?;
    let node = Parser::new(tokens).parse()?;
    Ok(node)
}
