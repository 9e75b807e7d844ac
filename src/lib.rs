//! jsonfmt - JSON tokenizer, recursive-descent parser, and formatter.
//!
//! The pipeline is `text → Lexer → tokens → Parser → AST → formatter →
//! text`. Each stage is usable on its own; [`parse`] and [`format`] are
//! the compositions most callers want.
//!
//! # Architecture
//!
//! - [`token`] - Token kinds and positions
//! - [`lexer`] - Tokenizer over one input
//! - [`node`] - AST value model
//! - [`parser`] - Recursive descent with one token of lookahead
//! - [`formatter`] - Canonical indented output
//! - [`error`] - Lex/parse error taxonomy
//!
//! Lexer and parser instances are built per input and consumed by their
//! one-shot entry points, so a single instance can never be reused or
//! shared across threads mid-scan; independent parses need nothing more
//! than independent instances.
//!
//! # Example
//!
//! ```
//! use jsonfmt::{format, parse, FormatOptions, Node};
//!
//! let ast = parse(r#"{ "name": "John" }"#).unwrap();
//! assert!(ast.is_object());
//!
//! let pretty = format(r#"{"a":[1,2]}"#, &FormatOptions::default()).unwrap();
//! assert_eq!(pretty, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
//! ```

// Library code propagates errors; panics are reserved for tests.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod formatter;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod token;

// Re-export the library surface
pub use error::{Error, LexError, ParseError};
pub use formatter::{format, format_node, FormatOptions};
pub use lexer::Lexer;
pub use node::{Node, Pair};
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};
