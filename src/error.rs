//! Error types for lexing, parsing, and the combined pipeline.
//!
//! Every error is terminal for the call that produced it: no partial token
//! sequence or AST is ever returned alongside one. Messages name the
//! offending text plus its line and byte index, since callers are expected
//! to display them verbatim.

use thiserror::Error;

/// Errors produced while tokenizing input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input was reached inside a string literal.
    #[error("unterminated string at line {line}, index {index}")]
    UnterminatedString {
        /// Line on which the string started.
        line: usize,
        /// Byte offset of the opening quote.
        index: usize,
    },

    /// A number literal was followed by a character that cannot end one,
    /// e.g. the second `.` in `123.45.67`.
    #[error("invalid character {found:?} after number {lexeme:?} at line {line}, index {index}")]
    InvalidNumberSuffix {
        /// The number text matched so far.
        lexeme: String,
        /// The offending character.
        found: char,
        /// Line of the offending character.
        line: usize,
        /// Byte offset of the offending character.
        index: usize,
    },

    /// A letter run that is not `true`, `false`, or `null`.
    #[error("unrecognized identifier {ident:?} at line {line}, index {index}")]
    UnrecognizedIdentifier {
        /// The identifier text.
        ident: String,
        /// Line on which it started.
        line: usize,
        /// Byte offset of its first character.
        index: usize,
    },

    /// A character that starts no token class.
    #[error("unexpected character {found:?} at line {line}, index {index}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Line of the character.
        line: usize,
        /// Byte offset of the character.
        index: usize,
    },
}

/// Errors produced while parsing a token sequence.
///
/// Variants carrying a `lexeme` describe the offending token; the
/// end-of-input variants exist because there is no token left to describe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `parse` was invoked on an empty token sequence.
    #[error("empty input: nothing to parse")]
    EmptyInput,

    /// End of input where a token was still required, e.g. an unclosed
    /// container or a pair missing its value.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd {
        /// Description of what the parser was looking for.
        expected: &'static str,
    },

    /// A comma immediately followed by the matching closing delimiter.
    #[error("trailing comma before {lexeme:?} at line {line}, index {index}")]
    TrailingComma {
        /// The closing delimiter that followed the comma.
        lexeme: String,
        /// Line of the closing delimiter.
        line: usize,
        /// Byte offset of the closing delimiter.
        index: usize,
    },

    /// Two values or pairs without a separating comma.
    #[error("expected ',' but found {lexeme:?} at line {line}, index {index}")]
    MissingComma {
        /// The token found where the comma was required.
        lexeme: String,
        /// Line of that token.
        line: usize,
        /// Byte offset of that token.
        index: usize,
    },

    /// An object pair that does not begin with a string key.
    #[error("object key must be a string, found {lexeme:?} at line {line}, index {index}")]
    NonStringKey {
        /// The token found in key position.
        lexeme: String,
        /// Line of that token.
        line: usize,
        /// Byte offset of that token.
        index: usize,
    },

    /// An object key not followed by `:`.
    #[error("expected ':' after object key but found {lexeme:?} at line {line}, index {index}")]
    MissingColon {
        /// The token found where the colon was required.
        lexeme: String,
        /// Line of that token.
        line: usize,
        /// Byte offset of that token.
        index: usize,
    },

    /// A token where a value was required.
    #[error("expected a value but found {lexeme:?} at line {line}, index {index}")]
    UnexpectedToken {
        /// The offending token's text.
        lexeme: String,
        /// Line of the token.
        line: usize,
        /// Byte offset of the token.
        index: usize,
    },

    /// Tokens left over after the root value was parsed.
    #[error("unexpected trailing token {lexeme:?} at line {line}, index {index}")]
    TrailingToken {
        /// The first leftover token's text.
        lexeme: String,
        /// Line of the token.
        line: usize,
        /// Byte offset of the token.
        index: usize,
    },
}

/// Any failure of the combined parse/format pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
