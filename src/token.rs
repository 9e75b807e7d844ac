//! Lexical tokens.
//!
//! A [`Token`] is the smallest unit the lexer produces: a kind, the raw
//! source text it covers, and where it starts in the input. Tokens are
//! immutable values; the parser consumes them and they carry no further
//! lifecycle.

/// The kind of a lexical token.
///
/// Exactly one kind per lexical class. Keywords get their own kinds so the
/// parser never inspects lexeme text to classify a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// String literal; the lexeme is the content between the quotes
    String,
    /// Number literal; the lexeme is the full literal text
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

/// One lexical unit, borrowing its text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What class of token this is.
    pub kind: TokenKind,
    /// The raw source text. For strings this is the content between the
    /// quotes, preserved verbatim (including any backslash sequences).
    pub lexeme: &'a str,
    /// Byte offset of the token's first byte in the input.
    pub index: usize,
    /// 1-based source line of the token's first byte.
    pub line: usize,
}
