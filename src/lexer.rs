//! JSON lexer/tokenizer.
//!
//! Converts raw input text into a sequence of [`Token`]s for the parser.
//! The lexer owns an explicit byte cursor over one input; it is built per
//! input and consumed by [`Lexer::tokenize`], so there is no reset step
//! and no state carried between inputs.
//!
//! Strings are captured verbatim: the only recognized escape is `\"`,
//! which keeps a backslash-quote sequence from terminating the string.
//! No unescaping is performed, so the formatter can re-emit string
//! content byte for byte.

use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Tokenizer over one input string.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer scanning `input` from the start.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Current byte offset of the scan cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek one byte past the cursor.
    fn peek_next(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos + 1).copied()
    }

    /// Consume and return the current byte, tracking line numbers.
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if let Some(b) = b {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
            }
        }
        b
    }

    /// Decode the character at the cursor for error reporting.
    fn current_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\u{0}')
    }

    /// Skip whitespace. LF advances the line counter via `advance`.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.advance();
        }
    }

    /// Read the next token, or `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, LexError> {
        self.skip_whitespace();

        let start = self.pos;
        let line = self.line;

        let kind = match self.peek() {
            None => return Ok(None),
            Some(b'{') => {
                self.advance();
                TokenKind::BraceOpen
            }
            Some(b'}') => {
                self.advance();
                TokenKind::BraceClose
            }
            Some(b'[') => {
                self.advance();
                TokenKind::BracketOpen
            }
            Some(b']') => {
                self.advance();
                TokenKind::BracketClose
            }
            Some(b':') => {
                self.advance();
                TokenKind::Colon
            }
            Some(b',') => {
                self.advance();
                TokenKind::Comma
            }
            Some(b'"') => return self.read_string(start, line).map(Some),
            Some(b'-') if !matches!(self.peek_next(), Some(b'0'..=b'9')) => {
                return Err(LexError::UnexpectedCharacter {
                    found: '-',
                    line,
                    index: start,
                });
            }
            Some(b'-' | b'0'..=b'9') => return self.read_number(start, line).map(Some),
            Some(b) if b.is_ascii_alphabetic() => {
                return self.read_identifier(start, line).map(Some)
            }
            Some(_) => {
                return Err(LexError::UnexpectedCharacter {
                    found: self.current_char(),
                    line,
                    index: start,
                });
            }
        };

        Ok(Some(Token {
            kind,
            lexeme: &self.input[start..self.pos],
            index: start,
            line,
        }))
    }

    /// Read a string token. The lexeme is the content between the quotes,
    /// preserved verbatim; only `\"` is special-cased so it does not
    /// terminate the string.
    fn read_string(&mut self, start: usize, line: usize) -> Result<Token<'a>, LexError> {
        // Consume opening quote
        self.advance();

        loop {
            match self.peek() {
                None => {
                    return Err(LexError::UnterminatedString { line, index: start });
                }
                Some(b'"') => {
                    self.advance();
                    break;
                }
                Some(b'\\') if self.peek_next() == Some(b'"') => {
                    // Escaped quote: keep both bytes in the content.
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        Ok(Token {
            kind: TokenKind::String,
            lexeme: &self.input[start + 1..self.pos - 1],
            index: start,
            line,
        })
    }

    /// Read a number token matching `-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    ///
    /// After the longest match, the next byte must be whitespace, `,`,
    /// `}`, `]`, or end of input; anything else (the second `.` of
    /// `123.45.67`, a stray `e`) is an invalid-suffix error.
    fn read_number(&mut self, start: usize, line: usize) -> Result<Token<'a>, LexError> {
        if self.peek() == Some(b'-') {
            self.advance();
        }
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }

        // Fraction: the dot only belongs to the number if digits follow.
        if self.peek() == Some(b'.') && matches!(self.peek_next(), Some(b'0'..=b'9')) {
            self.advance();
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }

        // Exponent: e/E, optional sign, then at least one digit.
        if let Some(b'e' | b'E') = self.peek() {
            let after_sign = match self.peek_next() {
                Some(b'+' | b'-') => self.input.as_bytes().get(self.pos + 2).copied(),
                other => other,
            };
            if matches!(after_sign, Some(b'0'..=b'9')) {
                self.advance();
                if let Some(b'+' | b'-') = self.peek() {
                    self.advance();
                }
                while let Some(b'0'..=b'9') = self.peek() {
                    self.advance();
                }
            }
        }

        match self.peek() {
            None | Some(b' ' | b'\t' | b'\r' | b'\n' | b',' | b'}' | b']') => Ok(Token {
                kind: TokenKind::Number,
                lexeme: &self.input[start..self.pos],
                index: start,
                line,
            }),
            Some(_) => Err(LexError::InvalidNumberSuffix {
                lexeme: self.input[start..self.pos].to_string(),
                found: self.current_char(),
                line: self.line,
                index: self.pos,
            }),
        }
    }

    /// Read an ASCII letter run and resolve it against the closed keyword
    /// set. Anything other than `true`/`false`/`null` is an error.
    fn read_identifier(&mut self, start: usize, line: usize) -> Result<Token<'a>, LexError> {
        while let Some(b) = self.peek() {
            if b.is_ascii_alphabetic() {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[start..self.pos];
        let kind = match text {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => {
                return Err(LexError::UnrecognizedIdentifier {
                    ident: text.to_string(),
                    line,
                    index: start,
                });
            }
        };

        Ok(Token {
            kind,
            lexeme: text,
            index: start,
            line,
        })
    }

    /// Drain the lexer into an ordered token sequence.
    ///
    /// Consumes the lexer: the sequence is finite and a fresh `Lexer` is
    /// needed to scan again.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Result<Vec<Token<'_>>, LexError> {
        Lexer::new(input).tokenize()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert_eq!(lex("").unwrap(), vec![]);
        assert_eq!(lex("  \t\r\n ").unwrap(), vec![]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{}[]:,"),
            vec![
                TokenKind::BraceOpen,
                TokenKind::BraceClose,
                TokenKind::BracketOpen,
                TokenKind::BracketClose,
                TokenKind::Colon,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_token_positions() {
        let tokens = lex("{ \"a\": 1 }").unwrap();
        assert_eq!(tokens[0].index, 0);
        assert_eq!(tokens[1].index, 2); // opening quote of "a"
        assert_eq!(tokens[1].lexeme, "a");
        assert_eq!(tokens[3].lexeme, "1");
        assert_eq!(tokens[3].index, 7);
        assert!(tokens.iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_lf_increments_line() {
        let tokens = lex("[\n1,\n2\n]").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2); // 1
        assert_eq!(tokens[3].line, 3); // 2
        assert_eq!(tokens[4].line, 4); // ]
    }

    #[test]
    fn test_cr_does_not_increment_line() {
        let tokens = lex("[\r1\r]").unwrap();
        assert!(tokens.iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("true false null"),
            vec![TokenKind::True, TokenKind::False, TokenKind::Null]
        );
    }

    #[test]
    fn test_unrecognized_identifier() {
        let err = lex("nul").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedIdentifier {
                ident: "nul".to_string(),
                line: 1,
                index: 0,
            }
        );
    }

    #[test]
    fn test_string_content_is_verbatim() {
        let tokens = lex(r#""hello world""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "hello world");
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        // \" is kept verbatim in the content
        let tokens = lex(r#""a\"b""#).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, r#"a\"b"#);
    }

    #[test]
    fn test_other_backslash_sequences_preserved() {
        let tokens = lex(r#""a\nb""#).unwrap();
        assert_eq!(tokens[0].lexeme, r#"a\nb"#);
    }

    #[test]
    fn test_string_spanning_lines() {
        let tokens = lex("\"a\nb\" 1").unwrap();
        assert_eq!(tokens[0].lexeme, "a\nb");
        assert_eq!(tokens[0].line, 1);
        // Line counter advanced past the embedded LF
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex("\"abc").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, index: 0 });
    }

    #[test]
    fn test_unterminated_string_ending_in_escaped_quote() {
        let err = lex(r#""abc\""#).unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn test_integer_numbers() {
        let tokens = lex("0 42 -123").unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["0", "42", "-123"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Number));
    }

    #[test]
    fn test_fraction_and_exponent() {
        let tokens = lex("1.5 1.23e-4 -123e-4 2E+10 7e3").unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["1.5", "1.23e-4", "-123e-4", "2E+10", "7e3"]);
    }

    #[test]
    fn test_number_terminated_by_delimiters() {
        assert_eq!(
            kinds("[1,2]"),
            vec![
                TokenKind::BracketOpen,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::BracketClose,
            ]
        );
        assert_eq!(kinds("{\"a\":1}").last(), Some(&TokenKind::BraceClose));
    }

    #[test]
    fn test_invalid_number_suffix() {
        let err = lex("123.45.67").unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidNumberSuffix {
                lexeme: "123.45".to_string(),
                found: '.',
                line: 1,
                index: 6,
            }
        );
    }

    #[test]
    fn test_trailing_dot_is_invalid_suffix() {
        let err = lex("1.").unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidNumberSuffix { found: '.', .. }
        ));
    }

    #[test]
    fn test_dangling_exponent_is_invalid_suffix() {
        let err = lex("1e").unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidNumberSuffix { found: 'e', .. }
        ));
        let err = lex("1e+").unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidNumberSuffix { found: 'e', .. }
        ));
    }

    #[test]
    fn test_number_glued_to_identifier_is_invalid_suffix() {
        let err = lex("1x").unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidNumberSuffix { found: 'x', .. }
        ));
    }

    #[test]
    fn test_bare_minus_is_unexpected_character() {
        let err = lex("-").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter { found: '-', .. }
        ));
        let err = lex("-x").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter { found: '-', .. }
        ));
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("?").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                found: '?',
                line: 1,
                index: 0,
            }
        );
    }

    #[test]
    fn test_unexpected_character_reports_line() {
        let err = lex("[1,\n @]").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                found: '@',
                line: 2,
                index: 5,
            }
        );
    }

    #[test]
    fn test_next_token_end_marker() {
        let mut lexer = Lexer::new("1");
        assert!(lexer.next_token().unwrap().is_some());
        assert!(lexer.next_token().unwrap().is_none());
        // Stays at end once exhausted
        assert!(lexer.next_token().unwrap().is_none());
    }
}
