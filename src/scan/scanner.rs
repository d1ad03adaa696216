use crate::scan::cursor::Cursor;
use crate::scan::token::{Token, TokenKind};
use crate::span::Span;

const UNTERMINATED_STRING: &str = "Unterminated string.";
const UNEXPECTED_CHARACTER: &str = "Unexpected character.";

/// On-demand scanner producing one [`Token`] per call.
///
/// Lexical errors come back as [`TokenKind::Error`] tokens, so the scanner
/// stays usable after reporting one. Once the input is exhausted every call
/// yields [`TokenKind::Eof`].
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    line: usize,
    /// set once `Eof` has been produced
    exhausted: bool,
}

impl<'a> Scanner<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            line: 1,
            exhausted: false,
        }
    }

    /// Start over on another source.
    pub fn rebind(&mut self, source: &'a str) {
        *self = Self::new(source);
    }

    /// Line the cursor is currently on.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Whether `Eof` has been handed out.
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.cursor.mark();

        let Some(c) = self.cursor.advance() else {
            self.exhausted = true;
            return self.make_token(TokenKind::Eof);
        };

        let token = match c {
            c if is_alpha(c) => self.identifier_or_keyword(),
            c if c.is_ascii_digit() => self.number(),
            b'(' => self.make_token(TokenKind::LeftParen),
            b')' => self.make_token(TokenKind::RightParen),
            b'{' => self.make_token(TokenKind::LeftBrace),
            b'}' => self.make_token(TokenKind::RightBrace),
            b';' => self.make_token(TokenKind::Semicolon),
            b',' => self.make_token(TokenKind::Comma),
            b'.' => self.make_token(TokenKind::Dot),
            b'-' => self.make_token(TokenKind::Minus),
            b'+' => self.make_token(TokenKind::Plus),
            b'/' => self.make_token(TokenKind::Slash),
            b'*' => self.make_token(TokenKind::Star),
            b'!' => {
                let kind = if self.cursor.expect_byte(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.make_token(kind)
            }
            b'=' => {
                let kind = if self.cursor.expect_byte(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.make_token(kind)
            }
            b'<' => {
                let kind = if self.cursor.expect_byte(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.make_token(kind)
            }
            b'>' => {
                let kind = if self.cursor.expect_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.make_token(kind)
            }
            b'"' => self.string(),
            _ => self.error_token(UNEXPECTED_CHARACTER),
        };

        log::trace!(
            "{:?} {:?} at line {}",
            token.kind,
            token.lexeme,
            token.line()
        );

        token
    }
}

impl<'a> Scanner<'a> {
    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token {
            kind,
            lexeme: self.cursor.lexeme(),
            span: Span::new(self.cursor.window(), self.line),
        }
    }

    fn error_token(&self, msg: &'static str) -> Token<'a> {
        Token {
            kind: TokenKind::Error,
            lexeme: msg,
            span: Span::new(self.cursor.window(), self.line),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.peek() {
            match c {
                b' ' | b'\r' | b'\t' => {
                    self.cursor.advance();
                }
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                b'/' if self.cursor.peek_next() == Some(b'/') => {
                    self.cursor.eat_while(|c| c != b'\n');
                }
                _ => return,
            }
        }
    }

    fn identifier_or_keyword(&mut self) -> Token<'a> {
        self.cursor.eat_while(|c| is_alpha(c) || c.is_ascii_digit());

        let kind = TokenKind::keyword(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    fn number(&mut self) -> Token<'a> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some(b'.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        self.make_token(TokenKind::Number)
    }

    fn string(&mut self) -> Token<'a> {
        // reported on the opening line, errors use the current one
        let line = self.line;

        loop {
            match self.cursor.advance() {
                Some(b'"') => break,
                Some(b'\n') => self.line += 1,
                Some(_) => (),
                None => return self.error_token(UNTERMINATED_STRING),
            }
        }

        Token {
            kind: TokenKind::String,
            lexeme: self.cursor.lexeme(),
            span: Span::new(self.cursor.window(), line),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    /// Every token up to and including the single `Eof`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        Some(self.scan_token())
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

const fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}
