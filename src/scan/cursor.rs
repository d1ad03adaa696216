use std::ops::Range;

/// Byte cursor over the source being scanned.
///
/// `window.start` is the first byte of the token being recognized and
/// `window.end` is the next byte to examine. Every lookahead is bounds
/// checked against the source length; past the end, peeks yield `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    window: Range<usize>,
}

impl<'a> Cursor<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self { source, window: 0..0 }
    }

    /// Begin a new token at the current position.
    pub fn mark(&mut self) {
        self.window.start = self.window.end;
    }

    pub const fn is_end(&self) -> bool {
        self.window.end >= self.source.len()
    }

    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// The source text between the mark and the current position.
    ///
    /// Only ASCII bytes ever open or close a token, so both ends sit on char
    /// boundaries whenever the scanner slices.
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.window.clone()]
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.window.end).copied()
    }

    pub fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.window.end + 1).copied()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.window.end += 1;
        Some(b)
    }

    pub fn expect_byte(&mut self, expected: u8) -> bool {
        self.expect_pred(|b| b == expected)
    }

    pub fn expect_pred<F>(&mut self, pred: F) -> bool
    where
        F: FnOnce(u8) -> bool,
    {
        if self.peek().is_some_and(pred) {
            self.window.end += 1;
            true
        } else {
            false
        }
    }

    /// Consume bytes until `pred` fails or the input ends.
    pub fn eat_while<F>(&mut self, mut pred: F)
    where
        F: FnMut(u8) -> bool,
    {
        while self.expect_pred(&mut pred) {}
    }
}
