use crate::span::Span;

/// Forward-only cursor over a window of a byte buffer
///
/// Positions are absolute offsets into the whole buffer, so every span a
/// cursor hands out can be resolved against the original input even when
/// the cursor only covers a sub-range of it (the authority, say).
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor over the whole input
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Cursor over raw bytes that need not be UTF-8
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            end: bytes.len(),
        }
    }

    /// Cursor restricted to `span` of the same buffer
    pub fn over(bytes: &'a [u8], span: Span) -> Self {
        let end = span.start().saturating_add(span.len()).min(bytes.len());
        Self {
            bytes,
            pos: span.start().min(end),
            end,
        }
    }

    /// Current absolute offset
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Byte under the cursor, `None` at end of input
    pub fn peek(&self) -> Option<u8> {
        if self.at_end() {
            None
        } else {
            Some(self.bytes[self.pos])
        }
    }

    /// Step over one byte. Does nothing at end of input.
    pub fn advance(&mut self) {
        debug_assert!(!self.at_end(), "advance past end of input");
        if !self.at_end() {
            self.pos += 1;
        }
    }

    /// Consume `byte` if it is the next one
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Unconsumed bytes
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..self.end]
    }

    /// Consume everything that is left and return it as one span.
    /// A second call returns an empty span.
    pub fn take_remaining(&mut self) -> Span {
        let span = Span::from_range(self.pos, self.end);
        self.pos = self.end;
        span
    }

    /// Consume up to (not including) absolute offset `until`
    pub fn take_until(&mut self, until: usize) -> Span {
        let until = until.clamp(self.pos, self.end);
        let span = Span::from_range(self.pos, until);
        self.pos = until;
        span
    }

    /// Absolute offset of the next `needle`
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.rest()).map(|i| self.pos + i)
    }

    /// Absolute offset of the next `a` or `b`
    pub fn find2(&self, a: u8, b: u8) -> Option<usize> {
        memchr::memchr2(a, b, self.rest()).map(|i| self.pos + i)
    }

    /// Absolute offset of the next `a`, `b` or `c`
    pub fn find3(&self, a: u8, b: u8, c: u8) -> Option<usize> {
        memchr::memchr3(a, b, c, self.rest()).map(|i| self.pos + i)
    }
}
