/// A non-owning `(start, len)` reference into one backing buffer
///
/// Spans never carry the buffer itself. Resolving one against a buffer
/// other than the one it was produced from yields garbage or `""`, never
/// a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    /// Create a span covering `len` bytes starting at `start`
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Create a span covering `start..end`
    pub(crate) fn from_range(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self::new(start, end.saturating_sub(start))
    }

    /// Offset of the first byte
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Number of bytes covered
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Offset one past the last byte, saturating at `usize::MAX`
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// `start..end` when it does not overflow
    fn range(&self) -> Option<core::ops::Range<usize>> {
        let end = self.start.checked_add(self.len)?;
        Some(self.start..end)
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sub-span starting `offset` bytes in, at most `len` bytes long.
    /// Clamped to this span's bounds.
    pub fn substr(&self, offset: usize, len: usize) -> Self {
        let offset = offset.min(self.len);
        let len = len.min(self.len - offset);
        Self::new(self.start.saturating_add(offset), len)
    }

    /// Resolve against the buffer this span was produced from (zero-copy)
    pub fn as_str<'a>(&self, buffer: &'a str) -> &'a str {
        self.range()
            .and_then(|range| buffer.get(range))
            .unwrap_or("")
    }

    /// Resolve against raw bytes
    pub fn as_bytes<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        self.range()
            .and_then(|range| buffer.get(range))
            .unwrap_or(&[])
    }
}
