/// An immutable position in the text being parsed.
///
/// Cursors are `Copy` values: advancing produces a new cursor and leaves the
/// original untouched, so any parser can be retried from the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The full text being parsed.
    text: &'a str,
    /// Byte offset into `text`. Always on a char boundary.
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Returns the full text this cursor walks over.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the unconsumed remainder of the text.
    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Returns true if no input remains.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Returns a cursor `n` bytes further on, clamped to the end of the text.
    pub fn advance(self, n: usize) -> Self {
        Self {
            text: self.text,
            offset: (self.offset + n).min(self.text.len()),
        }
    }

    /// Returns the text between this cursor and a later one.
    pub fn slice_to(&self, later: Cursor<'a>) -> &'a str {
        &self.text[self.offset..later.offset.max(self.offset)]
    }
}
