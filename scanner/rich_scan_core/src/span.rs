//! Source location spans.
//!
//! Spans are byte offsets into the scanned text. They always fall on
//! `char` boundaries because the cursor only ever moves by whole codepoints.

use std::fmt;
use std::ops::Range;

/// Byte range of a token in the scanned text.
///
/// `end` is exclusive. Offsets are `usize` so any `&str` the caller can
/// hold can be scanned without a size ceiling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Byte range, for slicing the source.
    #[inline]
    pub const fn to_range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Convert to a range of `char` indices within `text`.
    ///
    /// Editors that address text by character position (rather than by
    /// UTF-8 byte) use this to place a token. `text` must be the string
    /// the span was produced from.
    pub fn char_range(self, text: &str) -> Range<usize> {
        let start = text[..self.start].chars().count();
        let len = text[self.start..self.end].chars().count();
        start..start + len
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
