//! Scan cursor over a borrowed `&str`.
//!
//! The cursor advances codepoint by codepoint. Its position is a byte
//! offset that always sits on a `char` boundary, so a codepoint above
//! U+FFFF is consumed as one unit and never split.
//!
//! # Backtracking
//!
//! Matchers save `pos()` on entry and call `set_pos(saved)` on failure.
//! That is the only rollback mechanism: there is no intermediate commit,
//! so a failed attempt leaves no trace.
//!
//! # Format Stack
//!
//! The cursor also carries the active [`Format`] and one [`FormatFrame`] per
//! open markdown marker. Only the markdown matcher pushes or pops frames;
//! every other matcher reads `format()` when it emits a token.

use smallvec::SmallVec;

use crate::Format;

/// One open format marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatFrame {
    /// The bit this marker turned on.
    pub format: Format,
    /// Byte offset where the opening marker starts.
    pub opened_at: usize,
}

/// Cursor over the text of a single scan.
///
/// Owned exclusively by one in-progress scan. Cheap to clone, which tests
/// use to snapshot state.
#[derive(Clone, Debug)]
pub struct ScanCursor<'a> {
    text: &'a str,
    /// Current byte offset; always a `char` boundary.
    pos: usize,
    format: Format,
    frames: SmallVec<[FormatFrame; 4]>,
}

impl<'a> ScanCursor<'a> {
    /// Create a cursor at the start of `text` with no active format.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            format: Format::empty(),
            frames: SmallVec::new(),
        }
    }

    /// The full source text.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Unconsumed text from the current position.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Rewind (or fast-forward) to a saved position.
    ///
    /// # Contract
    ///
    /// `pos` must come from an earlier `pos()` call on this cursor, or
    /// otherwise lie on a `char` boundary within the text.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(
            self.text.is_char_boundary(pos),
            "position {pos} is not a char boundary"
        );
        self.pos = pos;
    }

    /// Returns `true` while unconsumed input remains.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Returns `true` once all input is consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        !self.has_next()
    }

    /// Character at the current position, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character `n` positions ahead (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Character immediately before the current position.
    #[inline]
    pub fn peek_prev(&self) -> Option<char> {
        self.text[..self.pos].chars().next_back()
    }

    /// Consume and return one character.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `ch` if it is the current character.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `s` if the remaining text starts with it.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds. Returns the number of bytes consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos - start
    }

    /// Advance by `len` bytes measured on `rest()`.
    ///
    /// # Contract
    ///
    /// `len` must land on a `char` boundary within the remaining text.
    #[inline]
    pub fn advance_by(&mut self, len: usize) {
        self.set_pos(self.pos + len);
    }

    /// Source text between two byte offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start..end]
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    // ─── Format Stack ───────────────────────────────────────────

    /// Currently active format bits.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns `true` if every bit of `flag` is active.
    #[inline]
    pub fn has_format(&self, flag: Format) -> bool {
        self.format.contains(flag)
    }

    /// Open a marker for `flag` at the current position.
    pub fn push_format(&mut self, flag: Format) {
        self.frames.push(FormatFrame {
            format: flag,
            opened_at: self.pos,
        });
        self.format |= flag;
    }

    /// Close the most recent marker for `flag`.
    ///
    /// Markers may close out of order (`*a _b* c_`), so the frame is found
    /// by format rather than popped from the top. Returns the removed
    /// frame, or `None` if `flag` was not open.
    pub fn pop_format(&mut self, flag: Format) -> Option<FormatFrame> {
        let index = self.frames.iter().rposition(|f| f.format == flag)?;
        let frame = self.frames.remove(index);
        self.format = self
            .frames
            .iter()
            .fold(Format::empty(), |acc, f| acc | f.format);
        Some(frame)
    }

    /// Markers opened but not yet closed, oldest first.
    pub fn open_frames(&self) -> &[FormatFrame] {
        &self.frames
    }
}
