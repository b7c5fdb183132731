//! Emphasis markers and explicit links.
//!
//! Markers are single characters: `*` bold, `_` italic, `~` strike and
//! `` ` `` monospace. Each marker is emitted as its own `Markdown` token;
//! the enclosed text is emitted by the other matchers and the scan loop
//! with the marker's bit set.
//!
//! An opener must sit at a word boundary, be followed by a non-space, and
//! have a plausible closer later on the same line. A closer must follow a
//! non-space and be followed by a delimiter. Both marker tokens carry the
//! bit. Openers whose closer never fires are turned back into text by the
//! scan loop once the input is exhausted.

use std::borrow::Cow;

use memchr::{memchr, memchr2, memchr_iter};
use rich_scan_core::{chars, Format, ScanCursor};

use super::commit;
use crate::{FeatureFlags, Token, TokenKind};

/// Marker bytes and the format each one toggles.
const MARKERS: [(u8, Format); 4] = [
    (b'*', Format::BOLD),
    (b'_', Format::ITALIC),
    (b'~', Format::STRIKE),
    (b'`', Format::MONOSPACE),
];

/// Index into [`MARKERS`] and format for a marker character.
fn marker(ch: char) -> Option<(usize, Format)> {
    let byte = u8::try_from(ch).ok()?;
    MARKERS
        .iter()
        .position(|&(marker, _)| marker == byte)
        .map(|slot| (slot, MARKERS[slot].1))
}

/// A forward search remembered together with where it started.
#[derive(Clone, Copy, Debug)]
struct Lookahead {
    from: usize,
    hit: Option<usize>,
}

impl Lookahead {
    /// First hit at or after `at`. `search` must return the first position
    /// at or after its argument that satisfies a fixed predicate; it only
    /// runs when the remembered search cannot answer.
    fn find(
        slot: &mut Option<Self>,
        at: usize,
        search: impl FnOnce(usize) -> Option<usize>,
    ) -> Option<usize> {
        if let Some(memo) = *slot {
            if memo.from <= at && !matches!(memo.hit, Some(hit) if hit < at) {
                return memo.hit;
            }
        }
        let hit = search(at);
        *slot = Some(Self { from: at, hit });
        hit
    }
}

/// Lookaheads shared by the markdown attempts of one scan.
#[derive(Debug, Default)]
pub(crate) struct MarkdownMemo {
    newline: Option<Lookahead>,
    /// Next valid closer, one slot per entry of [`MARKERS`].
    closers: [Option<Lookahead>; 4],
    /// Next `]` or newline.
    label_end: Option<Lookahead>,
    /// Next `)` or whitespace.
    target_end: Option<Lookahead>,
}

pub(super) fn attempt<'a>(
    cursor: &mut ScanCursor<'a>,
    features: FeatureFlags,
    memo: &mut MarkdownMemo,
) -> Option<Token<'a>> {
    let ch = cursor.peek()?;
    let monospace = cursor.has_format(Format::MONOSPACE);

    if ch == '[' && !monospace && features.contains(FeatureFlags::MARKDOWN) {
        return explicit_link(cursor, memo);
    }

    let (slot, flag) = marker(ch)?;
    if monospace && flag != Format::MONOSPACE {
        return None;
    }
    if cursor.has_format(flag) {
        close(cursor, flag)
    } else {
        open(cursor, slot, flag, memo)
    }
}

fn open<'a>(
    cursor: &mut ScanCursor<'a>,
    slot: usize,
    flag: Format,
    memo: &mut MarkdownMemo,
) -> Option<Token<'a>> {
    if !chars::is_delimiter(cursor.peek_prev()) {
        return None;
    }
    cursor.peek_nth(1).filter(|c| !c.is_whitespace())?;
    let start = cursor.pos();
    if !memo.has_closer(cursor.text(), start + 1, slot) {
        return None;
    }

    cursor.push_format(flag);
    cursor.advance_by(1);
    Some(commit(cursor, start, TokenKind::Markdown))
}

fn close<'a>(cursor: &mut ScanCursor<'a>, flag: Format) -> Option<Token<'a>> {
    cursor.peek_prev().filter(|c| !c.is_whitespace())?;
    if !chars::is_delimiter(cursor.peek_nth(1)) {
        return None;
    }

    let start = cursor.pos();
    cursor.advance_by(1);
    let token = commit(cursor, start, TokenKind::Markdown);
    cursor.pop_format(flag);
    Some(token)
}

impl MarkdownMemo {
    /// Whether the text from `body` (just after an opener) holds a valid
    /// closer for marker `slot` before the end of the line.
    fn has_closer(&mut self, text: &str, body: usize, slot: usize) -> bool {
        let byte = MARKERS[slot].0;
        // A closer needs a non-space before it, so it cannot sit at `body`.
        let closer = Lookahead::find(&mut self.closers[slot], body + 1, |from| {
            memchr_iter(byte, &text.as_bytes()[from..])
                .map(|i| from + i)
                .find(|&j| is_closer_at(text, j))
        });
        let Some(closer) = closer else {
            return false;
        };
        let newline = Lookahead::find(&mut self.newline, body, |from| {
            memchr(b'\n', &text.as_bytes()[from..]).map(|i| from + i)
        });
        !matches!(newline, Some(newline) if newline < closer)
    }
}

/// A marker byte at `j` can close: non-space before, delimiter after.
fn is_closer_at(text: &str, j: usize) -> bool {
    !text[..j].ends_with(char::is_whitespace) && chars::is_delimiter(text[j + 1..].chars().next())
}

/// `[label](url)`: a non-empty single-line label and a non-empty url with
/// no whitespace.
fn explicit_link<'a>(cursor: &mut ScanCursor<'a>, memo: &mut MarkdownMemo) -> Option<Token<'a>> {
    let text = cursor.text();
    let start = cursor.pos();
    let label_start = start + 1;
    let label_end = Lookahead::find(&mut memo.label_end, label_start, |from| {
        memchr2(b']', b'\n', &text.as_bytes()[from..]).map(|i| from + i)
    })?;
    if label_end == label_start || !text[label_end..].starts_with("](") {
        return None;
    }
    let url_start = label_end + 2;
    let url_end = Lookahead::find(&mut memo.target_end, url_start, |from| {
        text[from..]
            .find(|c: char| c == ')' || c.is_whitespace())
            .map(|i| from + i)
    })?;
    if url_end == url_start || !text[url_end..].starts_with(')') {
        return None;
    }
    let url = &text[url_start..url_end];

    cursor.advance_by(url_end + 1 - start);
    let mut token = commit(
        cursor,
        start,
        TokenKind::Link {
            url: Cow::Borrowed(url),
            auto: false,
        },
    );
    token.format |= Format::LINK;
    Some(token)
}
