use rich_scan_core::{chars, AliasTrie, ScanCursor};

use super::commit;
use crate::{Token, TokenKind};

/// Match a delimiter-terminated alias at the cursor.
///
/// The walk ends at the first terminal node: it commits when the next
/// character is a delimiter and fails otherwise. A dead end before any
/// terminal fails too. Failure leaves the cursor where it started.
pub(super) fn attempt<'a>(cursor: &mut ScanCursor<'a>) -> Option<Token<'a>> {
    if !chars::is_delimiter(cursor.peek_prev()) {
        return None;
    }

    let trie = AliasTrie::global();
    let start = cursor.pos();
    let mut node = trie.root();

    while let Some(ch) = cursor.peek() {
        let Some(next) = trie.step(node, ch) else {
            break;
        };
        cursor.advance_by(ch.len_utf8());
        node = next;
        if let Some(emoji) = trie.glyph(node) {
            if chars::is_delimiter(cursor.peek()) {
                return Some(commit(cursor, start, TokenKind::TextEmoji { emoji }));
            }
            break;
        }
    }

    cursor.set_pos(start);
    None
}
