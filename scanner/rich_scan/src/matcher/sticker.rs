use rich_scan_core::{chars, ScanCursor};

use super::commit;
use crate::{Token, TokenKind};

const OPEN: &str = "#u";
const CLOSE: &str = "s#";

/// Match a user sticker `#u<digits>s#` at a word boundary.
pub(super) fn attempt<'a>(cursor: &mut ScanCursor<'a>) -> Option<Token<'a>> {
    if !cursor.rest().starts_with(OPEN) || !chars::is_delimiter(cursor.peek_prev()) {
        return None;
    }
    let start = cursor.pos();
    cursor.advance_by(OPEN.len());

    let id_start = cursor.pos();
    let digits = cursor.eat_while(|c| c.is_ascii_digit());
    let sticker_id = cursor.slice_from(id_start);

    if digits == 0 || !cursor.eat_str(CLOSE) {
        cursor.set_pos(start);
        return None;
    }
    Some(commit(cursor, start, TokenKind::UserSticker { sticker_id }))
}
