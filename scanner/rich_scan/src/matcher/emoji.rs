use rich_scan_core::{emoji, ScanCursor};

use super::commit;
use crate::{Token, TokenKind};

/// Commit the emoji cluster at the cursor as one token.
pub(super) fn attempt<'a>(cursor: &mut ScanCursor<'a>) -> Option<Token<'a>> {
    let len = emoji::emoji_len(cursor.rest())?;
    let start = cursor.pos();
    cursor.advance_by(len);
    Some(commit(cursor, start, TokenKind::Emoji))
}
