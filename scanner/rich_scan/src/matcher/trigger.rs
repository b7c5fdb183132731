//! Sigil-triggered names: `#hashtag`, `@mention`, `/command`.

use rich_scan_core::{chars, ScanCursor};

use super::commit;
use crate::{Token, TokenKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Trigger {
    Hashtag,
    Mention,
    Command,
}

impl Trigger {
    fn sigil(self) -> char {
        match self {
            Trigger::Hashtag => '#',
            Trigger::Mention => '@',
            Trigger::Command => '/',
        }
    }

    fn kind(self, name: &str) -> TokenKind<'_> {
        match self {
            Trigger::Hashtag => TokenKind::Hashtag { hashtag: name },
            Trigger::Mention => TokenKind::Mention { mention: name },
            Trigger::Command => TokenKind::Command { command: name },
        }
    }
}

/// Sigil plus the maximal run of word characters, at a word boundary.
/// A bare sigil is not a token.
pub(super) fn attempt<'a>(cursor: &mut ScanCursor<'a>, trigger: Trigger) -> Option<Token<'a>> {
    if !chars::is_delimiter(cursor.peek_prev()) {
        return None;
    }
    let start = cursor.pos();
    if !cursor.eat(trigger.sigil()) {
        return None;
    }

    let name_start = cursor.pos();
    if cursor.eat_while(chars::is_word_char) == 0 {
        cursor.set_pos(start);
        return None;
    }
    let name = cursor.slice_from(name_start);
    Some(commit(cursor, start, trigger.kind(name)))
}
