//! Character classification for word-boundary decisions.
//!
//! Trigger-based matchers (aliases, hashtags, mentions, commands, stickers,
//! markdown openers) only fire at a word boundary: the character before
//! the cursor must be a *delimiter*. The text boundary itself (`None`)
//! counts as a delimiter.

/// Non-ASCII punctuation ranges, sorted by codepoint for binary search.
///
/// ASCII punctuation is handled by [`char::is_ascii_punctuation`].
const UNICODE_PUNCTUATION: &[(char, char)] = &[
    // Latin-1 Supplement
    ('\u{00A1}', '\u{00A1}'), // ¡
    ('\u{00A7}', '\u{00A7}'), // §
    ('\u{00AB}', '\u{00AB}'), // «
    ('\u{00B6}', '\u{00B7}'), // ¶ ·
    ('\u{00BB}', '\u{00BB}'), // »
    ('\u{00BF}', '\u{00BF}'), // ¿
    // General Punctuation (dashes, quotes, ellipsis, ...)
    ('\u{2010}', '\u{2027}'),
    ('\u{2030}', '\u{205E}'),
    // CJK Symbols and Punctuation
    ('\u{3001}', '\u{3003}'),
    ('\u{3008}', '\u{3011}'),
    ('\u{3014}', '\u{301F}'),
    // Fullwidth forms
    ('\u{FF01}', '\u{FF0F}'),
    ('\u{FF1A}', '\u{FF20}'),
    ('\u{FF3B}', '\u{FF40}'),
    ('\u{FF5B}', '\u{FF65}'),
];

/// Returns `true` if `c` is punctuation (ASCII or common Unicode ranges).
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    UNICODE_PUNCTUATION
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns `true` if `ch` separates words: text boundary, whitespace, or
/// punctuation.
#[inline]
pub fn is_delimiter(ch: Option<char>) -> bool {
    match ch {
        None => true,
        Some(c) => c.is_whitespace() || is_punctuation(c),
    }
}

/// Word characters for hashtag, mention, and command bodies: Unicode
/// alphanumerics plus `_`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
pub(crate) fn punctuation_table() -> &'static [(char, char)] {
    UNICODE_PUNCTUATION
}
