//! Emoji grapheme-cluster detection.
//!
//! An emoji cluster starts at a *base* and extends over everything Unicode
//! glues to it (UAX #29 extended grapheme cluster): variation selectors,
//! skin-tone modifiers, ZWJ continuations, tag sequences, and the second
//! half of a regional-indicator flag pair.
//!
//! A base is one of:
//! - a pictograph with default emoji presentation (`😀`, `⚽`)
//! - a text-presentation pictograph followed by U+FE0F or a skin tone
//!   (`❤️`, `☝🏻`); alone (`©`) it stays plain text
//! - a regional indicator (`🇷`)
//! - a keycap base `0-9 # *` followed by an optional U+FE0F and U+20E3
//!
//! Ranges follow Unicode `emoji-data.txt` (`Emoji_Presentation` and
//! `Emoji` without presentation).

use std::cmp::Ordering;

use unicode_segmentation::UnicodeSegmentation;

/// VARIATION SELECTOR-16: request emoji presentation.
pub const VARIATION_SELECTOR_16: char = '\u{FE0F}';
/// ZERO WIDTH JOINER: glues pictographs into compound emoji.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
/// COMBINING ENCLOSING KEYCAP.
pub const COMBINING_KEYCAP: char = '\u{20E3}';

/// Pictographs rendered as emoji by default. Sorted, disjoint.
const EMOJI_PRESENTATION: &[(char, char)] = &[
    ('\u{231A}', '\u{231B}'),
    ('\u{23E9}', '\u{23EC}'),
    ('\u{23F0}', '\u{23F0}'),
    ('\u{23F3}', '\u{23F3}'),
    ('\u{25FD}', '\u{25FE}'),
    ('\u{2614}', '\u{2615}'),
    ('\u{2648}', '\u{2653}'),
    ('\u{267F}', '\u{267F}'),
    ('\u{2693}', '\u{2693}'),
    ('\u{26A1}', '\u{26A1}'),
    ('\u{26AA}', '\u{26AB}'),
    ('\u{26BD}', '\u{26BE}'),
    ('\u{26C4}', '\u{26C5}'),
    ('\u{26CE}', '\u{26CE}'),
    ('\u{26D4}', '\u{26D4}'),
    ('\u{26EA}', '\u{26EA}'),
    ('\u{26F2}', '\u{26F3}'),
    ('\u{26F5}', '\u{26F5}'),
    ('\u{26FA}', '\u{26FA}'),
    ('\u{26FD}', '\u{26FD}'),
    ('\u{2705}', '\u{2705}'),
    ('\u{270A}', '\u{270B}'),
    ('\u{2728}', '\u{2728}'),
    ('\u{274C}', '\u{274C}'),
    ('\u{274E}', '\u{274E}'),
    ('\u{2753}', '\u{2755}'),
    ('\u{2757}', '\u{2757}'),
    ('\u{2795}', '\u{2797}'),
    ('\u{27B0}', '\u{27B0}'),
    ('\u{27BF}', '\u{27BF}'),
    ('\u{2B1B}', '\u{2B1C}'),
    ('\u{2B50}', '\u{2B50}'),
    ('\u{2B55}', '\u{2B55}'),
    ('\u{1F004}', '\u{1F004}'),
    ('\u{1F0CF}', '\u{1F0CF}'),
    ('\u{1F18E}', '\u{1F18E}'),
    ('\u{1F191}', '\u{1F19A}'),
    ('\u{1F1E6}', '\u{1F1FF}'),
    ('\u{1F201}', '\u{1F201}'),
    ('\u{1F21A}', '\u{1F21A}'),
    ('\u{1F22F}', '\u{1F22F}'),
    ('\u{1F232}', '\u{1F236}'),
    ('\u{1F238}', '\u{1F23A}'),
    ('\u{1F250}', '\u{1F251}'),
    ('\u{1F300}', '\u{1F320}'),
    ('\u{1F32D}', '\u{1F335}'),
    ('\u{1F337}', '\u{1F37C}'),
    ('\u{1F37E}', '\u{1F393}'),
    ('\u{1F3A0}', '\u{1F3CA}'),
    ('\u{1F3CF}', '\u{1F3D3}'),
    ('\u{1F3E0}', '\u{1F3F0}'),
    ('\u{1F3F4}', '\u{1F3F4}'),
    ('\u{1F3F8}', '\u{1F43E}'),
    ('\u{1F440}', '\u{1F440}'),
    ('\u{1F442}', '\u{1F4FC}'),
    ('\u{1F4FF}', '\u{1F53D}'),
    ('\u{1F54B}', '\u{1F54E}'),
    ('\u{1F550}', '\u{1F567}'),
    ('\u{1F57A}', '\u{1F57A}'),
    ('\u{1F595}', '\u{1F596}'),
    ('\u{1F5A4}', '\u{1F5A4}'),
    ('\u{1F5FB}', '\u{1F64F}'),
    ('\u{1F680}', '\u{1F6C5}'),
    ('\u{1F6CC}', '\u{1F6CC}'),
    ('\u{1F6D0}', '\u{1F6D2}'),
    ('\u{1F6D5}', '\u{1F6D7}'),
    ('\u{1F6DC}', '\u{1F6DF}'),
    ('\u{1F6EB}', '\u{1F6EC}'),
    ('\u{1F6F4}', '\u{1F6FC}'),
    ('\u{1F7E0}', '\u{1F7EB}'),
    ('\u{1F7F0}', '\u{1F7F0}'),
    ('\u{1F90C}', '\u{1F93A}'),
    ('\u{1F93C}', '\u{1F945}'),
    ('\u{1F947}', '\u{1F9FF}'),
    ('\u{1FA70}', '\u{1FA7C}'),
    ('\u{1FA80}', '\u{1FA89}'),
    ('\u{1FA8F}', '\u{1FAC6}'),
    ('\u{1FACE}', '\u{1FADC}'),
    ('\u{1FADF}', '\u{1FAE9}'),
    ('\u{1FAF0}', '\u{1FAF8}'),
];

/// Pictographs rendered as text unless followed by U+FE0F or a skin tone.
/// Sorted, disjoint.
const TEXT_PRESENTATION: &[(char, char)] = &[
    ('\u{00A9}', '\u{00A9}'),
    ('\u{00AE}', '\u{00AE}'),
    ('\u{203C}', '\u{203C}'),
    ('\u{2049}', '\u{2049}'),
    ('\u{2122}', '\u{2122}'),
    ('\u{2139}', '\u{2139}'),
    ('\u{2194}', '\u{2199}'),
    ('\u{21A9}', '\u{21AA}'),
    ('\u{2328}', '\u{2328}'),
    ('\u{23CF}', '\u{23CF}'),
    ('\u{23ED}', '\u{23EF}'),
    ('\u{23F1}', '\u{23F2}'),
    ('\u{23F8}', '\u{23FA}'),
    ('\u{24C2}', '\u{24C2}'),
    ('\u{25AA}', '\u{25AB}'),
    ('\u{25B6}', '\u{25B6}'),
    ('\u{25C0}', '\u{25C0}'),
    ('\u{25FB}', '\u{25FC}'),
    ('\u{2600}', '\u{2604}'),
    ('\u{260E}', '\u{260E}'),
    ('\u{2611}', '\u{2611}'),
    ('\u{2618}', '\u{2618}'),
    ('\u{261D}', '\u{261D}'),
    ('\u{2620}', '\u{2620}'),
    ('\u{2622}', '\u{2623}'),
    ('\u{2626}', '\u{2626}'),
    ('\u{262A}', '\u{262A}'),
    ('\u{262E}', '\u{262F}'),
    ('\u{2638}', '\u{263A}'),
    ('\u{2640}', '\u{2640}'),
    ('\u{2642}', '\u{2642}'),
    ('\u{265F}', '\u{2660}'),
    ('\u{2663}', '\u{2663}'),
    ('\u{2665}', '\u{2666}'),
    ('\u{2668}', '\u{2668}'),
    ('\u{267B}', '\u{267B}'),
    ('\u{267E}', '\u{267E}'),
    ('\u{2692}', '\u{2692}'),
    ('\u{2694}', '\u{2697}'),
    ('\u{2699}', '\u{2699}'),
    ('\u{269B}', '\u{269C}'),
    ('\u{26A0}', '\u{26A0}'),
    ('\u{26A7}', '\u{26A7}'),
    ('\u{26B0}', '\u{26B1}'),
    ('\u{26C8}', '\u{26C8}'),
    ('\u{26CF}', '\u{26CF}'),
    ('\u{26D1}', '\u{26D1}'),
    ('\u{26D3}', '\u{26D3}'),
    ('\u{26E9}', '\u{26E9}'),
    ('\u{26F0}', '\u{26F1}'),
    ('\u{26F4}', '\u{26F4}'),
    ('\u{26F7}', '\u{26F9}'),
    ('\u{2702}', '\u{2702}'),
    ('\u{2708}', '\u{2709}'),
    ('\u{270C}', '\u{270D}'),
    ('\u{270F}', '\u{270F}'),
    ('\u{2712}', '\u{2712}'),
    ('\u{2714}', '\u{2714}'),
    ('\u{2716}', '\u{2716}'),
    ('\u{271D}', '\u{271D}'),
    ('\u{2721}', '\u{2721}'),
    ('\u{2733}', '\u{2734}'),
    ('\u{2744}', '\u{2744}'),
    ('\u{2747}', '\u{2747}'),
    ('\u{2763}', '\u{2764}'),
    ('\u{27A1}', '\u{27A1}'),
    ('\u{2934}', '\u{2935}'),
    ('\u{2B05}', '\u{2B07}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{303D}', '\u{303D}'),
    ('\u{3297}', '\u{3297}'),
    ('\u{3299}', '\u{3299}'),
    ('\u{1F170}', '\u{1F171}'),
    ('\u{1F17E}', '\u{1F17F}'),
    ('\u{1F202}', '\u{1F202}'),
    ('\u{1F237}', '\u{1F237}'),
    ('\u{1F321}', '\u{1F321}'),
    ('\u{1F324}', '\u{1F32C}'),
    ('\u{1F336}', '\u{1F336}'),
    ('\u{1F37D}', '\u{1F37D}'),
    ('\u{1F396}', '\u{1F397}'),
    ('\u{1F399}', '\u{1F39B}'),
    ('\u{1F39E}', '\u{1F39F}'),
    ('\u{1F3CB}', '\u{1F3CE}'),
    ('\u{1F3D4}', '\u{1F3DF}'),
    ('\u{1F3F3}', '\u{1F3F3}'),
    ('\u{1F3F5}', '\u{1F3F5}'),
    ('\u{1F3F7}', '\u{1F3F7}'),
    ('\u{1F43F}', '\u{1F43F}'),
    ('\u{1F441}', '\u{1F441}'),
    ('\u{1F4FD}', '\u{1F4FD}'),
    ('\u{1F549}', '\u{1F54A}'),
    ('\u{1F56F}', '\u{1F570}'),
    ('\u{1F573}', '\u{1F579}'),
    ('\u{1F587}', '\u{1F587}'),
    ('\u{1F58A}', '\u{1F58D}'),
    ('\u{1F590}', '\u{1F590}'),
    ('\u{1F5A5}', '\u{1F5A5}'),
    ('\u{1F5A8}', '\u{1F5A8}'),
    ('\u{1F5B1}', '\u{1F5B2}'),
    ('\u{1F5BC}', '\u{1F5BC}'),
    ('\u{1F5C2}', '\u{1F5C4}'),
    ('\u{1F5D1}', '\u{1F5D3}'),
    ('\u{1F5DC}', '\u{1F5DE}'),
    ('\u{1F5E1}', '\u{1F5E1}'),
    ('\u{1F5E3}', '\u{1F5E3}'),
    ('\u{1F5E8}', '\u{1F5E8}'),
    ('\u{1F5EF}', '\u{1F5EF}'),
    ('\u{1F5F3}', '\u{1F5F3}'),
    ('\u{1F5FA}', '\u{1F5FA}'),
    ('\u{1F6CB}', '\u{1F6CB}'),
    ('\u{1F6CD}', '\u{1F6CF}'),
    ('\u{1F6E0}', '\u{1F6E5}'),
    ('\u{1F6E9}', '\u{1F6E9}'),
    ('\u{1F6F0}', '\u{1F6F0}'),
    ('\u{1F6F3}', '\u{1F6F3}'),
];

fn in_table(table: &[(char, char)], c: char) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns `true` for pictographs with default emoji presentation.
#[inline]
pub fn is_emoji_presentation(c: char) -> bool {
    !c.is_ascii() && in_table(EMOJI_PRESENTATION, c)
}

/// Returns `true` for pictographs that need U+FE0F to render as emoji.
#[inline]
pub fn is_text_presentation(c: char) -> bool {
    !c.is_ascii() && in_table(TEXT_PRESENTATION, c)
}

/// Fitzpatrick skin-tone modifiers U+1F3FB..=U+1F3FF.
#[inline]
pub fn is_skin_tone(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

/// Characters that form a keycap with U+20E3.
#[inline]
pub fn is_keycap_base(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '*'
}

/// Byte length of a keycap sequence (`1⃣`, `1️⃣`) at the start of `text`.
pub fn keycap_len(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    let base = chars.next().filter(|&c| is_keycap_base(c))?;
    let mut len = base.len_utf8();
    let mut next = chars.next();
    if next == Some(VARIATION_SELECTOR_16) {
        len += VARIATION_SELECTOR_16.len_utf8();
        next = chars.next();
    }
    (next == Some(COMBINING_KEYCAP)).then(|| len + COMBINING_KEYCAP.len_utf8())
}

/// Returns `true` if an emoji cluster begins at the start of `text`.
///
/// Cheaper than [`emoji_len`] because it does not measure the cluster.
pub fn starts_emoji(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if is_keycap_base(first) {
        return keycap_len(text).is_some();
    }
    if first.is_ascii() {
        return false;
    }
    if is_emoji_presentation(first) {
        return true;
    }
    is_text_presentation(first)
        && chars
            .next()
            .is_some_and(|c| c == VARIATION_SELECTOR_16 || is_skin_tone(c))
}

/// Byte length of the emoji cluster at the start of `text`, if one starts
/// there.
///
/// Keycaps are measured exactly; every other cluster is the first extended
/// grapheme cluster of `text`, which swallows modifiers, joiners, tags and
/// flag pairs.
pub fn emoji_len(text: &str) -> Option<usize> {
    if let Some(len) = keycap_len(text) {
        return Some(len);
    }
    if !starts_emoji(text) {
        return None;
    }
    text.graphemes(true).next().map(str::len)
}

#[cfg(test)]
pub(crate) fn tables() -> [&'static [(char, char)]; 2] {
    [EMOJI_PRESENTATION, TEXT_PRESENTATION]
}

#[cfg(test)]
mod tests;
