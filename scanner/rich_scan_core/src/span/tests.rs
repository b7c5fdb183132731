use super::*;
use pretty_assertions::assert_eq;

#[test]
fn len_and_empty() {
    assert_eq!(Span::new(3, 7).len(), 4);
    assert!(Span::new(5, 5).is_empty());
    assert!(!Span::new(5, 6).is_empty());
}

#[test]
fn merge_covers_both() {
    assert_eq!(Span::new(4, 6).merge(Span::new(1, 3)), Span::new(1, 6));
}

#[test]
fn char_range_counts_codepoints() {
    let text = "привет 😀 мир";
    // "привет " is 7 chars but 13 bytes.
    let emoji_start = text.find('😀').unwrap_or_default();
    let span = Span::new(emoji_start, emoji_start + '😀'.len_utf8());
    assert_eq!(span.char_range(text), 7..8);
}

#[test]
fn debug_and_display_show_range() {
    let span = Span::from(10..12);
    assert_eq!(format!("{span:?}"), "10..12");
    assert_eq!(span.to_string(), "10..12");
    assert_eq!(span.to_range(), 10..12);
}
