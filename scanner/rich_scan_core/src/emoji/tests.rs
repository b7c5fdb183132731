use super::*;
use pretty_assertions::assert_eq;

// === Tables ===

#[test]
fn tables_sorted_and_disjoint() {
    for table in tables() {
        for &(lo, hi) in table {
            assert!(lo <= hi, "inverted range {lo:?}..={hi:?}");
        }
        for pair in table.windows(2) {
            assert!(
                pair[0].1 < pair[1].0,
                "ranges overlap or are unsorted: {:?} / {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn presentation_sets_do_not_intersect() {
    let [presentation, text] = tables();
    for &(lo, hi) in text {
        for &(plo, phi) in presentation {
            assert!(
                hi < plo || lo > phi,
                "{lo:?}..={hi:?} overlaps {plo:?}..={phi:?}"
            );
        }
    }
}

// === Bases ===

#[test]
fn single_presentation_emoji() {
    assert_eq!(emoji_len("😍 tail"), Some("😍".len()));
    assert_eq!(emoji_len("⚽!"), Some("⚽".len()));
}

#[test]
fn text_presentation_needs_selector() {
    assert_eq!(emoji_len("© 2024"), None);
    assert_eq!(emoji_len("❤ plain"), None);
    assert_eq!(emoji_len("❤️ red"), Some("❤️".len()));
    assert_eq!(emoji_len("☝🏻up"), Some("☝🏻".len()));
}

#[test]
fn ascii_is_never_emoji() {
    for text in ["a", "1", "#", "*", ":)", " "] {
        assert_eq!(emoji_len(text), None, "{text:?}");
    }
}

#[test]
fn lone_joiner_and_selector_are_not_emoji() {
    assert_eq!(emoji_len("\u{200D}x"), None);
    assert_eq!(emoji_len("\u{FE0F}x"), None);
}

// === Clusters ===

#[test]
fn skin_tone_is_part_of_cluster() {
    assert_eq!(emoji_len("👌🏻serge"), Some("👌🏻".len()));
}

#[test]
fn zwj_sequence_is_one_cluster() {
    let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
    assert_eq!(emoji_len(&format!("{family}!")), Some(family.len()));

    let profession = "👩🏽\u{200D}💻";
    assert_eq!(emoji_len(profession), Some(profession.len()));
}

#[test]
fn flag_pair_is_one_cluster() {
    assert_eq!(emoji_len("🇷🇺🇺🇸"), Some("🇷🇺".len()));
}

#[test]
fn tag_sequence_is_one_cluster() {
    let england = "🏴\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";
    assert_eq!(emoji_len(&format!("{england} ok")), Some(england.len()));
}

// === Keycaps ===

#[test]
fn keycap_with_selector() {
    assert_eq!(keycap_len("2\u{FE0F}\u{20E3}x"), Some(7));
    assert_eq!(emoji_len("2️⃣"), Some("2️⃣".len()));
}

#[test]
fn keycap_without_selector() {
    assert_eq!(keycap_len("#\u{20E3}"), Some(4));
    assert!(starts_emoji("*\u{20E3}"));
}

#[test]
fn digit_with_selector_only_is_not_keycap() {
    assert_eq!(keycap_len("2\u{FE0F}"), None);
    assert!(!starts_emoji("2\u{FE0F}"));
    assert!(!starts_emoji("23"));
}

// === Classification ===

#[test]
fn skin_tone_range() {
    assert!(is_skin_tone('🏻'));
    assert!(is_skin_tone('🏿'));
    assert!(!is_skin_tone('😀'));
}
