use super::*;
use pretty_assertions::assert_eq;

fn scan(text: &str, features: FeatureFlags) -> Vec<Token<'_>> {
    Scanner::new(text, features).run()
}

/// `(kind, value, format)` triples for compact assertions.
fn summary<'a>(tokens: &[Token<'a>]) -> Vec<(&'static str, &'a str, Format)> {
    tokens
        .iter()
        .map(|t| (t.kind_name(), t.value, t.format))
        .collect()
}

const NONE: Format = Format::empty();

// === Plain Text ===

#[test]
fn empty_input_has_no_tokens() {
    assert_eq!(scan("", FeatureFlags::all()), []);
}

#[test]
fn no_features_gives_one_text_token() {
    let tokens = scan("hello #world @you /cmd :)", FeatureFlags::empty());
    assert_eq!(
        summary(&tokens),
        [("text", "hello #world @you /cmd :)", NONE)]
    );
    assert_eq!(tokens[0].span, Span::new(0, 25));
}

#[test]
fn emoji_stay_in_text_without_features() {
    let tokens = scan("hi 👋 there 😀", FeatureFlags::empty());
    assert_eq!(summary(&tokens), [("text", "hi 👋 there 😀", NONE)]);
}

#[test]
fn emoji_split_text_under_any_feature() {
    let tokens = scan("hi 👋 there", FeatureFlags::HASHTAG);
    assert_eq!(
        summary(&tokens),
        [
            ("text", "hi ", NONE),
            ("emoji", "👋", NONE),
            ("text", " there", NONE)
        ]
    );
}

// === Priority ===

#[test]
fn sticker_beats_hashtag() {
    let features = FeatureFlags::USER_STICKER | FeatureFlags::HASHTAG;
    let tokens = scan("#u12s# #tag", features);
    assert_eq!(
        summary(&tokens),
        [
            ("user-sticker", "#u12s#", NONE),
            ("text", " ", NONE),
            ("hashtag", "#tag", NONE)
        ]
    );
}

#[test]
fn keycap_is_emoji_not_hashtag() {
    let tokens = scan("#️⃣tag", FeatureFlags::HASHTAG);
    assert_eq!(
        summary(&tokens),
        [("emoji", "#️⃣", NONE), ("text", "tag", NONE)]
    );
}

#[test]
fn alias_inside_word_stays_text() {
    let tokens = scan("http://x :) a:)", FeatureFlags::TEXT_EMOJI);
    assert_eq!(
        summary(&tokens),
        [
            ("text", "http://x ", NONE),
            ("text-emoji", ":)", NONE),
            ("text", " a:)", NONE)
        ]
    );
}

// === Markdown ===

#[test]
fn bold_run() {
    let tokens = scan("a *b c* d", FeatureFlags::MARKDOWN);
    assert_eq!(
        summary(&tokens),
        [
            ("text", "a ", NONE),
            ("markdown", "*", Format::BOLD),
            ("text", "b c", Format::BOLD),
            ("markdown", "*", Format::BOLD),
            ("text", " d", NONE),
        ]
    );
}

#[test]
fn nested_markers() {
    let tokens = scan("*_x_*", FeatureFlags::FORMATTING);
    let both = Format::BOLD | Format::ITALIC;
    assert_eq!(
        summary(&tokens),
        [
            ("markdown", "*", Format::BOLD),
            ("markdown", "_", both),
            ("text", "x", both),
            ("markdown", "_", both),
            ("markdown", "*", Format::BOLD),
        ]
    );
}

#[test]
fn overlapping_markers_close_out_of_order() {
    let tokens = scan("_a *b_ c*", FeatureFlags::FORMATTING);
    let both = Format::BOLD | Format::ITALIC;
    assert_eq!(
        summary(&tokens),
        [
            ("markdown", "_", Format::ITALIC),
            ("text", "a ", Format::ITALIC),
            ("markdown", "*", both),
            ("text", "b", both),
            ("markdown", "_", both),
            ("text", " c", Format::BOLD),
            ("markdown", "*", Format::BOLD),
        ]
    );
}

#[test]
fn unmatched_marker_is_text() {
    let tokens = scan("2 * 3 = 6", FeatureFlags::MARKDOWN);
    assert_eq!(summary(&tokens), [("text", "2 * 3 = 6", NONE)]);
}

#[test]
fn swallowed_closer_degrades_opener() {
    // The hashtag takes the trailing `_`, so italic never closes.
    let features = FeatureFlags::MARKDOWN | FeatureFlags::HASHTAG;
    let tokens = scan("_see #tag_ ok", features);
    assert_eq!(
        summary(&tokens),
        [
            ("text", "_see ", NONE),
            ("hashtag", "#tag_", NONE),
            ("text", " ok", NONE),
        ]
    );
}

#[test]
fn monospace_suppresses_matchers() {
    let features = FeatureFlags::MARKDOWN | FeatureFlags::HASHTAG | FeatureFlags::TEXT_EMOJI;
    let tokens = scan("`#tag :) *x*` #tag", features);
    assert_eq!(
        summary(&tokens),
        [
            ("markdown", "`", Format::MONOSPACE),
            ("text", "#tag :) *x*", Format::MONOSPACE),
            ("markdown", "`", Format::MONOSPACE),
            ("text", " ", NONE),
            ("hashtag", "#tag", NONE),
        ]
    );
}

#[test]
fn explicit_link_in_text() {
    let tokens = scan("see [docs](https://a.dev) now", FeatureFlags::MARKDOWN);
    assert_eq!(
        summary(&tokens),
        [
            ("text", "see ", NONE),
            ("link", "[docs](https://a.dev)", Format::LINK),
            ("text", " now", NONE),
        ]
    );
}

// === Links ===

#[test]
fn link_does_not_start_inside_snake_case_word() {
    let tokens = scan("visit my_site.com or site.com", FeatureFlags::LINK);
    assert_eq!(
        summary(&tokens),
        [
            ("text", "visit my_site.com or ", NONE),
            ("link", "site.com", NONE),
        ]
    );
}

// === Coalescing ===

#[test]
fn coalesce_merges_equal_format_text() {
    let source = "abcd";
    let tokens = vec![
        Token::text(source, Span::new(0, 2), NONE),
        Token::text(source, Span::new(2, 4), NONE),
    ];
    let merged = coalesce(source, tokens);
    assert_eq!(summary(&merged), [("text", "abcd", NONE)]);
    assert_eq!(merged[0].span, Span::new(0, 4));
}

#[test]
fn coalesce_keeps_format_boundaries() {
    let source = "abcd";
    let tokens = vec![
        Token::text(source, Span::new(0, 2), NONE),
        Token::text(source, Span::new(2, 4), Format::BOLD),
    ];
    assert_eq!(coalesce(source, tokens).len(), 2);
}
