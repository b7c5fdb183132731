//! Property tests over arbitrary input and feature sets.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use rich_scan::{tokenize, tokens_to_string, FeatureFlags, Token, TokenKind};

fn features() -> impl Strategy<Value = FeatureFlags> {
    any::<u16>().prop_map(FeatureFlags::from_bits_truncate)
}

/// Text dense in the characters the matchers care about.
fn rich_text() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        " ", "\n", "a", "Z", "я", "1", "2", "#", "@", "/", ":", ")", "(", "*", "_", "~", "`",
        "[", "]", ".", "?", "!", "<", "3", "u", "s", "x.com", "www.", "http://", "a@b.ru",
        "😍", "👌🏻", "\u{FE0F}", "\u{20E3}", "\u{200D}", "👨‍👩‍👧", "🇷🇺", ":-)",
    ]);
    prop::collection::vec(pieces, 0..40).prop_map(|parts| parts.concat())
}

fn assert_well_formed(text: &str, tokens: &[Token<'_>]) {
    assert_eq!(tokens_to_string(tokens), text);
    let mut at = 0;
    for token in tokens {
        assert_eq!(token.span.start, at, "gap or overlap before {token}");
        assert!(!token.span.is_empty(), "empty token {token}");
        assert_eq!(&text[token.span.to_range()], token.value);
        at = token.span.end;
    }
    assert_eq!(at, text.len());
    for pair in tokens.windows(2) {
        assert!(
            !(pair[0].is_text() && pair[1].is_text()),
            "adjacent text tokens {} and {}",
            pair[0],
            pair[1]
        );
    }
}

proptest! {
    #[test]
    fn arbitrary_unicode_round_trips(text in any::<String>(), features in features()) {
        let tokens = tokenize(&text, features);
        assert_well_formed(&text, &tokens);
    }

    #[test]
    fn rich_text_round_trips(text in rich_text(), features in features()) {
        let tokens = tokenize(&text, features);
        assert_well_formed(&text, &tokens);
    }

    #[test]
    fn disabled_features_yield_single_text(text in any::<String>()) {
        let tokens = tokenize(&text, FeatureFlags::empty());
        if text.is_empty() {
            prop_assert!(tokens.is_empty());
        } else {
            prop_assert_eq!(tokens.len(), 1);
            prop_assert!(tokens[0].is_text());
            prop_assert_eq!(tokens[0].value, text.as_str());
        }
    }

    #[test]
    fn disabled_features_keep_rich_text_whole(text in rich_text()) {
        let tokens = tokenize(&text, FeatureFlags::empty());
        prop_assert!(tokens.len() <= 1, "{:?}", tokens);
        prop_assert_eq!(tokens_to_string(&tokens), text);
    }

    #[test]
    fn bare_triggers_are_text(text in "[#@/ ]{0,32}") {
        let features = FeatureFlags::HASHTAG | FeatureFlags::MENTION | FeatureFlags::COMMAND;
        let tokens = tokenize(&text, features);
        let triggered = tokens.iter().any(|t| matches!(
            t.kind,
            TokenKind::Hashtag { .. } | TokenKind::Mention { .. } | TokenKind::Command { .. }
        ));
        prop_assert!(!triggered, "{:?}", tokens);
    }

    #[test]
    fn keycaps_stay_whole(
        prefix in "[a-z ]{0,5}",
        base in "[0-9#*]",
        selector in prop::bool::ANY,
        suffix in "[a-z ]{0,5}",
    ) {
        let keycap = if selector {
            format!("{base}\u{FE0F}\u{20E3}")
        } else {
            format!("{base}\u{20E3}")
        };
        let text = format!("{prefix}{keycap}{suffix}");
        let tokens = tokenize(&text, FeatureFlags::all());
        prop_assert!(
            tokens.iter().any(|t| t.kind == TokenKind::Emoji && t.value == keycap),
            "{:?}",
            tokens
        );
    }
}
