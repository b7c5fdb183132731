use super::*;
use pretty_assertions::assert_eq;

fn token<'a>(kind: TokenKind<'a>, value: &'a str, start: usize) -> Token<'a> {
    Token {
        kind,
        value,
        format: Format::empty(),
        span: Span::new(start, start + value.len()),
    }
}

#[test]
fn text_constructor_slices_source() {
    let source = "hello world";
    let t = Token::text(source, Span::new(6, 11), Format::BOLD);
    assert_eq!(t.value, "world");
    assert_eq!(t.format, Format::BOLD);
    assert!(t.is_text());
}

#[test]
fn emoji_payload() {
    let alias = token(TokenKind::TextEmoji { emoji: "🙂" }, ":)", 0);
    assert_eq!(alias.emoji(), Some("🙂"));

    let cluster = token(TokenKind::Emoji, "👍🏽", 0);
    assert_eq!(cluster.emoji(), Some("👍🏽"));

    let text = token(TokenKind::Text, "hi", 0);
    assert_eq!(text.emoji(), None);
}

#[test]
fn kind_names() {
    let cases = [
        (TokenKind::Text, "text"),
        (TokenKind::Emoji, "emoji"),
        (TokenKind::TextEmoji { emoji: "🙂" }, "text-emoji"),
        (TokenKind::UserSticker { sticker_id: "1" }, "user-sticker"),
        (TokenKind::Hashtag { hashtag: "a" }, "hashtag"),
        (TokenKind::Mention { mention: "a" }, "mention"),
        (TokenKind::Command { command: "a" }, "command"),
        (
            TokenKind::Link {
                url: Cow::Borrowed("a"),
                auto: true,
            },
            "link",
        ),
        (TokenKind::Markdown, "markdown"),
    ];
    for (kind, name) in cases {
        assert_eq!(kind.name(), name);
    }
}

#[test]
fn display_includes_payload() {
    let link = Token {
        kind: TokenKind::Link {
            url: Cow::Owned("mailto:a@b.co".to_string()),
            auto: true,
        },
        value: "a@b.co",
        format: Format::LINK,
        span: Span::new(4, 10),
    };
    assert_eq!(
        link.to_string(),
        r#"link@4..10[link] "a@b.co" -> mailto:a@b.co"#
    );

    let text = token(TokenKind::Text, "foo ", 0);
    assert_eq!(text.to_string(), r#"text@0..4[-] "foo ""#);
}

#[test]
fn reassembles_values() {
    let tokens = [
        token(TokenKind::Text, "foo ", 0),
        token(TokenKind::Hashtag { hashtag: "bar" }, "#bar", 4),
    ];
    assert_eq!(tokens_to_string(&tokens), "foo #bar");
    assert_eq!(tokens_to_string(&[]), "");
}
