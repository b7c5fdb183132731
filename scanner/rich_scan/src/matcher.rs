//! Token matchers.
//!
//! One capability, one variant per token kind. The scan loop calls
//! [`Matcher::attempt`] for each entry of [`Matcher::PRIORITY`] in order and
//! keeps the first token returned.
//!
//! # Contract
//!
//! An attempt either commits (advances the cursor past a non-empty span and
//! returns the token) or fails (returns `None` with the cursor exactly where
//! it started). Every matcher saves `cursor.pos()` on entry and restores it
//! with `set_pos` on any failure path after consuming input.
//!
//! Inside a monospace run only the emoji and markdown matchers run, and the
//! markdown matcher only recognizes the closing backtick.

mod emoji;
mod link;
mod markdown;
mod sticker;
mod text_emoji;
mod trigger;

use rich_scan_core::{Format, ScanCursor, Span};

use crate::{FeatureFlags, Token, TokenKind};

use self::link::LinkMemo;
use self::markdown::MarkdownMemo;
use self::trigger::Trigger;

/// What the matchers remember between positions of one scan.
///
/// Lookaheads that would otherwise rescan the rest of a run at every
/// position are kept here, so a scan stays linear in its input. Positions
/// are absolute, so one memo serves exactly one text.
#[derive(Debug, Default)]
pub(crate) struct MatchMemo {
    link: LinkMemo,
    markdown: MarkdownMemo,
}

/// A recognizer for one token kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Matcher {
    /// Emoji grapheme clusters. Enabled by any flag.
    Emoji,
    /// Emoticon aliases from the alias trie.
    TextEmoji,
    /// `#u<digits>s#`
    UserSticker,
    Hashtag,
    Mention,
    Command,
    /// Bare URLs and email addresses.
    Link,
    /// Emphasis markers and explicit links.
    Markdown,
}

impl Matcher {
    /// Order in which matchers are tried at each position.
    ///
    /// Emoji runs first so multi-codepoint clusters are never read as alias
    /// or link characters. The sticker matcher runs before hashtag because
    /// both start with `#`. Changing this order changes tokenization.
    pub const PRIORITY: [Matcher; 8] = [
        Matcher::Emoji,
        Matcher::TextEmoji,
        Matcher::UserSticker,
        Matcher::Hashtag,
        Matcher::Mention,
        Matcher::Command,
        Matcher::Link,
        Matcher::Markdown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Matcher::Emoji => "emoji",
            Matcher::TextEmoji => "text-emoji",
            Matcher::UserSticker => "user-sticker",
            Matcher::Hashtag => "hashtag",
            Matcher::Mention => "mention",
            Matcher::Command => "command",
            Matcher::Link => "link",
            Matcher::Markdown => "markdown",
        }
    }

    /// Whether `features` turns this matcher on.
    pub fn is_enabled(self, features: FeatureFlags) -> bool {
        match self {
            Matcher::Emoji => !features.is_empty(),
            Matcher::TextEmoji => features.contains(FeatureFlags::TEXT_EMOJI),
            Matcher::UserSticker => features.contains(FeatureFlags::USER_STICKER),
            Matcher::Hashtag => features.contains(FeatureFlags::HASHTAG),
            Matcher::Mention => features.contains(FeatureFlags::MENTION),
            Matcher::Command => features.contains(FeatureFlags::COMMAND),
            Matcher::Link => features.contains(FeatureFlags::LINK),
            Matcher::Markdown => features.emphasis(),
        }
    }

    /// Try to recognize a token starting exactly at the cursor.
    pub fn attempt<'a>(
        self,
        cursor: &mut ScanCursor<'a>,
        features: FeatureFlags,
    ) -> Option<Token<'a>> {
        self.attempt_with(cursor, features, &mut MatchMemo::default())
    }

    /// [`Matcher::attempt`] sharing lookaheads with earlier attempts on the
    /// same text.
    pub(crate) fn attempt_with<'a>(
        self,
        cursor: &mut ScanCursor<'a>,
        features: FeatureFlags,
        memo: &mut MatchMemo,
    ) -> Option<Token<'a>> {
        if !self.is_enabled(features) || cursor.is_eof() {
            return None;
        }
        let monospace = cursor.has_format(Format::MONOSPACE);
        let start = cursor.pos();

        let token = match self {
            Matcher::Emoji => emoji::attempt(cursor),
            Matcher::Markdown => markdown::attempt(cursor, features, &mut memo.markdown),
            _ if monospace => None,
            Matcher::TextEmoji => text_emoji::attempt(cursor),
            Matcher::UserSticker => sticker::attempt(cursor),
            Matcher::Hashtag => trigger::attempt(cursor, Trigger::Hashtag),
            Matcher::Mention => trigger::attempt(cursor, Trigger::Mention),
            Matcher::Command => trigger::attempt(cursor, Trigger::Command),
            Matcher::Link => link::attempt(cursor, features, &mut memo.link),
        };

        debug_assert!(
            token.as_ref().map_or(cursor.pos() == start, |t| !t.span.is_empty()),
            "{} matcher left the cursor inconsistent",
            self.name()
        );
        token
    }
}

/// Build a token from `start` to the cursor, stamped with the active format.
fn commit<'a>(cursor: &ScanCursor<'a>, start: usize, kind: TokenKind<'a>) -> Token<'a> {
    Token {
        kind,
        value: cursor.slice_from(start),
        format: cursor.format(),
        span: Span::new(start, cursor.pos()),
    }
}
