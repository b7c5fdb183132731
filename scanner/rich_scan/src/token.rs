//! Token model.
//!
//! A [`Token`] borrows its `value` from the scanned text. Kind-specific
//! payload lives in [`TokenKind`]; payloads that point back into the
//! source (hashtag names, sticker ids) borrow too.

use std::borrow::Cow;
use std::fmt;

use rich_scan_core::{Format, Span};

/// What a token is, with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum TokenKind<'a> {
    /// Plain text.
    Text,
    /// An emoji grapheme cluster. The glyph is the token value itself.
    Emoji,
    /// An emoticon alias resolved to its glyph.
    TextEmoji { emoji: &'static str },
    /// A user sticker; `sticker_id` is the digit payload.
    UserSticker { sticker_id: &'a str },
    /// `#name`; `hashtag` excludes the `#`.
    Hashtag { hashtag: &'a str },
    /// `@name`; `mention` excludes the `@`.
    Mention { mention: &'a str },
    /// `/name`; `command` excludes the `/`.
    Command { command: &'a str },
    /// A link. `url` is the navigable target; `auto` is `false` only for
    /// explicit `[label](url)` markup.
    Link { url: Cow<'a, str>, auto: bool },
    /// An emphasis marker (`*`, `_`, `~`, `` ` ``).
    Markdown,
}

impl TokenKind<'_> {
    /// Short lowercase name, used by the CLI and in trace output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Emoji => "emoji",
            TokenKind::TextEmoji { .. } => "text-emoji",
            TokenKind::UserSticker { .. } => "user-sticker",
            TokenKind::Hashtag { .. } => "hashtag",
            TokenKind::Mention { .. } => "mention",
            TokenKind::Command { .. } => "command",
            TokenKind::Link { .. } => "link",
            TokenKind::Markdown => "markdown",
        }
    }
}

/// One contiguous, formatted span of the source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: TokenKind<'a>,
    /// Exactly the consumed source text.
    pub value: &'a str,
    /// Active format at the start of the token.
    pub format: Format,
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Plain-text token over `span` of `source`.
    pub fn text(source: &'a str, span: Span, format: Format) -> Self {
        Self {
            kind: TokenKind::Text,
            value: &source[span.to_range()],
            format,
            span,
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text)
    }

    /// Glyph of an `Emoji` or `TextEmoji` token.
    pub fn emoji(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Emoji => Some(self.value),
            TokenKind::TextEmoji { emoji } => Some(*emoji),
            _ => None,
        }
    }

    #[inline]
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// `kind@start..end[format] "value"`
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}[{}] {:?}",
            self.kind_name(),
            self.span,
            self.format,
            self.value
        )?;
        match &self.kind {
            TokenKind::TextEmoji { emoji } => write!(f, " -> {emoji}"),
            TokenKind::UserSticker { sticker_id } => write!(f, " id={sticker_id}"),
            TokenKind::Link { url, auto } => {
                write!(f, " -> {url}")?;
                if !auto {
                    f.write_str(" (explicit)")?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Reassemble the source text from a token sequence.
pub fn tokens_to_string(tokens: &[Token<'_>]) -> String {
    let len = tokens.iter().map(|t| t.value.len()).sum();
    let mut out = String::with_capacity(len);
    for token in tokens {
        out.push_str(token.value);
    }
    out
}

#[cfg(test)]
mod tests;
