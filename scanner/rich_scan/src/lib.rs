//! Rich-text token scanner.
//!
//! Converts a string plus a set of [`FeatureFlags`] into an ordered sequence
//! of typed, formatted [`Token`]s: plain text, emoji, emoticon aliases,
//! hashtags, mentions, commands, user stickers, links, and inline markdown
//! markers.
//!
//! # Guarantees
//!
//! For every input and every configuration:
//! - concatenating the token values reproduces the input exactly
//! - spans are contiguous and strictly increasing; no token is empty
//! - two adjacent tokens are never both plain text
//! - with no features enabled, the result is empty or one text token
//!
//! ```
//! use rich_scan::{tokenize, FeatureFlags, TokenKind};
//!
//! let tokens = tokenize("ping @bob :)", FeatureFlags::MENTION | FeatureFlags::TEXT_EMOJI);
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind_name()).collect();
//! assert_eq!(kinds, ["text", "mention", "text", "text-emoji"]);
//! assert_eq!(tokens[3].kind, TokenKind::TextEmoji { emoji: "🙂" });
//! ```

mod features;
mod matcher;
mod scanner;
mod token;

pub use features::{FeatureFlags, FeatureParseError};
pub use matcher::Matcher;
pub use rich_scan_core::{Format, Span, ALIASES, ALIAS_TABLE_VERSION};
pub use token::{tokens_to_string, Token, TokenKind};

use scanner::Scanner;

/// Tokenize `text` with the matchers enabled in `features`.
///
/// Total: never fails and never panics on any `&str`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(len = text.len(), features = %features)
)]
pub fn tokenize(text: &str, features: FeatureFlags) -> Vec<Token<'_>> {
    let tokens = Scanner::new(text, features).run();
    tracing::debug!(tokens = tokens.len(), "scan complete");
    tokens
}
