//! Feature flags: which matchers a scan runs.
//!
//! Every flag defaults to off. The emoji matcher has no flag of its own: it
//! runs whenever any flag is set, so emoji clusters stay atomic next to
//! every other token kind. With no flags the input is one text token.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// Enabled matchers for one call to [`tokenize`](crate::tokenize).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FeatureFlags: u16 {
        /// Emoticon aliases such as `:)` and `<3`.
        const TEXT_EMOJI = 1 << 0;
        /// `#hashtag`
        const HASHTAG = 1 << 1;
        /// `@mention`
        const MENTION = 1 << 2;
        /// `/command`
        const COMMAND = 1 << 3;
        /// User stickers `#u<digits>s#`.
        const USER_STICKER = 1 << 4;
        /// Bare URLs and email addresses.
        const LINK = 1 << 5;
        /// Stamp [`Format::LINK`](crate::Format::LINK) on auto-detected links.
        const STICKY_LINK = 1 << 6;
        /// Emphasis markers plus explicit `[label](url)` links.
        const MARKDOWN = 1 << 7;
        /// Emphasis markers only.
        const FORMATTING = 1 << 8;
    }
}

/// Canonical kebab-case names, in declaration order.
const NAMES: &[(&str, FeatureFlags)] = &[
    ("text-emoji", FeatureFlags::TEXT_EMOJI),
    ("hashtag", FeatureFlags::HASHTAG),
    ("mention", FeatureFlags::MENTION),
    ("command", FeatureFlags::COMMAND),
    ("user-sticker", FeatureFlags::USER_STICKER),
    ("link", FeatureFlags::LINK),
    ("sticky-link", FeatureFlags::STICKY_LINK),
    ("markdown", FeatureFlags::MARKDOWN),
    ("formatting", FeatureFlags::FORMATTING),
];

/// Error parsing a feature list.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FeatureParseError {
    /// A name that matches no flag.
    #[error("unknown feature `{name}` (expected one of: {expected})")]
    UnknownFeature { name: String, expected: String },
    /// An empty entry such as the middle of `link,,hashtag`.
    #[error("empty feature name in `{list}`")]
    EmptyName { list: String },
}

impl FeatureFlags {
    /// Canonical `(name, flag)` pairs.
    pub fn names() -> &'static [(&'static str, FeatureFlags)] {
        NAMES
    }

    /// Look up one flag by name.
    ///
    /// Accepts kebab-case (`text-emoji`), snake_case (`text_emoji`), and
    /// camelCase (`textEmoji`), case-insensitively, plus `all` and `none`.
    pub fn from_feature_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "all" => return Some(Self::all()),
            "none" => return Some(Self::empty()),
            _ => {}
        }
        NAMES.iter().find_map(|&(canonical, flag)| {
            let canonical_key = canonical.replace('-', "");
            (canonical_key == key).then_some(flag)
        })
    }

    /// Whether any emphasis markers are recognized.
    #[inline]
    pub fn emphasis(self) -> bool {
        self.intersects(Self::MARKDOWN | Self::FORMATTING)
    }
}

/// Parses a comma-separated list: `"link,hashtag, text-emoji"`.
///
/// An empty or all-whitespace string yields no flags.
impl FromStr for FeatureFlags {
    type Err = FeatureParseError;

    fn from_str(list: &str) -> Result<Self, Self::Err> {
        if list.trim().is_empty() {
            return Ok(Self::empty());
        }
        list.split(',').try_fold(Self::empty(), |acc, raw| {
            let name = raw.trim();
            if name.is_empty() {
                return Err(FeatureParseError::EmptyName {
                    list: list.to_string(),
                });
            }
            let flag =
                Self::from_feature_name(name).ok_or_else(|| FeatureParseError::UnknownFeature {
                    name: name.to_string(),
                    expected: NAMES
                        .iter()
                        .map(|(n, _)| *n)
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;
            Ok(acc | flag)
        })
    }
}

/// Renders as the comma-separated canonical names, or `none`.
impl fmt::Display for FeatureFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for &(name, flag) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(",")?;
                }
                first = false;
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
