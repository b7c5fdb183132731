//! Inline style bitmask.
//!
//! A token's `Format` is the set of styles active when the token started.
//! Bits are set and cleared only by the markdown matcher through the
//! cursor's format stack.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Active inline styles.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Format: u8 {
        /// `*bold*`
        const BOLD = 1 << 0;
        /// `_italic_`
        const ITALIC = 1 << 1;
        /// `~strike~`
        const STRIKE = 1 << 2;
        /// `` `monospace` ``. Suppresses every matcher except emoji and
        /// the closing backtick.
        const MONOSPACE = 1 << 3;
        /// Link marker: explicit `[label](url)` links, and auto-detected
        /// links when sticky links are enabled.
        const LINK = 1 << 4;
    }
}

impl Format {
    /// Lowercase name of a single-bit format, `None` for empty or
    /// multi-bit values.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Format::BOLD => "bold",
            Format::ITALIC => "italic",
            Format::STRIKE => "strike",
            Format::MONOSPACE => "monospace",
            Format::LINK => "link",
            _ => return None,
        })
    }
}

/// Renders as `bold+italic`, or `-` when empty.
impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let mut first = true;
        for (_, flag) in self.iter_names() {
            if !first {
                f.write_str("+")?;
            }
            first = false;
            f.write_str(flag.name().unwrap_or("?"))?;
        }
        Ok(())
    }
}
