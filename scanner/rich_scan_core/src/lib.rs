//! Low-level building blocks for the rich-text token scanner.
//!
//! This crate has no knowledge of token kinds or matcher ordering. It
//! provides:
//! - [`ScanCursor`]: position, look-ahead/behind, slicing, and the active
//!   format stack for one scan
//! - [`Format`]: the inline style bitmask stamped on tokens
//! - [`chars`]: delimiter and word-character classification
//! - [`emoji`]: emoji grapheme-cluster detection
//! - [`AliasTrie`] and [`ALIASES`]: the emoticon alias automaton
//! - [`Span`]: byte ranges of tokens in the source
//!
//! # Design Philosophy
//!
//! - **Build once, share everywhere**: the alias trie is an immutable arena
//!   built lazily on first use and shared across threads.
//! - **Explicit save points**: backtracking is `cursor.set_pos(saved)`, never
//!   call-stack unwinding.
//! - **Total**: every function accepts any `&str`; there is no error path.

mod alias;
pub mod chars;
mod cursor;
pub mod emoji;
mod format;
mod span;
mod trie;

pub use alias::{ALIASES, ALIAS_TABLE_VERSION};
pub use cursor::{FormatFrame, ScanCursor};
pub use format::Format;
pub use span::Span;
pub use trie::{AliasTrie, NodeId};
