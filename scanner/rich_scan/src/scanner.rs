//! The scan loop.
//!
//! At each position the matchers run in [`Matcher::PRIORITY`] order and the
//! first token wins. When none commits, one character joins the pending
//! plain-text run. After the input is exhausted three passes finalize the
//! stream: flush pending text, turn unclosed emphasis openers back into
//! text, and merge adjacent text tokens.

use rich_scan_core::{Format, ScanCursor, Span};

use crate::matcher::{MatchMemo, Matcher};
use crate::{FeatureFlags, Token, TokenKind};

pub(crate) struct Scanner<'a> {
    cursor: ScanCursor<'a>,
    features: FeatureFlags,
    tokens: Vec<Token<'a>>,
    /// Start and format of the plain-text run not yet emitted.
    pending_text: Option<(usize, Format)>,
    memo: MatchMemo,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str, features: FeatureFlags) -> Self {
        Self {
            cursor: ScanCursor::new(text),
            features,
            tokens: Vec::new(),
            pending_text: None,
            memo: MatchMemo::default(),
        }
    }

    pub(crate) fn run(mut self) -> Vec<Token<'a>> {
        while self.cursor.has_next() {
            self.step();
        }
        self.flush_text(self.cursor.pos());
        self.degrade_unclosed();
        coalesce(self.cursor.text(), self.tokens)
    }

    fn step(&mut self) {
        let features = self.features;
        let cursor = &mut self.cursor;
        let memo = &mut self.memo;
        let at = cursor.pos();
        let matched = Matcher::PRIORITY.iter().find_map(|&matcher| {
            Some((matcher, matcher.attempt_with(cursor, features, memo)?))
        });

        match matched {
            Some((matcher, token)) => {
                tracing::trace!(
                    matcher = matcher.name(),
                    span = %token.span,
                    format = %token.format,
                    "commit"
                );
                self.flush_text(token.span.start);
                self.tokens.push(token);
            }
            None => {
                if self.pending_text.is_none() {
                    self.pending_text = Some((at, self.cursor.format()));
                }
                self.cursor.next_char();
            }
        }
    }

    fn flush_text(&mut self, end: usize) {
        if let Some((start, format)) = self.pending_text.take() {
            if start < end {
                let span = Span::new(start, end);
                self.tokens
                    .push(Token::text(self.cursor.text(), span, format));
            }
        }
    }

    /// Markers still open at end of input never found their closer: the
    /// opener becomes text and its bit is cleared from everything after it.
    fn degrade_unclosed(&mut self) {
        for frame in self.cursor.open_frames() {
            tracing::debug!(
                format = %frame.format,
                opened_at = frame.opened_at,
                "unclosed marker degraded to text"
            );
            for token in &mut self.tokens {
                if token.span.start < frame.opened_at {
                    continue;
                }
                if token.span.start == frame.opened_at && token.kind == TokenKind::Markdown {
                    token.kind = TokenKind::Text;
                }
                token.format.remove(frame.format);
            }
        }
    }
}

/// Merge runs of adjacent text tokens with equal format.
fn coalesce<'a>(source: &'a str, tokens: Vec<Token<'a>>) -> Vec<Token<'a>> {
    let mut merged: Vec<Token<'a>> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(last) = merged.last_mut() {
            if last.is_text() && token.is_text() && last.format == token.format {
                *last = Token::text(source, last.span.merge(token.span), last.format);
                continue;
            }
        }
        merged.push(token);
    }
    merged
}

#[cfg(test)]
mod tests;
