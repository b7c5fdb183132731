//! Bare URL and email detection.
//!
//! # Grammar
//!
//! At an alphanumeric not preceded by a word character, take the
//! *candidate*: the run of characters up to whitespace, a hard stop, or the
//! start of an emoji cluster. Then try, in order:
//!
//! 1. email: `local@host.tld` with an optional `?query`
//! 2. `http://`, `https://`, `ftp://` followed by a host
//! 3. `www.` followed by a host of at least three labels
//! 4. a bare host whose last label is a known TLD
//!
//! Forms 2-4 take an optional `:port` and, when the host is followed by
//! `/`, `?` or `#`, the rest of the candidate as the path.
//!
//! # Trimming
//!
//! The accepted span then loses trailing characters until stable:
//!
//! | Trailing | Stripped when |
//! |---|---|
//! | `. , ; : ! ? ' *` | always |
//! | `)` | more `)` than `(` in the span |
//! | `]` | more `]` than `[` in the span |

use std::borrow::Cow;
use std::ops::Range;

use rich_scan_core::{chars, emoji, Format, ScanCursor};

use super::commit;
use crate::{FeatureFlags, Token, TokenKind};

/// Characters that always end a candidate.
const HARD_STOPS: &[char] = &['<', '>', '"', '`', '{', '}', '|', '\\', '^'];

const SCHEMES: &[&str] = &["http://", "https://", "ftp://"];

/// Top-level domains accepted without a scheme or `www.` prefix.
const KNOWN_TLDS: &[&str] = &[
    "ai", "app", "biz", "by", "ca", "ch", "cn", "co", "com", "de", "dev", "edu", "es", "eu",
    "fi", "fr", "gov", "info", "io", "jp", "kz", "me", "net", "nl", "org", "pl", "pro", "ru",
    "su", "tv", "ua", "uk", "us", "xyz", "рф",
];

/// Which form of address matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Form {
    Email,
    Url,
    Www,
    Domain,
}

/// Walks already made inside the current candidate run.
///
/// A candidate run, a host and an email local part each end at the same
/// byte wherever inside them a walk begins, so every attempt in the run
/// reuses the first walk. All positions are absolute byte offsets.
#[derive(Debug, Default)]
pub(crate) struct LinkMemo {
    run: Range<usize>,
    /// Host last walked from an attempt start.
    host: Option<Host>,
    email: Option<Email>,
}

/// Dot-separated labels of alphanumerics and `-`.
#[derive(Debug)]
struct Host {
    start: usize,
    end: usize,
    /// Dots between labels.
    dots: Vec<usize>,
    tld_start: usize,
    known_tld: bool,
    /// End of the optional port and path after the host.
    tail_end: usize,
}

/// Outcome for every start inside one email local part.
#[derive(Debug)]
struct Email {
    local: Range<usize>,
    /// End of the address, or `None` when no valid domain follows.
    end: Option<usize>,
}

pub(super) fn attempt<'a>(
    cursor: &mut ScanCursor<'a>,
    features: FeatureFlags,
    memo: &mut LinkMemo,
) -> Option<Token<'a>> {
    if cursor.peek_prev().is_some_and(chars::is_word_char)
        || !cursor.peek().is_some_and(char::is_alphanumeric)
    {
        return None;
    }

    let text = cursor.text();
    let start = cursor.pos();
    let run = &text[..memo.candidate_end(text, start)];
    let (form, end) = memo.recognize(run, start)?;
    let len = trim_end(&run[start..], end - start);
    if len == 0 {
        return None;
    }
    let value = &run[start..start + len];

    let url = match form {
        Form::Email => Cow::Owned(format!("mailto:{value}")),
        Form::Url => Cow::Borrowed(value),
        Form::Www | Form::Domain => Cow::Owned(format!("http://{value}")),
    };

    cursor.advance_by(len);
    let mut token = commit(cursor, start, TokenKind::Link { url, auto: true });
    if features.contains(FeatureFlags::STICKY_LINK) {
        token.format |= Format::LINK;
    }
    Some(token)
}

/// Byte length of the candidate run at the start of `text`.
fn candidate_len(text: &str) -> usize {
    for (i, c) in text.char_indices() {
        if c.is_whitespace() || HARD_STOPS.contains(&c) {
            return i;
        }
        if (!c.is_ascii() || emoji::is_keycap_base(c)) && emoji::starts_emoji(&text[i..]) {
            return i;
        }
    }
    text.len()
}

impl LinkMemo {
    fn candidate_end(&mut self, text: &str, at: usize) -> usize {
        if !self.run.contains(&at) {
            self.run = at..at + candidate_len(&text[at..]);
            self.host = None;
            self.email = None;
        }
        self.run.end
    }

    /// Address at `at` in `run`, as its form and untrimmed end.
    fn recognize(&mut self, run: &str, at: usize) -> Option<(Form, usize)> {
        if let Some(end) = self.email_end(run, at) {
            return Some((Form::Email, end));
        }
        if let Some(end) = url_end(run, at) {
            return Some((Form::Url, end));
        }
        let host = self.host_at(run, at)?;
        let labels = host.labels_from(at);
        let has_www = run[at..]
            .get(..4)
            .is_some_and(|p| p.eq_ignore_ascii_case("www."));
        if has_www {
            return (labels >= 3).then_some((Form::Www, host.tail_end));
        }
        (labels >= 2 && host.known_tld).then_some((Form::Domain, host.tail_end))
    }

    fn host_at(&mut self, run: &str, at: usize) -> Option<&Host> {
        if !self.host.as_ref().is_some_and(|host| host.contains(at)) {
            self.host = Some(Host::scan(run, at)?);
        }
        self.host.as_ref()
    }

    fn email_end(&mut self, run: &str, at: usize) -> Option<usize> {
        if !self.email.as_ref().is_some_and(|email| email.local.contains(&at)) {
            let local_end = run[at..]
                .find(|c: char| !is_local_char(c))
                .map_or(run.len(), |i| at + i);
            self.email = Some(Email {
                local: at..local_end,
                end: email_domain_end(run, local_end),
            });
        }
        self.email.as_ref().and_then(|email| email.end)
    }
}

impl Host {
    /// Labels joined by single dots. A trailing dot is not part of the host.
    fn scan(run: &str, start: usize) -> Option<Self> {
        let mut end = start;
        let mut dots = Vec::new();
        loop {
            let label = run[end..]
                .find(|c: char| !is_host_char(c))
                .unwrap_or(run.len() - end);
            if label == 0 {
                break;
            }
            end += label;
            let continues = run[end..]
                .strip_prefix('.')
                .is_some_and(|after| after.starts_with(is_host_char));
            if !continues {
                break;
            }
            dots.push(end);
            end += 1;
        }
        if end == start {
            return None;
        }
        let tld_start = dots.last().map_or(start, |dot| dot + 1);
        Some(Self {
            start,
            end,
            tld_start,
            known_tld: is_known_tld(&run[tld_start..end]),
            tail_end: tail_end(run, end),
            dots,
        })
    }

    /// Whether a walk from `at` lands on this host's end.
    fn contains(&self, at: usize) -> bool {
        self.start <= at && at < self.end && self.dots.binary_search(&at).is_err()
    }

    /// Labels from `at` to the end of the host.
    fn labels_from(&self, at: usize) -> usize {
        self.dots.len() - self.dots.partition_point(|&dot| dot < at) + 1
    }
}

// ─── Address Forms ──────────────────────────────────────────

fn is_local_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

/// End of `@host.tld` plus an optional `?query`, starting at `at_sign`.
fn email_domain_end(run: &str, at_sign: usize) -> Option<usize> {
    if !run[at_sign..].starts_with('@') {
        return None;
    }
    let host = Host::scan(run, at_sign + 1)?;
    let tld = &run[host.tld_start..host.end];
    let tld_ok = tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic);
    if host.dots.is_empty() || !tld_ok {
        return None;
    }

    let mut end = host.end;
    if let Some(query) = run[end..].strip_prefix('?') {
        let query_len = query
            .find(|c: char| !is_query_char(c))
            .unwrap_or(query.len());
        if query_len > 0 {
            end += 1 + query_len;
        }
    }
    Some(end)
}

fn is_query_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '=' | '&' | '%' | '.' | '+' | '-')
}

fn url_end(run: &str, at: usize) -> Option<usize> {
    let rest = &run[at..];
    let scheme = SCHEMES
        .iter()
        .find(|scheme| rest.get(..scheme.len()).is_some_and(|p| p.eq_ignore_ascii_case(scheme)))?;
    Host::scan(run, at + scheme.len()).map(|host| host.tail_end)
}

/// Extend a host ending at `host_end` by an optional port and path.
fn tail_end(run: &str, host_end: usize) -> usize {
    let mut end = host_end;
    if let Some(port) = run[end..].strip_prefix(':') {
        let digits = port.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            end += 1 + digits;
        }
    }
    if run[end..].starts_with(['/', '?', '#']) {
        run.len()
    } else {
        end
    }
}

fn is_host_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

fn is_known_tld(tld: &str) -> bool {
    let tld = tld.to_lowercase();
    KNOWN_TLDS.contains(&tld.as_str())
}

// ─── Trimming ───────────────────────────────────────────────

fn trim_end(candidate: &str, mut len: usize) -> usize {
    let span = &candidate[..len];
    let count = |b: u8| memchr::memchr_iter(b, span.as_bytes()).count();
    let (open_paren, open_bracket) = (count(b'('), count(b'['));
    let (mut close_paren, mut close_bracket) = (count(b')'), count(b']'));

    while let Some(last) = candidate[..len].chars().next_back() {
        match last {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '*' => {}
            ')' if close_paren > open_paren => close_paren -= 1,
            ']' if close_bracket > open_bracket => close_bracket -= 1,
            _ => break,
        }
        len -= last.len_utf8();
    }
    len
}
