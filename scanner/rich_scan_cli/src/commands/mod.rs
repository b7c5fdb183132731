//! Command handlers for the `richscan` CLI.
//!
//! Handlers print to stdout and exit with a message on stderr when input
//! cannot be read. Rendering is split from printing so it can be tested.

use std::fmt::Write as _;
use std::io::Read as _;

use rich_scan::{tokenize, FeatureFlags, FeatureParseError, Token, ALIASES, ALIAS_TABLE_VERSION};
use rich_scan_core::AliasTrie;

/// Environment variable consulted when `--features` is not given.
pub const FEATURES_ENV: &str = "RICHSCAN_FEATURES";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `warn`. With `tree` set,
/// spans are rendered hierarchically through `tracing-tree`.
pub fn init_tracing(tree: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if tree {
        registry
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Pick the feature set: the `--features` value if given, else the
/// environment variable, else everything off.
pub fn resolve_features(
    flag: Option<&str>,
    env: Option<&str>,
) -> Result<FeatureFlags, FeatureParseError> {
    let features = match flag.or(env) {
        Some(list) => list.parse()?,
        None => FeatureFlags::empty(),
    };
    tracing::debug!(%features, from_flag = flag.is_some(), "features resolved");
    Ok(features)
}

/// Read a file, or stdin for `-`, exiting with a friendly message on failure.
pub fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    match result {
        Ok(content) => content,
        Err(e) => {
            let source = if path == "-" { "stdin" } else { path };
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{source}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{source}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{source}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{source}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// One line per token: kind, byte span, char span, format, value, payload.
pub fn render_tokens(text: &str, tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        let chars = token.span.char_range(text);
        let _ = writeln!(out, "{token} chars={}..{}", chars.start, chars.end);
    }
    out
}

/// Tokenize the contents of `path` (or stdin) and print the tokens.
pub fn tokens_file(path: &str, features: FeatureFlags) {
    let text = read_input(path);
    print!("{}", render_tokens(&text, &tokenize(&text, features)));
}

/// Tokenize the given words joined by spaces and print the tokens.
pub fn tokens_text(words: &[String], features: FeatureFlags) {
    let text = words.join(" ");
    print!("{}", render_tokens(&text, &tokenize(&text, features)));
}

/// Alias table listing, one `alias<TAB>glyph` per line, with the glyph the
/// trie resolves.
pub fn render_aliases() -> String {
    let trie = AliasTrie::global();
    let mut out = format!(
        "# alias table v{ALIAS_TABLE_VERSION}: {} aliases, {} trie nodes\n",
        trie.len(),
        trie.node_count()
    );
    for &(alias, _) in ALIASES {
        let glyph = trie.get(alias).unwrap_or_default();
        let _ = writeln!(out, "{alias}\t{glyph}");
    }
    out
}

pub fn list_aliases() {
    print!("{}", render_aliases());
}

/// Feature names accepted by `--features`.
pub fn render_features() -> String {
    let mut out = String::new();
    for (name, _) in FeatureFlags::names() {
        let _ = writeln!(out, "{name}");
    }
    out.push_str("all\nnone\n");
    out
}

pub fn list_features() {
    print!("{}", render_features());
}
