//! `richscan`: inspect rich-text token streams.

use rich_scan_cli::commands::{
    init_tracing, list_aliases, list_features, resolve_features, tokens_file, tokens_text,
    FEATURES_ENV,
};

fn main() {
    // Global options may appear anywhere; everything else is positional.
    let mut features_arg: Option<String> = None;
    let mut trace_tree = false;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(list) = arg.strip_prefix("--features=") {
            features_arg = Some(list.to_string());
        } else if arg == "--trace-tree" {
            trace_tree = true;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    init_tracing(trace_tree);

    match command.as_str() {
        "tokens" => {
            if args.len() < 2 {
                eprintln!("Usage: richscan tokens <file|-> [--features=<list>]");
                std::process::exit(2);
            }
            let features = features_or_exit(features_arg.as_deref());
            tokens_file(&args[1], features);
        }
        "text" => {
            if args.len() < 2 {
                eprintln!("Usage: richscan text <string...> [--features=<list>]");
                std::process::exit(2);
            }
            let features = features_or_exit(features_arg.as_deref());
            tokens_text(&args[1..], features);
        }
        "aliases" => list_aliases(),
        "features" => list_features(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("richscan {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn features_or_exit(flag: Option<&str>) -> rich_scan::FeatureFlags {
    let env = std::env::var(FEATURES_ENV).ok();
    match resolve_features(flag, env.as_deref()) {
        Ok(features) => features,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("richscan: rich-text token scanner");
    println!();
    println!("Usage: richscan <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file|->      Tokenize a file (or stdin) and print the tokens");
    println!("  text <string...>     Tokenize the arguments joined by spaces");
    println!("  aliases              List the emoticon alias table");
    println!("  features             List feature names");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --features=<list>    Comma-separated features (default: ${FEATURES_ENV})");
    println!("  --trace-tree         Render tracing spans as a tree (filter with RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  richscan text --features=all 'hi @bob :) see example.com'");
    println!("  richscan tokens notes.txt --features=markdown,link");
    println!("  RUST_LOG=rich_scan=trace richscan text --features=hashtag '#rust'");
}
