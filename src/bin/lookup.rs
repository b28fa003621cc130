// ZyDict Lookup CLI Tool
// Command-line interface for dictionary search and candidate lookup

use clap::Parser;
use zydict::{EngineConfig, ZyDict};

/// Zhuyin Dictionary Lookup - search a lexicon store or list candidates
#[derive(Parser, Debug)]
#[command(name = "zy-lookup")]
#[command(about = "Search a zhuyin lexicon store", long_about = None)]
struct Args {
    /// Search keyword, or a keyboard buffer with --candidates
    /// (e.g. "一字" or "一ㄗˋ")
    #[arg(value_name = "QUERY")]
    query: String,

    /// Path to the lexicon store file
    #[arg(short, long, default_value = "lexicon.db")]
    db: String,

    /// Treat the query as a virtual-keyboard buffer and list
    /// next-character candidates
    #[arg(short, long)]
    candidates: bool,

    /// Use the single-character store profile (result cap 50)
    #[arg(long)]
    single_char: bool,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Show phonetics and definitions for each result
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = if args.single_char {
        EngineConfig::single_char()
    } else {
        EngineConfig::idiom()
    };
    let dict = ZyDict::open_with(&args.db, config);

    if !dict.is_available() {
        eprintln!("Could not open store '{}'; results will be empty.", args.db);
    }

    if args.candidates {
        print_candidates(&dict, &args);
    } else {
        print_search(&dict, &args);
    }
}

fn print_search(dict: &ZyDict, args: &Args) {
    let results = dict.search(&args.query);

    if results.is_empty() {
        println!("No matches found.");
        return;
    }

    println!("Found {} matches:\n", results.len());
    for (idx, entry) in results.iter().take(args.limit).enumerate() {
        println!("{}. {}", idx + 1, entry.headword);
        if args.verbose {
            println!("      {}", entry.phonetic);
            println!("      {}", clip(&entry.definition, 60));
        }
    }
}

fn print_candidates(dict: &ZyDict, args: &Args) {
    let mut candidates = dict.candidates(&args.query);
    if candidates.is_empty() {
        candidates = dict.candidates_any_position(&args.query);
        if !candidates.is_empty() {
            println!("(any-position matches)");
        }
    }

    if candidates.is_empty() {
        println!("No candidates.");
        return;
    }

    let line: String = candidates
        .iter()
        .take(args.limit)
        .map(|ch| ch.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);
}

/// Clip a definition to at most `max` characters for one-line display
fn clip(text: &str, max: usize) -> String {
    let mut out: String = text.chars().take(max).collect();
    if text.chars().count() > max {
        out.push('…');
    }
    out
}
