//! Word Friends CLI
//!
//! Prints how many dictionary words are reachable from a query word.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use word_friends::{load_dictionary, DictionaryOptions, FriendNetwork, FriendsError, QueryPolicy};

const USAGE_TEXT: &str = include_str!("text/usage.txt");

#[derive(Parser, Debug)]
#[command(name = "word-friends")]
#[command(about = "Counts the dictionary words reachable from a query word", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Dictionary file, one word per line
    dictionary: PathBuf,

    /// Word to start from
    word: String,

    /// Print the reachable words after the count
    #[arg(short, long)]
    list: bool,

    /// With --list, show how each word was reached
    #[arg(long, requires = "list")]
    explain: bool,

    /// Count dictionary entries spelled exactly like WORD
    #[arg(long)]
    count_self: bool,

    /// Keep empty lines as empty-string words
    #[arg(long)]
    keep_empty_lines: bool,

    /// Lowercase the dictionary and WORD before comparing
    #[arg(long)]
    lowercase: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn dictionary_options(&self) -> DictionaryOptions {
        DictionaryOptions {
            skip_empty_lines: !self.keep_empty_lines,
            lowercase: self.lowercase,
        }
    }

    fn query_policy(&self) -> QueryPolicy {
        if self.count_self {
            QueryPolicy::CountQueryEntries
        } else {
            QueryPolicy::ExcludeQuery
        }
    }
}

fn run(args: &Args) -> Result<(), FriendsError> {
    let words = load_dictionary(&args.dictionary, &args.dictionary_options())?;
    let query = if args.lowercase {
        args.word.to_lowercase()
    } else {
        args.word.clone()
    };

    let mut network = FriendNetwork::new(words).with_policy(args.query_policy());

    let start = Instant::now();
    let report = network.explore(&query);
    info!(
        "Explored '{}' in {:.2?} ({} comparisons)",
        report.query,
        start.elapsed(),
        report.comparisons
    );

    println!("{}", report.count());
    if args.list {
        for discovery in &report.discoveries {
            if args.explain {
                println!(
                    "{} <- {} ({})",
                    discovery.word, discovery.from, discovery.relation
                );
            } else {
                println!("{}", discovery.word);
            }
        }
    }

    Ok(())
}

/// First paragraph of a clap error, on one line and without clap's own prefix.
fn summarize(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let paragraph: Vec<&str> = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect();
    paragraph.join(" ").trim_start_matches("error: ").to_string()
}

fn fail(error: FriendsError) -> ! {
    eprintln!("Error: {error}");
    eprintln!();
    eprintln!("{}", USAGE_TEXT);
    process::exit(error.exit_code());
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => fail(FriendsError::invalid_arguments(summarize(&e))),
    };

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(&args) {
        fail(e);
    }
}
