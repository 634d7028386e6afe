//! word-relay CLI - play a word-chaining game at one keyboard.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// word-relay - each word starts where the last one ended
#[derive(Parser, Debug)]
#[command(name = "word-relay")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player names in seating order (prompted for when omitted)
    names: Vec<String>,

    /// Shuffle the seating order without asking
    #[arg(long, conflicts_with = "keep_order")]
    shuffle: bool,

    /// Keep the seating order without asking
    #[arg(long)]
    keep_order: bool,

    /// Random seed for the shuffle (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// What to do after an elimination that leaves players standing
    #[arg(long, value_enum, default_value = "ask")]
    on_elimination: cli::FollowupPolicy,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let shuffle = match (args.shuffle, args.keep_order) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    let options = cli::play::PlayOptions {
        names: args.names,
        shuffle,
        seed: args.seed,
        on_elimination: args.on_elimination,
    };

    match cli::play::execute(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
