//! ccbf: dictionary Bloom filter tool
//!
//! ## Usage
//!
//! ```bash
//! # Build words.bf from a dictionary (one word per line)
//! ccbf build /usr/share/dict/words
//!
//! # Check spelling against it
//! ccbf check hello wrold
//!
//! # Show header and fill statistics
//! ccbf inspect words.bf
//! ```
//!
//! Log verbosity follows `RUST_LOG`; logs go to stderr.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ccbf_cli::commands::{run_build, run_check, run_inspect};
use ccbf_cli::{DEFAULT_FILTER_PATH, DEFAULT_FPR};

/// Build and query CCBF dictionary filters
#[derive(Parser, Debug)]
#[command(name = "ccbf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a filter from a newline-separated dictionary
    Build {
        /// Dictionary file, one word per line
        dict: PathBuf,

        /// Output filter file
        #[arg(default_value = DEFAULT_FILTER_PATH)]
        output: PathBuf,

        /// Target false positive rate
        #[arg(long, default_value_t = DEFAULT_FPR)]
        fpr: f64,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check words against a filter
    Check {
        /// Filter file to load
        #[arg(short, long, default_value = DEFAULT_FILTER_PATH)]
        filter: PathBuf,

        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show the header and fill statistics of a filter file
    Inspect {
        /// Filter file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Build {
            dict,
            output,
            fpr,
            json,
        } => {
            run_build(&dict, &output, fpr, json, &mut out)?;
        }
        Command::Check { filter, words } => {
            run_check(&filter, &words, &mut out)?;
        }
        Command::Inspect { file, json } => {
            run_inspect(&file, json, &mut out)?;
        }
    }

    Ok(())
}
