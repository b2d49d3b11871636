//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits plain text; `Json` emits a single structured JSON object
/// per command.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `randcycle` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Sample a random simple cycle of bounded length through a start vertex.
    Sample {
        /// Path to an adjacency-list JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Identifier of the start vertex.
        #[arg(value_name = "START")]
        start: String,
        /// Minimum cycle length in edges (inclusive).
        #[arg(long)]
        min_len: usize,
        /// Maximum cycle length in edges (inclusive).
        #[arg(long)]
        max_len: usize,
        /// Maximum number of independent randomized search attempts.
        #[arg(long, default_value = "1000")]
        attempts: usize,
        /// RNG seed for reproducible sampling (random when omitted).
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print summary statistics for an adjacency-list graph.
    Inspect {
        /// Path to an adjacency-list JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the randcycle-core library version.
    Version,
}

/// Root CLI struct for the `randcycle` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "randcycle",
    version,
    about = "Bounded random cycle sampler",
    long_about = "Samples random simple cycles of bounded length through a start vertex\n\
                  in a directed graph described by an adjacency-list JSON file."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `RANDCYCLE_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence. Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "RANDCYCLE_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
