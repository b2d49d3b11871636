//! Implementation of `randcycle sample <file> <start>`.
//!
//! Parses the adjacency-list JSON, builds the graph, and runs the bounded
//! cycle sampler. On success the cycle is printed to stdout (exit 0). An
//! exhausted attempt budget is the sampler's designed expected failure and
//! maps to exit 1; malformed input, unknown start vertex, or invalid bounds
//! map to exit 2.
use rand::SeedableRng;
use rand::rngs::StdRng;
use randcycle_core::{
    LengthBounds, SampleError, build_graph, find_random_cycle, parse_adjacency,
};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format;

/// Runs the `sample` subcommand against already-read input content.
#[allow(clippy::too_many_arguments)]
pub fn run(
    content: &str,
    start: &str,
    min_len: usize,
    max_len: usize,
    attempts: usize,
    seed: Option<u64>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let adjacency = parse_adjacency(content).map_err(|e| CliError::ParseError {
        detail: e.to_string(),
    })?;

    let graph = build_graph(&adjacency).map_err(|e| CliError::GraphError {
        detail: e.to_string(),
    })?;

    let bounds = LengthBounds::new(min_len, max_len).map_err(|e| CliError::InvalidBounds {
        detail: e.to_string(),
    })?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let result =
        find_random_cycle(&graph, start, bounds, attempts, &mut rng).map_err(|e| match e {
            SampleError::StartNotFound(vertex) => CliError::StartNotFound { vertex },
        })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match result {
        Some(cycle) => {
            match format {
                OutputFormat::Human => format::write_cycle_human(&mut out, &cycle),
                OutputFormat::Json => format::write_cycle_json(&mut out, &cycle),
            }
            .map_err(|e| CliError::IoError {
                source: "stdout".to_owned(),
                detail: e.to_string(),
            })
        }
        None => {
            // JSON consumers still get a machine-readable object on stdout;
            // the human message travels on the error path to stderr.
            if matches!(format, OutputFormat::Json) {
                format::write_not_found_json(&mut out, attempts).map_err(|e| {
                    CliError::IoError {
                        source: "stdout".to_owned(),
                        detail: e.to_string(),
                    }
                })?;
            }
            Err(CliError::NoCycleFound { attempts })
        }
    }
}
