//! Implementation of `randcycle inspect <file>`.
//!
//! Parses an adjacency-list JSON file and prints summary statistics to
//! stdout: vertex and edge counts, self-loop count, and min/max/mean
//! out-degree. In `--format json` mode a single JSON object is emitted.
//!
//! Exit codes: 0 = success, 2 = read/parse/build failure.
use randcycle_core::{build_graph, parse_adjacency};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format;

/// Runs the `inspect` subcommand against already-read input content.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let adjacency = parse_adjacency(content).map_err(|e| CliError::ParseError {
        detail: e.to_string(),
    })?;

    let graph = build_graph(&adjacency).map_err(|e| CliError::GraphError {
        detail: e.to_string(),
    })?;

    let stats = graph.degree_stats();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => format::write_stats_human(&mut out, &stats),
        OutputFormat::Json => format::write_stats_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
