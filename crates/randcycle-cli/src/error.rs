//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `randcycle` binary.
//! Every variant maps to a stable exit code (1 or 2) via
//! [`CliError::exit_code`]:
//!
//! - Exit code **2** — input failure: the tool could not read or parse the
//!   input, or the request itself was malformed (unknown start vertex,
//!   invalid length bounds). These terminate before or during setup.
//! - Exit code **1** — logical failure: the tool ran to completion but the
//!   result is a well-defined failure (no qualifying cycle within the
//!   attempt budget).

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `randcycle` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant and [`CliError::message`] for the human-readable string that is
/// printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None` for
        /// stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid adjacency-list JSON document.
    ParseError {
        /// The underlying parse error message.
        detail: String,
    },

    /// The adjacency list references a neighbor that is not a vertex.
    GraphError {
        /// The underlying build error message.
        detail: String,
    },

    /// The requested start vertex is not present in the graph.
    StartNotFound {
        /// The unknown vertex identifier.
        vertex: String,
    },

    /// The requested `[min_len, max_len]` range is invalid.
    InvalidBounds {
        /// The underlying bounds error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The sampler exhausted its attempt budget without finding a
    /// qualifying cycle.
    ///
    /// This is the designed expected-failure path of the sampler, reported
    /// as a failure exit so scripts can branch on it.
    NoCycleFound {
        /// The attempt budget that was exhausted.
        attempts: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::FileNotFound { .. }
            | CliError::PermissionDenied { .. }
            | CliError::FileTooLarge { .. }
            | CliError::InvalidUtf8 { .. }
            | CliError::StdinReadError { .. }
            | CliError::IoError { .. }
            | CliError::ParseError { .. }
            | CliError::GraphError { .. }
            | CliError::StartNotFound { .. }
            | CliError::InvalidBounds { .. } => 2,
            CliError::NoCycleFound { .. } => 1,
        }
    }

    /// Returns the human-readable error message printed to stderr.
    pub fn message(&self) -> String {
        match self {
            CliError::FileNotFound { path } => {
                format!("file not found: {}", path.display())
            }
            CliError::PermissionDenied { path } => {
                format!("permission denied: {}", path.display())
            }
            CliError::FileTooLarge {
                source,
                limit,
                actual,
            } => match actual {
                Some(n) => format!("input {source} too large: {n} bytes (limit {limit})"),
                None => format!("input {source} too large: limit {limit} bytes exceeded"),
            },
            CliError::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!("input {source} is not valid UTF-8 (first invalid byte at offset {byte_offset})")
            }
            CliError::StdinReadError { detail } => {
                format!("failed to read stdin: {detail}")
            }
            CliError::IoError { source, detail } => {
                format!("I/O error reading {source}: {detail}")
            }
            CliError::ParseError { detail } => {
                format!("parse error: {detail}")
            }
            CliError::GraphError { detail } => {
                format!("graph error: {detail}")
            }
            CliError::StartNotFound { vertex } => {
                format!("start vertex not found: {vertex:?}")
            }
            CliError::InvalidBounds { detail } => {
                format!("invalid length bounds: {detail}")
            }
            CliError::NoCycleFound { attempts } => {
                format!("no qualifying cycle found after {attempts} attempts")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
