//! Adjacency-list graph description and its on-disk JSON form.
//!
//! The input format is a single JSON object mapping each vertex identifier
//! to the ordered array of its neighbor identifiers:
//!
//! ```json
//! {
//!   "A": ["B", "C"],
//!   "B": ["A", "C"],
//!   "C": ["A", "B"]
//! }
//! ```
//!
//! Duplicate neighbors are allowed (parallel edges) and entries need not be
//! symmetric (edges are directed). Every neighbor must itself appear as a
//! key; that constraint is enforced later by
//! [`build_graph`](crate::graph::build_graph), not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AdjacencyList
// ---------------------------------------------------------------------------

/// An ordered vertex → neighbor-sequence mapping.
///
/// Backed by a `BTreeMap` so that iteration order (and thus serialized
/// output) is deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    /// Vertex identifier → ordered neighbor identifiers.
    pub vertices: BTreeMap<String, Vec<String>>,
}

impl AdjacencyList {
    /// Creates an empty adjacency list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex with the given neighbor sequence, replacing any
    /// previous entry for the same identifier.
    pub fn add_vertex<I, S>(&mut self, id: &str, neighbors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertices
            .insert(id.to_owned(), neighbors.into_iter().map(Into::into).collect());
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the total number of directed edges (neighbor entries).
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    /// Returns `true` if `id` is a vertex of this adjacency list.
    pub fn contains(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Returns `true` if a directed edge `from → to` exists.
    ///
    /// Linear in the out-degree of `from`; intended for assertions and
    /// small-graph checks, not hot traversal loops.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|ns| ns.iter().any(|n| n == to))
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Errors that can occur while parsing an adjacency-list JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjacencyParseError {
    /// The input is not valid JSON, or not an object of string arrays.
    ///
    /// Carries the underlying parser message plus the 1-based line and
    /// column of the failure.
    Json {
        /// Parser error message.
        detail: String,
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
    },
}

impl std::fmt::Display for AdjacencyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjacencyParseError::Json {
                detail,
                line,
                column,
            } => {
                write!(f, "invalid adjacency list at {line}:{column}: {detail}")
            }
        }
    }
}

impl std::error::Error for AdjacencyParseError {}

/// Parses an adjacency-list JSON document into an [`AdjacencyList`].
///
/// # Errors
///
/// Returns [`AdjacencyParseError::Json`] if the input is not a JSON object
/// whose values are all arrays of strings.
pub fn parse_adjacency(input: &str) -> Result<AdjacencyList, AdjacencyParseError> {
    serde_json::from_str(input).map_err(|e| AdjacencyParseError::Json {
        detail: e.to_string(),
        line: e.line(),
        column: e.column(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
