//! Graph construction from an [`AdjacencyList`] using `petgraph`.
//!
//! Wraps a `StableDiGraph` with string-identified vertices and maintains a
//! `HashMap<String, NodeIndex>` for O(1) lookup of vertices by identifier.
//!
//! [`build_graph`] runs two passes over the adjacency list: a vertex pass
//! that inserts every key and records the `id → NodeIndex` mapping, then an
//! edge pass that resolves each neighbor identifier and inserts a directed
//! edge. A neighbor that is not itself a key fails construction with
//! [`GraphBuildError::DanglingNeighborRef`], so the sampler never has to
//! handle missing vertices mid-search.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use crate::adjacency::AdjacencyList;

/// Weight stored inline on each petgraph node.
///
/// Holds only the vertex identifier; the graph carries no edge data
/// (`()` edge weights), so traversal loops stay small and cache-friendly.
#[derive(Debug, Clone)]
pub struct VertexWeight {
    /// Vertex identifier copied from the adjacency-list key.
    pub id: String,
}

/// Errors that can occur during graph construction from an [`AdjacencyList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    /// A neighbor entry references an identifier that is not a vertex.
    ///
    /// The first field is the vertex whose neighbor list contains the
    /// reference; the second is the unknown identifier.
    DanglingNeighborRef {
        /// The vertex whose neighbor list contains the dangling reference.
        vertex: String,
        /// The neighbor identifier that could not be resolved.
        neighbor: String,
    },
}

impl std::fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphBuildError::DanglingNeighborRef { vertex, neighbor } => {
                write!(
                    f,
                    "vertex {vertex:?} references unknown neighbor {neighbor:?}"
                )
            }
        }
    }
}

impl std::error::Error for GraphBuildError {}

/// A directed multigraph built from an [`AdjacencyList`].
///
/// Wraps a `petgraph` [`StableDiGraph`] with [`VertexWeight`] nodes and unit
/// edge weights. Parallel edges are preserved: a neighbor listed twice
/// becomes two distinct directed edges.
///
/// Construct with [`build_graph`].
#[derive(Debug)]
pub struct CycleGraph {
    graph: StableDiGraph<VertexWeight, ()>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl CycleGraph {
    /// Returns the number of vertices currently in the graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of directed edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the [`NodeIndex`] for a vertex identifier.
    ///
    /// Returns `None` if no vertex with that identifier exists.
    pub fn node_index(&self, id: &str) -> Option<&NodeIndex> {
        self.id_to_index.get(id)
    }

    /// Returns the identifier of the vertex at `idx`, or `None` if the index
    /// is out of bounds.
    pub fn vertex_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|w| w.id.as_str())
    }

    /// Returns a reference to the underlying [`StableDiGraph`] for use by
    /// traversal code.
    pub fn graph(&self) -> &StableDiGraph<VertexWeight, ()> {
        &self.graph
    }

    /// Collects the direct successors of `node`, one entry per outgoing
    /// edge (so parallel edges yield repeated indices, matching the
    /// duplicate-neighbor semantics of the input adjacency list).
    ///
    /// Returns a `Vec` rather than an iterator so callers can shuffle it
    /// in place.
    pub fn successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph.edges(node).map(|e| e.target()).collect()
    }

    /// Computes summary out-degree statistics for the whole graph.
    pub fn degree_stats(&self) -> DegreeStats {
        DegreeStats::from_graph(self)
    }
}

/// Constructs a [`CycleGraph`] from an [`AdjacencyList`].
///
/// Construction is O(V + E).
///
/// # Errors
///
/// Returns [`GraphBuildError::DanglingNeighborRef`] if any neighbor entry
/// names an identifier that is not a key of the adjacency list.
pub fn build_graph(adjacency: &AdjacencyList) -> Result<CycleGraph, GraphBuildError> {
    let vertex_count = adjacency.vertex_count();
    let edge_count = adjacency.edge_count();

    let mut graph: StableDiGraph<VertexWeight, ()> =
        StableDiGraph::with_capacity(vertex_count, edge_count);
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::with_capacity(vertex_count);

    for id in adjacency.vertices.keys() {
        let idx = graph.add_node(VertexWeight { id: id.clone() });
        id_to_index.insert(id.clone(), idx);
    }

    for (id, neighbors) in &adjacency.vertices {
        // The vertex pass inserted every key, so this lookup cannot fail;
        // the fallible path below is for neighbor entries only.
        let Some(&source_idx) = id_to_index.get(id) else {
            continue;
        };
        for neighbor in neighbors {
            let target_idx = id_to_index.get(neighbor).copied().ok_or_else(|| {
                GraphBuildError::DanglingNeighborRef {
                    vertex: id.clone(),
                    neighbor: neighbor.clone(),
                }
            })?;
            graph.add_edge(source_idx, target_idx, ());
        }
    }

    Ok(CycleGraph {
        graph,
        id_to_index,
    })
}

// ---------------------------------------------------------------------------
// DegreeStats
// ---------------------------------------------------------------------------

/// Summary statistics over a [`CycleGraph`], as reported by the CLI
/// `inspect` command.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeStats {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of directed edges.
    pub edge_count: usize,
    /// Number of self-loop edges (`v → v`).
    pub self_loop_count: usize,
    /// Smallest out-degree over all vertices (0 for an empty graph).
    pub min_out_degree: usize,
    /// Largest out-degree over all vertices (0 for an empty graph).
    pub max_out_degree: usize,
    /// Mean out-degree (0.0 for an empty graph).
    pub mean_out_degree: f64,
}

impl DegreeStats {
    /// Computes statistics from a built [`CycleGraph`].
    pub fn from_graph(graph: &CycleGraph) -> Self {
        let g = graph.graph();
        let vertex_count = g.node_count();
        let edge_count = g.edge_count();

        let mut self_loop_count = 0;
        let mut min_out_degree = usize::MAX;
        let mut max_out_degree = 0;

        for node in g.node_indices() {
            let mut out_degree = 0;
            for edge in g.edges(node) {
                out_degree += 1;
                if edge.target() == node {
                    self_loop_count += 1;
                }
            }
            min_out_degree = min_out_degree.min(out_degree);
            max_out_degree = max_out_degree.max(out_degree);
        }

        if vertex_count == 0 {
            min_out_degree = 0;
        }
        let mean_out_degree = if vertex_count == 0 {
            0.0
        } else {
            edge_count as f64 / vertex_count as f64
        };

        DegreeStats {
            vertex_count,
            edge_count,
            self_loop_count,
            min_out_degree,
            max_out_degree,
            mean_out_degree,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::adjacency::AdjacencyList;

    fn triangle() -> AdjacencyList {
        let mut adj = AdjacencyList::new();
        adj.add_vertex("A", ["B"]);
        adj.add_vertex("B", ["C"]);
        adj.add_vertex("C", ["A"]);
        adj
    }

    /// An empty adjacency list builds successfully.
    #[test]
    fn test_empty_adjacency_builds_successfully() {
        let g = build_graph(&AdjacencyList::new()).expect("empty input should build");
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    /// A simple graph builds with correct vertex and edge counts.
    #[test]
    fn test_simple_graph_vertex_and_edge_counts() {
        let g = build_graph(&triangle()).expect("should build");
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    /// A dangling neighbor reference causes `DanglingNeighborRef`.
    #[test]
    fn test_dangling_neighbor_returns_error() {
        let mut adj = AdjacencyList::new();
        adj.add_vertex("A", ["B", "ghost"]);
        adj.add_vertex("B", ["A"]);
        let err = build_graph(&adj).expect_err("should fail on unknown neighbor");
        assert_eq!(
            err,
            GraphBuildError::DanglingNeighborRef {
                vertex: "A".to_owned(),
                neighbor: "ghost".to_owned(),
            }
        );
    }

    /// Identifier lookup returns the correct `NodeIndex` and resolves back.
    #[test]
    fn test_id_lookup_round_trips() {
        let g = build_graph(&triangle()).expect("should build");
        let idx_a = *g.node_index("A").expect("A must be present");
        let idx_b = *g.node_index("B").expect("B must be present");
        assert_ne!(idx_a, idx_b, "distinct vertices get distinct indices");
        assert_eq!(g.vertex_id(idx_a), Some("A"));
        assert_eq!(g.vertex_id(idx_b), Some("B"));
        assert!(g.node_index("Z").is_none());
    }

    /// Duplicate neighbors become parallel edges and repeated successors.
    #[test]
    fn test_duplicate_neighbors_become_parallel_edges() {
        let mut adj = AdjacencyList::new();
        adj.add_vertex("A", ["B", "B"]);
        adj.add_vertex("B", Vec::<&str>::new());
        let g = build_graph(&adj).expect("should build");
        assert_eq!(g.edge_count(), 2);
        let idx_a = *g.node_index("A").expect("A must be present");
        assert_eq!(g.successors(idx_a).len(), 2);
    }

    /// Successors of an isolated vertex are empty.
    #[test]
    fn test_isolated_vertex_has_no_successors() {
        let mut adj = AdjacencyList::new();
        adj.add_vertex("A", Vec::<&str>::new());
        let g = build_graph(&adj).expect("should build");
        let idx_a = *g.node_index("A").expect("A must be present");
        assert!(g.successors(idx_a).is_empty());
    }

    /// Degree statistics: counts, self-loops, min/max/mean.
    #[test]
    fn test_degree_stats() {
        let mut adj = AdjacencyList::new();
        adj.add_vertex("A", ["A", "B", "C"]);
        adj.add_vertex("B", ["C"]);
        adj.add_vertex("C", Vec::<&str>::new());
        let g = build_graph(&adj).expect("should build");
        let stats = g.degree_stats();
        assert_eq!(stats.vertex_count, 3);
        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.self_loop_count, 1);
        assert_eq!(stats.min_out_degree, 0);
        assert_eq!(stats.max_out_degree, 3);
        assert!((stats.mean_out_degree - 4.0 / 3.0).abs() < 1e-9);
    }

    /// Degree statistics on an empty graph are all zero.
    #[test]
    fn test_degree_stats_empty_graph() {
        let g = build_graph(&AdjacencyList::new()).expect("should build");
        let stats = g.degree_stats();
        assert_eq!(stats.min_out_degree, 0);
        assert_eq!(stats.max_out_degree, 0);
        assert!(stats.mean_out_degree.abs() < 1e-9);
    }
}
