//! Deterministic random graph generator.
//!
//! Produces [`AdjacencyList`] values whose neighbors always resolve, so
//! every generated graph builds. Cyclic structure is controlled by a ring
//! backbone: each vertex `v{i}` carries an edge to `v{(i+1) % n}` with
//! probability `ring_density`, plus `avg_out_degree` uniformly random
//! chords. A full ring guarantees a Hamiltonian cycle; sparser rings leave
//! cycles to chance, which is useful for benchmarking the not-found path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use randcycle_core::AdjacencyList;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub num_vertices: usize,
    /// Random chord edges added per vertex.
    pub avg_out_degree: usize,
    /// Probability that a vertex carries its ring edge (0.0-1.0).
    pub ring_density: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~20 vertices, ~3 chords per vertex.
    Small,
    /// ~200 vertices, ~4 chords per vertex.
    Medium,
    /// ~2000 vertices, ~5 chords per vertex.
    Large,
}

impl SizeTier {
    /// Returns the generator configuration for this tier with the given seed.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_vertices, avg_out_degree) = match self {
            SizeTier::Small => (20, 3),
            SizeTier::Medium => (200, 4),
            SizeTier::Large => (2000, 5),
        };
        GeneratorConfig {
            seed,
            num_vertices,
            avg_out_degree,
            ring_density: 1.0,
        }
    }
}

/// Generates an adjacency list from the configuration.
///
/// Vertex identifiers are `v0 .. v{n-1}`. Chord targets are drawn uniformly
/// over all vertices except the source itself, so the generator never emits
/// self-loops; duplicate chords (parallel edges) can occur and are legal in
/// the input model.
pub fn generate_graph(config: &GeneratorConfig) -> AdjacencyList {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.num_vertices;
    let mut adj = AdjacencyList::new();

    for i in 0..n {
        let mut neighbors: Vec<String> = Vec::with_capacity(config.avg_out_degree + 1);

        if n > 1 && rng.gen_bool(config.ring_density) {
            neighbors.push(format!("v{}", (i + 1) % n));
        }

        if n > 1 {
            for _ in 0..config.avg_out_degree {
                // Skip over the source index to avoid self-loops.
                let mut target = rng.gen_range(0..n - 1);
                if target >= i {
                    target += 1;
                }
                neighbors.push(format!("v{target}"));
            }
        }

        adj.add_vertex(&format!("v{i}"), neighbors);
    }

    adj
}
