#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod adjacency;
pub mod graph;
pub mod sample;

pub use adjacency::{AdjacencyList, AdjacencyParseError, parse_adjacency};
pub use graph::{CycleGraph, DegreeStats, GraphBuildError, VertexWeight, build_graph};
pub use sample::{
    BoundsError, DEFAULT_MAX_ATTEMPTS, LengthBounds, MIN_CYCLE_LEN, SampleError,
    find_random_cycle, find_random_cycle_seeded,
};

/// Returns the current version of the randcycle-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
