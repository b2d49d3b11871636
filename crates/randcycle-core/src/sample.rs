//! Bounded random cycle sampling via randomized backtracking DFS.
//!
//! [`find_random_cycle`] attempts to find a simple cycle through a start
//! vertex whose edge count lies in a caller-supplied inclusive range. Each
//! attempt is an independent depth-first search that shuffles the successor
//! list freshly at every vertex visit, closes the cycle the first time the
//! start vertex is reachable at a qualifying path length, and abandons any
//! branch that exceeds the upper length bound. The first closure found wins;
//! no preference is given to shorter or longer cycles.
//!
//! This is a heuristic sampler, not a complete search: it can miss a
//! qualifying cycle that exists, and it makes no uniformity guarantee over
//! which qualifying cycle is returned. Exhaustive enumeration is exponential;
//! shuffling plus a retry budget keeps the common case cheap.
//!
//! # Search state
//!
//! The recursive formulation (copy the path and visited set per branch) is
//! realized here as an explicit frame stack plus an index-addressed visited
//! bitmask that is unwound on backtrack. Stack depth is bounded by the upper
//! length bound, and no per-branch allocation happens beyond the shuffled
//! successor list itself.
//!
//! # Degenerate closures
//!
//! A self-loop on the start vertex would close a 1-edge "cycle". Those are
//! never returned: the effective minimum closure length is
//! `max(min_len, MIN_CYCLE_LEN)`, so `min_len = 1` behaves as 2.

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::NodeIndexable;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::CycleGraph;

/// Default retry budget for [`find_random_cycle`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Smallest edge count a returned cycle may have.
///
/// Rules out the degenerate 1-edge self-loop closure on the start vertex.
pub const MIN_CYCLE_LEN: usize = 2;

// ---------------------------------------------------------------------------
// LengthBounds
// ---------------------------------------------------------------------------

/// A validated inclusive `[min_len, max_len]` cycle-length range, counted in
/// edges.
///
/// Construct with [`LengthBounds::new`]; an instance always satisfies
/// `1 <= min_len <= max_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min_len: usize,
    max_len: usize,
}

impl LengthBounds {
    /// Validates and constructs a length range.
    ///
    /// # Errors
    ///
    /// - [`BoundsError::ZeroMin`] if `min_len` is 0.
    /// - [`BoundsError::EmptyRange`] if `min_len > max_len`.
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, BoundsError> {
        if min_len == 0 {
            return Err(BoundsError::ZeroMin);
        }
        if min_len > max_len {
            return Err(BoundsError::EmptyRange { min_len, max_len });
        }
        Ok(LengthBounds { min_len, max_len })
    }

    /// Lower bound, in edges.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Upper bound, in edges.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

/// Errors produced by [`LengthBounds::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// `min_len` was 0; cycle lengths are counted in edges and start at 1.
    ZeroMin,
    /// `min_len` exceeds `max_len`, so no length can satisfy the range.
    EmptyRange {
        /// The offending lower bound.
        min_len: usize,
        /// The offending upper bound.
        max_len: usize,
    },
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsError::ZeroMin => write!(f, "min_len must be at least 1"),
            BoundsError::EmptyRange { min_len, max_len } => {
                write!(f, "empty length range: min_len {min_len} > max_len {max_len}")
            }
        }
    }
}

impl std::error::Error for BoundsError {}

// ---------------------------------------------------------------------------
// SampleError
// ---------------------------------------------------------------------------

/// Errors that can occur during cycle sampling.
///
/// Exhausting the attempt budget is *not* an error; that is the designed
/// expected-failure path and is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The start identifier supplied to the sampler is not a vertex of the
    /// graph.
    ///
    /// The contained string is the unknown identifier.
    StartNotFound(String),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::StartNotFound(id) => write!(f, "start vertex not found: {id:?}"),
        }
    }
}

impl std::error::Error for SampleError {}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Attempts to sample a simple cycle through `start` whose edge count lies
/// in `bounds`, using up to `max_attempts` independent randomized searches.
///
/// On success the returned sequence starts and ends with `start`, contains
/// no internal repeats, and every consecutive pair is a directed edge of
/// `graph`. `Ok(None)` means the attempt budget was exhausted without a
/// qualifying closure — possible even when such a cycle exists, since each
/// attempt is a randomized heuristic rather than an exhaustive search.
///
/// Passing a seeded RNG makes the whole search deterministic; see
/// [`find_random_cycle_seeded`] for a convenience wrapper.
///
/// # Errors
///
/// Returns [`SampleError::StartNotFound`] if `start` is not a vertex of
/// `graph`.
pub fn find_random_cycle<R: Rng + ?Sized>(
    graph: &CycleGraph,
    start: &str,
    bounds: LengthBounds,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Option<Vec<String>>, SampleError> {
    let start_idx = *graph
        .node_index(start)
        .ok_or_else(|| SampleError::StartNotFound(start.to_owned()))?;

    for _ in 0..max_attempts {
        if let Some(cycle) = attempt(graph, start_idx, bounds, rng) {
            return Ok(Some(resolve_ids(graph, &cycle)));
        }
    }

    Ok(None)
}

/// [`find_random_cycle`] with a `StdRng` seeded from `seed`.
///
/// Two calls with identical inputs and the same seed return the same result.
///
/// # Errors
///
/// Returns [`SampleError::StartNotFound`] if `start` is not a vertex of
/// `graph`.
pub fn find_random_cycle_seeded(
    graph: &CycleGraph,
    start: &str,
    bounds: LengthBounds,
    max_attempts: usize,
    seed: u64,
) -> Result<Option<Vec<String>>, SampleError> {
    let mut rng = StdRng::seed_from_u64(seed);
    find_random_cycle(graph, start, bounds, max_attempts, &mut rng)
}

// ---------------------------------------------------------------------------
// Search internals
// ---------------------------------------------------------------------------

/// One DFS stack frame: the shuffled successor list of the vertex at the
/// same depth in `path`, plus a cursor over the entries not yet tried.
struct Frame {
    successors: Vec<NodeIndex>,
    cursor: usize,
}

impl Frame {
    fn new(successors: Vec<NodeIndex>) -> Self {
        Frame {
            successors,
            cursor: 0,
        }
    }
}

/// Runs one randomized DFS from `start`; returns the closed path on success.
///
/// Invariants maintained by the loop:
/// - `path.len() == stack.len()` — frame `i` holds the successors of
///   `path[i]`.
/// - `visited[v]` is true exactly for the vertices currently on `path`.
/// - `path.len() <= bounds.max_len()`, so a closure can never exceed the
///   upper bound.
fn attempt<R: Rng + ?Sized>(
    graph: &CycleGraph,
    start: NodeIndex,
    bounds: LengthBounds,
    rng: &mut R,
) -> Option<Vec<NodeIndex>> {
    let min_close = bounds.min_len().max(MIN_CYCLE_LEN);

    let mut visited = vec![false; graph.graph().node_bound()];
    visited[start.index()] = true;
    let mut path = vec![start];
    let mut stack = vec![Frame::new(shuffled_successors(graph, start, rng))];

    loop {
        let next = match stack.last_mut() {
            None => return None,
            Some(frame) => {
                if frame.cursor < frame.successors.len() {
                    let n = frame.successors[frame.cursor];
                    frame.cursor += 1;
                    Some(n)
                } else {
                    None
                }
            }
        };

        match next {
            // Closing edge back to the start at a qualifying length wins
            // immediately. `path.len()` is the edge count of the closed
            // cycle, already capped at `max_len` by the extension guard.
            Some(n) if n == start && path.len() >= min_close => {
                path.push(start);
                return Some(path);
            }
            // Extend the path. A successor already on the path would repeat
            // an internal vertex; a path at `max_len` has no room to grow
            // and can only close.
            Some(n) if !visited[n.index()] && path.len() < bounds.max_len() => {
                visited[n.index()] = true;
                path.push(n);
                stack.push(Frame::new(shuffled_successors(graph, n, rng)));
            }
            // Successor rejected; try the next one in this frame.
            Some(_) => {}
            // Frame exhausted: backtrack one step, unwinding the bitmask.
            None => {
                stack.pop();
                if let Some(dropped) = path.pop() {
                    visited[dropped.index()] = false;
                }
            }
        }
    }
}

/// Returns the successors of `node` in a fresh uniformly random order.
///
/// A new permutation is drawn on every visit, so exploration order varies
/// both between attempts and along a single attempt's branches.
fn shuffled_successors<R: Rng + ?Sized>(
    graph: &CycleGraph,
    node: NodeIndex,
    rng: &mut R,
) -> Vec<NodeIndex> {
    let mut successors = graph.successors(node);
    successors.shuffle(rng);
    successors
}

/// Resolves a path of node indices back to vertex identifier strings.
fn resolve_ids(graph: &CycleGraph, path: &[NodeIndex]) -> Vec<String> {
    path.iter()
        .filter_map(|&idx| graph.vertex_id(idx).map(str::to_owned))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
