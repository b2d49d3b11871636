//! Tests that generated graphs build and sample correctly across tiers.
#![allow(clippy::expect_used)]

use randcycle_bench::{GeneratorConfig, SizeTier, generate_graph};
use randcycle_core::{LengthBounds, build_graph, find_random_cycle_seeded};

/// Every neighbor of a generated graph must resolve to a vertex.
fn assert_builds(adj: &randcycle_core::AdjacencyList, label: &str) {
    let graph = build_graph(adj).expect("generated graph must build");
    assert_eq!(graph.vertex_count(), adj.vertex_count(), "{label}");
    assert_eq!(graph.edge_count(), adj.edge_count(), "{label}");
}

#[test]
fn generated_small_builds() {
    for seed in [42, 123, 999, 7777, 54321] {
        let adj = generate_graph(&SizeTier::Small.config(seed));
        assert_builds(&adj, &format!("Small/seed={seed}"));
    }
}

#[test]
fn generated_medium_builds() {
    for seed in [42, 123, 999] {
        let adj = generate_graph(&SizeTier::Medium.config(seed));
        assert_builds(&adj, &format!("Medium/seed={seed}"));
    }
}

#[test]
fn generated_large_builds() {
    let adj = generate_graph(&SizeTier::Large.config(42));
    assert_builds(&adj, "Large/seed=42");
}

#[test]
fn generated_graphs_never_contain_self_loops() {
    let adj = generate_graph(&SizeTier::Medium.config(7));
    let graph = build_graph(&adj).expect("builds");
    assert_eq!(graph.degree_stats().self_loop_count, 0);
}

/// The full ring backbone guarantees a Hamiltonian cycle, so a sampler run
/// with a wide length range must succeed.
#[test]
fn full_ring_tier_yields_cycles() {
    let adj = generate_graph(&SizeTier::Small.config(42));
    let graph = build_graph(&adj).expect("builds");
    let bounds = LengthBounds::new(2, 20).expect("valid bounds");
    let cycle = find_random_cycle_seeded(&graph, "v0", bounds, 1000, 9)
        .expect("v0 exists")
        .expect("ring graph always has cycles through v0");
    assert_eq!(cycle.first().map(String::as_str), Some("v0"));
    assert_eq!(cycle.last().map(String::as_str), Some("v0"));
}

/// Ring density 0 with no chords produces an edgeless graph: sampling must
/// always report not-found.
#[test]
fn edgeless_generated_graph_never_yields_cycles() {
    let config = GeneratorConfig {
        seed: 3,
        num_vertices: 12,
        avg_out_degree: 0,
        ring_density: 0.0,
    };
    let adj = generate_graph(&config);
    let graph = build_graph(&adj).expect("builds");
    let bounds = LengthBounds::new(1, 10).expect("valid bounds");
    let result = find_random_cycle_seeded(&graph, "v0", bounds, 100, 0).expect("v0 exists");
    assert_eq!(result, None);
}
