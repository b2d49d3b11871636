//! Random graph generator and benchmark utilities for randcycle.
//!
//! This crate provides deterministic generation of adjacency-list graphs
//! with tunable cyclic structure, for benchmarking and integration testing
//! of `randcycle-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_graph};
