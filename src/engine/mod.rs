//! Execution engine primitives.
//!
//! - Deterministic RNG (PCG with partitioned seeds)

pub mod rng;

pub use rng::SortRng;
