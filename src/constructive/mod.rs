//! Constructive heuristics for building an initial tour.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk for complete graphs, O(n²)
//! - [`first_feasible`] — Row-order backtracking for any graph, exponential worst case

mod backtracking;
mod nearest_neighbor;

pub use backtracking::first_feasible;
pub use nearest_neighbor::nearest_neighbor;
