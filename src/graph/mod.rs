//! Graph model.
//!
//! A dense weighted adjacency matrix shared read-only by every algorithm,
//! and the interval-graph builder used by the coloring utilities.

mod interval;
mod matrix;

pub use interval::{Interval, IntervalGraph, IntervalSet};
pub use matrix::{AdjacencyRows, Graph};
