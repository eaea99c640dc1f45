//! Path cost evaluation.
//!
//! Every solver scores candidate paths here; a path with a missing edge
//! costs `f64::INFINITY`.

mod cost;

pub use cost::{is_tour, path_cost};
