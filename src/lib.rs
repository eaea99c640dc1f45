//! # u-tour
//!
//! Traveling-salesman heuristics for small weighted graphs, from a greedy
//! walk up to simulated annealing, plus the coloring utilities that share
//! the same graph model.
//!
//! ## Modules
//!
//! - [`graph`] — Weighted adjacency matrix and interval graphs
//! - [`models`] — Tour type
//! - [`evaluation`] — Path cost with an infinite-cost sentinel for missing edges
//! - [`constructive`] — Nearest-neighbor walk and backtracking search
//! - [`local_search`] — Steepest-descent segment reversal (2-opt)
//! - [`sa`] — Simulated annealing with geometric cooling
//! - [`coloring`] — Greedy and Welsh-Powell vertex coloring
//!
//! ## Example
//!
//! ```
//! use u_tour::graph::Graph;
//! use u_tour::{solve, Strategy};
//!
//! let graph = Graph::new(4, vec![
//!     vec![0.0, 10.0, 8.0, 9.0],
//!     vec![10.0, 0.0, 7.0, 11.0],
//!     vec![8.0, 7.0, 0.0, 12.0],
//!     vec![9.0, 11.0, 12.0, 0.0],
//! ]).expect("valid");
//!
//! let tour = solve(&graph, &Strategy::TwoOpt).expect("tour");
//! assert_eq!(tour.path(), &[0, 2, 1, 3, 0]);
//! ```

pub mod coloring;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod sa;
mod solver;

pub use error::{ConfigError, GraphError, SolveError};
pub use solver::{solve, Strategy};
