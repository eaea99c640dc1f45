//! Local search over closed tours.
//!
//! - [`two_opt_descent`] — Steepest-descent segment reversal from a backtracking seed

mod two_opt;

pub use two_opt::{
    reverse_segment, two_opt_descent, two_opt_improve, two_opt_improve_with_stats,
    DescentResult,
};
