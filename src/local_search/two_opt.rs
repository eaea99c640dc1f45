//! Steepest-descent segment reversal (2-opt) on closed tours.
//!
//! # Algorithm
//!
//! Each pass tries every reversal of positions `i..=j` with
//! `1 ≤ i < j ≤ n − 1` (the origin at both ends never moves), scores the
//! candidate with [`path_cost`], and remembers the single candidate with the
//! largest strictly positive gain. Only after the full scan is that
//! candidate adopted; a pass with no positive gain ends the search.
//!
//! # Complexity
//!
//! O(n²) candidates per pass, O(n) each: O(n³) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::constructive::first_feasible;
use crate::error::SolveError;
use crate::evaluation::path_cost;
use crate::graph::Graph;
use crate::models::Tour;

/// Outcome of a descent: the final tour and how many passes improved it.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentResult {
    /// The local optimum reached.
    pub tour: Tour,
    /// Number of passes that adopted an improving reversal.
    pub passes: usize,
}

/// Returns a copy of `path` with positions `i..=j` reversed.
///
/// # Panics
///
/// Panics if `i > j` or `j` is out of bounds.
pub fn reverse_segment(path: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut candidate = path.to_vec();
    candidate[i..=j].reverse();
    candidate
}

/// Seeds with [`first_feasible`] and runs the descent to a local optimum.
///
/// Returns [`SolveError::NoInitialPath`] if no seed tour exists.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::local_search::two_opt_descent;
///
/// let graph = Graph::new(4, vec![
///     vec![0.0, 10.0, 8.0, 9.0],
///     vec![10.0, 0.0, 7.0, 11.0],
///     vec![8.0, 7.0, 0.0, 12.0],
///     vec![9.0, 11.0, 12.0, 0.0],
/// ]).expect("valid");
///
/// // seed 0→1→2→3→0 costs 38
/// let tour = two_opt_descent(&graph).expect("seed exists");
/// assert_eq!(tour.path(), &[0, 2, 1, 3, 0]);
/// assert_eq!(tour.cost(), 35.0);
/// ```
pub fn two_opt_descent(graph: &Graph) -> Result<Tour, SolveError> {
    let seed = first_feasible(graph).map_err(|_| SolveError::NoInitialPath)?;
    Ok(two_opt_improve(graph, seed))
}

/// Runs the descent from `seed` and returns the local optimum.
pub fn two_opt_improve(graph: &Graph, seed: Tour) -> Tour {
    two_opt_improve_with_stats(graph, seed).tour
}

/// Like [`two_opt_improve`], also reporting the number of adopted passes.
pub fn two_opt_improve_with_stats(graph: &Graph, seed: Tour) -> DescentResult {
    let (mut current, mut cost) = seed.into_parts();
    let last = graph.vertex_count().saturating_sub(1);
    let mut passes = 0;

    loop {
        let mut best_gain = 0.0;
        let mut best: Option<(Vec<usize>, f64)> = None;

        for i in 1..last {
            for j in (i + 1)..=last {
                let candidate = reverse_segment(&current, i, j);
                let candidate_cost = path_cost(&candidate, graph);
                // -inf for an infeasible candidate
                let gain = cost - candidate_cost;
                if gain > best_gain {
                    best_gain = gain;
                    best = Some((candidate, candidate_cost));
                }
            }
        }

        match best {
            Some((path, c)) => {
                current = path;
                cost = c;
                passes += 1;
            }
            None => break,
        }
    }

    DescentResult {
        tour: Tour::with_cost(current, cost),
        passes,
    }
}
