//! Nearest-neighbor tour construction.
//!
//! Starting from vertex 0, always move to the closest unvisited vertex, then
//! return to the origin. Intended for complete graphs.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.

use crate::error::SolveError;
use crate::graph::Graph;
use crate::models::Tour;

/// Builds a tour greedily from vertex 0.
///
/// At each step the unvisited vertex with the strictly smallest positive
/// weight from the current vertex is chosen; ties go to the lowest index.
///
/// If the closing edge back to 0 is missing the tour is returned with cost
/// `f64::INFINITY`. If the walk gets stuck before visiting every vertex
/// (the graph is not complete) the result is [`SolveError::NoPathFound`].
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::constructive::nearest_neighbor;
///
/// let graph = Graph::new(4, vec![
///     vec![0.0, 10.0, 8.0, 9.0],
///     vec![10.0, 0.0, 7.0, 11.0],
///     vec![8.0, 7.0, 0.0, 12.0],
///     vec![9.0, 11.0, 12.0, 0.0],
/// ]).expect("valid");
///
/// let tour = nearest_neighbor(&graph).expect("complete graph");
/// assert_eq!(tour.path(), &[0, 2, 1, 3, 0]);
/// assert_eq!(tour.cost(), 35.0);
/// ```
pub fn nearest_neighbor(graph: &Graph) -> Result<Tour, SolveError> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    visited[0] = true;

    let mut path = Vec::with_capacity(n + 1);
    path.push(0);
    let mut cost = 0.0;
    let mut current = 0;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (i, d) in graph.neighbors(current) {
            if visited[i] {
                continue;
            }
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }

        let (next, d) = best.ok_or(SolveError::NoPathFound)?;
        visited[next] = true;
        path.push(next);
        cost += d;
        current = next;
    }

    let back = graph.get(current, 0);
    path.push(0);
    if back == 0.0 {
        return Ok(Tour::with_cost(path, f64::INFINITY));
    }
    Ok(Tour::with_cost(path, cost + back))
}
