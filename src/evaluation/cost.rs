//! Path cost and tour shape checks.

use crate::graph::Graph;

/// Total weight of the walk `path[0] → path[1] → …`.
///
/// Returns `f64::INFINITY` as soon as a consecutive pair has no edge
/// (weight `0.0`). An empty or single-vertex path costs `0.0`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::evaluation::path_cost;
///
/// let graph = Graph::new(3, vec![
///     vec![0.0, 4.0, 0.0],
///     vec![4.0, 0.0, 1.0],
///     vec![0.0, 1.0, 0.0],
/// ]).expect("valid");
/// assert_eq!(path_cost(&[0, 1, 2], &graph), 5.0);
/// assert!(path_cost(&[0, 2, 1], &graph).is_infinite());
/// ```
pub fn path_cost(path: &[usize], graph: &Graph) -> f64 {
    let mut total = 0.0;
    for w in path.windows(2) {
        let d = graph.get(w[0], w[1]);
        if d == 0.0 {
            return f64::INFINITY;
        }
        total += d;
    }
    total
}

/// Returns `true` if `path` is a closed tour over `vertex_count` vertices:
/// `vertex_count + 1` entries, `0` at both ends, every other vertex exactly
/// once in between.
pub fn is_tour(path: &[usize], vertex_count: usize) -> bool {
    if vertex_count == 0 {
        return false;
    }
    if path.len() != vertex_count + 1 || path[0] != 0 || path[vertex_count] != 0 {
        return false;
    }
    let mut seen = vec![false; vertex_count];
    seen[0] = true;
    for &v in &path[1..vertex_count] {
        if v >= vertex_count || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
