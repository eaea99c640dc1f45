//! Closed tours through vertex 0.

use serde::Serialize;

use crate::evaluation::path_cost;
use crate::graph::Graph;

/// A closed walk `0 → … → 0` together with its cost.
///
/// The path holds `vertex_count + 1` entries: the origin, every other vertex
/// once, and the origin again. The cost is `f64::INFINITY` when some
/// consecutive pair is not joined by an edge.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::models::Tour;
///
/// let graph = Graph::new(3, vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).expect("valid");
/// let tour = Tour::new(vec![0, 1, 2, 0], &graph);
/// assert_eq!(tour.cost(), 6.0);
/// assert!(tour.is_feasible());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    path: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Pairs `path` with its cost on `graph`.
    pub fn new(path: Vec<usize>, graph: &Graph) -> Self {
        let cost = path_cost(&path, graph);
        Self { path, cost }
    }

    /// Pairs `path` with a cost the caller already computed.
    pub(crate) fn with_cost(path: Vec<usize>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// Vertex sequence, origin first and last.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Total edge weight, or `f64::INFINITY` if infeasible.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if every step uses an existing edge.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of entries in the path (vertex count + 1).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the path has no entries.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Splits into the path and its cost.
    pub fn into_parts(self) -> (Vec<usize>, f64) {
        (self.path, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(
            3,
            vec![
                vec![0.0, 1.0, 0.0],
                vec![1.0, 0.0, 3.0],
                vec![2.0, 3.0, 0.0],
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_tour_cost() {
        let t = Tour::new(vec![0, 1, 2, 0], &triangle());
        assert_eq!(t.cost(), 6.0);
        assert_eq!(t.len(), 4);
        assert_eq!(t.path(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_missing_edge_is_infeasible() {
        // 0 → 2 has no edge
        let t = Tour::new(vec![0, 2, 1, 0], &triangle());
        assert!(!t.is_feasible());
        assert!(t.cost().is_infinite());
    }

    #[test]
    fn test_into_parts() {
        let (path, cost) = Tour::new(vec![0, 1, 2, 0], &triangle()).into_parts();
        assert_eq!(path, vec![0, 1, 2, 0]);
        assert_eq!(cost, 6.0);
    }

    #[test]
    fn test_serialize() {
        let t = Tour::new(vec![0, 1, 2, 0], &triangle());
        let json = serde_json::to_string(&t).expect("serialize");
        assert_eq!(json, r#"{"path":[0,1,2,0],"cost":6.0}"#);
    }
}
