//! Dense weighted adjacency matrix.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// A weighted graph over vertices `0..n`, stored as a dense n×n matrix in
/// row-major order.
///
/// Entry `(i, j)` is the weight of the edge `i → j`; `0.0` means there is no
/// edge. The matrix need not be symmetric. The diagonal is never traversed.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
///
/// let graph = Graph::new(3, vec![
///     vec![0.0, 5.0, 0.0],
///     vec![5.0, 0.0, 2.0],
///     vec![0.0, 2.0, 0.0],
/// ]).expect("square matrix");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.get(1, 2), 2.0);
/// assert!(!graph.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyRows", into = "AdjacencyRows")]
pub struct Graph {
    data: Vec<f64>,
    size: usize,
}

/// Serialized form of a [`Graph`]: a vertex count and one row per vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyRows {
    /// Declared number of vertices.
    pub vertex_count: usize,
    /// Row `i` holds the weights of the edges leaving vertex `i`.
    pub adjacency: Vec<Vec<f64>>,
}

impl Graph {
    /// Creates a graph from a vertex count and an adjacency matrix given
    /// row by row.
    ///
    /// Fails with [`GraphError::ShapeMismatch`] unless there are exactly
    /// `vertex_count` rows of `vertex_count` entries.
    pub fn new(vertex_count: usize, rows: Vec<Vec<f64>>) -> Result<Self, GraphError> {
        if rows.len() != vertex_count {
            return Err(GraphError::ShapeMismatch {
                expected: vertex_count,
                found: format!("{} rows", rows.len()),
            });
        }
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != vertex_count)
        {
            return Err(GraphError::ShapeMismatch {
                expected: vertex_count,
                found: format!("row {i} with {} entries", row.len()),
            });
        }
        Self::from_data(vertex_count, rows.into_iter().flatten().collect())
    }

    /// Creates a graph from a flat row-major buffer of `size * size` weights.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, GraphError> {
        if size == 0 {
            return Err(GraphError::Empty);
        }
        if size.checked_mul(size) != Some(data.len()) {
            return Err(GraphError::ShapeMismatch {
                expected: size,
                found: format!("{} entries", data.len()),
            });
        }
        if let Some(k) = data.iter().position(|w| !w.is_finite() || *w < 0.0) {
            return Err(GraphError::InvalidWeight {
                from: k / size,
                to: k % size,
                weight: data[k],
            });
        }
        Ok(Self { data, size })
    }

    /// Skips validation for matrices built inside the crate.
    pub(crate) fn from_trusted(size: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { data, size }
    }

    /// Returns the weight of `from → to` (`0.0` when there is no edge).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Returns `true` if `from → to` carries a positive weight.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get(from, to) > 0.0
    }

    /// The weights leaving `vertex`, one per column.
    pub fn row(&self, vertex: usize) -> &[f64] {
        &self.data[vertex * self.size..(vertex + 1) * self.size]
    }

    /// Neighbors of `vertex` with their weights, in column order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row(vertex)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, w)| w > 0.0)
    }

    /// Number of outgoing edges of `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every ordered pair of distinct vertices is joined.
    pub fn is_complete(&self) -> bool {
        (0..self.size).all(|i| (0..self.size).all(|j| i == j || self.has_edge(i, j)))
    }

    /// Copies the matrix out row by row.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<AdjacencyRows> for Graph {
    type Error = GraphError;

    fn try_from(raw: AdjacencyRows) -> Result<Self, Self::Error> {
        Graph::new(raw.vertex_count, raw.adjacency)
    }
}

impl From<Graph> for AdjacencyRows {
    fn from(graph: Graph) -> Self {
        Self {
            vertex_count: graph.size,
            adjacency: graph.rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete4() -> Graph {
        Graph::new(
            4,
            vec![
                vec![0.0, 10.0, 8.0, 9.0],
                vec![10.0, 0.0, 7.0, 11.0],
                vec![8.0, 7.0, 0.0, 12.0],
                vec![9.0, 11.0, 12.0, 0.0],
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_new_and_get() {
        let g = complete4();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.get(0, 2), 8.0);
        assert_eq!(g.get(3, 2), 12.0);
        assert_eq!(g.row(1), &[10.0, 0.0, 7.0, 11.0]);
    }

    #[test]
    fn test_wrong_row_count() {
        let err = Graph::new(3, vec![vec![0.0; 3], vec![0.0; 3]]).unwrap_err();
        assert!(matches!(err, GraphError::ShapeMismatch { expected: 3, .. }));
    }

    #[test]
    fn test_ragged_row() {
        let err = Graph::new(2, vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::ShapeMismatch {
                expected: 2,
                found: "row 1 with 1 entries".into(),
            }
        );
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(matches!(
            Graph::from_data(2, vec![0.0, 1.0, 2.0]),
            Err(GraphError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_from_data_size_overflow() {
        assert!(matches!(
            Graph::from_data(1 << 32, vec![]),
            Err(GraphError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            Graph::from_data(usize::MAX, vec![0.0]),
            Err(GraphError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_graph_rejected() {
        assert_eq!(Graph::new(0, vec![]), Err(GraphError::Empty));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = Graph::new(2, vec![vec![0.0, 1.0], vec![-3.0, 0.0]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidWeight {
                from: 1,
                to: 0,
                weight: -3.0,
            }
        );
    }

    #[test]
    fn test_neighbors_in_row_order() {
        let g = Graph::new(
            3,
            vec![
                vec![0.0, 0.0, 4.0],
                vec![1.0, 0.0, 2.0],
                vec![4.0, 2.0, 0.0],
            ],
        )
        .expect("valid");
        let n: Vec<_> = g.neighbors(1).collect();
        assert_eq!(n, vec![(0, 1.0), (2, 2.0)]);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(2), 2);
    }

    #[test]
    fn test_symmetric_and_complete() {
        let g = complete4();
        assert!(g.is_symmetric(1e-10));
        assert!(g.is_complete());

        let sparse = Graph::new(2, vec![vec![0.0, 1.0], vec![0.0, 0.0]]).expect("valid");
        assert!(!sparse.is_symmetric(1e-10));
        assert!(!sparse.is_complete());
    }

    #[test]
    fn test_serde_round_trip() {
        let g = complete4();
        let json = serde_json::to_string(&g).expect("serialize");
        assert!(json.contains("\"vertex_count\":4"));
        let back: Graph = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, g);
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let json = r#"{"vertex_count": 3, "adjacency": [[0, 1], [1, 0]]}"#;
        assert!(serde_json::from_str::<Graph>(json).is_err());
    }
}
