//! Welsh-Powell coloring.
//!
//! Vertices are colored first-fit in order of decreasing degree. A cap `k`
//! bounds the palette; vertices that fit none of the `k` colors are left
//! uncolored, so the result answers "is the graph k-colorable by this
//! heuristic?" rather than "is the graph k-colorable?".
//!
//! # Reference
//!
//! Welsh, D.J.A. & Powell, M.B. (1967). "An upper bound for the chromatic
//! number of a graph and its application to timetabling problems",
//! *The Computer Journal* 10(1), 85-86.

use super::greedy::assign_colors;
use super::Coloring;
use crate::graph::Graph;

/// Vertices sorted by decreasing degree; equal degrees keep index order.
pub fn degree_order(graph: &Graph) -> Vec<usize> {
    let degrees: Vec<usize> = (0..graph.vertex_count()).map(|v| graph.degree(v)).collect();
    let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
    order.sort_by(|&a, &b| degrees[b].cmp(&degrees[a]));
    order
}

/// Colors `graph` with at most `k` colors in [`degree_order`].
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::coloring::welsh_powell;
///
/// // a 4-cycle is 2-colorable
/// let graph = Graph::new(4, vec![
///     vec![0.0, 1.0, 0.0, 1.0],
///     vec![1.0, 0.0, 1.0, 0.0],
///     vec![0.0, 1.0, 0.0, 1.0],
///     vec![1.0, 0.0, 1.0, 0.0],
/// ]).expect("valid");
///
/// let coloring = welsh_powell(&graph, 2);
/// assert!(coloring.is_k_colorable(2));
/// assert!(coloring.is_total());
/// assert_eq!(coloring.colors_used(), 2);
/// ```
pub fn welsh_powell(graph: &Graph, k: usize) -> Coloring {
    assign_colors(graph, &degree_order(graph), Some(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine() -> Graph {
        let rows = [
            [0, 0, 1, 1, 0, 1, 0, 0, 1],
            [0, 0, 1, 0, 1, 0, 1, 1, 0],
            [1, 1, 0, 1, 1, 1, 1, 0, 0],
            [1, 0, 1, 0, 0, 0, 1, 0, 0],
            [0, 1, 1, 0, 0, 1, 0, 0, 0],
            [1, 0, 1, 0, 1, 0, 0, 0, 0],
            [0, 1, 1, 1, 0, 0, 0, 0, 0],
            [0, 1, 0, 0, 0, 0, 0, 0, 0],
            [1, 0, 0, 0, 0, 0, 0, 0, 0],
        ];
        Graph::new(
            9,
            rows.iter()
                .map(|r| r.iter().map(|&x| f64::from(x)).collect())
                .collect(),
        )
        .expect("valid")
    }

    #[test]
    fn test_degree_order() {
        assert_eq!(degree_order(&nine()), vec![2, 0, 1, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_four_colors() {
        let g = nine();
        let c = welsh_powell(&g, 4);
        assert_eq!(
            c.colors(),
            &[
                Some(1),
                Some(1),
                Some(0),
                Some(2),
                Some(2),
                Some(3),
                Some(3),
                Some(0),
                Some(0),
            ]
        );
        assert_eq!(c.colors_used(), 4);
        assert!(c.is_k_colorable(4));
        assert!(c.is_total());
        assert!(c.is_proper(&g));
    }

    #[test]
    fn test_cap_leaves_vertices_uncolored() {
        let g = nine();
        let c = welsh_powell(&g, 2);
        assert_eq!(c.colors_used(), 2);
        assert_eq!(c.uncolored(), vec![3, 4, 5, 6]);
        assert!(c.is_k_colorable(2));
        assert!(!c.is_total());
        assert!(c.is_proper(&g));

        let c = welsh_powell(&g, 3);
        assert_eq!(c.uncolored(), vec![5, 6]);
        assert!(c.is_k_colorable(3));
        assert!(!c.is_total());
    }

    #[test]
    fn test_verdict_on_partial_triangle() {
        let g = Graph::new(
            3,
            vec![
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
            ],
        )
        .expect("valid");
        let c = welsh_powell(&g, 2);
        assert_eq!(c.colors_used(), 2);
        assert_eq!(c.uncolored(), vec![2]);
        assert!(c.is_k_colorable(2));
        assert!(!c.is_k_colorable(1));
        assert!(!c.is_total());

        let c = welsh_powell(&g, 3);
        assert!(c.is_k_colorable(3));
        assert!(c.is_total());
    }

    #[test]
    fn test_zero_cap() {
        let c = welsh_powell(&nine(), 0);
        assert_eq!(c.colors_used(), 0);
        assert_eq!(c.uncolored().len(), 9);
        assert!(c.is_k_colorable(0));
        assert!(!c.is_total());
    }

    #[test]
    fn test_edgeless_graph_uses_one_color() {
        let g = Graph::new(3, vec![vec![0.0; 3]; 3]).expect("valid");
        let c = welsh_powell(&g, 1);
        assert_eq!(c.colors(), &[Some(0), Some(0), Some(0)]);
        assert!(c.is_k_colorable(1));
    }
}
