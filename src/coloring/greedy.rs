//! Greedy coloring along an explicit vertex order.

use super::Coloring;
use crate::error::GraphError;
use crate::graph::Graph;

/// Colors vertices in `order`, giving each the smallest existing color that
/// none of its already-colored neighbors uses, or a new color if none fits.
///
/// On an interval graph with vertices ordered by interval start this uses
/// the minimum number of colors.
///
/// # Errors
///
/// [`GraphError::OrderLengthMismatch`] if `order` does not have one entry per
/// vertex, [`GraphError::InvalidOrder`] if it is not a permutation of the
/// vertices.
///
/// # Examples
///
/// ```
/// use u_tour::graph::IntervalSet;
/// use u_tour::coloring::greedy_coloring;
///
/// let set = IntervalSet::new(vec![(1.0, 4.0), (2.0, 6.0), (5.0, 7.0)]).expect("valid");
/// let ig = set.to_graph();
/// let coloring = greedy_coloring(&ig.graph, &ig.order).expect("valid order");
/// assert_eq!(coloring.colors_used(), 2);
/// assert_eq!(coloring.color_of(2), Some(0));
/// ```
pub fn greedy_coloring(graph: &Graph, order: &[usize]) -> Result<Coloring, GraphError> {
    validate_order(order, graph.vertex_count())?;
    Ok(assign_colors(graph, order, None))
}

fn validate_order(order: &[usize], n: usize) -> Result<(), GraphError> {
    if order.len() != n {
        return Err(GraphError::OrderLengthMismatch {
            expected: n,
            found: order.len(),
        });
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n {
            return Err(GraphError::InvalidOrder(format!("vertex {v} out of range")));
        }
        if seen[v] {
            return Err(GraphError::InvalidOrder(format!("vertex {v} repeated")));
        }
        seen[v] = true;
    }
    Ok(())
}

/// Shared first-fit assignment. With `cap = Some(k)` no more than `k` colors
/// are opened and vertices that fit none stay uncolored.
pub(super) fn assign_colors(graph: &Graph, order: &[usize], cap: Option<usize>) -> Coloring {
    let mut colors: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut palette = 0usize;

    for &v in order {
        let available = |c: usize| graph.neighbors(v).all(|(u, _)| colors[u] != Some(c));
        let chosen = (0..palette).find(|&c| available(c));

        colors[v] = match chosen {
            Some(c) => Some(c),
            None if cap.is_none_or(|k| palette < k) => {
                palette += 1;
                Some(palette - 1)
            }
            None => None,
        };
    }

    Coloring::new(colors)
}
