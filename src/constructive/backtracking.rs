//! First-found Hamiltonian cycle by depth-first backtracking.
//!
//! Explores neighbors strictly in row order and returns the first cycle
//! through vertex 0 it completes. Works on any graph, but the running time is
//! exponential in the worst case and there is no cutoff.

use crate::error::SolveError;
use crate::graph::Graph;
use crate::models::Tour;

/// Mutable state of one search: the partial path and which vertices it uses.
struct SearchState {
    visited: Vec<bool>,
    path: Vec<usize>,
}

impl SearchState {
    fn new(n: usize) -> Self {
        let mut visited = vec![false; n];
        visited[0] = true;
        let mut path = Vec::with_capacity(n + 1);
        path.push(0);
        Self { visited, path }
    }

    fn push(&mut self, vertex: usize) {
        self.visited[vertex] = true;
        self.path.push(vertex);
    }

    fn pop(&mut self, vertex: usize) {
        self.visited[vertex] = false;
        self.path.pop();
    }
}

/// Finds the first feasible tour in row-order depth-first exploration.
///
/// The result is a valid Hamiltonian cycle through 0, not necessarily the
/// cheapest one. Returns [`SolveError::NoPathFound`] when every branch fails,
/// e.g. on a disconnected graph.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::constructive::first_feasible;
///
/// // square 0-1-2-3 without diagonals
/// let graph = Graph::new(4, vec![
///     vec![0.0, 1.0, 0.0, 1.0],
///     vec![1.0, 0.0, 1.0, 0.0],
///     vec![0.0, 1.0, 0.0, 1.0],
///     vec![1.0, 0.0, 1.0, 0.0],
/// ]).expect("valid");
///
/// let tour = first_feasible(&graph).expect("cycle exists");
/// assert_eq!(tour.path(), &[0, 1, 2, 3, 0]);
/// assert_eq!(tour.cost(), 4.0);
/// ```
pub fn first_feasible(graph: &Graph) -> Result<Tour, SolveError> {
    let mut state = SearchState::new(graph.vertex_count());
    extend(graph, 0, &mut state).ok_or(SolveError::NoPathFound)
}

/// Tries to complete the cycle from `current`; leaves `state` as it found it
/// when every extension fails.
fn extend(graph: &Graph, current: usize, state: &mut SearchState) -> Option<Tour> {
    if state.path.len() == graph.vertex_count() {
        if !graph.has_edge(current, 0) {
            return None;
        }
        let mut path = state.path.clone();
        path.push(0);
        return Some(Tour::new(path, graph));
    }

    for (next, _) in graph.neighbors(current) {
        if state.visited[next] {
            continue;
        }
        state.push(next);
        let found = extend(graph, next, state);
        state.pop(next);
        if found.is_some() {
            return found;
        }
    }
    None
}
