//! Strategy selection.
//!
//! A [`Strategy`] names one of the tour algorithms together with its
//! parameters, so the choice can be made from configuration data.

use serde::{Deserialize, Serialize};

use crate::constructive::{first_feasible, nearest_neighbor};
use crate::error::SolveError;
use crate::graph::Graph;
use crate::local_search::two_opt_descent;
use crate::models::Tour;
use crate::sa::{SaConfig, SaRunner};

/// Tour algorithm to run.
///
/// # Examples
///
/// ```
/// use u_tour::Strategy;
///
/// let strategy: Strategy = serde_json::from_str(
///     r#"{"kind": "annealing", "initial_temperature": 10.0, "seed": 1}"#,
/// ).expect("json");
/// assert!(matches!(strategy, Strategy::Annealing(_)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Greedy nearest-neighbor walk (complete graphs).
    NearestNeighbor,
    /// First cycle found by row-order backtracking.
    Backtracking,
    /// Backtracking seed refined by steepest-descent segment reversal.
    #[default]
    TwoOpt,
    /// Backtracking seed refined by simulated annealing.
    Annealing(SaConfig),
}

/// Runs `strategy` on `graph`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::{solve, Strategy};
///
/// let graph = Graph::new(4, vec![
///     vec![0.0, 10.0, 8.0, 9.0],
///     vec![10.0, 0.0, 7.0, 11.0],
///     vec![8.0, 7.0, 0.0, 12.0],
///     vec![9.0, 11.0, 12.0, 0.0],
/// ]).expect("valid");
///
/// let tour = solve(&graph, &Strategy::Backtracking).expect("tour");
/// assert_eq!(tour.cost(), 38.0);
/// ```
pub fn solve(graph: &Graph, strategy: &Strategy) -> Result<Tour, SolveError> {
    match strategy {
        Strategy::NearestNeighbor => nearest_neighbor(graph),
        Strategy::Backtracking => first_feasible(graph),
        Strategy::TwoOpt => two_opt_descent(graph),
        Strategy::Annealing(config) => SaRunner::run(graph, config).map(|r| r.best),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::is_tour;

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
    fn test_every_strategy_returns_a_tour() {
        let g = complete4();
        let strategies = [
            Strategy::NearestNeighbor,
            Strategy::Backtracking,
            Strategy::TwoOpt,
            Strategy::Annealing(SaConfig::default().with_seed(9)),
        ];
        for s in &strategies {
            let tour = solve(&g, s).expect("complete graph");
            assert!(is_tour(tour.path(), 4), "{s:?}");
            assert!(tour.cost() <= 38.0, "{s:?}");
        }
    }

    #[test]
    fn test_strategy_costs() {
        let g = complete4();
        assert_eq!(solve(&g, &Strategy::NearestNeighbor).expect("tour").cost(), 35.0);
        assert_eq!(solve(&g, &Strategy::Backtracking).expect("tour").cost(), 38.0);
        assert_eq!(solve(&g, &Strategy::TwoOpt).expect("tour").cost(), 35.0);
    }

    #[test]
    fn test_invalid_annealing_config() {
        let s = Strategy::Annealing(SaConfig::default().with_initial_temperature(-5.0));
        assert!(matches!(
            solve(&complete4(), &s),
            Err(SolveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_strategy_from_json() {
        let s: Strategy = serde_json::from_str(r#"{"kind": "two_opt"}"#).expect("json");
        assert_eq!(s, Strategy::TwoOpt);

        let s: Strategy =
            serde_json::from_str(r#"{"kind": "annealing", "max_iterations": 50}"#).expect("json");
        assert_eq!(
            s,
            Strategy::Annealing(SaConfig::default().with_max_iterations(50))
        );
        assert_eq!(Strategy::default(), Strategy::TwoOpt);
    }
}
