//! Annealing loop over closed tours.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::constructive::first_feasible;
use crate::error::SolveError;
use crate::evaluation::path_cost;
use crate::graph::Graph;
use crate::local_search::reverse_segment;
use crate::models::Tour;

/// Best cost is sampled into `cost_history` every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Cost of the seed tour the run started from.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals, ending with the final value.
    pub cost_history: Vec<f64>,
}

impl SaResult {
    /// Cost of the best tour.
    pub fn best_cost(&self) -> f64 {
        self.best.cost()
    }
}

/// Executes simulated annealing on a graph.
///
/// The run is seeded with [`first_feasible`]. Each iteration reverses a
/// random segment of the current tour (the origin never moves), accepts it
/// by the Metropolis rule and then cools the temperature geometrically.
///
/// # Examples
///
/// ```
/// use u_tour::graph::Graph;
/// use u_tour::sa::{SaConfig, SaRunner};
///
/// let graph = Graph::new(4, vec![
///     vec![0.0, 10.0, 8.0, 9.0],
///     vec![10.0, 0.0, 7.0, 11.0],
///     vec![8.0, 7.0, 0.0, 12.0],
///     vec![9.0, 11.0, 12.0, 0.0],
/// ]).expect("valid");
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_max_iterations(500)
///     .with_seed(42);
/// let result = SaRunner::run(&graph, &config).expect("seed exists");
/// assert!(result.best_cost() <= 38.0);
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs with a [`StdRng`] seeded from `config.seed`, or from OS entropy
    /// when no seed is set.
    pub fn run(graph: &Graph, config: &SaConfig) -> Result<SaResult, SolveError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(graph, config, &mut rng)
    }

    /// Runs with a caller-supplied random number generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        graph: &Graph,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, SolveError> {
        config.validate()?;
        let seed = first_feasible(graph).map_err(|_| SolveError::NoInitialPath)?;
        Ok(Self::anneal(graph, config, seed, rng))
    }

    /// Anneals from an arbitrary feasible `seed` tour.
    ///
    /// Callers must pass a validated `config`.
    pub fn anneal<R: Rng>(
        graph: &Graph,
        config: &SaConfig,
        seed: Tour,
        rng: &mut R,
    ) -> SaResult {
        let initial_cost = seed.cost();
        let (mut current, mut current_cost) = seed.into_parts();
        let mut best = current.clone();
        let mut best_cost = current_cost;

        // positions 1..=n-1 may move; a reversal needs two of them
        let movable = graph.vertex_count().saturating_sub(1);

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_cost];

        for iteration in 1..=config.max_iterations {
            if movable >= 2 {
                let (i, j) = random_pair(movable, rng);
                let candidate = reverse_segment(&current, i, j);
                let candidate_cost = path_cost(&candidate, graph);
                let delta = candidate_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else if temperature > 0.0 {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                } else {
                    false
                };

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }
            }

            temperature *= config.cooling_factor;

            if iteration.is_multiple_of(HISTORY_INTERVAL) {
                cost_history.push(best_cost);
            }
        }

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        SaResult {
            best: Tour::with_cost(best, best_cost),
            initial_cost,
            iterations: config.max_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}

/// Draws two distinct positions uniformly from `1..=movable`, smaller first.
fn random_pair<R: Rng>(movable: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(1..=movable);
    let mut b = rng.random_range(1..movable);
    if b >= a {
        b += 1;
    }
    (a.min(b), a.max(b))
}
