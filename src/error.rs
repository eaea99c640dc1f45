//! Error types.
//!
//! Construction problems ([`GraphError`]) are fatal and reject the input.
//! Search outcomes ([`SolveError`]) are ordinary results the caller decides
//! how to treat; each one stands for a missing tour of infinite cost.

use thiserror::Error;

/// Rejected graph, vertex order, or interval input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The adjacency matrix is not `vertex_count × vertex_count`.
    #[error("adjacency matrix shape mismatch: expected {expected}x{expected}, found {found}")]
    ShapeMismatch {
        /// Declared vertex count.
        expected: usize,
        /// Human-readable description of the offending dimension.
        found: String,
    },

    /// A graph must have at least one vertex.
    #[error("graph must have at least one vertex")]
    Empty,

    /// Edge weights must be finite and non-negative.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    /// A vertex order whose length differs from the vertex count.
    #[error("vertex order has {found} entries, graph has {expected} vertices")]
    OrderLengthMismatch { expected: usize, found: usize },

    /// A vertex order that is out of range or cannot be a permutation.
    #[error("invalid vertex order: {0}")]
    InvalidOrder(String),

    /// An interval with `start > end` or a NaN bound.
    #[error("invalid interval #{index}: [{start}, {end}]")]
    InvalidInterval { index: usize, start: f64, end: f64 },
}

/// Invalid annealing parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),

    #[error("cooling_factor must be in (0, 1), got {0}")]
    CoolingFactorOutOfRange(f64),
}

/// A solver that could not produce a tour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The search exhausted every branch without closing a Hamiltonian cycle.
    #[error("no Hamiltonian cycle through vertex 0 was found")]
    NoPathFound,

    /// An improvement method had no feasible tour to start from.
    #[error("no initial tour available to improve")]
    NoInitialPath,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl SolveError {
    /// Cost associated with a failed search: always `f64::INFINITY`.
    pub fn cost(&self) -> f64 {
        f64::INFINITY
    }
}
