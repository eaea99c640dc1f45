//! Simulated annealing over closed tours.
//!
//! A single-solution trajectory method: random segment reversals are accepted
//! when they improve the tour, and uphill with probability `exp(−Δ/T)` while
//! the temperature `T` cools geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
