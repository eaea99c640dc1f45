//! Domain model types.

mod tour;

pub use tour::Tour;
