//! Interval graphs.
//!
//! Each interval becomes a vertex; two vertices are adjacent iff their closed
//! intervals intersect. Coloring the result in order of increasing start is
//! the classic interval-scheduling assignment.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Graph;
use crate::error::GraphError;

/// A closed interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Closed-interval intersection test.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

/// A validated, non-empty list of intervals.
///
/// # Examples
///
/// ```
/// use u_tour::graph::IntervalSet;
///
/// let set = IntervalSet::new(vec![(1.0, 4.0), (2.0, 6.0), (5.0, 7.0)]).expect("valid");
/// let ig = set.to_graph();
/// assert!(ig.graph.has_edge(0, 1));
/// assert!(!ig.graph.has_edge(0, 2));
/// assert_eq!(ig.order, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

/// Interval graph plus the vertex order sorted by interval start.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalGraph {
    pub graph: Graph,
    pub order: Vec<usize>,
}

impl IntervalSet {
    /// Validates and stores the intervals.
    ///
    /// Rejects an empty list and any interval with a NaN bound or
    /// `start > end`.
    pub fn new<I>(intervals: Vec<I>) -> Result<Self, GraphError>
    where
        I: Into<Interval>,
    {
        let intervals: Vec<Interval> = intervals.into_iter().map(Into::into).collect();
        if intervals.is_empty() {
            return Err(GraphError::Empty);
        }
        for (index, iv) in intervals.iter().enumerate() {
            if iv.start.is_nan() || iv.end.is_nan() || iv.start > iv.end {
                return Err(GraphError::InvalidInterval {
                    index,
                    start: iv.start,
                    end: iv.end,
                });
            }
        }
        Ok(Self { intervals })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval indices sorted by ascending start; equal starts keep their
    /// original relative order.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.intervals.len()).collect();
        // bounds are never NaN; -0.0 and 0.0 compare equal and keep index order
        order.sort_by(|&a, &b| {
            self.intervals[a]
                .start
                .partial_cmp(&self.intervals[b].start)
                .unwrap_or(Ordering::Equal)
        });
        order
    }

    /// Symmetric 0/1 matrix with `1.0` wherever two intervals overlap.
    pub fn to_adjacency(&self) -> Vec<Vec<f64>> {
        let n = self.intervals.len();
        let mut adj = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                if self.intervals[i].overlaps(&self.intervals[j]) {
                    adj[i][j] = 1.0;
                    adj[j][i] = 1.0;
                }
            }
        }
        adj
    }

    /// Builds the interval graph and its start order.
    pub fn to_graph(&self) -> IntervalGraph {
        let n = self.intervals.len();
        let data = self.to_adjacency().into_iter().flatten().collect();
        IntervalGraph {
            // n ≥ 1 and every entry is 0 or 1
            graph: Graph::from_trusted(n, data),
            order: self.order(),
        }
    }
}
