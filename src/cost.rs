//! # Cost Evaluation
//!
//! The [`CostFunction`] trait scores a tour; lower is better. [`Euclidean`]
//! is the cyclic Euclidean length used by the solver.
//!
//! Costs are accumulated in `f64` from the first edge to the closing edge.
//!
//! ## Example
//!
//! ```rust
//! use salesman::city::{City, CityCatalogue};
//! use salesman::cost::{CostFunction, Euclidean};
//! use salesman::tour::Tour;
//!
//! let catalogue = CityCatalogue::new(vec![
//!     City::new(1, 0.0, 0.0),
//!     City::new(2, 1.0, 0.0),
//!     City::new(3, 1.0, 1.0),
//!     City::new(4, 0.0, 1.0),
//! ])
//! .unwrap();
//!
//! let cost = Euclidean.cost(&catalogue, Tour::identity(4).as_slice());
//! assert_eq!(cost, 4.0);
//! ```

use crate::city::{City, CityCatalogue};

/// Scores the cyclic route given by `order`, a sequence of catalogue indices.
///
/// Implementations must be deterministic: the same order always has the same cost.
pub trait CostFunction: Send + Sync {
    fn cost(&self, catalogue: &CityCatalogue, order: &[usize]) -> f64;
}

/// Straight-line distance between two cities.
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Sum of Euclidean edge lengths, including the edge from the last city back to the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl CostFunction for Euclidean {
    fn cost(&self, catalogue: &CityCatalogue, order: &[usize]) -> f64 {
        let (first, last) = match (order.first(), order.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return 0.0,
        };

        let open: f64 = order
            .windows(2)
            .map(|edge| distance(&catalogue[edge[0]], &catalogue[edge[1]]))
            .sum();

        open + distance(&catalogue[last], &catalogue[first])
    }
}
