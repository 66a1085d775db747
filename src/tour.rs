//! # Tours
//!
//! A [`Tour`] is a cyclic route through every city of a catalogue. It stores
//! positions into the [`CityCatalogue`] rather than copies of the cities; the
//! last position connects back to the first.

use crate::city::{CityCatalogue, CityId};
use crate::error::{Result, TourError};

/// An ordered permutation of catalogue indices, read as a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Visits the catalogue in input order.
    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    /// Builds a tour from catalogue indices, checking it is a permutation of `0..len`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidInput`] if `order` has the wrong length,
    /// repeats an index, or refers past the end of the catalogue.
    pub fn from_order(order: Vec<usize>, len: usize) -> Result<Self> {
        let tour = Self { order };
        if !tour.is_permutation_of(len) {
            return Err(TourError::invalid_input(format!(
                "tour {:?} is not a permutation of {} cities",
                tour.order, len
            )));
        }
        Ok(tour)
    }

    pub(crate) fn from_order_unchecked(order: Vec<usize>) -> Self {
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Overwrites this tour with `order`, reusing the allocation.
    pub(crate) fn copy_from(&mut self, order: &[usize]) {
        self.order.clear();
        self.order.extend_from_slice(order);
    }

    /// Every index in `0..len` appears exactly once.
    pub fn is_permutation_of(&self, len: usize) -> bool {
        if self.order.len() != len {
            return false;
        }
        let mut seen = vec![false; len];
        for &index in &self.order {
            if index >= len || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }

    /// The same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut order = self.order.clone();
        order.reverse();
        Self { order }
    }

    /// The input ids of the visited cities, in tour order.
    pub fn city_ids(&self, catalogue: &CityCatalogue) -> Vec<CityId> {
        self.order.iter().map(|&index| catalogue[index].id).collect()
    }
}
