//! # Cities
//!
//! A [`City`] is a point identified by its `id`. The [`CityCatalogue`] is the
//! validated, immutable list of cities a run searches over. It is built once
//! and shared read-only between workers.
//!
//! ## Example
//!
//! ```rust
//! use salesman::city::{City, CityCatalogue};
//!
//! let catalogue = CityCatalogue::new(vec![
//!     City::new(1, 0.0, 0.0),
//!     City::new(2, 3.0, 4.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalogue.len(), 2);
//! assert_eq!(catalogue.get(1).id, 2);
//! ```

use std::collections::HashSet;
use std::ops::Index;
use std::sync::Arc;

use crate::error::{Result, TourError};

/// Identifier of a city as it appears in the input.
pub type CityId = u32;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: CityId,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: CityId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// The immutable, validated list of cities.
///
/// Cloning is cheap: the cities live behind an `Arc` and clones share them.
#[derive(Debug, Clone)]
pub struct CityCatalogue {
    cities: Arc<[City]>,
}

impl CityCatalogue {
    /// Smallest catalogue a search is defined for.
    pub const MIN_CITIES: usize = 2;

    /// Builds a catalogue from an ordered list of cities.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidInput`] if the list has fewer than
    /// [`Self::MIN_CITIES`] cities, contains a duplicate id, or has a
    /// non-finite coordinate.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.len() < Self::MIN_CITIES {
            return Err(TourError::invalid_input(format!(
                "at least {} cities are required, got {}",
                Self::MIN_CITIES,
                cities.len()
            )));
        }

        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.id) {
                return Err(TourError::invalid_input(format!(
                    "duplicate city id {}",
                    city.id
                )));
            }
            if !city.x.is_finite() || !city.y.is_finite() {
                return Err(TourError::invalid_input(format!(
                    "city {} has a non-finite coordinate ({}, {})",
                    city.id, city.x, city.y
                )));
            }
        }

        Ok(Self {
            cities: cities.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false` for a constructed catalogue; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, index: usize) -> &City {
        &self.cities[index]
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }
}

impl Index<usize> for CityCatalogue {
    type Output = City;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cities[index]
    }
}
