//! # SearchOptions
//!
//! The `SearchOptions` struct holds the configuration of one worker's search:
//! how many random restarts to run, how the random source is seeded, how the
//! base tour is built, and from which neighborhood size on candidate costs are
//! computed in parallel.
//!
//! ## Example
//!
//! ```rust
//! use salesman::rng::SeedPolicy;
//! use salesman::search::{Construction, SearchOptions};
//!
//! // Create a new SearchOptions instance with custom parameters
//! let options = SearchOptions::builder()
//!     .iterations(20)
//!     .seed_policy(SeedPolicy::Fixed(42))
//!     .construction(Construction::Shuffle)
//!     .build();
//! assert_eq!(options.get_iterations(), 20);
//!
//! // Default options run a single iteration
//! let default_options = SearchOptions::default();
//! assert_eq!(default_options.get_iterations(), 1);
//! ```

use crate::error::{Result, TourError};
use crate::rng::SeedPolicy;
use crate::search::generator::Construction;

const DEFAULT_ITERATIONS: usize = 1;
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    iterations: usize,
    seed_policy: SeedPolicy,
    construction: Construction,
    /// Minimum neighborhood size whose costs are evaluated in parallel
    parallel_threshold: usize,
}

impl SearchOptions {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn get_iterations(&self) -> usize {
        self.iterations
    }

    pub fn get_seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    pub fn get_construction(&self) -> Construction {
        self.construction
    }

    /// Returns the minimum number of candidates to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the number of outer iterations.
    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    pub fn set_seed_policy(&mut self, seed_policy: SeedPolicy) {
        self.seed_policy = seed_policy;
    }

    pub fn set_construction(&mut self, construction: Construction) {
        self.construction = construction;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks the options describe a runnable search.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::Configuration`] if `iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(TourError::Configuration(
                "Number of iterations cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating a `SearchOptions` instance.
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::default()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed_policy: SeedPolicy::default(),
            construction: Construction::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `SearchOptions`.
///
/// Provides a fluent interface for constructing `SearchOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct SearchOptionsBuilder {
    iterations: Option<usize>,
    seed_policy: Option<SeedPolicy>,
    construction: Option<Construction>,
    parallel_threshold: Option<usize>,
}

impl SearchOptionsBuilder {
    pub fn iterations(mut self, value: usize) -> Self {
        self.iterations = Some(value);
        self
    }

    pub fn seed_policy(mut self, value: SeedPolicy) -> Self {
        self.seed_policy = Some(value);
        self
    }

    pub fn construction(mut self, value: Construction) -> Self {
        self.construction = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `SearchOptions` instance.
    pub fn build(self) -> SearchOptions {
        let default = SearchOptions::default();
        SearchOptions {
            iterations: self.iterations.unwrap_or(default.iterations),
            seed_policy: self.seed_policy.unwrap_or(default.seed_policy),
            construction: self.construction.unwrap_or(default.construction),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(default.parallel_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let options = SearchOptions::builder().iterations(3).build();
        assert_eq!(options.get_iterations(), 3);
        assert_eq!(options.get_seed_policy(), SeedPolicy::WallClock);
        assert_eq!(options.get_construction(), Construction::RejectionSampling);
        assert_eq!(options.get_parallel_threshold(), DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let options = SearchOptions::new(0);
        match options.validate() {
            Err(TourError::Configuration(msg)) => {
                assert!(msg.contains("iterations cannot be zero"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_setters() {
        let mut options = SearchOptions::default();
        options.set_iterations(8);
        options.set_seed_policy(SeedPolicy::Fixed(1));
        options.set_construction(Construction::Shuffle);
        options.set_parallel_threshold(10);
        assert_eq!(
            options,
            SearchOptions::builder()
                .iterations(8)
                .seed_policy(SeedPolicy::Fixed(1))
                .construction(Construction::Shuffle)
                .parallel_threshold(10)
                .build()
        );
    }
}
