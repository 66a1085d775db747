//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and
//! offers the few draws the tour search needs: a uniform index and an
//! in-place shuffle. [`SeedPolicy`] decides when and how each worker's
//! generator is (re)seeded.
//!
//! ## Example
//!
//! ```rust
//! use salesman::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let index = rng.index(10);
//! assert!(index < 10);
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// How a worker's random source is seeded over the outer iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedPolicy {
    /// Reseed at the start of every outer iteration from the wall clock plus the worker id.
    ///
    /// Two iterations that start within one clock tick get the same seed and
    /// therefore the same base tour.
    #[default]
    WallClock,
    /// Seed once per worker from the given value mixed with the worker id.
    Fixed(u64),
}

impl SeedPolicy {
    /// The seed to install before `iteration`, or `None` to keep the current stream.
    pub fn seed_for(&self, worker_id: usize, iteration: usize) -> Option<u64> {
        match *self {
            SeedPolicy::WallClock => Some(clock_nanos().wrapping_add(worker_id as u64)),
            SeedPolicy::Fixed(seed) if iteration == 0 => Some(mix(seed, worker_id)),
            SeedPolicy::Fixed(_) => None,
        }
    }
}

fn clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn mix(seed: u64, worker_id: usize) -> u64 {
    seed ^ (worker_id as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restarts the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// A uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Fisher-Yates shuffle of `values` in place.
    pub fn shuffle(&mut self, values: &mut [usize]) {
        values.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
