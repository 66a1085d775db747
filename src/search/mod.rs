//! # Search
//!
//! One worker's heuristic search. Each outer iteration builds a random base
//! tour, offers it to the [`Incumbent`], then offers every segment reversal of
//! it. The incumbent carries over between iterations.
//!
//! ## Example
//!
//! ```rust
//! use salesman::city::{City, CityCatalogue};
//! use salesman::rng::SeedPolicy;
//! use salesman::search::{search, SearchOptions};
//!
//! let catalogue = CityCatalogue::new(vec![
//!     City::new(1, 0.0, 0.0),
//!     City::new(2, 4.0, 0.0),
//!     City::new(3, 4.0, 3.0),
//! ])
//! .unwrap();
//!
//! let options = SearchOptions::builder()
//!     .iterations(5)
//!     .seed_policy(SeedPolicy::Fixed(7))
//!     .build();
//!
//! let incumbent = search(&catalogue, &options, 0, 1).unwrap();
//! assert_eq!(incumbent.cost(), Some(12.0));
//! ```

pub mod generator;
pub mod incumbent;
pub mod neighborhood;
pub mod options;
pub mod worker;

pub use generator::{Construction, RandomTourGenerator};
pub use incumbent::Incumbent;
pub use neighborhood::ScanOutcome;
pub use options::{SearchOptions, SearchOptionsBuilder};
pub use worker::{search, SearchStats, Worker};
