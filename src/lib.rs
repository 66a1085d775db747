pub mod city;
pub mod cluster;
pub mod cost;
pub mod error;
pub mod io;
pub mod reduce;
pub mod rng;
pub mod search;
pub mod tour;

// Re-export commonly used types for convenience
pub use city::{City, CityCatalogue, CityId};
pub use cluster::solve;
pub use error::{OptionExt, Result, ResultExt, Stage, TourError};
pub use reduce::{reduce, Communicator, WinningReport, WorkerReport};
pub use search::{search, Incumbent, SearchOptions};
pub use tour::Tour;
