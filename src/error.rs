//! # Error Types
//!
//! This module defines the error types for the solver. Every fatal condition
//! of a run (bad input, bad configuration, a failed message exchange during
//! reduction) is one variant of [`TourError`] and propagates to the caller.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use salesman::error::{Result, TourError};
//!
//! fn check_iterations(iterations: usize) -> Result<()> {
//!     if iterations == 0 {
//!         return Err(TourError::Configuration("iterations must be positive".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_iterations(0).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use salesman::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_cities(path: &str) -> Result<File> {
//!     File::open(path).context("Failed to open city file")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// The stages of a single run, in the order a worker passes through them.
///
/// Used to name the stage that failed when an error aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Init,
    ParseInput,
    Search,
    Reduce,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::ParseInput => "parse-input",
            Stage::Search => "search",
            Stage::Reduce => "reduce",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

/// Represents errors that can occur while building, searching or reducing tours.
#[derive(Error, Debug)]
pub enum TourError {
    /// The city list is empty, too small, or otherwise unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A line of a city file could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An invalid configuration was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A send, receive or broadcast failed while exchanging worker reports.
    #[error("Messaging error during {stage}: {message}")]
    Messaging { stage: Stage, message: String },

    /// A worker reached reduction without a tour it can report.
    #[error("Invalid incumbent on worker {worker_id}: {message}")]
    Incumbent { worker_id: usize, message: String },

    /// A worker thread panicked before producing a result.
    #[error("Worker {worker_id} panicked during {stage}")]
    WorkerPanicked { worker_id: usize, stage: Stage },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl TourError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn messaging(stage: Stage, message: impl Into<String>) -> Self {
        Self::Messaging {
            stage,
            message: message.into(),
        }
    }

    pub fn incumbent(worker_id: usize, message: impl Into<String>) -> Self {
        Self::Incumbent {
            worker_id,
            message: message.into(),
        }
    }

    /// The run stage this error aborted.
    pub fn stage(&self) -> Stage {
        match self {
            TourError::InvalidInput(_) | TourError::Parse { .. } | TourError::Io(_) => {
                Stage::ParseInput
            }
            TourError::Configuration(_) => Stage::Init,
            TourError::Messaging { stage, .. } => *stage,
            TourError::Incumbent { .. } => Stage::Reduce,
            TourError::WorkerPanicked { stage, .. } => *stage,
            TourError::Other(_) => Stage::Report,
        }
    }
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, TourError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use salesman::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> salesman::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error into a [`TourError::Other`] prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| TourError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use salesman::error::{OptionExt, TourError};
///
/// fn first_city(ids: &[u32]) -> salesman::error::Result<u32> {
///     ids.first().copied().ok_or_else_tour(|| TourError::invalid_input("no cities"))
/// }
///
/// assert!(first_city(&[]).is_err());
/// ```
pub trait OptionExt<T> {
    fn ok_or_else_tour<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> TourError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_tour<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> TourError,
    {
        self.ok_or_else(err_fn)
    }
}
