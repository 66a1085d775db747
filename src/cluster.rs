//! # Cluster
//!
//! Runs a fixed number of workers side by side, each on its own thread with
//! its own communicator, and returns the winner's report. Workers share only
//! the read-only catalogue and the channels between them.
//!
//! ## Example
//!
//! ```rust
//! use salesman::city::{City, CityCatalogue};
//! use salesman::cluster::solve;
//! use salesman::rng::SeedPolicy;
//! use salesman::search::SearchOptions;
//!
//! let catalogue = CityCatalogue::new(vec![
//!     City::new(1, 0.0, 0.0),
//!     City::new(2, 1.0, 0.0),
//!     City::new(3, 1.0, 1.0),
//!     City::new(4, 0.0, 1.0),
//! ])
//! .unwrap();
//! let options = SearchOptions::builder()
//!     .iterations(3)
//!     .seed_policy(SeedPolicy::Fixed(1))
//!     .build();
//!
//! let report = solve(&catalogue, &options, 3).unwrap();
//! assert_eq!(report.cost, 4.0);
//! assert_eq!(report.city_ids.len(), 4);
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use tracing::{error, info};

use crate::city::CityCatalogue;
use crate::error::{Result, Stage, TourError};
use crate::reduce::{channel_world, reduce, Communicator, WinningReport};
use crate::search::{search, SearchOptions};

/// Runs the full pipeline for the worker behind `comm`: search, then reduce.
///
/// Returns `Some` only on the winning worker. A panic in either stage is
/// returned as [`TourError::WorkerPanicked`] naming that stage.
pub fn run_worker<M: Communicator>(
    catalogue: &CityCatalogue,
    options: &SearchOptions,
    comm: &M,
) -> Result<Option<WinningReport>> {
    let worker_id = comm.worker_id();
    let incumbent = in_stage(worker_id, Stage::Search, || {
        search(catalogue, options, worker_id, comm.total_workers())
    })?;
    in_stage(worker_id, Stage::Reduce, || reduce(&incumbent, catalogue, comm))
}

fn in_stage<T>(worker_id: usize, stage: Stage, f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        error!(worker = worker_id, %stage, "worker panicked");
        Err(TourError::WorkerPanicked { worker_id, stage })
    })
}

/// Searches with `workers` independent workers and returns the best tour any of them found.
///
/// # Errors
///
/// Returns [`TourError::Configuration`] if `workers` is zero or the options
/// are invalid. If a worker fails, its peers fail too once they try to talk
/// to it; the error returned is the first one that is not such a knock-on
/// messaging error.
pub fn solve(
    catalogue: &CityCatalogue,
    options: &SearchOptions,
    workers: usize,
) -> Result<WinningReport> {
    options.validate()?;
    let comms = channel_world(workers)?;

    info!(
        workers,
        cities = catalogue.len(),
        iterations = options.get_iterations(),
        "starting run"
    );

    let outcomes: Vec<Result<Option<WinningReport>>> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for comm in comms {
            let worker_id = comm.worker_id();
            let handle = thread::Builder::new()
                .name(format!("worker-{}", worker_id))
                .spawn_scoped(scope, move || run_worker(catalogue, options, &comm))?;
            handles.push((worker_id, handle));
        }

        Ok::<_, TourError>(
            handles
                .into_iter()
                .map(|(worker_id, handle)| {
                    handle.join().unwrap_or(Err(TourError::WorkerPanicked {
                        worker_id,
                        stage: Stage::Init,
                    }))
                })
                .collect(),
        )
    })?;

    let mut winners = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(Some(report)) => winners.push(report),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        let root_cause = errors
            .iter()
            .position(|err| !matches!(err, TourError::Messaging { .. }))
            .unwrap_or(0);
        return Err(errors.swap_remove(root_cause));
    }

    match winners.len() {
        1 => {
            let report = winners.swap_remove(0);
            info!(winner = report.worker_id, cost = report.cost, "run complete");
            Ok(report)
        }
        n => Err(TourError::Other(format!(
            "Expected exactly one winning worker, got {}",
            n
        ))),
    }
}
