//! # Reduction
//!
//! Once every worker has finished searching, the workers agree on a single
//! winner in one star-shaped round:
//!
//! 1. Every worker other than [`ROOT_WORKER`] sends its final cost to the root.
//! 2. The root receives one report from each other worker in increasing id
//!    order, keeping a strictly lower cost over the current best. Ties keep
//!    the lower id.
//! 3. The root broadcasts the winning id to every worker.
//! 4. Only the winner returns a [`WinningReport`] with its tour.
//!
//! A single worker is its own winner and exchanges no messages.
//!
//! The exchange goes through the [`Communicator`] trait, so any substrate
//! offering point-to-point send/receive and a one-to-all broadcast can carry
//! it. [`channel`] provides one over in-process channels. There are no
//! timeouts: a worker that stays alive but never sends blocks the round.

pub mod channel;

use std::fmt;

use tracing::{debug, info};

use crate::city::{CityCatalogue, CityId};
use crate::error::{OptionExt, Result, Stage, TourError};
use crate::search::Incumbent;

pub use channel::{channel_world, ChannelCommunicator};

/// The worker that collects reports and broadcasts the winner.
pub const ROOT_WORKER: usize = 0;

/// The value a worker sends to the root.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerReport {
    pub worker_id: usize,
    pub cost: f64,
}

/// What the winning worker reports: its cost and the city ids of its tour in order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinningReport {
    pub worker_id: usize,
    pub cost: f64,
    pub city_ids: Vec<CityId>,
}

impl fmt::Display for WinningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Best Tour Rank: {} Cost: {:.1}", self.worker_id, self.cost)?;
        for id in &self.city_ids {
            write!(f, "\n{}", id)?;
        }
        Ok(())
    }
}

/// The two message-passing primitives the reduction needs.
///
/// Every call blocks until the matching peer acts. A disconnected peer is a
/// [`TourError::Messaging`] error.
pub trait Communicator {
    fn worker_id(&self) -> usize;

    fn total_workers(&self) -> usize;

    /// Sends `report` to worker `to`.
    fn send_report(&self, to: usize, report: WorkerReport) -> Result<()>;

    /// Receives the next report sent by worker `from`.
    fn receive_report(&self, from: usize) -> Result<WorkerReport>;

    /// One-to-all broadcast from `root`.
    ///
    /// On the root, `value` is sent to every other worker and returned. On
    /// any other worker, `value` is ignored and the root's value is returned.
    fn broadcast(&self, root: usize, value: usize) -> Result<usize>;
}

/// Folds reports into the winner: a strictly lower cost replaces the current
/// best, so on equal costs the report seen first wins.
pub fn select_winner<I>(own: WorkerReport, received: I) -> WorkerReport
where
    I: IntoIterator<Item = WorkerReport>,
{
    received.into_iter().fold(own, |best, report| {
        if report.cost < best.cost {
            report
        } else {
            best
        }
    })
}

/// Runs the reduction round for one worker.
///
/// Returns `Some` on the winning worker and `None` everywhere else.
///
/// # Errors
///
/// Returns [`TourError::Incumbent`] before any exchange if the incumbent is
/// empty or its tour is not a permutation of the catalogue, and
/// [`TourError::Messaging`] if any exchange fails or a peer sends something
/// other than what the protocol expects.
#[tracing::instrument(
    level = "info",
    name = "reduce",
    skip_all,
    fields(worker = comm.worker_id(), workers = comm.total_workers())
)]
pub fn reduce<M: Communicator>(
    incumbent: &Incumbent,
    catalogue: &CityCatalogue,
    comm: &M,
) -> Result<Option<WinningReport>> {
    let worker_id = comm.worker_id();
    let total_workers = comm.total_workers();
    let (cost, tour) = incumbent
        .cost()
        .zip(incumbent.tour())
        .ok_or_else_tour(|| TourError::incumbent(worker_id, "no tour to reduce"))?;
    if !tour.is_permutation_of(catalogue.len()) {
        return Err(TourError::incumbent(
            worker_id,
            format!(
                "tour of {} positions is not a permutation of {} cities",
                tour.len(),
                catalogue.len()
            ),
        ));
    }
    let own = WorkerReport { worker_id, cost };

    let winner = if total_workers == 1 {
        worker_id
    } else if worker_id == ROOT_WORKER {
        let mut received = Vec::with_capacity(total_workers - 1);
        for from in (0..total_workers).filter(|&id| id != ROOT_WORKER) {
            let report = comm.receive_report(from)?;
            if report.worker_id != from {
                return Err(TourError::messaging(
                    Stage::Reduce,
                    format!(
                        "expected a report from worker {}, got one from worker {}",
                        from, report.worker_id
                    ),
                ));
            }
            debug!(from, cost = report.cost, "received report");
            received.push(report);
        }
        let best = select_winner(own, received);
        comm.broadcast(ROOT_WORKER, best.worker_id)?
    } else {
        comm.send_report(ROOT_WORKER, own)?;
        comm.broadcast(ROOT_WORKER, worker_id)?
    };

    if winner >= total_workers {
        return Err(TourError::messaging(
            Stage::Reduce,
            format!("broadcast winner {} is not a worker id", winner),
        ));
    }

    if winner != worker_id {
        debug!(winner, "lost reduction");
        return Ok(None);
    }

    info!(cost, "won reduction");

    Ok(Some(WinningReport {
        worker_id,
        cost,
        city_ids: tour.city_ids(catalogue),
    }))
}
