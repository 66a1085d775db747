//! In-process [`Communicator`] built on `std::sync::mpsc`.
//!
//! [`channel_world`] wires a dedicated channel between every ordered pair of
//! workers, so receiving "from worker `i`" reads only what `i` sent. Dropping
//! a communicator disconnects it from every peer, which surfaces as a
//! messaging error on whoever is still waiting for it.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::error::{Result, Stage, TourError};
use crate::reduce::{Communicator, WorkerReport};

#[derive(Debug, Clone, Copy)]
enum Message {
    Report(WorkerReport),
    Winner(usize),
}

/// One worker's end of a fully connected channel world.
#[derive(Debug)]
pub struct ChannelCommunicator {
    worker_id: usize,
    total_workers: usize,
    /// Indexed by destination worker; `None` at our own id.
    outgoing: Vec<Option<Sender<Message>>>,
    /// Indexed by source worker; `None` at our own id.
    incoming: Vec<Option<Receiver<Message>>>,
}

/// Creates one connected communicator per worker, ordered by worker id.
///
/// # Errors
///
/// Returns [`TourError::Configuration`] if `total_workers` is zero.
pub fn channel_world(total_workers: usize) -> Result<Vec<ChannelCommunicator>> {
    if total_workers == 0 {
        return Err(TourError::Configuration(
            "Number of workers cannot be zero".to_string(),
        ));
    }

    let mut comms: Vec<ChannelCommunicator> = (0..total_workers)
        .map(|worker_id| ChannelCommunicator {
            worker_id,
            total_workers,
            outgoing: (0..total_workers).map(|_| None).collect(),
            incoming: (0..total_workers).map(|_| None).collect(),
        })
        .collect();

    for from in 0..total_workers {
        for to in (0..total_workers).filter(|&to| to != from) {
            let (sender, receiver) = channel();
            comms[from].outgoing[to] = Some(sender);
            comms[to].incoming[from] = Some(receiver);
        }
    }

    Ok(comms)
}

impl ChannelCommunicator {
    fn send(&self, to: usize, message: Message) -> Result<()> {
        let sender = self
            .outgoing
            .get(to)
            .and_then(Option::as_ref)
            .ok_or_else(|| {
                TourError::messaging(
                    Stage::Reduce,
                    format!("worker {} has no channel to worker {}", self.worker_id, to),
                )
            })?;
        sender.send(message).map_err(|_| {
            TourError::messaging(Stage::Reduce, format!("worker {} disconnected", to))
        })
    }

    fn receive(&self, from: usize) -> Result<Message> {
        let receiver = self
            .incoming
            .get(from)
            .and_then(Option::as_ref)
            .ok_or_else(|| {
                TourError::messaging(
                    Stage::Reduce,
                    format!("worker {} has no channel from worker {}", self.worker_id, from),
                )
            })?;
        receiver.recv().map_err(|_| {
            TourError::messaging(Stage::Reduce, format!("worker {} disconnected", from))
        })
    }
}

impl Communicator for ChannelCommunicator {
    fn worker_id(&self) -> usize {
        self.worker_id
    }

    fn total_workers(&self) -> usize {
        self.total_workers
    }

    fn send_report(&self, to: usize, report: WorkerReport) -> Result<()> {
        self.send(to, Message::Report(report))
    }

    fn receive_report(&self, from: usize) -> Result<WorkerReport> {
        match self.receive(from)? {
            Message::Report(report) => Ok(report),
            Message::Winner(_) => Err(TourError::messaging(
                Stage::Reduce,
                format!("expected a report from worker {}, got a broadcast", from),
            )),
        }
    }

    fn broadcast(&self, root: usize, value: usize) -> Result<usize> {
        if self.worker_id == root {
            for to in (0..self.total_workers).filter(|&to| to != root) {
                self.send(to, Message::Winner(value))?;
            }
            return Ok(value);
        }

        match self.receive(root)? {
            Message::Winner(value) => Ok(value),
            Message::Report(_) => Err(TourError::messaging(
                Stage::Reduce,
                format!("expected a broadcast from worker {}, got a report", root),
            )),
        }
    }
}
