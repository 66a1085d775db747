//! # Segment-Reversal Neighborhood
//!
//! For a base tour of `n` cities, every pair `1 <= i <= j <= n - 1` gives one
//! candidate: the base tour with positions `i..=j` reversed. Position 0 is
//! never moved, which fixes the rotation of the cycle. That is `n(n-1)/2`
//! candidates per base tour, each offered to the incumbent in increasing
//! `(i, j)` order.
//!
//! This is a single pass over one base tour; it does not restart from an
//! improved candidate, so it can stop short of a 2-opt local optimum.

use rayon::prelude::*;

use crate::city::CityCatalogue;
use crate::cost::CostFunction;
use crate::search::incumbent::Incumbent;

/// Number of candidates one scan produces for a tour of `len` cities.
pub fn candidate_count(len: usize) -> usize {
    len * len.saturating_sub(1) / 2
}

/// All `(i, j)` reversal bounds for a tour of `len` cities, in scan order.
pub fn moves(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..len).flat_map(move |i| (i..len).map(move |j| (i, j)))
}

/// Writes `base` with positions `i..=j` reversed into `out`.
pub fn apply_reversal(base: &[usize], i: usize, j: usize, out: &mut Vec<usize>) {
    out.clear();
    out.extend_from_slice(&base[..i]);
    out.extend(base[i..=j].iter().rev());
    out.extend_from_slice(&base[j + 1..]);
}

/// What one scan did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub candidates: usize,
    pub improvements: usize,
}

/// Candidates whose costs are computed together on the parallel path.
pub const PARALLEL_CHUNK: usize = 8192;

/// Offers every reversal of `base` to `incumbent`.
///
/// When the neighborhood has at least `parallel_threshold` candidates their
/// costs are computed on the rayon pool, [`PARALLEL_CHUNK`] candidates at a
/// time. Offers still happen in scan order on the calling thread, so both
/// paths leave the same incumbent.
pub fn scan<C: CostFunction>(
    catalogue: &CityCatalogue,
    cost_fn: &C,
    base: &[usize],
    incumbent: &mut Incumbent,
    scratch: &mut Vec<usize>,
    parallel_threshold: usize,
) -> ScanOutcome {
    if candidate_count(base.len()) >= parallel_threshold {
        return scan_parallel(catalogue, cost_fn, base, incumbent, scratch, PARALLEL_CHUNK);
    }

    let mut outcome = ScanOutcome::default();
    for (i, j) in moves(base.len()) {
        apply_reversal(base, i, j, scratch);
        let cost = cost_fn.cost(catalogue, scratch);
        outcome.candidates += 1;
        if incumbent.offer_order(scratch, cost) {
            outcome.improvements += 1;
        }
    }
    outcome
}

fn scan_parallel<C: CostFunction>(
    catalogue: &CityCatalogue,
    cost_fn: &C,
    base: &[usize],
    incumbent: &mut Incumbent,
    scratch: &mut Vec<usize>,
    chunk_len: usize,
) -> ScanOutcome {
    let len = base.len();
    let chunk_len = chunk_len.max(1);
    let mut outcome = ScanOutcome::default();
    let mut pending = moves(len);
    let mut bounds: Vec<(usize, usize)> = Vec::with_capacity(chunk_len);
    let mut costs: Vec<f64> = Vec::with_capacity(chunk_len);

    loop {
        bounds.clear();
        bounds.extend(pending.by_ref().take(chunk_len));
        if bounds.is_empty() {
            break;
        }

        bounds
            .par_iter()
            .map_init(
                || Vec::with_capacity(len),
                |buffer, &(i, j)| {
                    apply_reversal(base, i, j, buffer);
                    cost_fn.cost(catalogue, buffer)
                },
            )
            .collect_into_vec(&mut costs);

        for (&(i, j), &cost) in bounds.iter().zip(&costs) {
            outcome.candidates += 1;
            if incumbent.accepts(cost) {
                apply_reversal(base, i, j, scratch);
                incumbent.offer_order(scratch, cost);
                outcome.improvements += 1;
            }
        }
    }

    outcome
}
