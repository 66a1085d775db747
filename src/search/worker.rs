use tracing::{debug, info, trace};

use crate::city::CityCatalogue;
use crate::cost::{CostFunction, Euclidean};
use crate::error::{Result, TourError};
use crate::rng::RandomNumberGenerator;
use crate::search::generator::RandomTourGenerator;
use crate::search::incumbent::Incumbent;
use crate::search::neighborhood;
use crate::search::options::SearchOptions;

/// Counters collected over one worker's run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Outer iterations completed.
    pub iterations: usize,
    /// Tours evaluated, base tours included.
    pub candidates_evaluated: usize,
    /// Offers that replaced the incumbent.
    pub improvements: usize,
    /// Random draws spent building base tours.
    pub random_draws: usize,
}

/// The state one worker owns for the whole run.
///
/// The catalogue is shared read-only with other workers. The incumbent, the
/// random source and the scratch tours belong to this worker alone. The
/// incumbent is never reset between iterations.
pub struct Worker<C: CostFunction = Euclidean> {
    worker_id: usize,
    total_workers: usize,
    catalogue: CityCatalogue,
    cost_fn: C,
    options: SearchOptions,
    incumbent: Incumbent,
    generator: RandomTourGenerator,
    rng: RandomNumberGenerator,
    base: Vec<usize>,
    scratch: Vec<usize>,
    stats: SearchStats,
}

impl Worker<Euclidean> {
    /// Creates a worker scoring tours by Euclidean length.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::Configuration`] if the options are invalid,
    /// `total_workers` is zero, or `worker_id` is not below `total_workers`.
    pub fn new(
        catalogue: CityCatalogue,
        options: SearchOptions,
        worker_id: usize,
        total_workers: usize,
    ) -> Result<Self> {
        Self::with_cost_function(catalogue, options, worker_id, total_workers, Euclidean)
    }
}

impl<C: CostFunction> Worker<C> {
    pub fn with_cost_function(
        catalogue: CityCatalogue,
        options: SearchOptions,
        worker_id: usize,
        total_workers: usize,
        cost_fn: C,
    ) -> Result<Self> {
        options.validate()?;
        if total_workers == 0 {
            return Err(TourError::Configuration(
                "Number of workers cannot be zero".to_string(),
            ));
        }
        if worker_id >= total_workers {
            return Err(TourError::Configuration(format!(
                "Worker id {} is out of range for {} workers",
                worker_id, total_workers
            )));
        }

        let len = catalogue.len();
        Ok(Self {
            worker_id,
            total_workers,
            catalogue,
            cost_fn,
            options,
            incumbent: Incumbent::new(),
            generator: RandomTourGenerator::new(len),
            rng: RandomNumberGenerator::new(),
            base: Vec::with_capacity(len),
            scratch: Vec::with_capacity(len),
            stats: SearchStats::default(),
        })
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    pub fn total_workers(&self) -> usize {
        self.total_workers
    }

    pub fn catalogue(&self) -> &CityCatalogue {
        &self.catalogue
    }

    pub fn incumbent(&self) -> &Incumbent {
        &self.incumbent
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn into_incumbent(self) -> Incumbent {
        self.incumbent
    }

    /// Runs every configured outer iteration.
    #[tracing::instrument(
        level = "info",
        name = "search",
        skip(self),
        fields(worker = self.worker_id, cities = self.catalogue.len())
    )]
    pub fn run(&mut self) {
        info!(
            iterations = self.options.get_iterations(),
            construction = ?self.options.get_construction(),
            "worker started"
        );

        for iteration in 0..self.options.get_iterations() {
            self.step(iteration);
        }

        info!(
            cost = self.incumbent.cost(),
            candidates = self.stats.candidates_evaluated,
            improvements = self.stats.improvements,
            "worker finished"
        );
    }

    /// One outer iteration: build a random base tour, evaluate it, then scan its reversals.
    pub fn step(&mut self, iteration: usize) {
        if let Some(seed) = self
            .options
            .get_seed_policy()
            .seed_for(self.worker_id, iteration)
        {
            self.rng.reseed(seed);
        }

        let draws = self.generator.generate(
            self.options.get_construction(),
            &mut self.rng,
            &mut self.base,
        );
        self.stats.random_draws += draws;

        let base_cost = self.cost_fn.cost(&self.catalogue, &self.base);
        self.stats.candidates_evaluated += 1;
        if self.incumbent.offer_order(&self.base, base_cost) {
            self.stats.improvements += 1;
            trace!(iteration, cost = base_cost, "base tour improved incumbent");
        }

        let outcome = neighborhood::scan(
            &self.catalogue,
            &self.cost_fn,
            &self.base,
            &mut self.incumbent,
            &mut self.scratch,
            self.options.get_parallel_threshold(),
        );
        self.stats.candidates_evaluated += outcome.candidates;
        self.stats.improvements += outcome.improvements;
        self.stats.iterations += 1;

        debug!(
            iteration,
            base_cost,
            best = self.incumbent.cost(),
            improvements = outcome.improvements,
            "iteration complete"
        );
    }
}

/// Runs one worker's full search and returns its final incumbent.
///
/// # Errors
///
/// Returns [`TourError::Configuration`] for invalid options or worker ids.
/// The catalogue itself is validated when it is built, so fewer than two
/// cities never reaches this point.
pub fn search(
    catalogue: &CityCatalogue,
    options: &SearchOptions,
    worker_id: usize,
    total_workers: usize,
) -> Result<Incumbent> {
    let mut worker = Worker::new(catalogue.clone(), options.clone(), worker_id, total_workers)?;
    worker.run();
    Ok(worker.into_incumbent())
}
