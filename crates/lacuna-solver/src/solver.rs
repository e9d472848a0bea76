// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Gap Solver
//!
//! A high-level orchestrator that runs the full partition → scan → reduce
//! pipeline over a group of worker threads and returns the frozen global
//! maximum together with run statistics.
//!
//! ## Highlights
//!
//! - Worker execution:
//!   - Spawn one worker per rank using `std::thread::scope`; each worker
//!     owns its communicator endpoint and derives its own assignment.
//!   - A shared entry/exit barrier brackets the computation so elapsed-time
//!     measurement is comparable across runs.
//! - Shared state:
//!   - Workers share nothing mutable beyond the channel mesh and a relaxed
//!     `AtomicU64` that accumulates next-prime advancements for statistics.
//! - Outcome construction:
//!   - Rank 0 folds all local results; the solver wraps the fold into a
//!     `GlobalResult` and attaches `SearchStatistics`.
//! - Builder pattern:
//!   - `GapSolverBuilder` to configure the worker count and substitute the
//!     prime engine.
//!
//! ## Usage
//!
//! ```rust
//! use lacuna_model::range::SearchRange;
//! use lacuna_solver::solver::GapSolverBuilder;
//! use num_bigint::BigUint;
//!
//! let range = SearchRange::from_u64(100).unwrap();
//! let solver = GapSolverBuilder::new().with_workers(2).build();
//!
//! let outcome = solver.solve(&range).unwrap();
//! assert_eq!(*outcome.result().max_gap(), BigUint::from(8u32));
//! ```

use lacuna_comm::channel::ChannelGroup;
use lacuna_comm::{CommError, Communicator};
use lacuna_core::num::primes::{NumPrimeEngine, PrimeEngine};
use lacuna_model::range::{ModelError, SearchRange};
use lacuna_model::result::{GlobalResult, LocalResult};
use lacuna_search::reducer::{reduce, report, COORDINATOR};
use lacuna_search::scanner::GapScanner;
use lacuna_search::stats::{SearchStatistics, SearchStatisticsBuilder};
use std::sync::atomic::{AtomicU64, Ordering};

/// The error type for a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The solver was configured with zero workers.
    NoWorkers,
    /// Deriving a worker's assignment failed.
    Model(ModelError),
    /// A transfer between workers failed.
    Comm(CommError),
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWorkers => write!(f, "Solver requires at least one worker"),
            Self::Model(e) => write!(f, "Model error: {}", e),
            Self::Comm(e) => write!(f, "Communication error: {}", e),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<ModelError> for SolverError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

impl From<CommError> for SolverError {
    fn from(e: CommError) -> Self {
        Self::Comm(e)
    }
}

/// The result of a finished run: the global maximum and run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapOutcome {
    result: GlobalResult,
    statistics: SearchStatistics,
}

impl GapOutcome {
    #[inline]
    pub fn new(result: GlobalResult, statistics: SearchStatistics) -> Self {
        Self { result, statistics }
    }

    /// Returns the frozen global maximum.
    #[inline]
    pub fn result(&self) -> &GlobalResult {
        &self.result
    }

    /// Returns the statistics collected during the run.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the global maximum.
    #[inline]
    pub fn into_result(self) -> GlobalResult {
        self.result
    }
}

impl std::fmt::Display for GapOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}

/// Orchestrates the partition → scan → reduce pipeline.
///
/// Construct via [`GapSolverBuilder`]. A solver is reusable: `solve` may be
/// called any number of times, and identical inputs produce identical
/// outcomes (up to timing).
#[derive(Debug)]
pub struct GapSolver<E = NumPrimeEngine> {
    engine: E,
    worker_count: usize,
}

impl<E> GapSolver<E>
where
    E: PrimeEngine + Sync,
{
    /// Returns the configured number of workers.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Runs the full pipeline over `range`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoWorkers`] for an empty group; configuration
    /// is rejected before any partitioning happens. Communication failures
    /// surface as [`SolverError::Comm`]; no partial result is ever produced.
    pub fn solve(&self, range: &SearchRange) -> Result<GapOutcome, SolverError> {
        if self.worker_count == 0 {
            return Err(SolverError::NoWorkers);
        }

        let endpoints = ChannelGroup::<LocalResult>::create(self.worker_count)?;
        let advancements = AtomicU64::new(0);
        let start_time = std::time::Instant::now();

        let mut results: Vec<Result<Option<LocalResult>, SolverError>> =
            Vec::with_capacity(self.worker_count);

        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.worker_count);

            for endpoint in endpoints {
                let engine = &self.engine;
                let advancements = &advancements;
                handles.push(scope.spawn(move || {
                    run_worker(engine, range, endpoint, advancements)
                }));
            }

            for handle in handles {
                results.push(handle.join().expect("worker thread panicked"));
            }
        });

        let elapsed = start_time.elapsed();

        // Rank order: the coordinator's error, if any, wins over later ones.
        let mut reduced: Option<LocalResult> = None;
        for result in results {
            if let Some(global) = result? {
                reduced = Some(global);
            }
        }
        let reduced = reduced.expect("coordinator rank always yields the reduced result");

        let statistics = SearchStatisticsBuilder::new()
            .workers(self.worker_count)
            .advancements(advancements.load(Ordering::Relaxed))
            .elapsed(elapsed)
            .build();

        tracing::info!(
            workers = self.worker_count,
            max_gap = %reduced.max_gap(),
            elapsed_secs = elapsed.as_secs_f64(),
            "search finished"
        );

        Ok(GapOutcome::new(
            GlobalResult::new(range.upper_bound().clone(), reduced),
            statistics,
        ))
    }
}

/// One rank's full pipeline: barrier in, partition, scan, report or reduce,
/// barrier out.
///
/// Only the coordinator returns a folded result; every other rank returns
/// `None` after its single send.
fn run_worker<E>(
    engine: &E,
    range: &SearchRange,
    comm: ChannelGroup<LocalResult>,
    advancements: &AtomicU64,
) -> Result<Option<LocalResult>, SolverError>
where
    E: PrimeEngine,
{
    comm.barrier();

    let assignment = range.assignment(comm.rank(), comm.size())?;
    tracing::debug!(rank = comm.rank(), assignment = %assignment, "worker assigned");

    let outcome = GapScanner::new(engine).scan(&assignment);
    advancements.fetch_add(outcome.advancements, Ordering::Relaxed);

    let folded = if comm.rank() == COORDINATOR {
        Some(reduce(&comm, outcome.result)?)
    } else {
        report(&comm, outcome.result)?;
        None
    };

    comm.barrier();
    Ok(folded)
}

/// Builder for [`GapSolver`].
#[derive(Debug, Clone)]
pub struct GapSolverBuilder<E = NumPrimeEngine> {
    engine: E,
    worker_count: usize,
}

impl Default for GapSolverBuilder<NumPrimeEngine> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl GapSolverBuilder<NumPrimeEngine> {
    /// Creates a builder with the default probabilistic engine and one
    /// worker per available CPU.
    #[inline]
    pub fn new() -> Self {
        Self {
            engine: NumPrimeEngine,
            worker_count: default_worker_count(),
        }
    }
}

impl<E> GapSolverBuilder<E> {
    /// Sets the number of worker threads.
    #[inline]
    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Substitutes the prime engine.
    #[inline]
    pub fn with_engine<F>(self, engine: F) -> GapSolverBuilder<F> {
        GapSolverBuilder {
            engine,
            worker_count: self.worker_count,
        }
    }

    /// Builds the configured [`GapSolver`].
    #[inline]
    pub fn build(self) -> GapSolver<E> {
        GapSolver {
            engine: self.engine,
            worker_count: self.worker_count,
        }
    }
}

fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}
