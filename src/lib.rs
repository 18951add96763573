//! Search for the deepest multiplicative persistence among numbers whose digits
//! come from small prime-digit alphabets such as (7,3,2) and (7,5,3).
//!
//! The digit product of a number only depends on its digit multiset, so each
//! digit-length L is covered by the `(L+1)(L+2)/2` partitions of L over an
//! alphabet. Every partition's product comes from a shared [`PowerTable`] and is
//! then re-multiplied digit by digit until one digit remains.
//!
//! Lengths are dealt out to a fixed pool of worker threads in round-robin
//! stride order. Workers share only the power table, the configuration and a
//! lock-free best depth used to decide which records get reported live. Each
//! worker keeps its own best [`Record`]; these are merged after every worker has
//! finished.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

pub mod alphabet;
pub use alphabet::*;

pub mod config;
pub use config::*;

pub mod digits;
pub use digits::*;

pub mod error;
pub use error::*;

pub mod persistence;
pub use persistence::*;

pub mod power_table;
pub use power_table::*;

pub mod reporter;
pub use reporter::*;

pub mod spaces;
pub use spaces::*;

/// Outcome of one digit-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthSummary {
    pub length: usize,
    pub max_depth: u32,
    pub combinations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub elapsed: Duration,
    pub combinations: usize,
}

impl Stats {
    /// Combinations per second.
    pub fn throughput(&self) -> f64 {
        self.combinations as f64 / self.elapsed.as_secs_f64().max(f64::EPSILON)
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Option<Record>,
    /// One entry per searched length, ascending.
    pub lengths: Vec<LengthSummary>,
    pub stats: Stats,
}

#[derive(Debug, Default)]
struct WorkerOutcome {
    best: Option<Record>,
    lengths: Vec<LengthSummary>,
}

pub struct Search<R: Reporter> {
    config: SearchConfig,
    reporter: R,
}

impl<R: Reporter> Search<R> {
    pub fn new(config: SearchConfig, reporter: R) -> Self {
        Search { config, reporter }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn run(&self) -> Result<SearchOutcome> {
        self.config.validate()?;
        for alphabet in &self.config.alphabets {
            if alphabet.pairs_two_and_five() {
                warn!(%alphabet, "alphabet pairs 2 with 5; mixed multisets collapse to 0");
            }
        }

        let started = Instant::now();
        let workers = self.config.workers;
        self.reporter.start(workers);
        info!(
            workers,
            start = self.config.start_length,
            max = self.config.max_length,
            alphabets = self.config.alphabets.len(),
            "starting search"
        );

        // A product of L digits has at most L digits, so no run or partition
        // count reaches `max_length`.
        let table = PowerTable::new(self.config.max_length);
        let best = BestDepth::new();

        let results: Vec<Result<WorkerOutcome>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    let (table, best) = (&table, &best);
                    scope.spawn(move || self.work(worker, table, best))
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(Error::WorkerPanicked(worker)))
                })
                .collect()
        });

        let mut best_record = None;
        let mut lengths = Vec::new();
        for result in results {
            let outcome = result?;
            if let Some(record) = outcome.best {
                best_record = Record::best_of(best_record, record);
            }
            lengths.extend(outcome.lengths);
        }
        lengths.sort_unstable_by_key(|summary| summary.length);

        let stats = Stats {
            elapsed: started.elapsed(),
            combinations: lengths.iter().map(|summary| summary.combinations).sum(),
        };
        info!(
            combinations = stats.combinations,
            throughput = %format!("{}/s", human_format::Formatter::new().format(stats.throughput())),
            best_depth = best_record.map(|record| record.depth),
            "search finished"
        );
        self.reporter.finish(&stats);

        Ok(SearchOutcome {
            best: best_record,
            lengths,
            stats,
        })
    }

    fn work(&self, worker: usize, table: &PowerTable, best: &BestDepth) -> Result<WorkerOutcome> {
        let reporter: Option<&dyn Reporter> = if self.config.summary_only {
            None
        } else {
            Some(&self.reporter)
        };
        let evaluator = Evaluator::new(table, best, reporter);
        let mut outcome = WorkerOutcome::default();

        for length in StridedLengths::new(self.config.lengths(), worker, self.config.workers) {
            debug!(worker, length, "searching length");
            let mut summary = LengthSummary {
                length,
                max_depth: 0,
                combinations: 0,
            };

            for partition in Partitions::new(length) {
                for (index, alphabet) in self.config.alphabets.iter().enumerate() {
                    let record = evaluator.evaluate_candidate(index, alphabet, partition)?;
                    summary.max_depth = summary.max_depth.max(record.depth);
                    summary.combinations += 1;
                    outcome.best = Record::best_of(outcome.best, record);
                }
            }

            self.reporter.length(&summary);
            outcome.lengths.push(summary);
        }

        debug!(worker, lengths = outcome.lengths.len(), "worker done");
        Ok(outcome)
    }
}
