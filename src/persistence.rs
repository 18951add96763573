//! Repeated digit multiplication and best-depth tracking.
//!
//! Depth counts multiplications. The product derived from a partition is the
//! first one, so a run started at depth 1 ends at the classic multiplicative
//! persistence of any multi-digit number with that digit multiset.

use std::cmp::Reverse;
use std::sync::atomic::{AtomicU32, Ordering};

use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::alphabet::DigitAlphabet;
use crate::digits::DigitDecomposer;
use crate::power_table::PowerTable;
use crate::reporter::Reporter;
use crate::spaces::Partition;
use crate::Result;

/// A persistence depth reached by one (alphabet, partition) candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub depth: u32,
    pub alphabet_index: usize,
    pub alphabet: DigitAlphabet,
    pub partition: Partition,
}

impl Record {
    pub fn length(&self) -> usize {
        self.partition.len()
    }

    pub fn digit_string(&self) -> String {
        self.partition.digit_string(&self.alphabet)
    }

    /// Higher depth wins; equal depths go to whichever candidate is visited first
    /// (shorter length, then partition order, then alphabet order).
    fn rank(&self) -> (u32, Reverse<(usize, [usize; 3], usize)>) {
        (
            self.depth,
            Reverse((self.length(), self.partition.0, self.alphabet_index)),
        )
    }

    pub fn outranks(&self, other: &Record) -> bool {
        self.rank() > other.rank()
    }

    /// Keeps whichever of `current` and `candidate` ranks higher.
    pub fn best_of(current: Option<Record>, candidate: Record) -> Option<Record> {
        match current {
            Some(held) if !candidate.outranks(&held) => Some(held),
            _ => Some(candidate),
        }
    }
}

/// Highest depth seen by any worker so far. Zero means no record yet.
#[derive(Debug, Default)]
pub struct BestDepth(AtomicU32);

impl BestDepth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Raises the shared maximum to `depth`. Returns true when `depth` ties or
    /// beats the maximum held just before the update.
    pub fn offer(&self, depth: u32) -> bool {
        self.0.fetch_max(depth, Ordering::Relaxed) <= depth
    }
}

pub struct Evaluator<'a> {
    table: &'a PowerTable,
    decomposer: DigitDecomposer<'a>,
    best: &'a BestDepth,
    reporter: Option<&'a dyn Reporter>,
}

impl<'a> Evaluator<'a> {
    /// `reporter` receives every candidate that ties or beats `best`; pass
    /// `None` to only track the depth.
    pub fn new(
        table: &'a PowerTable,
        best: &'a BestDepth,
        reporter: Option<&'a dyn Reporter>,
    ) -> Self {
        Evaluator {
            table,
            decomposer: DigitDecomposer::new(table),
            best,
            reporter,
        }
    }

    /// `a0^i * a1^j * a2^k` for alphabet `(a0, a1, a2)` and partition `(i, j, k)`.
    pub fn partition_product(
        &self,
        alphabet: &DigitAlphabet,
        partition: &Partition,
    ) -> Result<BigUint> {
        let [a0, a1, a2] = alphabet.digits();
        let [i, j, k] = partition.0;
        let mut product = self.table.try_lookup(a0, i)?.clone();
        product *= self.table.try_lookup(a1, j)?;
        product *= self.table.try_lookup(a2, k)?;
        Ok(product)
    }

    /// Multiplies the digits of `product` until a single digit remains and
    /// returns the depth reached. A zero product is already a single digit.
    pub fn evaluate(&self, product: BigUint, start_depth: u32) -> Result<u32> {
        let mut depth = start_depth;
        let mut product = product;
        loop {
            let text = product.to_str_radix(10);
            if text.len() == 1 {
                return Ok(depth);
            }
            product = self.decomposer.decompose(&text)?;
            depth += 1;
            trace!(depth, digits = text.len(), "re-multiplied");
        }
    }

    /// Evaluates one candidate from depth 1 and publishes it when it ties or
    /// beats the shared best depth.
    pub fn evaluate_candidate(
        &self,
        alphabet_index: usize,
        alphabet: &DigitAlphabet,
        partition: Partition,
    ) -> Result<Record> {
        let product = self.partition_product(alphabet, &partition)?;
        let record = Record {
            depth: self.evaluate(product, 1)?,
            alphabet_index,
            alphabet: *alphabet,
            partition,
        };

        if self.best.offer(record.depth) {
            debug!(
                depth = record.depth,
                alphabet = %record.alphabet,
                partition = %record.partition,
                "new best depth"
            );
            if let Some(reporter) = self.reporter {
                reporter.record(&record);
            }
        }
        Ok(record)
    }
}
