use std::ops::Range;

use crate::alphabet::DigitAlphabet;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub workers: usize,
    /// First digit-length searched.
    pub start_length: usize,
    /// Exclusive upper bound on digit-length.
    pub max_length: usize,
    /// Print per-length summaries only, no `Found` lines.
    pub summary_only: bool,
    pub alphabets: Vec<DigitAlphabet>,
}

/// Hardware parallelism minus one, at least 1.
pub fn default_workers() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            workers: default_workers(),
            start_length: 1,
            max_length: 500,
            summary_only: false,
            alphabets: DigitAlphabet::defaults(),
        }
    }
}

impl SearchConfig {
    pub fn lengths(&self) -> Range<usize> {
        self.start_length..self.max_length
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::NoWorkers);
        }
        if self.start_length >= self.max_length {
            return Err(Error::EmptyLengthRange {
                start: self.start_length,
                max: self.max_length,
            });
        }
        if self.alphabets.is_empty() {
            return Err(Error::NoAlphabets);
        }
        Ok(())
    }
}
