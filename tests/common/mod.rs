//! Shared helpers for the integration tests.

use std::sync::Mutex;

use persist_search::{
    length_line, record_line, start_line, LengthSummary, Record, Reporter, Stats,
};

/// Collects every reported line, plus the records themselves, in call order.
#[derive(Default)]
pub struct MemoryReporter {
    pub lines: Mutex<Vec<String>>,
    pub records: Mutex<Vec<Record>>,
}

impl MemoryReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl Reporter for MemoryReporter {
    fn start(&self, workers: usize) {
        self.lines.lock().unwrap().push(start_line(workers));
    }

    fn record(&self, record: &Record) {
        self.records.lock().unwrap().push(*record);
        self.lines.lock().unwrap().push(record_line(record));
    }

    fn length(&self, summary: &LengthSummary) {
        self.lines.lock().unwrap().push(length_line(summary));
    }

    fn finish(&self, _: &Stats) {
        self.lines.lock().unwrap().push("fin".to_owned());
    }
}

/// Reference depth by plain `u64` digit multiplication, same numbering as the
/// search: the first multiplication of `digits` is depth 1.
pub fn brute_force_depth(digits: &[u8]) -> u32 {
    let mut product: u64 = digits.iter().map(|&d| u64::from(d)).product();
    let mut depth = 1;
    while product >= 10 {
        let mut next = 1;
        let mut rest = product;
        while rest > 0 {
            next *= rest % 10;
            rest /= 10;
        }
        product = next;
        depth += 1;
    }
    depth
}

/// Every digit string of `length` over `alphabet`, order included.
pub fn all_strings(alphabet: [u8; 3], length: usize) -> Vec<Vec<u8>> {
    let mut strings = vec![Vec::new()];
    for _ in 0..length {
        strings = strings
            .into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&d| {
                    let mut s = prefix.clone();
                    s.push(d);
                    s
                })
            })
            .collect();
    }
    strings
}
