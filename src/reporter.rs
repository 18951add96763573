use crate::persistence::Record;
use crate::{LengthSummary, Stats};

/// Output sink shared by all workers. Calls from different workers may
/// arrive in any order.
pub trait Reporter: Sync {
    fn start(&self, workers: usize);

    fn record(&self, record: &Record);

    fn length(&self, summary: &LengthSummary);

    fn finish(&self, stats: &Stats);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn start(&self, workers: usize) {
        (**self).start(workers)
    }

    fn record(&self, record: &Record) {
        (**self).record(record)
    }

    fn length(&self, summary: &LengthSummary) {
        (**self).length(summary)
    }

    fn finish(&self, stats: &Stats) {
        (**self).finish(stats)
    }
}

pub struct NullReporter;

impl Reporter for NullReporter {
    fn start(&self, _: usize) {}

    fn record(&self, _: &Record) {}

    fn length(&self, _: &LengthSummary) {}

    fn finish(&self, _: &Stats) {}
}

/// Writes each line to stdout as soon as it is produced.
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn start(&self, workers: usize) {
        println!("{}", start_line(workers));
    }

    fn record(&self, record: &Record) {
        println!("{}", record_line(record));
    }

    fn length(&self, summary: &LengthSummary) {
        println!("{}", length_line(summary));
    }

    fn finish(&self, stats: &Stats) {
        println!("{}", finish_line(stats));
    }
}

pub fn start_line(workers: usize) -> String {
    format!("Start ({} threads)", workers)
}

/// `Found(<depth>): <digit string>`
pub fn record_line(record: &Record) -> String {
    format!("Found({}): {}", record.depth, record.digit_string())
}

/// `<length>:<max depth>:<combinations tried>`
pub fn length_line(summary: &LengthSummary) -> String {
    format!(
        "{:4}:{:2}:{}",
        summary.length, summary.max_depth, summary.combinations
    )
}

pub fn finish_line(stats: &Stats) -> String {
    format!("fin ({:.1} sec)", stats.elapsed.as_secs_f64())
}
