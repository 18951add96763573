use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("empty length range: start {start} is not below max {max}")]
    EmptyLengthRange { start: usize, max: usize },

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("no digit alphabets configured")]
    NoAlphabets,

    #[error("alphabet digit {0} is outside 1..=9")]
    InvalidDigit(u8),

    #[error("alphabet repeats digit {0}")]
    DuplicateDigit(u8),

    #[error("cannot parse alphabet {0:?}: expected three digits such as `7,3,2`")]
    ParseAlphabet(String),

    #[error("malformed decimal text {0:?}")]
    MalformedDigits(String),

    #[error("power table has no entry for {digit}^{exponent} (exponents below {limit})")]
    ExponentOutOfRange {
        digit: u8,
        exponent: usize,
        limit: usize,
    },

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
}
