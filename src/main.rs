use std::error::Error;

use clap::Parser;
use persist_search::{default_workers, DigitAlphabet, Search, SearchConfig, StdoutReporter};

/// Search prime-digit alphabets for numbers with deep multiplicative persistence.
#[derive(Parser, Debug)]
#[command(name = "persist-search")]
#[command(version)]
struct Args {
    /// Worker threads (default: hardware parallelism minus one)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// First digit-length to search
    #[arg(long, default_value_t = 1)]
    start: usize,

    /// Stop before this digit-length
    #[arg(long, default_value_t = 500)]
    max: usize,

    /// Only print per-length summaries
    #[arg(short, long)]
    summary_only: bool,

    /// Digit alphabet such as `7,3,2`; repeat to search several
    #[arg(short, long = "alphabet", value_name = "DIGITS")]
    alphabets: Vec<DigitAlphabet>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> SearchConfig {
        SearchConfig {
            workers: self.workers.unwrap_or_else(default_workers),
            start_length: self.start,
            max_length: self.max,
            summary_only: self.summary_only,
            alphabets: if self.alphabets.is_empty() {
                DigitAlphabet::defaults()
            } else {
                self.alphabets
            },
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Search::new(args.into_config(), StdoutReporter).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_gives_base_configuration() {
        let config = Args::parse_from(["persist-search"]).into_config();
        let expected = SearchConfig::default();
        assert_eq!(config.start_length, expected.start_length);
        assert_eq!(config.max_length, expected.max_length);
        assert_eq!(config.alphabets, expected.alphabets);
        assert_eq!(config.workers, expected.workers);
        assert!(!config.summary_only);
    }

    #[test]
    fn alphabets_replace_defaults() {
        let config = Args::parse_from([
            "persist-search",
            "-a",
            "7,3,2",
            "--alphabet",
            "953",
            "-j",
            "2",
            "--max",
            "40",
            "-s",
        ])
        .into_config();
        assert_eq!(
            config.alphabets,
            [
                DigitAlphabet::new([7, 3, 2]).unwrap(),
                DigitAlphabet::new([9, 5, 3]).unwrap()
            ]
        );
        assert_eq!(config.workers, 2);
        assert_eq!(config.max_length, 40);
        assert!(config.summary_only);
    }

    #[test]
    fn bad_alphabet_is_a_usage_error() {
        assert!(Args::try_parse_from(["persist-search", "-a", "7,7,2"]).is_err());
    }
}
