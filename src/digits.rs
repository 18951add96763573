//! Digit products of decimal text, computed run by run from the power table.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::power_table::PowerTable;
use crate::{Error, Result};

/// Maximal runs of one repeated digit, as `(digit, run_length)` pairs.
///
/// `"2411124"` yields `(2, 1), (4, 1), (1, 3), (2, 1), (4, 1)`.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    bytes: &'a [u8],
}

pub fn runs(text: &str) -> Runs<'_> {
    Runs {
        bytes: text.as_bytes(),
    }
}

impl Iterator for Runs<'_> {
    type Item = (u8, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (&first, rest) = self.bytes.split_first()?;
        let len = 1 + rest.iter().take_while(|&&b| b == first).count();
        self.bytes = &self.bytes[len..];
        Some((first.wrapping_sub(b'0'), len))
    }
}

fn check_decimal(text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let well_formed = match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    };
    if well_formed {
        Ok(())
    } else {
        Err(Error::MalformedDigits(text.to_owned()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DigitDecomposer<'t> {
    table: &'t PowerTable,
}

impl<'t> DigitDecomposer<'t> {
    pub fn new(table: &'t PowerTable) -> Self {
        DigitDecomposer { table }
    }

    /// Product of the decimal digits of `text`.
    ///
    /// Each run of digit `d` with length `n` contributes `d^n`; any `0` makes the
    /// whole product zero. `text` must be a canonical non-negative decimal.
    pub fn decompose(&self, text: &str) -> Result<BigUint> {
        check_decimal(text)?;

        let mut product = BigUint::one();
        for (digit, run) in runs(text) {
            if digit == 0 {
                return Ok(BigUint::zero());
            }
            product *= self.table.try_lookup(digit, run)?;
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive_product(text: &str) -> BigUint {
        text.bytes()
            .map(|b| BigUint::from(b - b'0'))
            .fold(BigUint::one(), |acc, d| acc * d)
    }

    fn decompose(text: &str) -> Result<BigUint> {
        let table = PowerTable::new(64);
        DigitDecomposer::new(&table).decompose(text)
    }

    #[test]
    fn runs_collapse_consecutive_digits() {
        let collected: Vec<_> = runs("2411124").collect();
        assert_eq!(collected, [(2, 1), (4, 1), (1, 3), (2, 1), (4, 1)]);
    }

    #[test]
    fn runs_of_empty_text_is_empty() {
        assert_eq!(runs("").count(), 0);
    }

    #[test]
    fn multiplies_all_digits() {
        assert_eq!(decompose("2411124"), Ok(BigUint::from(64u32)));
        assert_eq!(decompose("7"), Ok(BigUint::from(7u32)));
        assert_eq!(decompose("39"), Ok(BigUint::from(27u32)));
    }

    #[test]
    fn zero_digit_absorbs_product() {
        assert_eq!(decompose("130"), Ok(BigUint::zero()));
        assert_eq!(decompose("90999"), Ok(BigUint::zero()));
        assert_eq!(decompose("0"), Ok(BigUint::zero()));
    }

    #[test]
    fn product_ignores_digit_order() {
        let expected = Ok(BigUint::from(147u32));
        assert_eq!(decompose("773"), expected);
        assert_eq!(decompose("737"), expected);
        assert_eq!(decompose("377"), expected);
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "-12", "012", "1a2", "1 2", "+7"] {
            assert_eq!(
                decompose(text),
                Err(Error::MalformedDigits(text.to_owned())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn run_longer_than_table_is_reported() {
        let table = PowerTable::new(3);
        let result = DigitDecomposer::new(&table).decompose("2222");
        assert_eq!(
            result,
            Err(Error::ExponentOutOfRange {
                digit: 2,
                exponent: 4,
                limit: 3
            })
        );
    }

    proptest! {
        #[test]
        fn matches_digit_by_digit_product(text in "[1-9][0-9]{0,60}") {
            prop_assert_eq!(decompose(&text).unwrap(), naive_product(&text));
        }

        #[test]
        fn matches_on_long_repeated_runs(text in "[1-9](1{0,20}|7{0,20}|[2-3]{0,20}){1,3}") {
            prop_assert_eq!(decompose(&text).unwrap(), naive_product(&text));
        }
    }
}
