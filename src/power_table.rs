use num_bigint::BigUint;
use num_traits::One;

use crate::{Error, Result};

/// Exact `digit^exponent` for every digit 1..=9 and exponent below `max_exponent`.
#[derive(Debug, Clone)]
pub struct PowerTable {
    // rows[d - 1][e] == d^e
    rows: Vec<Vec<BigUint>>,
    max_exponent: usize,
}

impl PowerTable {
    pub const MAX_DIGIT: u8 = 9;

    pub fn new(max_exponent: usize) -> Self {
        let rows = (1..=Self::MAX_DIGIT)
            .map(|digit| {
                let base = BigUint::from(digit);
                let mut row = Vec::with_capacity(max_exponent);
                let mut power = BigUint::one();
                for _ in 0..max_exponent {
                    let next = &power * &base;
                    row.push(power);
                    power = next;
                }
                row
            })
            .collect();

        PowerTable { rows, max_exponent }
    }

    pub fn max_exponent(&self) -> usize {
        self.max_exponent
    }

    pub fn get(&self, digit: u8, exponent: usize) -> Option<&BigUint> {
        let row = usize::from(digit).checked_sub(1)?;
        self.rows.get(row)?.get(exponent)
    }

    pub fn try_lookup(&self, digit: u8, exponent: usize) -> Result<&BigUint> {
        self.get(digit, exponent).ok_or(Error::ExponentOutOfRange {
            digit,
            exponent,
            limit: self.max_exponent,
        })
    }

    /// # Panics
    ///
    /// Panics when `digit` is not in 1..=9 or `exponent` is not below
    /// [`max_exponent`](Self::max_exponent). Both indicate a sizing bug in the caller.
    pub fn lookup(&self, digit: u8, exponent: usize) -> &BigUint {
        match self.get(digit, exponent) {
            Some(power) => power,
            None => panic!(
                "power table lookup {}^{} outside digits 1..=9, exponents 0..{}",
                digit, exponent, self.max_exponent
            ),
        }
    }
}
