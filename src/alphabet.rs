use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Three distinct digits from 1..=9 that candidate numbers are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitAlphabet([u8; 3]);

impl DigitAlphabet {
    pub fn new(digits: [u8; 3]) -> Result<Self> {
        for (n, &digit) in digits.iter().enumerate() {
            if !(1..=9).contains(&digit) {
                return Err(Error::InvalidDigit(digit));
            }
            if digits[..n].contains(&digit) {
                return Err(Error::DuplicateDigit(digit));
            }
        }
        Ok(DigitAlphabet(digits))
    }

    /// (7,3,2) and (7,5,3), the families searched by default.
    pub fn defaults() -> Vec<DigitAlphabet> {
        vec![DigitAlphabet([7, 3, 2]), DigitAlphabet([7, 5, 3])]
    }

    pub fn digits(&self) -> [u8; 3] {
        self.0
    }

    /// A multiset holding both 2 and 5 multiplies to a multiple of 10.
    pub fn pairs_two_and_five(&self) -> bool {
        self.0.contains(&2) && self.0.contains(&5)
    }
}

impl fmt::Display for DigitAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({},{},{})", a, b, c)
    }
}

impl FromStr for DigitAlphabet {
    type Err = Error;

    /// Accepts `7,3,2`, `7 3 2` or `732`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = || Error::ParseAlphabet(s.to_owned());

        let digits: Vec<u8> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(parse_error))
            .collect::<Result<_>>()?;

        let digits: [u8; 3] = digits.try_into().map_err(|_| parse_error())?;
        DigitAlphabet::new(digits)
    }
}
