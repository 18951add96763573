use std::fmt;
use std::ops::Range;

use crate::alphabet::DigitAlphabet;

/// Digit counts `(i, j, k)` for the three positions of an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Partition(pub [usize; 3]);

impl Partition {
    pub fn len(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Representative digit string: each alphabet digit repeated by its count,
    /// in alphabet order.
    pub fn digit_string(&self, alphabet: &DigitAlphabet) -> String {
        let mut out = String::with_capacity(self.len());
        for (digit, &count) in alphabet.digits().iter().zip(&self.0) {
            let c = char::from(b'0' + digit);
            out.extend(std::iter::repeat(c).take(count));
        }
        out
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j, k] = self.0;
        write!(f, "({},{},{})", i, j, k)
    }
}

/// Every partition of `length` into three ordered non-negative counts.
///
/// `i` ascends in the outer loop, `j` in the inner loop, `k` takes the rest.
#[derive(Debug, Clone)]
pub struct Partitions {
    length: usize,
    i: usize,
    j: usize,
    done: bool,
}

impl Partitions {
    pub fn new(length: usize) -> Self {
        Partitions {
            length,
            i: 0,
            j: 0,
            done: false,
        }
    }

    /// `(L + 1)(L + 2) / 2`
    pub fn count_for(length: usize) -> usize {
        (length + 1) * (length + 2) / 2
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (i, j) = (self.i, self.j);
        let item = Partition([i, j, self.length - i - j]);

        if i + j < self.length {
            self.j += 1;
        } else if i < self.length {
            self.i += 1;
            self.j = 0;
        } else {
            self.done = true;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = if self.done {
            0
        } else {
            // Rows below `i` are used up, as are the first `j` items of row `i`.
            let remaining_rows = self.length - self.i + 1;
            remaining_rows * (remaining_rows + 1) / 2 - self.j
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for Partitions {}

/// Lengths owned by one worker: `start + worker`, then every `stride` after,
/// while below `end`.
#[derive(Debug, Clone)]
pub struct StridedLengths {
    next: usize,
    end: usize,
    stride: usize,
}

impl StridedLengths {
    pub fn new(range: Range<usize>, worker: usize, stride: usize) -> Self {
        assert!(stride > 0, "stride must be positive");
        StridedLengths {
            next: range.start.saturating_add(worker),
            end: range.end,
            stride,
        }
    }
}

impl Iterator for StridedLengths {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.end {
            return None;
        }
        let length = self.next;
        self.next = self.next.saturating_add(self.stride);
        Some(length)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = if self.next >= self.end {
            0
        } else {
            (self.end - self.next - 1) / self.stride + 1
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for StridedLengths {}
