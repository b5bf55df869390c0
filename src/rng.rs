use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Largest value an unranged draw can produce.
pub const RAND_MAX: i32 = i32::MAX;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("empty range: low {low} is greater than high {high}")]
    Empty { low: i32, high: i32 },
}

/// 64-bit LCG using the Knuth MMIX constants. Each draw advances the state
/// once and returns its top 31 bits, so unranged output is `[0, RAND_MAX]`.
pub struct SeededRng {
    seed: u64,
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { seed, state: seed }
    }

    /// Seeds from the wall clock: whole seconds since the Unix epoch, with
    /// the sub-second part discarded. Two generators built within the same
    /// clock second are identical; a clock reading before the epoch seeds
    /// with 0. Neither case is an error.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::new(seed)
    }

    /// The seed this generator was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One unranged draw in `[0, RAND_MAX]`.
    pub fn next_i32(&mut self) -> i32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as i32
    }

    /// One draw mapped into the closed interval `[low, high]`.
    ///
    /// The mapping is `(draw % size) + low` with `size = high - low + 1`.
    /// When `size` does not divide `RAND_MAX + 1` evenly, values at the low
    /// end of the interval come up slightly more often; that bias is
    /// accepted here and no rejection sampling is done.
    ///
    /// An inverted range (`high < low`) is rejected before any draw, so a
    /// failed call does not advance the generator.
    pub fn next_in_range(&mut self, low: i32, high: i32) -> Result<i32, RangeError> {
        if high < low {
            return Err(RangeError::Empty { low, high });
        }

        // i64 keeps size from overflowing when the bounds sit at the i32
        // extremes; the result lands back within [low, high] so the final
        // cast is exact.
        let size = i64::from(high) - i64::from(low) + 1;
        let r = i64::from(self.next_i32());
        Ok((r % size + i64::from(low)) as i32)
    }
}
