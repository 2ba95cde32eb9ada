//! # Witness — Random Base Selection for Probabilistic Tests
//!
//! The Fermat and Miller–Rabin tests draw their bases from a [`WitnessSource`],
//! a uniform integer generator over a closed range. Two sources ship:
//!
//! - [`SeededSource`] wraps `rand::rngs::StdRng`. Create it once per process
//!   and pass it by `&mut` into every call, so a benchmark loop never re-seeds
//!   and never reuses correlated bases.
//! - [`SequenceSource`] replays a fixed list of bases. Unit tests use it to
//!   make the probabilistic tests deterministic (e.g. forcing base 2 on 341).
//!
//! [`witness_bounds`] computes the range `[2, n - 2]` and reports
//! [`PrimalityError::InvalidRange`] for `n < 4`, where that range is empty.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PrimalityError;

/// Uniform integer generator over a closed range.
pub trait WitnessSource {
    /// Return an integer in `[low, high]`. Callers guarantee `low <= high`.
    fn next(&mut self, low: u64, high: u64) -> u64;
}

/// The base range `[2, n - 2]` for candidate `n`.
pub fn witness_bounds(n: u64) -> Result<(u64, u64), PrimalityError> {
    let high = n.saturating_sub(2);
    if high < 2 {
        return Err(PrimalityError::InvalidRange { low: 2, high });
    }
    Ok((2, high))
}

/// `StdRng`-backed source. Keeps its seed so reports can reproduce a run.
pub struct SeededSource {
    rng: StdRng,
    seed: u64,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl WitnessSource for SeededSource {
    fn next(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of bases, cycling when it runs out.
///
/// A value outside the requested range is reduced into it, so a sequence
/// written for one candidate never produces an out-of-range base for another.
pub struct SequenceSource {
    values: Vec<u64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<u64>) -> Self {
        SequenceSource { values, pos: 0 }
    }

    /// Number of bases handed out so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl WitnessSource for SequenceSource {
    fn next(&mut self, low: u64, high: u64) -> u64 {
        if self.values.is_empty() {
            return low;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        if (low..=high).contains(&v) {
            v
        } else {
            low + v % (high - low + 1)
        }
    }
}
