//! Error types for the primality core and the timing harness.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimalityError {
    /// The witness range `[low, high]` is empty. Only candidates `n >= 4`
    /// have a base in `[2, n - 2]`.
    #[error("invalid witness range [{low}, {high}]")]
    InvalidRange { low: u64, high: u64 },

    /// The sieve would allocate more than the configured maximum.
    #[error("sieve limit {limit} exceeds maximum {max} (raise --sieve-max to allow it)")]
    SieveTooLarge { limit: u64, max: u64 },
}
