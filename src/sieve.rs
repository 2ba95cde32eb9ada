//! # Sieve — Prime Generation and Modular Exponentiation
//!
//! Two pieces of number-theoretic infrastructure:
//!
//! 1. **Prime generation** via the classic sieve of Eratosthenes over a
//!    `Vec<bool>` indexed `0..=limit`. No wheel, no bit packing: the benchmark
//!    compares the textbook algorithm against the other three tests.
//! 2. **Modular exponentiation** (`pow_mod`) using u128 intermediates, shared
//!    by the Fermat and Miller–Rabin tests.
//!
//! ## Membership
//!
//! [`contains`] answers "is `n` prime?" by generating every prime up to
//! `limit` and searching the result. It regenerates the whole sieve on each
//! call. That cost is what the benchmark measures, so it is kept as is.
//!
//! ## Algorithm: Sieve of Eratosthenes
//!
//! For each `current` with `current² <= limit` that is still marked prime,
//! cross off `current², current² + current, …`. Complexity: O(n log log n)
//! time, O(n) space.
//!
//! ## References
//!
//! - Eratosthenes of Cyrene, ~240 BCE.
//! - OEIS A000720: pi(n), the prime counting function.

use crate::error::PrimalityError;

/// Default ceiling on the sieve size the harness will allocate.
pub const SIEVE_MAX: u64 = 100_000_000;

/// Generate all primes up to and including `limit`, in ascending order.
pub fn generate_primes(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return vec![];
    }

    let limit = limit as usize;
    let mut sieve = vec![true; limit + 1];
    sieve[0] = false;
    sieve[1] = false;

    let mut current = 2usize;
    while current * current <= limit {
        if sieve[current] {
            let mut multiple = current * current;
            while multiple <= limit {
                sieve[multiple] = false;
                multiple += current;
            }
        }
        current += 1;
    }

    let mut primes = Vec::with_capacity(estimate_prime_count(limit));
    primes.extend(
        sieve
            .iter()
            .enumerate()
            .filter(|&(_, &is_prime)| is_prime)
            .map(|(idx, _)| idx as u64),
    );
    primes
}

/// Estimate prime count up to n using the prime counting function approximation.
fn estimate_prime_count(n: usize) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (1.3 * nf / nf.ln()) as usize
}

/// `n ∈ generate_primes(limit)`. Negative `n` is never a member.
pub fn contains(n: i64, limit: u64) -> bool {
    let Ok(n) = u64::try_from(n) else {
        return false;
    };
    generate_primes(limit).binary_search(&n).is_ok()
}

/// [`contains`] with an allocation guard: refuses limits above `max`.
pub fn checked_contains(n: i64, limit: u64, max: u64) -> Result<bool, PrimalityError> {
    if limit > max {
        return Err(PrimalityError::SieveTooLarge { limit, max });
    }
    Ok(contains(n, limit))
}

/// Modular exponentiation: base^exp mod modulus.
/// Uses u128 intermediates to avoid overflow for moduli up to ~2^63.
pub fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result: u64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = (result as u128 * base as u128 % modulus as u128) as u64;
        }
        exp >>= 1;
        base = (base as u128 * base as u128 % modulus as u128) as u64;
    }
    result
}
