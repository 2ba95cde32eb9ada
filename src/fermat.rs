//! # Fermat — Probabilistic Primality via Fermat's Little Theorem
//!
//! For prime n and any base a coprime to n, a^(n-1) ≡ 1 (mod n). A base that
//! breaks the congruence proves n composite. A base that satisfies it proves
//! nothing: composites such as 341 (base 2) and every Carmichael number
//! (561, 1105, …) satisfy it for many bases. Those liars are a property of the
//! test, not a bug.

use crate::sieve::pow_mod;
use crate::witness::{witness_bounds, WitnessSource};

/// Does `n` satisfy the Fermat congruence for `base`? `n` must be at least 2.
pub fn passes(n: u64, base: u64) -> bool {
    pow_mod(base, n - 1, n) == 1
}

/// Fermat test with `iterations` random bases drawn from `source`.
///
/// `false` is exact (composite). `true` means "probably prime".
pub fn is_probable_prime<W>(value: i64, iterations: u32, source: &mut W) -> bool
where
    W: WitnessSource + ?Sized,
{
    if value <= 1 {
        return false;
    }
    let n = value as u64;
    let Ok((low, high)) = witness_bounds(n) else {
        // 2 and 3: prime, and there is no base in [2, n-2] to draw.
        return true;
    };
    for _ in 0..iterations {
        let base = source.next(low, high);
        if !passes(n, base) {
            return false;
        }
    }
    true
}
