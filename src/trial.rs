//! # Trial Division — Deterministic O(√n) Primality Test
//!
//! After ruling out 2 and 3, every prime is of the form 6k ± 1, so the loop
//! tests divisor pairs (d, d + 2) for d = 5, 11, 17, … while d² <= n.

/// Exact primality by trial division. Total on `i64`: anything below 2 is
/// not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    let n = n as u64;
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    // d <= sqrt(i64::MAX) + 6, so d * d fits in u64.
    let mut divisor: u64 = 5;
    while divisor * divisor <= n {
        if n % divisor == 0 || n % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}
