//! # Miller–Rabin — Strong Probable-Prime Test
//!
//! Write n - 1 = d·2^s with d odd. For a base a, n is a strong probable prime
//! if a^d ≡ 1 (mod n) or a^(d·2^r) ≡ -1 (mod n) for some 0 <= r < s. A prime
//! always passes; a composite passes for at most 1/4 of bases, so `rounds`
//! random bases leave an error probability of at most 4^(-rounds).
//!
//! ## One Round
//!
//! ```text
//! testing-base-d ──x==1 or x==n-1──> decided-prime-round
//!       │
//!       └──> squaring ──x==n-1──> decided-prime-round
//!               │  ├──x==1────> decided-composite-round
//!               │  └──d==n-1──> decided-composite-round (exhausted)
//!               └── x = x² mod n, d = 2d
//! ```
//!
//! Doubling d tracks how many squarings remain: it reaches n - 1 after
//! exactly s - 1 squarings.

use crate::sieve::pow_mod;
use crate::witness::{witness_bounds, WitnessSource};

/// Split `n - 1` into `(d, s)` with `n - 1 = d·2^s` and d odd.
///
/// `n` must be at least 2.
pub fn decompose(n: u64) -> (u64, u32) {
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 && d > 0 {
        d /= 2;
        s += 1;
    }
    (d, s)
}

/// One Miller–Rabin round for `n` with odd part `d` of `n - 1` and the given
/// `base`. Returns true if `n` is a strong probable prime to that base.
pub fn strong_probable_prime(n: u64, d: u64, base: u64) -> bool {
    let mut x = pow_mod(base, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    let mut d = d;
    while d != n - 1 {
        x = (x as u128 * x as u128 % n as u128) as u64;
        d *= 2;
        if x == 1 {
            return false;
        }
        if x == n - 1 {
            return true;
        }
    }
    false
}

/// Miller–Rabin test with `rounds` random bases drawn from `source`.
///
/// `false` is exact (composite). `true` means "probably prime".
pub fn is_probable_prime<W>(num: i64, rounds: u32, source: &mut W) -> bool
where
    W: WitnessSource + ?Sized,
{
    if num <= 1 {
        return false;
    }
    let n = num as u64;
    let Ok((low, high)) = witness_bounds(n) else {
        // 2 and 3.
        return true;
    };
    if n % 2 == 0 {
        return false;
    }
    let (d, _) = decompose(n);
    for _ in 0..rounds {
        let base = source.next(low, high);
        if !strong_probable_prime(n, d, base) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::witness::{SeededSource, SequenceSource};

    #[test]
    fn decompose_known_values() {
        assert_eq!(decompose(561), (35, 4)); // 560 = 35 * 16
        assert_eq!(decompose(13), (3, 2)); // 12 = 3 * 4
        assert_eq!(decompose(7), (3, 1));
        assert_eq!(decompose(2), (1, 0));
    }

    #[test]
    fn boundary_values() {
        let mut src = SeededSource::new(1);
        for n in [-5, 0, 1] {
            assert!(!is_probable_prime(n, 7, &mut src), "{} is not prime", n);
        }
        assert!(is_probable_prime(2, 7, &mut src));
        assert!(is_probable_prime(3, 7, &mut src));
    }

    #[test]
    fn even_numbers_above_two_are_composite() {
        let mut src = SeededSource::new(5);
        for n in (4..2000i64).step_by(2) {
            assert!(!is_probable_prime(n, 7, &mut src), "even {} passed", n);
        }
    }

    /// Even candidates are rejected before any base is drawn.
    #[test]
    fn even_numbers_draw_no_witness() {
        let mut src = SequenceSource::new(vec![2]);
        assert!(!is_probable_prime(1_000_000, 7, &mut src));
        assert_eq!(src.drawn(), 0);
    }

    /// 561 = 3 * 11 * 17 fools Fermat for every coprime base, but base 2
    /// walks 2^35 -> 263 -> 166 -> 67 -> 1 without ever hitting 560: a
    /// nontrivial square root of 1.
    #[test]
    fn carmichael_561_fails_base_two() {
        let (d, _) = decompose(561);
        assert!(crate::fermat::passes(561, 2));
        assert!(!strong_probable_prime(561, d, 2));
    }

    #[test]
    fn carmichael_561_rejected_across_seeds() {
        for seed in 0..500 {
            let mut src = SeededSource::new(seed);
            assert!(
                !is_probable_prime(561, 7, &mut src),
                "561 passed Miller-Rabin with seed {}",
                seed
            );
        }
    }

    /// 2047 = 23 * 89 is the smallest strong pseudoprime to base 2.
    #[test]
    fn strong_pseudoprime_2047_base_two() {
        let (d, _) = decompose(2047);
        assert!(strong_probable_prime(2047, d, 2));
        assert!(!strong_probable_prime(2047, d, 3));

        let mut liar = SequenceSource::new(vec![2]);
        assert!(is_probable_prime(2047, 7, &mut liar));
        let mut witness = SequenceSource::new(vec![2, 3]);
        assert!(!is_probable_prime(2047, 7, &mut witness));
    }

    #[test]
    fn base_n_minus_one_always_passes() {
        // (n-1)^d = -1 for odd d.
        for n in [9u64, 15, 21, 561] {
            let (d, _) = decompose(n);
            assert!(strong_probable_prime(n, d, n - 1));
        }
    }

    #[test]
    fn primes_always_pass() {
        let mut src = SeededSource::new(11);
        for p in [5i64, 7, 13, 101, 7919, 100_003, 1_000_000_007, 2_305_843_009_213_693_951] {
            assert!(is_probable_prime(p, 20, &mut src), "prime {} rejected", p);
        }
    }

    #[test]
    fn agrees_with_trial_division_below_5000() {
        let mut src = SeededSource::new(2024);
        for n in 0..5000i64 {
            assert_eq!(
                is_probable_prime(n, 20, &mut src),
                crate::trial::is_prime(n),
                "disagreement at {}",
                n
            );
        }
    }
}
