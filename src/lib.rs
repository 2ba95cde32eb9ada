pub mod bench;
pub mod config;
pub mod error;
pub mod fermat;
pub mod miller_rabin;
pub mod report;
pub mod sieve;
pub mod trial;
pub mod witness;

use serde::{Deserialize, Serialize};

pub use error::PrimalityError;
pub use witness::{SeededSource, SequenceSource, WitnessSource};

/// Default round count for both probabilistic tests.
pub const DEFAULT_ROUNDS: u32 = 7;

/// Selects one of the four primality algorithms.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    TrialDivision,
    Sieve,
    Fermat,
    MillerRabin,
}

impl Method {
    /// All methods, in benchmark order.
    pub const ALL: [Method; 4] = [
        Method::TrialDivision,
        Method::Sieve,
        Method::Fermat,
        Method::MillerRabin,
    ];

    /// Human-readable name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Method::TrialDivision => "Trial Division",
            Method::Sieve => "Sieve of Eratosthenes",
            Method::Fermat => "Fermat's Primality Test",
            Method::MillerRabin => "Miller-Rabin Test",
        }
    }

    /// Whether the answer depends on randomly drawn witnesses.
    pub fn is_probabilistic(self) -> bool {
        matches!(self, Method::Fermat | Method::MillerRabin)
    }

    /// Test `n` with this method.
    ///
    /// The sieve checks membership in `generate_primes(limit)`, where `limit`
    /// is `params.sieve_limit` or `n` itself. Only the sieve can fail, when
    /// that limit exceeds `params.sieve_max`.
    pub fn run<W>(self, n: i64, params: &TestParams, source: &mut W) -> Result<bool, PrimalityError>
    where
        W: WitnessSource + ?Sized,
    {
        match self {
            Method::TrialDivision => Ok(trial::is_prime(n)),
            Method::Sieve => {
                let limit = params
                    .sieve_limit
                    .unwrap_or_else(|| u64::try_from(n).unwrap_or(0));
                sieve::checked_contains(n, limit, params.sieve_max)
            }
            Method::Fermat => Ok(fermat::is_probable_prime(n, params.iterations, source)),
            Method::MillerRabin => Ok(miller_rabin::is_probable_prime(n, params.rounds, source)),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-call parameters shared by every method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestParams {
    /// Fermat rounds.
    pub iterations: u32,
    /// Miller–Rabin rounds.
    pub rounds: u32,
    /// Sieve limit; `None` sieves up to the candidate itself.
    pub sieve_limit: Option<u64>,
    /// Largest sieve the harness will allocate.
    pub sieve_max: u64,
}

impl Default for TestParams {
    fn default() -> Self {
        TestParams {
            iterations: DEFAULT_ROUNDS,
            rounds: DEFAULT_ROUNDS,
            sieve_limit: None,
            sieve_max: sieve::SIEVE_MAX,
        }
    }
}
