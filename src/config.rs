//! # Config — Layered Benchmark Configuration
//!
//! Settings resolve in four layers, later layers winning:
//!
//! 1. Built-in defaults (`BenchConfig::default()`): value 100 001, 15 runs,
//!    all four methods, 7 Fermat iterations, 7 Miller–Rabin rounds.
//! 2. A TOML file passed with `--config`.
//! 3. `PRIMEBENCH_*` environment variables (read by clap, `.env` honoured).
//! 4. Command-line flags.
//!
//! Layers 3 and 4 reach this module already merged into [`Overrides`].
//!
//! ```toml
//! value = 1000003
//! runs = 25
//! seed = 42
//! methods = ["trial-division", "miller-rabin"]
//! iterations = 10
//! rounds = 12
//! sieve_max = 50000000
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::sieve::SIEVE_MAX;
use crate::{Method, TestParams, DEFAULT_ROUNDS};

/// Default candidate: 10^5 + 1.
pub const DEFAULT_VALUE: i64 = 100_001;
pub const DEFAULT_RUNS: u32 = 15;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub value: i64,
    pub runs: u32,
    pub seed: Option<u64>,
    pub methods: Vec<Method>,
    pub iterations: u32,
    pub rounds: u32,
    pub sieve_limit: Option<u64>,
    pub sieve_max: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            value: DEFAULT_VALUE,
            runs: DEFAULT_RUNS,
            seed: None,
            methods: Method::ALL.to_vec(),
            iterations: DEFAULT_ROUNDS,
            rounds: DEFAULT_ROUNDS,
            sieve_limit: None,
            sieve_max: SIEVE_MAX,
        }
    }
}

/// Values supplied by environment or flags. `None` leaves the lower layer.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub value: Option<i64>,
    pub runs: Option<u32>,
    pub seed: Option<u64>,
    pub methods: Vec<Method>,
    pub iterations: Option<u32>,
    pub rounds: Option<u32>,
    pub sieve_limit: Option<u64>,
    pub sieve_max: Option<u64>,
}

impl BenchConfig {
    /// Parse a TOML config document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Defaults, then the optional file, then `overrides`; validated.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&mut self, o: Overrides) {
        if let Some(v) = o.value {
            self.value = v;
        }
        if let Some(r) = o.runs {
            self.runs = r;
        }
        if o.seed.is_some() {
            self.seed = o.seed;
        }
        if !o.methods.is_empty() {
            self.methods = o.methods;
        }
        if let Some(i) = o.iterations {
            self.iterations = i;
        }
        if let Some(r) = o.rounds {
            self.rounds = r;
        }
        if o.sieve_limit.is_some() {
            self.sieve_limit = o.sieve_limit;
        }
        if let Some(m) = o.sieve_max {
            self.sieve_max = m;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            bail!("runs must be at least 1");
        }
        if self.methods.is_empty() {
            bail!("at least one method must be selected");
        }
        Ok(())
    }

    pub fn test_params(&self) -> TestParams {
        TestParams {
            iterations: self.iterations,
            rounds: self.rounds,
            sieve_limit: self.sieve_limit,
            sieve_max: self.sieve_max,
        }
    }
}
