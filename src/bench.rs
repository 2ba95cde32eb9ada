//! # Bench — Timing Harness
//!
//! Times each selected method over `runs` calls on a single value and
//! aggregates the samples into a [`BenchmarkReport`]. One witness source is
//! threaded through every call, so the probabilistic tests see a fresh stream
//! of bases without re-seeding between runs.
//!
//! A call that fails (the sieve guard) is recorded as a sample with
//! `result: None` and the loop carries on.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::report::HostInfo;
use crate::witness::WitnessSource;
use crate::{Method, TestParams};

/// One timed call.
#[derive(Clone, Debug)]
pub struct RunSample {
    pub result: Option<bool>,
    pub elapsed: Duration,
}

/// Aggregate over all runs of one method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodSummary {
    pub method: Method,
    pub label: String,
    pub runs: u32,
    pub mean_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
    pub total_secs: f64,
    /// Runs that answered "prime" (or "probably prime").
    pub prime: u32,
    pub composite: u32,
    pub failed: u32,
}

impl MethodSummary {
    fn from_samples(method: Method, samples: &[RunSample]) -> Self {
        let secs: Vec<f64> = samples.iter().map(|s| s.elapsed.as_secs_f64()).collect();
        let total: f64 = secs.iter().sum();
        let runs = samples.len() as u32;
        let mean = if runs > 0 { total / runs as f64 } else { 0.0 };
        let min = secs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = secs.iter().copied().fold(0.0, f64::max);
        let count = |want: Option<bool>| samples.iter().filter(|s| s.result == want).count() as u32;
        MethodSummary {
            method,
            label: method.label().to_string(),
            runs,
            mean_secs: mean,
            min_secs: if min.is_finite() { min } else { 0.0 },
            max_secs: max,
            total_secs: total,
            prime: count(Some(true)),
            composite: count(Some(false)),
            failed: count(None),
        }
    }

    /// The verdict every successful run agreed on, if they all agreed.
    pub fn verdict(&self) -> Option<bool> {
        match (self.prime, self.composite) {
            (p, 0) if p > 0 => Some(true),
            (0, c) if c > 0 => Some(false),
            _ => None,
        }
    }
}

/// Full benchmark result, serializable as the JSON report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub value: i64,
    pub runs: u32,
    pub seed: Option<u64>,
    pub params: TestParams,
    pub generated_at: DateTime<Utc>,
    pub host: HostInfo,
    pub methods: Vec<MethodSummary>,
}

/// Time a single call of `method` on `n`.
pub fn time_method<W>(method: Method, n: i64, params: &TestParams, source: &mut W) -> RunSample
where
    W: WitnessSource + ?Sized,
{
    let start = Instant::now();
    let outcome = method.run(n, params, source);
    let elapsed = start.elapsed();
    let result = match outcome {
        Ok(is_prime) => Some(is_prime),
        Err(e) => {
            warn!(method = %method, value = n, error = %e, "primality call failed");
            None
        }
    };
    RunSample { result, elapsed }
}

/// Run `config.runs` timed calls per method and summarise them.
pub fn run_benchmark<W>(config: &BenchConfig, seed: Option<u64>, source: &mut W) -> BenchmarkReport
where
    W: WitnessSource + ?Sized,
{
    let params = config.test_params();
    info!(
        value = config.value,
        runs = config.runs,
        methods = config.methods.len(),
        iterations = params.iterations,
        rounds = params.rounds,
        "benchmark starting"
    );

    let mut methods = Vec::with_capacity(config.methods.len());
    for &method in &config.methods {
        let mut samples = Vec::with_capacity(config.runs as usize);
        for run in 0..config.runs {
            let sample = time_method(method, config.value, &params, source);
            debug!(
                method = %method,
                run,
                result = ?sample.result,
                elapsed_us = sample.elapsed.as_micros() as u64,
                "run complete"
            );
            samples.push(sample);
        }
        let summary = MethodSummary::from_samples(method, &samples);
        info!(
            method = %method,
            mean = format_args!("{:.6}s", summary.mean_secs),
            verdict = ?summary.verdict(),
            failed = summary.failed,
            "method complete"
        );
        methods.push(summary);
    }

    BenchmarkReport {
        value: config.value,
        runs: config.runs,
        seed,
        params,
        generated_at: Utc::now(),
        host: HostInfo::collect(),
        methods,
    }
}
