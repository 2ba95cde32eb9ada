//! # Main — CLI Entry Point
//!
//! Parses arguments, initialises logging, and routes subcommands to the
//! handlers in `cli.rs`.
//!
//! ## Subcommands
//!
//! - `bench`: time every selected method over `--runs` calls on `--value`.
//! - `check`: run the selected methods once on a number.
//! - `primes`: print the sieve of Eratosthenes up to a limit.
//!
//! ## Global Options
//!
//! - `--config`: TOML file with benchmark settings.
//! - `--seed` / `PRIMEBENCH_SEED`: witness RNG seed (random if unset).
//! - `--iterations` / `PRIMEBENCH_ITERATIONS`: Fermat rounds (default 7).
//! - `--rounds` / `PRIMEBENCH_ROUNDS`: Miller–Rabin rounds (default 7).
//! - `--sieve-max` / `PRIMEBENCH_SIEVE_MAX`: largest sieve to allocate.

mod cli;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use primebench::Method;

#[derive(Parser)]
#[command(name = "primebench", about = "Benchmark primality testing algorithms")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PRIMEBENCH_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for witness selection (random per process if not set)
    #[arg(long, env = "PRIMEBENCH_SEED")]
    seed: Option<u64>,

    /// Fermat test rounds (default: 7)
    #[arg(long, env = "PRIMEBENCH_ITERATIONS")]
    iterations: Option<u32>,

    /// Miller-Rabin rounds (default: 7, error probability <= 4^-rounds)
    #[arg(long, env = "PRIMEBENCH_ROUNDS")]
    rounds: Option<u32>,

    /// Largest sieve limit to allocate (default: 100000000)
    #[arg(long, env = "PRIMEBENCH_SIEVE_MAX")]
    sieve_max: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time each method over repeated runs on one value
    Bench(BenchArgs),
    /// Test a single number with each selected method
    Check {
        /// Number to test
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Method to run (repeatable; default: all)
        #[arg(long = "method", value_enum)]
        methods: Vec<Method>,
    },
    /// List all primes up to a limit
    Primes {
        /// Inclusive upper bound
        limit: u64,
    },
}

#[derive(Args)]
struct BenchArgs {
    /// Number to test (default: 100001)
    #[arg(long, allow_negative_numbers = true)]
    value: Option<i64>,
    /// Timed runs per method (default: 15)
    #[arg(long)]
    runs: Option<u32>,
    /// Method to benchmark (repeatable; default: all)
    #[arg(long = "method", value_enum)]
    methods: Vec<Method>,
    /// Sieve up to this limit instead of the value itself
    #[arg(long)]
    sieve_limit: Option<u64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Print a bar chart of mean execution times
    #[arg(long)]
    chart: bool,
    /// Also write the JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Structured logging: LOG_FORMAT=json for machine consumption, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    match &cli.command {
        Commands::Bench(args) => cli::run_bench(&cli, args),
        Commands::Check { value, methods } => cli::run_check(&cli, *value, methods),
        Commands::Primes { limit } => cli::run_primes(&cli, *limit),
    }
}
