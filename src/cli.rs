//! # CLI Execution Functions
//!
//! Execution logic for each subcommand, kept out of `main.rs`. Every handler
//! builds its witness source exactly once, so repeated calls within a run
//! share one RNG stream.

use anyhow::Result;
use primebench::config::{BenchConfig, Overrides};
use primebench::{bench, report, sieve, Method, SeededSource};
use tracing::info;

use super::{BenchArgs, Cli, OutputFormat};

/// Witness source for this process: seeded from `--seed` or OS entropy.
fn witness_source(seed: Option<u64>) -> SeededSource {
    let source = match seed {
        Some(s) => SeededSource::new(s),
        None => SeededSource::from_entropy(),
    };
    info!(seed = source.seed(), "witness source ready");
    source
}

fn global_overrides(cli: &Cli) -> Overrides {
    Overrides {
        seed: cli.seed,
        iterations: cli.iterations,
        rounds: cli.rounds,
        sieve_max: cli.sieve_max,
        ..Overrides::default()
    }
}

// ── Benchmark ───────────────────────────────────────────────────

pub fn run_bench(cli: &Cli, args: &BenchArgs) -> Result<()> {
    let overrides = Overrides {
        value: args.value,
        runs: args.runs,
        methods: args.methods.clone(),
        sieve_limit: args.sieve_limit,
        ..global_overrides(cli)
    };
    let config = BenchConfig::resolve(cli.config.as_deref(), overrides)?;

    let mut source = witness_source(config.seed);
    let seed = source.seed();
    let result = bench::run_benchmark(&config, Some(seed), &mut source);

    match args.format {
        OutputFormat::Text => {
            print!("{}", report::render_text(&result));
            if args.chart {
                println!();
                print!("{}", report::render_chart(&result, 50));
            }
        }
        OutputFormat::Json => println!("{}", report::to_json(&result)?),
    }

    if let Some(path) = &args.output {
        report::write_json(path, &result)?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

// ── Single Check ────────────────────────────────────────────────

pub fn run_check(cli: &Cli, value: i64, methods: &[Method]) -> Result<()> {
    let overrides = Overrides {
        value: Some(value),
        methods: methods.to_vec(),
        ..global_overrides(cli)
    };
    let config = BenchConfig::resolve(cli.config.as_deref(), overrides)?;
    let params = config.test_params();
    let mut source = witness_source(config.seed);

    for &method in &config.methods {
        let verdict = match method.run(value, &params, &mut source) {
            Ok(true) if method.is_probabilistic() => "probably prime".to_string(),
            Ok(true) => "prime".to_string(),
            Ok(false) => "composite".to_string(),
            Err(e) => format!("error: {}", e),
        };
        println!("{}: {}", method.label(), verdict);
    }
    Ok(())
}

// ── Prime Listing ───────────────────────────────────────────────

pub fn run_primes(cli: &Cli, limit: u64) -> Result<()> {
    let config = BenchConfig::resolve(cli.config.as_deref(), global_overrides(cli))?;
    if limit > config.sieve_max {
        return Err(primebench::PrimalityError::SieveTooLarge {
            limit,
            max: config.sieve_max,
        }
        .into());
    }
    let primes = sieve::generate_primes(limit);
    info!(limit, count = primes.len(), "sieve complete");
    let line: Vec<String> = primes.iter().map(u64::to_string).collect();
    println!("{}", line.join(" "));
    Ok(())
}
