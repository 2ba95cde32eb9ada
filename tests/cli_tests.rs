//! CLI integration tests using assert_cmd.
//!
//! Every test passes `--seed` (or uses only deterministic methods) so the
//! output is reproducible. Logs go to stderr; assertions target stdout.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[allow(deprecated)]
fn primebench() -> Command {
    let mut cmd = Command::cargo_bin("primebench").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

// --- Help and arg validation ---

#[test]
fn help_shows_all_subcommands() {
    primebench().arg("--help").assert().success().stdout(
        predicate::str::contains("bench")
            .and(predicate::str::contains("check"))
            .and(predicate::str::contains("primes")),
    );
}

#[test]
fn help_bench_shows_args() {
    primebench()
        .args(["bench", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--value")
                .and(predicate::str::contains("--runs"))
                .and(predicate::str::contains("--method"))
                .and(predicate::str::contains("--chart"))
                .and(predicate::str::contains("--output")),
        );
}

#[test]
fn unknown_method_rejected() {
    primebench()
        .args(["check", "7", "--method", "aks"])
        .assert()
        .failure();
}

#[test]
fn zero_runs_rejected() {
    primebench()
        .args(["bench", "--runs", "0", "--method", "trial-division"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("runs must be at least 1"));
}

// --- check ---

#[test]
fn check_prime_with_all_methods() {
    primebench()
        .args(["--seed", "1", "check", "97"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Trial Division: prime")
                .and(predicate::str::contains("Sieve of Eratosthenes: prime"))
                .and(predicate::str::contains("Fermat's Primality Test: probably prime"))
                .and(predicate::str::contains("Miller-Rabin Test: probably prime")),
        );
}

#[test]
fn check_composite() {
    primebench()
        .args(["--seed", "1", "check", "100001", "--method", "miller-rabin"])
        .assert()
        .success()
        .stdout("Miller-Rabin Test: composite\n");
}

#[test]
fn check_negative_value() {
    primebench()
        .args(["check", "-5", "--method", "trial-division"])
        .assert()
        .success()
        .stdout("Trial Division: composite\n");
}

#[test]
fn check_reports_sieve_guard() {
    primebench()
        .args(["--sieve-max", "10", "check", "97", "--method", "sieve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sieve of Eratosthenes: error: sieve limit 97"));
}

// --- primes ---

#[test]
fn primes_up_to_30() {
    primebench()
        .args(["primes", "30"])
        .assert()
        .success()
        .stdout("2 3 5 7 11 13 17 19 23 29\n");
}

#[test]
fn primes_below_two_is_empty() {
    primebench().args(["primes", "1"]).assert().success().stdout("\n");
}

// --- bench ---

#[test]
fn bench_text_output() {
    primebench()
        .args(["--seed", "7", "bench", "--value", "1009", "--runs", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "Performance comparison of primality testing algorithms over 2 runs for number 1009:",
            )
            .and(predicate::str::contains("Trial Division: Average Execution Time = "))
            .and(predicate::str::contains("Miller-Rabin Test: Average Execution Time = ")),
        );
}

#[test]
fn bench_chart_output() {
    primebench()
        .args(["--seed", "7", "bench", "--value", "1009", "--runs", "1", "--chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Performance of Primality Testing Algorithms (1 runs, value = 1009)",
        ));
}

#[test]
fn bench_json_output() {
    let output = primebench()
        .args([
            "--seed", "3", "bench", "--value", "561", "--runs", "2", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["value"], 561);
    assert_eq!(v["seed"], 3);
    assert_eq!(v["methods"].as_array().unwrap().len(), 4);
    assert_eq!(v["methods"][0]["composite"], 2);
}

#[test]
fn bench_writes_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    primebench()
        .args(["--seed", "3", "bench", "--value", "97", "--runs", "1", "--output"])
        .arg(&path)
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(v["runs"], 1);
}

#[test]
fn bench_reads_config_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "value = 7919\nruns = 1\nmethods = [\"fermat\"]\nseed = 11").unwrap();
    primebench()
        .arg("--config")
        .arg(f.path())
        .arg("bench")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("over 1 runs for number 7919")
                .and(predicate::str::contains("Fermat's Primality Test"))
                .and(predicate::str::contains("Trial Division").not()),
        );
}

#[test]
fn env_overrides_rounds() {
    let output = primebench()
        .env("PRIMEBENCH_ROUNDS", "3")
        .args([
            "--seed", "1", "bench", "--value", "97", "--runs", "1", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["params"]["rounds"], 3);
}
