//! # Report — Text Summary, Bar Chart and JSON Output
//!
//! Renders a [`BenchmarkReport`] three ways:
//!
//! | Output | Function | Content |
//! |--------|----------|---------|
//! | Summary | [`render_text`] | one "Average Execution Time" line per method |
//! | Chart | [`render_chart`] | horizontal bars scaled to the slowest mean |
//! | JSON | [`to_json`] / [`write_json`] | the full report, host info included |
//!
//! Host details come from [`sysinfo`] so a saved report says what machine
//! produced the timings.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::bench::BenchmarkReport;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HostInfo {
    pub cpu_brand: String,
    pub logical_cores: usize,
    pub memory_total_gb: f64,
    pub os: String,
}

impl HostInfo {
    pub fn collect() -> Self {
        let sys = System::new_all();
        let cpu_brand = sys
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .unwrap_or_default();
        let mem_total_gb = sys.total_memory() as f64 / 1_073_741_824.0;
        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name,
            _ => String::new(),
        };
        HostInfo {
            cpu_brand,
            logical_cores: sys.cpus().len(),
            memory_total_gb: (mem_total_gb * 10.0).round() / 10.0,
            os,
        }
    }
}

/// The per-method summary: a header line, then one mean time per method.
pub fn render_text(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Performance comparison of primality testing algorithms over {} runs for number {}:",
        report.runs, report.value
    );
    for m in &report.methods {
        let _ = write!(
            out,
            "{}: Average Execution Time = {:.6} seconds",
            m.label, m.mean_secs
        );
        if m.failed > 0 {
            let _ = write!(out, " ({} of {} runs failed)", m.failed, m.runs);
        }
        out.push('\n');
    }
    out
}

/// Horizontal bar chart of mean execution time, `width` cells for the
/// slowest method.
pub fn render_chart(report: &BenchmarkReport, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Performance of Primality Testing Algorithms ({} runs, value = {})",
        report.runs, report.value
    );
    let label_width = report
        .methods
        .iter()
        .map(|m| m.label.chars().count())
        .max()
        .unwrap_or(0);
    let slowest = report
        .methods
        .iter()
        .map(|m| m.mean_secs)
        .fold(0.0, f64::max);
    for m in &report.methods {
        let cells = if slowest > 0.0 {
            ((m.mean_secs / slowest) * width as f64).round() as usize
        } else {
            0
        };
        // Anything measurable gets at least one cell.
        let cells = if m.mean_secs > 0.0 { cells.max(1) } else { 0 };
        let _ = writeln!(
            out,
            "{:<label_width$} | {:<width$} {:.6}s",
            m.label,
            "█".repeat(cells),
            m.mean_secs,
        );
    }
    out
}

pub fn to_json(report: &BenchmarkReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_json(path: &Path, report: &BenchmarkReport) -> Result<()> {
    let content = to_json(report)?;
    std::fs::write(path, content).with_context(|| format!("writing report {}", path.display()))
}
