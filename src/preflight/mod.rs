//! Preflight checks for an extraction run.
//!
//! Validates the configured artifacts before invoking the extractor.
//! Run with `bootunpack preflight` to check everything is ready.

mod artifacts;
mod types;

use anyhow::{bail, Result};

use crate::config::Config;

pub use types::{CheckResult, CheckStatus, PreflightReport};

/// Run all preflight checks.
pub fn run_preflight(config: &Config) -> Result<PreflightReport> {
    let mut checks = Vec::new();

    println!("Running preflight checks...\n");

    println!("Checking input artifacts...");
    checks.extend(artifacts::check_artifacts(config));

    println!("Checking environment...");
    checks.push(artifacts::check_interpreter(config));
    checks.push(artifacts::check_log_location(config));

    println!();

    Ok(PreflightReport { checks })
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(config: &Config) -> Result<()> {
    let report = run_preflight(config)?;
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before extracting.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed!\n");
    Ok(())
}
