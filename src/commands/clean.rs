//! Clean command - removes run artifacts.
//!
//! Extraction runs never clean anything themselves; stale output from
//! previous runs persists until the operator asks for removal here.

use anyhow::{Context, Result};
use std::fs;

use crate::config::Config;

/// Clean target for the clean command.
pub enum CleanTarget {
    /// Remove the output directory only.
    Output,
    /// Remove the output directory and the run log.
    All,
}

/// Execute the clean command.
pub fn cmd_clean(config: &Config, target: CleanTarget) -> Result<()> {
    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir).with_context(|| {
            format!("Failed to remove {}", config.output_dir.display())
        })?;
        println!("Removed {}", config.output_dir.display());
    } else {
        println!("Nothing to clean at {}", config.output_dir.display());
    }

    if let CleanTarget::All = target {
        if config.log.exists() {
            fs::remove_file(&config.log)
                .with_context(|| format!("Failed to remove {}", config.log.display()))?;
            println!("Removed {}", config.log.display());
        }
    }

    Ok(())
}
