//! Show command - displays information.

use anyhow::{bail, Result};
use std::fs;

use crate::config::Config;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show the tail of the run log
    Log,
}

/// How many log lines `show log` prints.
const LOG_TAIL_LINES: usize = 40;

/// Execute the show command.
pub fn cmd_show(config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Log => {
            if !config.log.exists() {
                bail!(
                    "No log at {}. Run 'bootunpack run' first.",
                    config.log.display()
                );
            }
            let content = fs::read_to_string(&config.log)?;
            let lines: Vec<&str> = content.lines().collect();
            let start = lines.len().saturating_sub(LOG_TAIL_LINES);
            println!("{} (last {} lines):", config.log.display(), lines.len() - start);
            for line in &lines[start..] {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
