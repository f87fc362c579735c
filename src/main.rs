//! Bootunpack - boot-image extraction launcher.
//!
//! Orchestrates one run of an external extractor (executable or script)
//! against a boot image: validates inputs, creates the output directory,
//! captures the extractor's output into an append-only log, and reports
//! the outcome.

mod commands;
mod config;
mod error;
mod launcher;
mod listing;
mod preflight;
mod process;
mod runlog;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::Config;

#[derive(Parser)]
#[command(name = "bootunpack")]
#[command(about = "Boot-image extraction launcher")]
#[command(
    after_help = "QUICK START:\n  bootunpack preflight  Check extractor and image are in place\n  bootunpack run        Run the extraction\n  bootunpack show log   Inspect the run log\n  bootunpack clean      Remove extracted output"
)]
struct Cli {
    /// Base directory for relative paths (default: current directory)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one extraction
    Run {
        /// Wait for Enter before exiting
        #[arg(long)]
        pause: bool,
    },

    /// Run preflight checks (verify artifacts before extracting)
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },

    /// Clean run artifacts (default: preserves the log)
    Clean {
        #[command(subcommand)]
        what: Option<CleanTarget>,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show the tail of the run log
    Log,
}

#[derive(Subcommand)]
enum CleanTarget {
    /// Clean the output directory only
    Output,
    /// Clean the output directory and the run log
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    // Load .env if present
    dotenvy::from_path(base_dir.join(".env")).ok();
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Run { pause } => {
            commands::cmd_run(&config, pause)?;
        }

        Commands::Preflight { strict } => {
            commands::cmd_preflight(&config, strict)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Log => commands::show::ShowTarget::Log,
            };
            commands::cmd_show(&config, show_target)?;
        }

        Commands::Clean { what } => {
            let clean_target = match what {
                None | Some(CleanTarget::Output) => commands::clean::CleanTarget::Output,
                Some(CleanTarget::All) => commands::clean::CleanTarget::All,
            };
            commands::cmd_clean(&config, clean_target)?;
        }
    }

    Ok(())
}
