//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `run` - Run one extraction
//! - `preflight` - Run preflight checks
//! - `show` - Display information
//! - `clean` - Remove run artifacts

pub mod clean;
mod preflight;
mod run;
pub mod show;

pub use clean::cmd_clean;
pub use preflight::cmd_preflight;
pub use run::cmd_run;
pub use show::cmd_show;
