//! Run command - performs one extraction.

use anyhow::Result;
use std::io::BufRead;

use crate::config::Config;
use crate::launcher;

/// Execute the run command.
///
/// `pause` waits for operator acknowledgment before returning, in both
/// the success and the failure branch. Off by default; useful when the
/// launcher is started from a file manager and the window would close.
pub fn cmd_run(config: &Config, pause: bool) -> Result<()> {
    let result = launcher::run_extraction(config);

    if let Err(ref err) = result {
        eprintln!("Error: {:#}", err);
        eprintln!("See {} for extractor output.", config.log.display());
    }

    if pause || config.pause {
        println!("Press Enter to exit...");
        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    }

    result
}
