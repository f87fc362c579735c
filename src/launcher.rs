//! The extraction run itself.
//!
//! One run is one child-process invocation: validate inputs, create the
//! output directory, append a start marker, run the extractor with its
//! output redirected into the log, then branch on the exit status. No
//! retries, no cleanup of partial output; the extractor's exit code is
//! authoritative.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::{Config, ExtractorKind};
use crate::error::LaunchError;
use crate::listing;
use crate::process::Cmd;
use crate::runlog::RunLog;

/// Program and argument list for the configured extractor form.
///
/// The two forms are not interchangeable: the executable takes the
/// output directory and extra flags on its command line, the script
/// takes only the image and writes to `output/` under its working
/// directory.
pub fn extraction_argv(config: &Config) -> (String, Vec<String>) {
    match config.kind {
        ExtractorKind::Executable => {
            let mut args = vec![
                "extract".to_string(),
                config.image.to_string_lossy().into_owned(),
                "--output-dir".to_string(),
                config.output_dir.to_string_lossy().into_owned(),
            ];
            args.extend(config.flags.iter().cloned());
            (config.extractor.to_string_lossy().into_owned(), args)
        }
        ExtractorKind::Script => {
            let args = vec![
                config.extractor.to_string_lossy().into_owned(),
                "extract".to_string(),
                config.image.to_string_lossy().into_owned(),
            ];
            (config.interpreter.clone(), args)
        }
    }
}

/// Validate inputs. Fatal checks halt before any side effect; the
/// archiver check is advisory only.
fn validate_inputs(config: &Config) -> Result<()> {
    if !config.extractor.exists() {
        return Err(LaunchError::MissingExtractor(config.extractor.clone()).into());
    }
    if !config.image.exists() {
        return Err(LaunchError::MissingInputImage(config.image.clone()).into());
    }
    if !config.archiver.exists() {
        println!(
            "Warning: archiver not found at {} (the extractor may need it)",
            config.archiver.display()
        );
    }
    Ok(())
}

/// Run one extraction.
pub fn run_extraction(config: &Config) -> Result<()> {
    validate_inputs(config)?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut log = RunLog::open(&config.log)?;
    log.start(&config.image)?;

    println!("Extracting {} ...", config.image.display());

    let (program, args) = extraction_argv(config);
    let mut cmd = Cmd::new(&program).args(&args);
    if config.kind == ExtractorKind::Script {
        // The script form writes to output/ under its working directory.
        cmd = cmd.dir(&config.base_dir);
    }
    let status = cmd.run_logged(&config.log)?;

    if status.success() {
        log.completed()?;

        println!("Extraction completed. Output in {}:", config.output_dir.display());
        log.append_line(&format!("Output in {}:", config.output_dir.display()))?;
        for line in listing::render_tree(&config.output_dir)? {
            println!("{}", line);
            log.append_line(&line)?;
        }
        Ok(())
    } else {
        let code = status.code().unwrap_or(-1);
        log.failed(code)?;
        Err(LaunchError::ExtractionFailed {
            code,
            log: PathBuf::from(log.path()),
        }
        .into())
    }
}
