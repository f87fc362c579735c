//! Input artifact checks.

use crate::config::{Config, ExtractorKind};

use super::types::CheckResult;

/// Check the configured input artifacts.
pub fn check_artifacts(config: &Config) -> Vec<CheckResult> {
    let mut results = Vec::new();

    if config.extractor.exists() {
        results.push(CheckResult::pass_with(
            "extractor",
            &config.extractor.display().to_string(),
        ));
    } else {
        results.push(CheckResult::fail(
            "extractor",
            &format!(
                "Not found at {}. Set UNPACK_EXTRACTOR to the unpack executable or script.",
                config.extractor.display()
            ),
        ));
    }

    if config.image.exists() {
        results.push(CheckResult::pass_with(
            "input image",
            &config.image.display().to_string(),
        ));
    } else {
        results.push(CheckResult::fail(
            "input image",
            &format!(
                "Not found at {}. Set UNPACK_IMAGE to the boot image to extract.",
                config.image.display()
            ),
        ));
    }

    // The archiver is never invoked by the launcher. Whether the
    // extractor needs it, and how it finds it, is internal to the
    // extractor, so absence is only worth a warning.
    if config.archiver.exists() {
        results.push(CheckResult::pass_with(
            "archiver (optional)",
            &config.archiver.display().to_string(),
        ));
    } else {
        results.push(CheckResult::warn(
            "archiver (optional)",
            &format!(
                "Not found at {}. The extractor may need it for ramdisk handling.",
                config.archiver.display()
            ),
        ));
    }

    results
}

/// Check the interpreter for the script extractor form.
pub fn check_interpreter(config: &Config) -> CheckResult {
    match config.kind {
        ExtractorKind::Executable => CheckResult::skip(
            "interpreter",
            "Not needed for the executable extractor form",
        ),
        ExtractorKind::Script => match which::which(&config.interpreter) {
            Ok(path) => {
                CheckResult::pass_with("interpreter", &path.display().to_string())
            }
            Err(_) => CheckResult::fail(
                "interpreter",
                &format!(
                    "'{}' not found on PATH. Required to run the script extractor.",
                    config.interpreter
                ),
            ),
        },
    }
}

/// Check that the log file location is usable.
pub fn check_log_location(config: &Config) -> CheckResult {
    let parent = match config.log.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };

    if config.log.exists() || parent.is_dir() {
        CheckResult::pass_with("log file", &config.log.display().to_string())
    } else {
        CheckResult::warn(
            "log file",
            &format!(
                "Parent directory {} does not exist yet; it will be created at run time.",
                parent.display()
            ),
        )
    }
}
