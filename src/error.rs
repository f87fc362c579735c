//! Launcher error taxonomy.
//!
//! Pre-invocation failures (missing artifacts) are distinct from a failed
//! extraction so callers and tests can tell them apart. The archiver being
//! absent is advisory only and therefore has no variant here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// The extractor executable or script does not exist.
    #[error("extractor not found: {}", .0.display())]
    MissingExtractor(PathBuf),

    /// The input boot image does not exist.
    #[error("input image not found: {}", .0.display())]
    MissingInputImage(PathBuf),

    /// The extractor ran but exited non-zero. The log file holds the
    /// child's output; the launcher never interprets it.
    #[error("extraction failed (exit code {code}), see {}", .log.display())]
    ExtractionFailed { code: i32, log: PathBuf },
}
