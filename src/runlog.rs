//! Append-only run log.
//!
//! Every run appends timestamped marker lines around the captured
//! extractor output. The file is never truncated or rotated here, so
//! repeated runs concatenate.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle to the append-only log file.
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    /// Open the log in append mode, creating it if absent.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one raw line.
    pub fn append_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{}", line)
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        Ok(())
    }

    /// Append a timestamped marker line.
    fn marker(&mut self, text: &str) -> Result<()> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        self.append_line(&format!("[{}] {}", stamp, text))
    }

    /// Marker: extraction starting for the given image.
    pub fn start(&mut self, image: &Path) -> Result<()> {
        self.marker(&format!("Extraction started: {}", image.display()))
    }

    /// Marker: extraction completed successfully.
    pub fn completed(&mut self) -> Result<()> {
        self.marker("Extraction completed")
    }

    /// Marker: extraction failed with the given exit code.
    pub fn failed(&mut self, code: i32) -> Result<()> {
        self.marker(&format!("Extraction failed (exit code {})", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unpack.log");
        RunLog::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unpack.log");
        fs::write(&path, "previous run\n").unwrap();

        let mut log = RunLog::open(&path).unwrap();
        log.append_line("next run").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous run\n"));
        assert!(content.contains("next run"));
    }

    #[test]
    fn test_markers_are_timestamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unpack.log");

        let mut log = RunLog::open(&path).unwrap();
        log.start(Path::new("boot.img")).unwrap();
        log.completed().unwrap();
        log.failed(1).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.starts_with('['), "marker missing timestamp: {}", line);
        }
        assert!(lines[0].contains("Extraction started: boot.img"));
        assert!(lines[1].contains("Extraction completed"));
        assert!(lines[2].contains("Extraction failed (exit code 1)"));
    }
}
