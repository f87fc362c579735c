//! Shared test utilities for bootunpack tests.

use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use bootunpack::config::Config;

/// Test environment with a temporary base directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Base directory all relative config paths resolve against
    pub base_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            base_dir,
        }
    }

    /// Build a config for this environment from explicit variables.
    pub fn config(&self, pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(&self.base_dir, &vars)
    }

    /// Create a mock boot image at the default location.
    pub fn create_image(&self) -> PathBuf {
        let path = self.base_dir.join("boot.img");
        fs::write(&path, b"ANDROID!mock-image").expect("Failed to create mock image");
        path
    }

    /// Create a stub extractor at the default location.
    ///
    /// The stub honors `--output-dir`, drops a couple of files there,
    /// and exits with the given code.
    pub fn create_stub_extractor(&self, exit_code: i32) -> PathBuf {
        let path = self.base_dir.join("tools/unpack");
        write_stub(&path, exit_code);
        path
    }

    /// Create the optional archiver artifact.
    pub fn create_archiver(&self) -> PathBuf {
        let path = self.base_dir.join("tools/7z");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create tools dir");
        }
        fs::write(&path, b"").expect("Failed to create mock archiver");
        path
    }
}

/// Write a stub extractor script to `path` and make it executable.
pub fn write_stub(path: &Path, exit_code: i32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir for stub");
    }

    let script = format!(
        r#"#!/bin/sh
echo "stub extractor invoked: $@"
echo "stub extractor stderr" >&2
out=""
prev=""
for a in "$@"; do
    if [ "$prev" = "--output-dir" ]; then out="$a"; fi
    prev="$a"
done
if [ -n "$out" ]; then
    mkdir -p "$out"
    echo kernel-data > "$out/kernel"
    mkdir -p "$out/ramdisk"
    echo init-data > "$out/ramdisk/init"
fi
exit {}
"#,
        exit_code
    );

    fs::write(path, script).expect("Failed to write stub extractor");
    let mut perms = fs::metadata(path)
        .expect("Failed to get stub metadata")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set stub permissions");
}

/// Count lines in a log file containing a marker substring.
pub fn count_markers(log: &Path, marker: &str) -> usize {
    let content = fs::read_to_string(log).expect("Failed to read log");
    content.lines().filter(|l| l.contains(marker)).count()
}
