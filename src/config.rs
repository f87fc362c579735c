//! Configuration management for bootunpack.
//!
//! Reads configuration from a .env file and environment variables.
//! Environment variables take precedence over the .env file. All relative
//! paths resolve against the base directory given at startup.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default relative path of the extractor executable.
pub const DEFAULT_EXTRACTOR: &str = "tools/unpack";
/// Default relative path of the input boot image.
pub const DEFAULT_IMAGE: &str = "boot.img";
/// Default relative output directory for extracted artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Default relative path of the optional archiver utility.
pub const DEFAULT_ARCHIVER: &str = "tools/7z";
/// Default relative path of the append-only run log.
pub const DEFAULT_LOG: &str = "unpack.log";
/// Flags forwarded to the executable extractor form.
pub const DEFAULT_FLAGS: &[&str] = &["--skip-avb", "--debug-cpio"];
/// Interpreter used for the script extractor form.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Which form of extractor is configured.
///
/// The two forms have incompatible calling conventions and are not
/// interchangeable: the executable takes an output-dir flag and extra
/// flags, the script takes neither and writes to `output/` under its
/// working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    /// `<extractor> extract <image> --output-dir <dir> <flags...>`
    Executable,
    /// `<interpreter> <script> extract <image>`, run from the base dir.
    Script,
}

/// Bootunpack configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory all relative paths resolve against.
    pub base_dir: PathBuf,
    /// Path to the extractor executable or script.
    pub extractor: PathBuf,
    /// Extractor calling convention.
    pub kind: ExtractorKind,
    /// Interpreter for the script form (looked up on PATH).
    pub interpreter: String,
    /// Path to the input boot image.
    pub image: PathBuf,
    /// Destination directory for extracted artifacts.
    pub output_dir: PathBuf,
    /// Optional archiver utility. Checked for existence only, never
    /// passed to the extractor.
    pub archiver: PathBuf,
    /// Append-only run log.
    pub log: PathBuf,
    /// Extra flags forwarded to the executable form.
    pub flags: Vec<String>,
    /// Wait for operator acknowledgment before exiting.
    pub pause: bool,
}

impl Config {
    /// Load configuration from .env file and environment.
    ///
    /// The .env file is looked up in the base directory; process
    /// environment variables override it.
    pub fn load(base_dir: &Path) -> Self {
        let mut env_vars = HashMap::new();

        let env_path = base_dir.join(".env");
        if env_path.exists() {
            if let Ok(content) = fs::read_to_string(&env_path) {
                for line in content.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((key, value)) = line.split_once('=') {
                        let key = key.trim();
                        let value = value.trim().trim_matches('"').trim_matches('\'');
                        env_vars.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        Self::from_vars(base_dir, &env_vars)
    }

    /// Build a config from an explicit key/value map. Split out from
    /// `load` so tests don't have to mutate the process environment.
    pub fn from_vars(base_dir: &Path, vars: &HashMap<String, String>) -> Self {
        let resolve = |s: &str| -> PathBuf {
            let path = PathBuf::from(s);
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        };

        let extractor = vars
            .get("UNPACK_EXTRACTOR")
            .map(|s| resolve(s))
            .unwrap_or_else(|| base_dir.join(DEFAULT_EXTRACTOR));

        // Kind defaults from the extractor's extension; UNPACK_KIND overrides.
        let kind = match vars.get("UNPACK_KIND").map(String::as_str) {
            Some("script") => ExtractorKind::Script,
            Some(_) => ExtractorKind::Executable,
            None => {
                if extractor.extension().is_some_and(|e| e == "py") {
                    ExtractorKind::Script
                } else {
                    ExtractorKind::Executable
                }
            }
        };

        let interpreter = vars
            .get("UNPACK_INTERPRETER")
            .cloned()
            .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());

        let image = vars
            .get("UNPACK_IMAGE")
            .map(|s| resolve(s))
            .unwrap_or_else(|| base_dir.join(DEFAULT_IMAGE));

        // The script form ignores --output-dir and writes to output/
        // under its working directory, which the launcher pins to the
        // base dir. Keep the configured path pointing there so listing
        // and preflight agree with where files actually land.
        let output_dir = vars
            .get("UNPACK_OUTPUT_DIR")
            .map(|s| resolve(s))
            .unwrap_or_else(|| base_dir.join(DEFAULT_OUTPUT_DIR));

        let archiver = vars
            .get("UNPACK_ARCHIVER")
            .map(|s| resolve(s))
            .unwrap_or_else(|| base_dir.join(DEFAULT_ARCHIVER));

        let log = vars
            .get("UNPACK_LOG")
            .map(|s| resolve(s))
            .unwrap_or_else(|| base_dir.join(DEFAULT_LOG));

        let flags = match vars.get("UNPACK_FLAGS") {
            Some(s) => s.split_whitespace().map(str::to_string).collect(),
            None => DEFAULT_FLAGS.iter().map(|s| s.to_string()).collect(),
        };

        let pause = vars
            .get("UNPACK_PAUSE")
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        Self {
            base_dir: base_dir.to_path_buf(),
            extractor,
            kind,
            interpreter,
            image,
            output_dir,
            archiver,
            log,
            flags,
            pause,
        }
    }

    /// Print configuration for `show config`.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  UNPACK_EXTRACTOR: {}", self.extractor.display());
        println!(
            "  UNPACK_KIND: {}",
            match self.kind {
                ExtractorKind::Executable => "exe",
                ExtractorKind::Script => "script",
            }
        );
        if self.kind == ExtractorKind::Script {
            println!("  UNPACK_INTERPRETER: {}", self.interpreter);
        }
        println!("  UNPACK_IMAGE: {}", self.image.display());
        println!("  UNPACK_OUTPUT_DIR: {}", self.output_dir.display());
        println!("  UNPACK_ARCHIVER: {}", self.archiver.display());
        println!("  UNPACK_LOG: {}", self.log.display());
        println!("  UNPACK_FLAGS: {}", self.flags.join(" "));
        if self.extractor.exists() {
            println!("  Extractor: FOUND");
        } else {
            println!("  Extractor: NOT FOUND");
        }
        if self.image.exists() {
            println!("  Input image: FOUND");
        } else {
            println!("  Input image: NOT FOUND");
        }
    }
}
