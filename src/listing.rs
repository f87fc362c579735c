//! Recursive output-directory listing.

use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Render the directory tree under `dir` as one line per entry.
///
/// Paths are relative to `dir` and sorted, directories carry a trailing
/// slash, files show their size. The same rendering goes to both the
/// console and the log, so it is produced once here.
pub fn render_tree(dir: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or_else(|_| entry.path());

        if entry.file_type().is_dir() {
            lines.push(format!("  {}/", rel.display()));
        } else {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            lines.push(format!("  {} ({} bytes)", rel.display(), size));
        }
    }

    if lines.is_empty() {
        lines.push("  (empty)".to_string());
    }

    Ok(lines)
}
