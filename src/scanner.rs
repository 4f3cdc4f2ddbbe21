// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Directory scanner for auditing component markup across a project.
//!
//! Walks directory trees, picks markup files and runs the accessibility
//! rules over the components found in each.

use crate::analyzers::validate_accessibility;
use crate::error::Result;
use crate::report::AuditEntry;
use std::path::Path;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["tsx", "jsx", "html", "htm", "vue", "svelte"];

/// Directories to skip
const SKIP_DIRS: &[&str] = &["node_modules", ".git", "target", "dist", "build"];

fn is_scannable(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| SCANNABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    // The root is always walked, even when it is "."
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_str().unwrap_or("");
    SKIP_DIRS.contains(&name) || name.starts_with('.')
}

/// Audit the markup in a single file
pub fn scan_file(path: &Path) -> Result<AuditEntry> {
    let content = std::fs::read_to_string(path)?;
    let result = validate_accessibility(Some(&content), None, None)?;
    debug!(file = %path.display(), score = result.score, "Audited file");

    Ok(AuditEntry {
        source: path.display().to_string(),
        result,
    })
}

/// Audit every markup file under a directory, in path order
pub fn scan_directory(dir: &Path) -> Result<Vec<AuditEntry>> {
    let mut entries = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() || !is_scannable(entry.path()) {
            continue;
        }

        match scan_file(entry.path()) {
            Ok(audit) => entries.push(audit),
            Err(e) => info!("Skipping {}: {}", entry.path().display(), e),
        }
    }

    let issues: usize = entries.iter().map(|e| e.result.issues.len()).sum();
    info!("Scanned {} files, found {} issues", entries.len(), issues);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_nonexistent_dir() {
        let entries = scan_directory(Path::new("/nonexistent/path")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_file_missing_is_io_error() {
        assert!(matches!(
            scan_file(Path::new("/nonexistent/form.tsx")),
            Err(crate::error::ComposerError::Io(_))
        ));
    }

    #[test]
    fn test_scan_directory_filters_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();

        fs::write(root.join("src/a.tsx"), "<Button>Save</Button>").unwrap();
        fs::write(root.join("src/b.html"), "<img src=\"x.png\" />").unwrap();
        fs::write(root.join("src/notes.md"), "<Input />").unwrap();
        fs::write(root.join("node_modules/pkg/c.jsx"), "<Input />").unwrap();
        fs::write(root.join(".cache/d.vue"), "<Input />").unwrap();

        let entries = scan_directory(root).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].source.ends_with("a.tsx"));
        assert!(entries[0].result.valid);
        assert!(entries[1].source.ends_with("b.html"));
        assert!(!entries[1].result.valid);
        assert_eq!(entries[1].result.issues[0].rule, "img-needs-alt");
    }
}
