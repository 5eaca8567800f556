use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::utils::to_slash_path;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// A source file selected for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path used to read the file.
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated. Attached to every record.
    pub relative: String,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, sorted by relative path.
    pub files: Vec<SourceFile>,
    pub ignored_count: usize,
}

/// Recursively collect files under `root` whose extension is one of
/// `extensions` (case-sensitive), minus anything matched by `ignore_patterns`.
///
/// Ignore patterns are matched against the path relative to `root`. A
/// pattern without wildcards is a literal directory prefix.
///
/// Symlinked files are included; a symlink whose target is missing is kept
/// too, so that reading it fails loudly later. Symlinked directories are not
/// descended into.
///
/// An invalid glob or an unreadable directory entry fails the whole scan.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
) -> Result<ScanResult> {
    let mut files = Vec::new();
    let mut ignored_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            let pattern = Pattern::new(p)
                .with_context(|| format!("Invalid ignore pattern: \"{}\"", p))?;
            glob_patterns.push(pattern);
        } else {
            literal_ignore_paths.push(PathBuf::from(p));
        }
    }

    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("Cannot access path under {}", root.display()))?;
        if !is_file_entry(&entry) {
            continue;
        }

        let path = entry.path();
        let relative_path = path.strip_prefix(root).unwrap_or(path);

        if !is_scannable_file(relative_path, extensions) {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| relative_path.starts_with(ignore_path))
        {
            ignored_count += 1;
            continue;
        }

        let relative = to_slash_path(relative_path);
        if glob_patterns.iter().any(|p| p.matches(&relative)) {
            ignored_count += 1;
            continue;
        }

        files.push(SourceFile {
            path: path.to_path_buf(),
            relative,
        });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    Ok(ScanResult {
        files,
        ignored_count,
    })
}

fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
