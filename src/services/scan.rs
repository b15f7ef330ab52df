//! Directory walking for the batch tools.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whether `path` has one of `extensions` (compared case-insensitively,
/// given without the dot).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Whether any of `patterns` occurs as a substring of the path.
pub fn should_skip(path: &Path, patterns: &[String]) -> bool {
    let text = path.to_string_lossy();
    patterns.iter().any(|p| text.contains(p.as_str()))
}

/// Open `dir` for listing. A missing or unreadable directory is logged and
/// yields `None`.
fn read_dir_logged(dir: &Path) -> Option<fs::ReadDir> {
    match fs::read_dir(dir) {
        Ok(entries) => Some(entries),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "Directory does not exist");
            None
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), %e, "Cannot read directory");
            None
        }
    }
}

/// Kind of a directory entry. Symlinks to files count as files; symlinks
/// to directories and dangling links are `None`.
fn classify(entry: &fs::DirEntry) -> Option<EntryKind> {
    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(path = %entry.path().display(), %e, "Cannot stat entry");
            return None;
        }
    };
    if file_type.is_dir() {
        return Some(EntryKind::Dir);
    }
    if file_type.is_file() {
        return Some(EntryKind::File);
    }
    if file_type.is_symlink() {
        return match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => Some(EntryKind::File),
            _ => None,
        };
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

/// Files directly inside `dir` with a matching extension, sorted.
///
/// A missing `dir` gives an empty list.
pub fn list_files(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in read_dir_logged(dir).into_iter().flatten() {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if classify(&entry) == Some(EntryKind::File) && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    files
}

/// Files anywhere below `root` with a matching extension and whose path
/// relative to `root` matches no skip pattern, sorted.
///
/// Symlinked files are included, symlinked directories are not followed.
/// Skipped directories are not descended into. A missing `root` gives an
/// empty list; unreadable subdirectories are logged and left out.
pub fn collect_images(root: &Path, extensions: &[String], skip_patterns: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let Some(entries) = read_dir_logged(&dir) else {
            continue;
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), %e, "Cannot read directory entry");
                    continue;
                }
            };
            let path = entry.path();
            let rel = path.strip_prefix(root).unwrap_or(&path);
            if should_skip(rel, skip_patterns) {
                tracing::trace!(path = %path.display(), "Skipping");
                continue;
            }

            match classify(&entry) {
                Some(EntryKind::Dir) => pending.push(path),
                Some(EntryKind::File) if has_extension(&path, extensions) => files.push(path),
                _ => {}
            }
        }
    }

    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "Collected images");
    files
}

/// `path` relative to `base`, `/`-separated. Falls back to the full path
/// when `path` is not under `base`.
pub fn relative_display(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}
