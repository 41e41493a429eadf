//! File system scanner for tournament definition files.
//!
//! Recursively scans directories for `.tourney` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::Config;

/// File extension of tournament definitions.
pub const SOURCE_EXTENSION: &str = "tourney";

/// Whether a path names a tournament definition file.
pub fn is_tournament_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

/// Scan a directory for tournament files, sorted by path.
pub fn scan_directory(root: &Path, config: &Config) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file())
        .filter(|path| !config.is_excluded(path))
        .filter(|path| is_tournament_file(path))
        .collect();

    files.sort();
    files
}
