//! Config lookup and source discovery for tourney projects.
//!
//! A project may carry a `tourney.yaml` next to its definitions. Commands
//! that take paths expand directories into the `.tourney` files they
//! contain; with no paths, the config's `sources` are used.
//!
//! # Example
//!
//! ```ignore
//! use tourney::discovery::{collect_sources, find_config, Config};
//!
//! let config = match find_config(Path::new(".")) {
//!     Some(path) => Config::load(&path)?,
//!     None => Config::default(),
//! };
//! let files = collect_sources(&[], Path::new("."), &config)?;
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TourneyError};

pub use config::{Config, OutputFormat};
pub use scanner::{is_tournament_file, scan_directory, SOURCE_EXTENSION};

/// The name of the config file.
pub const CONFIG_FILENAME: &str = "tourney.yaml";

/// Find `tourney.yaml` in `start` or the nearest ancestor directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Resolve the files a command should analyze.
///
/// Directories are scanned recursively; files are taken as given, whatever
/// their extension. With no `paths`, the config's sources are resolved
/// against `base`. The result is free of duplicates and keeps first-seen
/// order.
pub fn collect_sources(paths: &[PathBuf], base: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let requested: Vec<PathBuf> = if paths.is_empty() {
        config
            .effective_sources()
            .iter()
            .map(|source| {
                let source = Path::new(source);
                if source.is_absolute() {
                    source.to_path_buf()
                } else {
                    base.join(source)
                }
            })
            .collect()
    } else {
        paths.to_vec()
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for path in requested {
        if path.is_dir() {
            for file in scan_directory(&path, config) {
                if !files.contains(&file) {
                    files.push(file);
                }
            }
        } else if path.is_file() {
            if !files.contains(&path) {
                files.push(path);
            }
        } else {
            return Err(TourneyError::Io {
                path,
                message: "No such file or directory".to_string(),
            });
        }
    }

    debug!(count = files.len(), "collected sources");
    Ok(files)
}
