//! Turns the paths given on the command line into the list of files to ingest.

use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Order in which discovered files are handed to the coordinator
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileOrder {
    /// Command-line order, then directory walk order
    #[default]
    Cli,
    /// Sorted by path
    Name,
    /// Oldest modification time first
    Mtime,
}

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// File-name pattern applied to files found inside directories
    pub pattern: glob::Pattern,
    pub recursive: bool,
    pub order: FileOrder,
}

impl DiscoveryConfig {
    pub fn new(pattern: &str, recursive: bool, order: FileOrder) -> Result<Self> {
        let pattern = glob::Pattern::new(pattern)
            .with_context(|| format!("Invalid file pattern '{}'", pattern))?;
        Ok(Self {
            pattern,
            recursive,
            order,
        })
    }
}

/// Expand `paths` into regular files.
///
/// Files named explicitly are always kept; files inside directories must match
/// the configured pattern. A path that does not exist is an error.
pub fn discover_files<P: AsRef<Path>>(paths: &[P], config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .with_context(|| format!("Input path not found: {}", path.display()))?;

        if metadata.is_dir() {
            walk_dir(path, config, &mut found)?;
        } else if metadata.is_file() {
            found.push(path.to_path_buf());
        } else {
            return Err(anyhow!("Not a regular file or directory: {}", path.display()));
        }
    }

    // The same file reached through different spellings is ingested once
    let mut seen = HashSet::new();
    found.retain(|path| seen.insert(fs::canonicalize(path).unwrap_or_else(|_| path.clone())));

    sort_files(&mut found, config.order);
    Ok(found)
}

fn walk_dir(dir: &Path, config: &DiscoveryConfig, found: &mut Vec<PathBuf>) -> Result<()> {
    let max_depth = if config.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(dir)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e)
                    .with_context(|| format!("Failed to read directory {}", dir.display()));
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // Symlinked files are kept; symlinked directories are never descended
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && matches_pattern(entry.path(), &config.pattern) {
            found.push(entry.into_path());
        }
    }

    Ok(())
}

fn matches_pattern(path: &Path, pattern: &glob::Pattern) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| pattern.matches(name))
}

pub fn sort_files(files: &mut [PathBuf], order: FileOrder) {
    match order {
        FileOrder::Cli => {
            // Keep discovery order
        }
        FileOrder::Name => files.sort(),
        FileOrder::Mtime => {
            files.sort_by_key(|path| {
                fs::metadata(path)
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}
