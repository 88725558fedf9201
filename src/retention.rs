//! Count-based retention of rolled-over log files.
//!
//! Only files directly inside the log directory whose name is
//! `<base_name>.<anything>.log` take part; everything else is left alone.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

/// Extension shared by every log file this crate writes.
pub const LOG_EXTENSION: &str = "log";

/// A log file found while scanning the log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileRecord {
    /// Full path of the file.
    pub path: PathBuf,
    /// Birth time, or modification time where the platform has none.
    pub created: SystemTime,
    /// Whether the file name carries the expected `<base_name>.` prefix.
    pub matches_base_name: bool,
}

/// Delete the oldest log files so that at most `max_count` remain.
///
/// Returns the number of files removed. A `max_count` of zero disables
/// retention. Deletion failures are reported and skipped; they never stop
/// the remaining deletions.
pub fn prune(directory: &Path, base_name: &str, max_count: usize) -> usize {
    prune_with(directory, base_name, max_count, |path| fs::remove_file(path))
}

fn prune_with(
    directory: &Path,
    base_name: &str,
    max_count: usize,
    remove: impl FnMut(&Path) -> io::Result<()>,
) -> usize {
    if max_count == 0 {
        return 0;
    }

    let records = list_log_files(directory, base_name);
    remove_oldest(records, max_count, remove)
}

/// Remove all but the `keep` newest records, oldest first.
///
/// Ties on `created` are ordered by path, which for stamped names is
/// chronological.
fn remove_oldest(
    mut records: Vec<LogFileRecord>,
    keep: usize,
    mut remove: impl FnMut(&Path) -> io::Result<()>,
) -> usize {
    if records.len() <= keep {
        return 0;
    }

    records.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.path.cmp(&b.path)));

    let excess = records.len() - keep;
    let mut removed = 0;
    for record in records.iter().take(excess) {
        match remove(&record.path) {
            Ok(()) => {
                removed += 1;
                debug!(path = %record.path.display(), "removed expired log file");
            }
            Err(e) => {
                warn!(path = %record.path.display(), error = %e, "failed to remove expired log file");
            }
        }
    }

    removed
}

/// List the log files in `directory` that belong to `base_name`, unsorted.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_log_files(directory: &Path, base_name: &str) -> Vec<LogFileRecord> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            if directory.exists() {
                warn!(path = %directory.display(), error = %e, "failed to list log directory");
            }
            return Vec::new();
        }
    };

    let prefix = format!("{}.", base_name);
    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != LOG_EXTENSION) {
                return None;
            }
            let matches_base_name = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(&prefix));
            if !matches_base_name {
                return None;
            }
            let metadata = entry.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }
            let created = metadata.created().or_else(|_| metadata.modified()).ok()?;
            Some(LogFileRecord {
                path,
                created,
                matches_base_name,
            })
        })
        .collect()
}
