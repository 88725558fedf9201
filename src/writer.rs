use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::LogLevel;

/// Serializes every append made through this crate within the process.
///
/// This does not coordinate with other processes writing the same file.
static APPEND_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Format one log line (without the trailing newline).
///
/// `[2026-10-17T14:35:27+02:00] [INFORMATION] message`
pub fn format_line(timestamp: OffsetDateTime, level: LogLevel, message: &str) -> String {
    let stamp = timestamp
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ))
        .unwrap_or_else(|_| timestamp.unix_timestamp().to_string());
    format!("[{}] [{}] {}", stamp, level.as_str(), message)
}

/// Append `line` plus a newline to the existing file at `path`.
///
/// The file is never created here; opening a session creates it. A file
/// removed underneath a live session (for instance pruned by a concurrent
/// rollover) therefore fails the append instead of reappearing outside
/// retention.
///
/// Returns `false` (after reporting the failure) instead of an error so
/// that logging never takes the caller down.
pub fn append(path: &Path, line: &str) -> bool {
    match try_append(path, line) {
        Ok(()) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "log file vanished before append");
            false
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to append log line");
            false
        }
    }
}

fn try_append(path: &Path, line: &str) -> io::Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');

    // Released on every exit path when the guard drops.
    let _guard = APPEND_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(buf.as_bytes())?;
    file.flush()
}
