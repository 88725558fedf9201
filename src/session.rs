//! The active log file and the instant it goes stale.
//!
//! A [`LogSession`] is never mutated in place: when it goes stale,
//! [`LogSession::ensure_valid`] hands back a freshly initialized one.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::retention::{self, LOG_EXTENSION};
use crate::{ClockSource, LogConfig, Result, RolloverPeriod};

/// Where log lines currently go, and until when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSession {
    directory: PathBuf,
    base_name: String,
    period: RolloverPeriod,
    max_count: usize,
    current_log_file: PathBuf,
    expires_at: OffsetDateTime,
}

impl LogSession {
    /// Initialize a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] for an unrecognized rollover period,
    /// before anything touches the filesystem.
    pub fn initialize(config: &LogConfig, clock: &dyn ClockSource) -> Result<Self> {
        let period = config.period()?;
        Self::start(
            config.directory.clone(),
            config.base_name.clone(),
            period,
            config.max_count,
            clock,
        )
    }

    /// Initialize a session: compute the period boundary, make sure the log
    /// directory and the active file exist, then apply retention.
    ///
    /// Filesystem failures are reported and tolerated; the returned session
    /// then simply points at a file that does not exist.
    pub fn start(
        directory: PathBuf,
        base_name: String,
        period: RolloverPeriod,
        max_count: usize,
        clock: &dyn ClockSource,
    ) -> Result<Self> {
        let boundary = period.compute_boundary(clock.now_local())?;

        let log_dir = directory.join(&base_name);
        if let Err(e) = fs::create_dir_all(&log_dir) {
            warn!(path = %log_dir.display(), error = %e, "failed to create log directory");
        }

        let current_log_file = log_dir.join(format!(
            "{}.{}.{}",
            base_name, boundary.stamp, LOG_EXTENSION
        ));
        // The active file has to exist before pruning so it counts towards
        // `max_count` as the newest file.
        if let Err(e) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&current_log_file)
        {
            warn!(path = %current_log_file.display(), error = %e, "failed to create log file");
        }

        let removed = retention::prune(&log_dir, &base_name, max_count);

        debug!(
            path = %current_log_file.display(),
            expires_at = %boundary.expires_at,
            removed,
            "log session initialized"
        );

        Ok(Self {
            directory,
            base_name,
            period,
            max_count,
            current_log_file,
            expires_at: boundary.expires_at,
        })
    }

    /// Whether writes at `now` may still go to the current file.
    pub fn is_valid(&self, now: OffsetDateTime) -> bool {
        self.current_log_file.is_file() && now < self.expires_at
    }

    /// Return this session if it is still valid, otherwise a freshly
    /// initialized one built from the same settings.
    pub fn ensure_valid(self, clock: &dyn ClockSource) -> Result<Self> {
        if self.is_valid(clock.now_utc()) {
            return Ok(self);
        }
        Self::start(
            self.directory,
            self.base_name,
            self.period,
            self.max_count,
            clock,
        )
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn period(&self) -> RolloverPeriod {
        self.period
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Directory holding this session's files, `<directory>/<base_name>`.
    pub fn log_dir(&self) -> PathBuf {
        self.directory.join(&self.base_name)
    }

    /// Path of the active log file. It may not exist yet.
    pub fn current_log_file(&self) -> &Path {
        &self.current_log_file
    }

    /// First UTC instant at which the session is stale.
    pub fn expires_at(&self) -> OffsetDateTime {
        self.expires_at
    }
}
