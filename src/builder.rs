//! Builder pattern for configuring logging.
//!
//! # Example
//!
//! ```rust,no_run
//! // Process-wide logger, hourly files, keep the last day
//! lazyroll::builder()
//!     .with_directory("/var/log")
//!     .with_base_name("Service")
//!     .with_rollover_period(lazyroll::RolloverPeriod::Hour)
//!     .with_max_count(24)
//!     .init()
//!     .expect("Failed to initialize logging");
//!
//! lazyroll::information("service started");
//!
//! // Standalone logger owned by the caller
//! let logger = lazyroll::builder()
//!     .with_console(false)
//!     .build_logger()
//!     .expect("Failed to build logger");
//! logger.warning("disk almost full");
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use crate::{ClockSource, LevelSwitches, LogConfig, LogLevel, Logger, Result};

/// A builder for configuring and initializing logging.
///
/// This provides a fluent interface for setting up logging configuration
/// and either installing it process-wide or handing back a [`Logger`].
#[derive(Debug, Clone)]
pub struct LogBuilder {
    config: LogConfig,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::new(),
        }
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self { config }
    }

    /// Set the root directory; files land in `<directory>/<base_name>/`.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_directory(directory);
        self
    }

    /// Set the subfolder name and file-name prefix.
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.config = self.config.with_base_name(base_name);
        self
    }

    /// Set the rollover period ("Month", "Week", "Day", "Hour", "Minute").
    ///
    /// The name is checked when the logger is built.
    pub fn with_rollover_period(mut self, period: impl Into<String>) -> Self {
        self.config = self.config.with_rollover_period(period);
        self
    }

    /// Keep at most `max_count` files; 0 keeps everything.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.config = self.config.with_max_count(max_count);
        self
    }

    /// Enable or disable console mirroring.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config = self.config.with_console(enabled);
        self
    }

    /// Replace all level switches.
    pub fn with_levels(mut self, levels: LevelSwitches) -> Self {
        self.config = self.config.with_levels(levels);
        self
    }

    /// Enable or disable a single level.
    pub fn with_level(mut self, level: LogLevel, enabled: bool) -> Self {
        self.config.levels.set(level, enabled);
        self
    }

    /// Get the current configuration without initializing.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Build a standalone logger using the system clock.
    pub fn build_logger(self) -> Result<Logger> {
        Logger::new(self.config)
    }

    /// Build a standalone logger driven by `clock`.
    pub fn build_logger_with_clock(self, clock: Arc<dyn ClockSource>) -> Result<Logger> {
        Logger::with_clock(self.config, clock)
    }

    /// Install the configuration as the process-wide logger.
    ///
    /// # Errors
    ///
    /// Returns an error if the rollover period is not recognized.
    pub fn init(self) -> Result<()> {
        crate::init(self.config)
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
