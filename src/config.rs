use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{LevelSwitches, Result, RolloverPeriod};

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Root directory; files go to `<directory>/<base_name>/`
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Subfolder name and file-name prefix
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// Rollover period name ("Month", "Week", "Day", "Hour" or "Minute")
    #[serde(default = "default_rollover_period")]
    pub rollover_period: String,
    /// Number of log files to keep; 0 keeps everything
    #[serde(default)]
    pub max_count: usize,
    /// Mirror every line to stdout
    #[serde(default = "default_console")]
    pub console: bool,
    /// Which levels are recorded
    #[serde(default)]
    pub levels: LevelSwitches,
    /// Where the crate reports its own failures
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            directory: default_directory(),
            base_name: default_base_name(),
            rollover_period: default_rollover_period(),
            max_count: 0,
            console: default_console(),
            levels: LevelSwitches::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }

    /// Set the root log directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Set the base name
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// Set the rollover period by name
    pub fn with_rollover_period(mut self, period: impl Into<String>) -> Self {
        self.rollover_period = period.into();
        self
    }

    /// Set the retention count
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Enable console mirroring
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Replace the level switches
    pub fn with_levels(mut self, levels: LevelSwitches) -> Self {
        self.levels = levels;
        self
    }

    /// Set diagnostics configuration
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Parse the configured rollover period.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] for an unrecognized period name.
    pub fn period(&self) -> Result<RolloverPeriod> {
        self.rollover_period.parse()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_directory() -> PathBuf {
    std::env::temp_dir()
}

fn default_base_name() -> String {
    "Logs".to_string()
}

fn default_rollover_period() -> String {
    RolloverPeriod::Day.to_string()
}

fn default_console() -> bool {
    true
}

/// Configuration for the diagnostic subscriber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Diagnostic level (e.g., "warn", "debug")
    #[serde(default = "default_diagnostics_level")]
    pub level: String,
    /// Diagnostic format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
}

impl DiagnosticsConfig {
    /// Create a new DiagnosticsConfig with defaults
    pub fn new() -> Self {
        Self {
            level: default_diagnostics_level(),
            format: default_format(),
        }
    }

    /// Set diagnostic level
    pub fn with_level(mut self, level: String) -> Self {
        self.level = level;
        self
    }

    /// Set diagnostic format
    pub fn with_format(mut self, format: String) -> Self {
        self.format = format;
        self
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_diagnostics_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}
