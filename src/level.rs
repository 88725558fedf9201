use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tag written into every log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Plain console output that is also recorded.
    Host,
    Debug,
    Verbose,
    Information,
    Warning,
    Error,
}

impl LogLevel {
    /// Tag used inside the `[...]` level column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "HOST",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
            Self::Information => "INFORMATION",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-level enable switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelSwitches {
    pub host: bool,
    pub debug: bool,
    pub verbose: bool,
    pub information: bool,
    pub warning: bool,
    pub error: bool,
}

impl LevelSwitches {
    /// Whether calls at `level` should be recorded at all.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Host => self.host,
            LogLevel::Debug => self.debug,
            LogLevel::Verbose => self.verbose,
            LogLevel::Information => self.information,
            LogLevel::Warning => self.warning,
            LogLevel::Error => self.error,
        }
    }

    /// Turn a single level on or off.
    pub fn set(&mut self, level: LogLevel, enabled: bool) {
        let slot = match level {
            LogLevel::Host => &mut self.host,
            LogLevel::Debug => &mut self.debug,
            LogLevel::Verbose => &mut self.verbose,
            LogLevel::Information => &mut self.information,
            LogLevel::Warning => &mut self.warning,
            LogLevel::Error => &mut self.error,
        };
        *slot = enabled;
    }
}

impl Default for LevelSwitches {
    fn default() -> Self {
        Self {
            host: true,
            debug: false,
            verbose: false,
            information: true,
            warning: true,
            error: true,
        }
    }
}
