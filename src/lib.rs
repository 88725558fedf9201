//! # Lazyroll
//!
//! Leveled file logging with calendar-based rollover and count-based
//! retention.
//!
//! ## Features
//!
//! - Console mirroring of every recorded line
//! - Log files rolled over every minute, hour, day, week or month
//! - Oldest files pruned beyond a configured count
//! - Rollover checked lazily on each call, no background thread
//! - Internal failures reported through `tracing`, never to the caller
//!
//! Files are laid out as `<directory>/<base_name>/<base_name>.<stamp>.log`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lazyroll::{LogConfig, Logger};
//!
//! let config = LogConfig::new()
//!     .with_directory("/var/log")
//!     .with_base_name("Service")
//!     .with_rollover_period("Hour")
//!     .with_max_count(24);
//! let logger = Logger::new(config)?;
//!
//! logger.information("This is an info message");
//! logger.warning("This is a warning");
//! # Ok::<(), lazyroll::Error>(())
//! ```

pub mod builder;
pub mod clock;
pub mod config;
pub mod console;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod retention;
pub mod rotation;
pub mod session;
pub mod tracing_init;
pub mod writer;

pub use builder::LogBuilder;
pub use clock::{ClockSource, ManualClock, SystemClock};
pub use config::{DiagnosticsConfig, LogConfig};
pub use console::ConsoleColor;
pub use error::{Error, Result};
pub use global::{debug, error, global, host, information, init, log, verbose, warning};
pub use level::{LevelSwitches, LogLevel};
pub use logger::Logger;
pub use retention::{LogFileRecord, prune};
pub use rotation::{Boundary, RolloverPeriod};
pub use session::LogSession;
pub use tracing_init::init_diagnostics;

/// Start configuring logging with a [`LogBuilder`].
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}
