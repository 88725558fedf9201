//! Process-wide default [`Logger`] for callers that want free functions.
//!
//! The default instance uses [`LogConfig::default`] and is created on first
//! use; [`init`] swaps in a configured one.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::{ConsoleColor, LogConfig, LogLevel, Logger, Result, SystemClock};

static GLOBAL: Lazy<RwLock<Arc<Logger>>> = Lazy::new(|| RwLock::new(Arc::new(default_logger())));

fn default_logger() -> Logger {
    Logger::build(LogConfig::default(), Arc::new(SystemClock))
}

/// Replace the process-wide logger and initialize its session right away.
///
/// # Errors
///
/// Returns [`crate::Error::Config`] for an unrecognized rollover period; the
/// previous logger stays in place.
pub fn init(config: LogConfig) -> Result<()> {
    let logger = Logger::new(config)?;
    logger.initialize()?;
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(logger);
    Ok(())
}

/// The current process-wide logger.
pub fn global() -> Arc<Logger> {
    Arc::clone(&GLOBAL.read().unwrap_or_else(PoisonError::into_inner))
}

pub fn log(level: LogLevel, message: &str) {
    global().log(level, message);
}

pub fn host(message: &str, color: Option<ConsoleColor>) {
    global().host(message, color);
}

pub fn debug(message: &str) {
    global().debug(message);
}

pub fn verbose(message: &str) {
    global().verbose(message);
}

pub fn information(message: &str) {
    global().information(message);
}

pub fn warning(message: &str) {
    global().warning(message);
}

pub fn error(message: &str) {
    global().error(message);
}
