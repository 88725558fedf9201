//! Leveled entry points on top of the rollover engine.
//!
//! Every call runs the same pipeline: level gate, session refresh, file
//! append, console mirror. Nothing in it returns an error to the caller.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::console::{self, ConsoleColor};
use crate::writer::{append, format_line};
use crate::{ClockSource, LogConfig, LogLevel, LogSession, Result, SystemClock};

type ConsoleSink = Mutex<Box<dyn Write + Send>>;

/// A leveled logger writing to a rolling log file.
///
/// Share it by reference (or `Arc`) between threads; the session inside is
/// replaced as a whole whenever it goes stale.
pub struct Logger {
    config: LogConfig,
    clock: Arc<dyn ClockSource>,
    session: RwLock<Option<LogSession>>,
    console: Option<ConsoleSink>,
}

impl Logger {
    /// Create a logger using the system clock and stdout.
    ///
    /// The configuration is validated, but no file or directory is touched
    /// until the first log call or [`Logger::initialize`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] for an unrecognized rollover period.
    pub fn new(config: LogConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a logger driven by `clock`.
    pub fn with_clock(config: LogConfig, clock: Arc<dyn ClockSource>) -> Result<Self> {
        config.period()?;
        Ok(Self::build(config, clock))
    }

    /// Assemble a logger from an already validated configuration.
    pub(crate) fn build(config: LogConfig, clock: Arc<dyn ClockSource>) -> Self {
        let console = config
            .console
            .then(|| Mutex::new(Box::new(io::stdout()) as Box<dyn Write + Send>));
        Self {
            config,
            clock,
            session: RwLock::new(None),
            console,
        }
    }

    /// Send the console mirror to `out` instead of stdout.
    ///
    /// This enables mirroring even if the configuration turned it off.
    pub fn with_console_writer(mut self, out: Box<dyn Write + Send>) -> Self {
        self.console = Some(Mutex::new(out));
        self
    }

    /// Explicitly (re)initialize the session, replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] for an unrecognized rollover period.
    pub fn initialize(&self) -> Result<LogSession> {
        let session = LogSession::initialize(&self.config, self.clock.as_ref())?;
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(session)
    }

    /// The configuration this logger was built from.
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// A snapshot of the current session, if one has been created.
    pub fn session(&self) -> Option<LogSession> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Record `message` at `level`, mirroring it to the console.
    pub fn log(&self, level: LogLevel, message: &str) {
        self.log_with_color(level, message, ConsoleColor::for_level(level));
    }

    /// Host output in an optional colour.
    ///
    /// Gated like every other level: `levels.host` controls it, and the
    /// console mirror only happens when a console sink is configured.
    pub fn host(&self, message: &str, color: Option<ConsoleColor>) {
        self.log_with_color(LogLevel::Host, message, color);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn information(&self, message: &str) {
        self.log(LogLevel::Information, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log_with_color(&self, level: LogLevel, message: &str, color: Option<ConsoleColor>) {
        if !self.config.levels.is_enabled(level) {
            return;
        }

        let line = format_line(self.clock.now_local(), level, message);

        if let Some(session) = self.valid_session()
            && !append(session.current_log_file(), &line)
        {
            // The file may have been pruned by a concurrent rollover; a fresh
            // look at the session either finds its successor or recreates it.
            if let Some(session) = self.valid_session() {
                append(session.current_log_file(), &line);
            }
        }

        if let Some(console) = &self.console {
            let mut out = console.lock().unwrap_or_else(PoisonError::into_inner);
            if let Err(e) = console::mirror(&mut **out, &line, color) {
                tracing::debug!(error = %e, "failed to mirror log line");
            }
        }
    }

    /// Return a session that is valid now, rolling over if needed.
    ///
    /// Two threads noticing staleness at once may both rebuild the session;
    /// both compute the same boundary so the last store wins harmlessly.
    fn valid_session(&self) -> Option<LogSession> {
        let now = self.clock.now_utc();
        let current = {
            let guard = self.session.read().unwrap_or_else(PoisonError::into_inner);
            match guard.as_ref() {
                Some(session) if session.is_valid(now) => return Some(session.clone()),
                other => other.cloned(),
            }
        };

        let refreshed = match current {
            Some(session) => session.ensure_valid(self.clock.as_ref()),
            None => LogSession::initialize(&self.config, self.clock.as_ref()),
        };

        match refreshed {
            Ok(session) => {
                *self.session.write().unwrap_or_else(PoisonError::into_inner) =
                    Some(session.clone());
                Some(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to refresh log session");
                None
            }
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("session", &self.session())
            .field("console", &self.console.is_some())
            .finish()
    }
}
