use thiserror::Error as ThisError;

/// Errors surfaced by explicit initialization.
///
/// Leveled log calls never return these; failures there are reported on
/// the `tracing` diagnostic channel instead.
#[derive(ThisError, Debug)]
pub enum Error {
    /// A configured value (usually the rollover period) is not recognized.
    #[error("Configuration error: {0}")]
    Config(String),
    /// The diagnostic subscriber could not be installed.
    #[error("Initialization error: {0}")]
    Init(String),
    #[error("Time error: {0}")]
    Time(#[from] time::error::Error),
    /// A period boundary falls outside the representable calendar.
    #[error("Calendar error: {0}")]
    Calendar(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
