use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Error, LogConfig, Result};

/// Install a stderr subscriber for the crate's own diagnostics (failed
/// appends, failed deletions, rollovers), with an optional CLI verbosity
/// override.
///
/// Applications that already run a `tracing` subscriber should skip this:
/// the diagnostics flow into whatever subscriber is installed.
///
/// # Errors
///
/// Returns [`Error::Init`] for an invalid filter or if a global subscriber
/// is already set.
pub fn init_diagnostics(config: &LogConfig, cli_verbose: Option<u8>) -> Result<()> {
    let log_spec = effective_log_spec(config, cli_verbose);

    let env_filter = EnvFilter::try_new(&log_spec).map_err(|e| Error::Init(e.to_string()))?;

    let fmt_layer_builder = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let fmt_layer = if config.diagnostics.format == "json" {
        fmt_layer_builder.json().boxed()
    } else {
        fmt_layer_builder.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(())
}

/// Determine the effective filter, considering config and CLI overrides.
fn effective_log_spec(config: &LogConfig, cli_verbose: Option<u8>) -> String {
    // RUST_LOG takes precedence over everything
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && !rust_log.is_empty()
    {
        return rust_log;
    }

    let level = &config.diagnostics.level;

    // CLI verbose flag overrides config level
    if let Some(verbose) = cli_verbose {
        return match verbose {
            0 => level.clone(),
            1 => format!("{},lazyroll=debug", level),
            2 => format!("{},lazyroll=trace", level),
            _ => "trace".to_string(),
        };
    }

    if level.is_empty() {
        "warn,lazyroll=warn".to_string()
    } else {
        format!("{},lazyroll={}", level, level)
    }
}
