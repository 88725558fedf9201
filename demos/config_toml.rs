//! Example of loading logging configuration from a TOML file.
//!
//! Run with:
//! ```bash
//! cargo run --example config_toml
//! ```

use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct Config {
    log: lazyroll::LogConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = "demos/config.toml";
    let config_content = fs::read_to_string(config_path)
        .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));

    let root: Config = toml::from_str(&config_content)?;
    let config = root.log;

    // Report file-system trouble on stderr
    lazyroll::init_diagnostics(&config, None)?;
    lazyroll::init(config)?;

    lazyroll::debug("This is a debug message (visible because debug is enabled)");
    lazyroll::verbose("This is a verbose message (hidden)");
    lazyroll::information("This is an info message");
    lazyroll::warning("This is a warning message");
    lazyroll::error("This is an error message");
    lazyroll::host("Done", Some(lazyroll::ConsoleColor::Green));

    if let Some(session) = lazyroll::global().session() {
        println!("Logged to {}", session.current_log_file().display());
    }

    Ok(())
}
