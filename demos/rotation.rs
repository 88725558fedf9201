use std::sync::Arc;

use lazyroll::{LogConfig, Logger, ManualClock, RolloverPeriod};
use time::Duration;
use time::macros::datetime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;

    // Minute files, keep the newest three; a manual clock makes rollover visible.
    let clock = Arc::new(ManualClock::new(datetime!(2026-10-17 12:00:00 UTC)));
    let config = LogConfig::new()
        .with_directory(temp_dir.path())
        .with_base_name("Demo")
        .with_rollover_period(RolloverPeriod::Minute)
        .with_max_count(3);
    let logger = Logger::with_clock(config, clock.clone())?;

    for i in 0..10 {
        logger.information(&format!("Log message number {}", i));
        clock.advance(Duration::seconds(40));
    }

    let log_dir = temp_dir.path().join("Demo");
    println!("Files left in {}:", log_dir.display());
    for entry in std::fs::read_dir(&log_dir)? {
        println!("  {}", entry?.file_name().to_string_lossy());
    }

    Ok(())
}
