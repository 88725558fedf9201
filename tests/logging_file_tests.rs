use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use lazyroll::{Error, LogConfig, Logger, ManualClock, RolloverPeriod};
use time::Duration;
use time::macros::datetime;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_minute_rollover_prunes_previous_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let clock = Arc::new(ManualClock::new(datetime!(2026-10-17 12:00:00 UTC)));
    let config = LogConfig::new()
        .with_directory(dir.path())
        .with_base_name("Logs")
        .with_rollover_period(RolloverPeriod::Minute)
        .with_max_count(1)
        .with_console(false);
    let logger = Logger::with_clock(config, clock.clone()).expect("logger");

    logger.information("at twelve");
    let log_dir = dir.path().join("Logs");
    assert_eq!(file_names(&log_dir), vec!["Logs.2026-10-17T12-00.log"]);

    clock.set(datetime!(2026-10-17 12:01:00 UTC));
    logger.information("one minute later");

    assert_eq!(file_names(&log_dir), vec!["Logs.2026-10-17T12-01.log"]);
    let content =
        std::fs::read_to_string(log_dir.join("Logs.2026-10-17T12-01.log")).expect("read log");
    assert_eq!(
        content,
        "[2026-10-17T12:01:00+00:00] [INFORMATION] one minute later\n"
    );
}

#[test]
fn test_many_writes_in_one_period_share_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let clock = Arc::new(ManualClock::new(datetime!(2026-10-17 08:00:00 +02:00)));
    let config = LogConfig::new()
        .with_directory(dir.path())
        .with_rollover_period("Day")
        .with_max_count(3)
        .with_console(false);
    let logger = Logger::with_clock(config, clock.clone()).expect("logger");

    for i in 0..20 {
        logger.information(&format!("message {i}"));
        clock.advance(Duration::minutes(30));
    }

    let log_dir = dir.path().join("Logs");
    assert_eq!(file_names(&log_dir), vec!["Logs.2026-10-17.log"]);
    let content = std::fs::read_to_string(log_dir.join("Logs.2026-10-17.log")).expect("read");
    assert_eq!(content.lines().count(), 20);
}

#[test]
fn test_retention_across_hourly_rollovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let clock = Arc::new(ManualClock::new(datetime!(2026-10-17 00:15:00 UTC)));
    let config = LogConfig::new()
        .with_directory(dir.path())
        .with_base_name("Worker")
        .with_rollover_period("hour")
        .with_max_count(3)
        .with_console(false);
    let logger = Logger::with_clock(config, clock.clone()).expect("logger");

    for _ in 0..6 {
        logger.warning("tick");
        // Creation times must differ for the age ordering to be meaningful.
        std::thread::sleep(std::time::Duration::from_millis(15));
        clock.advance(Duration::HOUR);
    }

    assert_eq!(
        file_names(&dir.path().join("Worker")),
        vec![
            "Worker.2026-10-17T03.log",
            "Worker.2026-10-17T04.log",
            "Worker.2026-10-17T05.log",
        ]
    );
}

#[test]
fn test_unknown_period_fails_synchronously() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = LogConfig::new()
        .with_directory(dir.path())
        .with_rollover_period("Fortnight");

    let err = Logger::new(config.clone()).expect_err("Fortnight must be rejected");
    assert!(matches!(err, Error::Config(_)));

    let clock = ManualClock::new(datetime!(2026-10-17 12:00:00 UTC));
    let err = lazyroll::LogSession::initialize(&config, &clock)
        .expect_err("Fortnight must be rejected");
    assert!(matches!(err, Error::Config(_)));

    assert!(file_names(dir.path()).is_empty());
}

#[test]
fn test_unwritable_directory_keeps_console_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("plain-file");
    std::fs::write(&blocker, b"not a directory").expect("write blocker");

    let clock = Arc::new(ManualClock::new(datetime!(2026-10-17 12:00:00 UTC)));
    let config = LogConfig::new()
        .with_directory(&blocker)
        .with_rollover_period("Minute")
        .with_max_count(2);
    let console = Capture::default();
    let logger = Logger::with_clock(config, clock)
        .expect("logger")
        .with_console_writer(Box::new(console.clone()));

    logger.information("still visible");
    logger.error("also visible");

    let text = console.text();
    assert!(text.contains("[INFORMATION] still visible"));
    assert!(text.contains("[ERROR] also visible"));
    assert_eq!(
        std::fs::read_to_string(&blocker).expect("blocker intact"),
        "not a directory"
    );
}

#[test]
fn test_concurrent_threads_write_complete_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let clock = Arc::new(ManualClock::new(datetime!(2026-10-17 12:00:00 UTC)));
    let config = LogConfig::new()
        .with_directory(dir.path())
        .with_rollover_period("Day")
        .with_console(false);
    let logger = Arc::new(Logger::with_clock(config, clock).expect("logger"));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..100 {
                    logger.information(&format!("thread={t} seq={i} {}", "=".repeat(200)));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread");
    }

    let path = dir.path().join("Logs").join("Logs.2026-10-17.log");
    let content = std::fs::read_to_string(path).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 800);
    for line in lines {
        assert!(line.starts_with("[2026-10-17T12:00:00+00:00] [INFORMATION] thread="));
        assert!(line.ends_with(&"=".repeat(200)));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_write_complete_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = LogConfig::new()
        .with_directory(dir.path())
        .with_base_name("Async")
        .with_rollover_period("Month")
        .with_console(false);
    let logger = Arc::new(Logger::new(config).expect("logger"));

    let tasks: Vec<_> = (0..16)
        .map(|t| {
            let logger = Arc::clone(&logger);
            tokio::task::spawn_blocking(move || {
                for i in 0..25 {
                    logger.warning(&format!("task={t} seq={i}"));
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.expect("task");
    }

    let session = logger.session().expect("session");
    let content = std::fs::read_to_string(session.current_log_file()).expect("read");
    assert_eq!(content.lines().count(), 400);
    assert!(content.lines().all(|l| l.contains("[WARNING] task=")));
}

#[test]
fn test_global_logger_init_and_free_functions() {
    let dir = tempfile::tempdir().expect("tempdir");

    let rejected = lazyroll::init(LogConfig::new().with_rollover_period("Fortnight"));
    assert!(matches!(rejected, Err(Error::Config(_))));

    lazyroll::builder()
        .with_directory(dir.path())
        .with_base_name("Global")
        .with_rollover_period("Month")
        .with_console(false)
        .init()
        .expect("init");

    let logger = lazyroll::global();
    let session = logger.session().expect("init creates the session");
    assert!(session.current_log_file().is_file());

    lazyroll::information("from the free function");
    lazyroll::host("host line", Some(lazyroll::ConsoleColor::Cyan));
    lazyroll::debug("debug is off by default");

    let content = std::fs::read_to_string(session.current_log_file()).expect("read");
    assert!(content.contains("[INFORMATION] from the free function"));
    assert!(content.contains("[HOST] host line"));
    assert!(!content.contains("debug is off"));
}
