//! Leveled diagnostics for a check plugin.
//!
//! stdout belongs to the single report line, so everything here goes to
//! stderr, and only when verbose output was requested (`--verbose` or
//! `MIBPROBE_LOG_VERBOSE=1`). File logging is opt-in: set
//! `MIBPROBE_LOG_DIR` and every message is also appended to
//! `mibprobe.log` in that directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

struct Logger {
    path: Option<PathBuf>,
}

impl Logger {
    fn init() -> Self {
        let path = std::env::var("MIBPROBE_LOG_DIR").ok().map(|base| {
            let dir = PathBuf::from(base);
            let _ = fs::create_dir_all(&dir);
            dir.join("mibprobe.log")
        });

        Self { path }
    }

    fn rotate_if_needed(path: &Path) {
        if let Ok(meta) = fs::metadata(path) {
            if meta.len() > MAX_LOG_BYTES {
                let backup = path.with_extension("log.bak");
                let _ = fs::remove_file(&backup);
                let _ = fs::rename(path, &backup);
            }
        }
    }

    fn timestamp() -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        format!("{}", now)
    }

    fn log(&self, level: &str, message: &str) {
        let Some(path) = &self.path else {
            return;
        };

        Self::rotate_if_needed(path);
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{} [{}] {}", Self::timestamp(), level, message);
        }
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();
static VERBOSE: AtomicBool = AtomicBool::new(false);

fn get_logger() -> Option<&'static Logger> {
    Some(LOGGER.get_or_init(Logger::init))
}

/// Initialise logging for this invocation.
///
/// `verbose` comes from the CLI; `MIBPROBE_LOG_VERBOSE=1` enables it too.
pub fn init(verbose: bool) {
    let env_verbose = std::env::var("MIBPROBE_LOG_VERBOSE")
        .map(|v| v == "1")
        .unwrap_or(false);
    VERBOSE.store(verbose || env_verbose, Ordering::Relaxed);
    let _ = get_logger();
}

/// Whether verbose diagnostics are enabled for this invocation
pub fn verbose_enabled() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn log_debug(message: &str) {
    log_internal("DEBUG", message);
}

pub fn log_info(message: &str) {
    log_internal("INFO", message);
}

pub fn log_warn(message: &str) {
    log_internal("WARN", message);
}

pub fn log_error(message: &str) {
    log_internal("ERROR", message);
}

fn log_internal(level: &str, message: &str) {
    // Console diagnostics go to stderr so the report line on stdout stays
    // the only stdout write of the whole invocation.
    if verbose_enabled() {
        eprintln!("[{}] {}", level, message);
    }

    if let Some(logger) = get_logger() {
        logger.log(level, message);
    }
}
