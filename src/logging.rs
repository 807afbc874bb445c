//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the UI while the app runs, so log output only goes
//! to a file. Without a log file no subscriber is installed and every
//! `tracing` macro is a no-op.
//!
//! # Log Levels
//!
//! - `warn`: ignored requests (unknown program names)
//! - `info`: startup, program switches, event loop start/stop
//! - `debug`: expression results, accepted and rejected board moves

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter, used when `RUST_LOG` is not set.
    pub level: Level,
    /// Log file path. `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_file: None,
            with_target: true,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Call once at startup, before the terminal switches to the alternate
/// screen.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(true)
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    // Dependencies stay at warn to keep terminal-backend noise out
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,vonneumann={}", level_str)))
}
