//! Tracing setup for Showreel
//!
//! Console logs at the level the user picks, plus an optional full trace log
//! written to disk for the current run.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Name of the per-run log file inside the logs directory.
pub const LOG_FILE_NAME: &str = "showreel-last-run.log";

/// Initialize tracing with console output and, if `logs_dir` is given, a
/// trace-level log file that is overwritten on every run.
///
/// `RUST_LOG` takes precedence over `console_level` for the console layer.
///
/// # Errors
///
/// - `std::io::Error` - If the logs directory cannot be created or the log file cannot be opened for writing
pub fn init_tracing(console_level: Level, logs_dir: Option<&Path>) -> std::io::Result<()> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    let Some(logs_path) = logs_dir else {
        tracing_subscriber::registry().with(console_layer).init();
        tracing::debug!("Tracing initialized: console={console_level}");
        return Ok(());
    };

    create_dir_all(logs_path)?;
    let log_file_path = logs_path.join(LOG_FILE_NAME);
    let log_file = File::create(&log_file_path)?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(log_file)
        .with_filter(EnvFilter::new("trace"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "Tracing initialized: console={}, debug_file={}",
        console_level,
        log_file_path.display()
    );

    Ok(())
}

/// CLI log levels for user control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Informational, warning, and error messages
    #[default]
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use showreel_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Info.as_tracing_level();
    /// assert_eq!(level, tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliLogLevel::Error => write!(f, "error"),
            CliLogLevel::Warn => write!(f, "warn"),
            CliLogLevel::Info => write!(f, "info"),
            CliLogLevel::Debug => write!(f, "debug"),
            CliLogLevel::Trace => write!(f, "trace"),
        }
    }
}
