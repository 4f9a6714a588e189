//! File logging for the TUI.
//!
//! The terminal belongs to the game while it runs, so tracing output goes
//! to a daily rolling file in the state directory instead of stderr.

use crate::error::{BlinkError, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, EnvFilter};

/// Number of daily log files kept around
const MAX_LOG_FILES: usize = 7;

/// Install the global subscriber writing into `log_dir`.
///
/// Level defaults to INFO and follows `RUST_LOG` when set.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("blink")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| BlinkError::Logging(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| BlinkError::Logging(Box::new(e)))?;

    tracing::info!("blink v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}
