//! Log file setup.
//!
//! The terminal belongs to the dashboard, so logs go to a daily rolling file
//! (`killtrak.log.YYYY-MM-DD`) in the configured directory. Verbosity follows
//! `RUST_LOG` and defaults to `info`.

use std::io;
use std::path::Path;

use time::macros::format_description;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

pub use tracing_appender::non_blocking::WorkerGuard;

/// File name prefix for rolling log files.
pub const LOG_FILE_PREFIX: &str = "killtrak.log";

/// Install the global subscriber writing to `directory`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the lifetime of the process. Calling this twice is harmless, the second
/// subscriber is simply not installed.
pub fn init_logging(directory: &Path) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(directory)?;

    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already set, keeping it");
    }

    Ok(guard)
}
