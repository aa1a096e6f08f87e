//! Run command - track kills from the live screen until Ctrl+C.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use killtrak::app::{bootstrap, Presenter, Startup, SystemClock, TrackerLoop, TrackerSettings};
use killtrak::resolution::Resolution;
use killtrak::store::JsonStatsStore;
use killtrak::tracker::TrackerSnapshot;

use super::common::{apply_data_override, screen_reader};
use crate::error::CliError;
use crate::runner::CliRunner;
use crate::ui::{ask_resolution, session_summary, DashboardPresenter, LinePresenter};

/// Options for the run command.
pub struct RunOptions {
    pub data: Option<PathBuf>,
    pub resolution: Option<Resolution>,
    pub headless: bool,
    pub debug_captures: bool,
}

/// Run the tracker.
pub fn run(options: RunOptions) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("run");

    let mut settings = TrackerSettings::from_config_file(runner.config());
    settings = apply_data_override(settings, options.data);
    if options.debug_captures {
        settings = settings.with_debug_captures(true);
    }
    let headless = options.headless || !atty::is(atty::Stream::Stdout);

    let mut store = JsonStatsStore::new(&settings.data_file);
    let startup = bootstrap(&mut store, options.resolution, ask_resolution)?;

    println!("KillTrak v{}", killtrak::VERSION);
    println!("Using resolution: {}", startup.resolution);
    if let Some(dir) = settings.debug_capture_dir() {
        println!("Debug captures:   {}", dir.display());
    }
    println!("Press Ctrl+C to stop");
    println!();

    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        shutdown_clone.store(true, Ordering::SeqCst);
    })
    .map_err(|e| CliError::Config(format!("Failed to set signal handler: {}", e)))?;

    let summary = if headless {
        track(&settings, startup, store, LinePresenter::stdout(), shutdown)?
    } else {
        track(&settings, startup, store, DashboardPresenter::new(), shutdown)?
    };

    println!();
    for line in session_summary(startup.totals, &summary) {
        println!("{}", line);
    }
    Ok(())
}

fn track<P: Presenter>(
    settings: &TrackerSettings,
    startup: Startup,
    store: JsonStatsStore,
    presenter: P,
    shutdown: Arc<AtomicBool>,
) -> Result<TrackerSnapshot, CliError> {
    let mut tracker = TrackerLoop::new(
        settings,
        startup,
        screen_reader(settings),
        store,
        presenter,
        SystemClock,
    )
    .with_shutdown_flag(shutdown);

    Ok(tracker.run()?)
}
