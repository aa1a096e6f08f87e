//! Tracker lifecycle: startup, the tick loop and shutdown.
//!
//! Everything the loop touches is injected, so the CLI wires in the screen
//! reader, JSON store and terminal dashboard while tests wire in scripted
//! fakes and a manual clock.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        TrackerLoop                            │
//! │                                                               │
//! │  Clock::now ──► ReadingSource (kills, vehicle) ──► KillTracker│
//! │                                                      │        │
//! │                   event? ──► StatsStore::save ◄──────┤        │
//! │                                                      ▼        │
//! │                                          Presenter::render    │
//! │                                                      │        │
//! │  Clock::sleep (in slices, watching the shutdown flag)◄┘       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use killtrak::app::{bootstrap, SystemClock, TrackerLoop, TrackerSettings};
//!
//! let settings = TrackerSettings::from_config_file(&config);
//! let startup = bootstrap(&mut store, None, prompt_for_resolution)?;
//! let mut tracker = TrackerLoop::new(&settings, startup, source, store, presenter, SystemClock);
//!
//! let shutdown = tracker.shutdown_flag();
//! ctrlc::set_handler(move || shutdown.store(true, Ordering::SeqCst))?;
//!
//! let summary = tracker.run()?;
//! ```

mod bootstrap;
mod clock;
mod config;
mod error;
mod runner;

pub use bootstrap::{bootstrap, Startup};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TrackerSettings;
pub use error::AppError;
pub use runner::{Presenter, TrackerLoop, SLEEP_SLICE};
