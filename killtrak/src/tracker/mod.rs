//! Kill event inference.
//!
//! This module turns extracted counter readings into kill events, running
//! totals and streaks. It performs no I/O and takes time as an argument, so
//! every behavior can be driven deterministically from tests.
//!
//! - [`delta`] - per-counter increment/reset detection and totals
//! - [`streak`] - time-windowed streak state machine
//! - [`session`] - the per-tick combination of both

pub mod delta;
pub mod session;
pub mod streak;

pub use delta::{
    CounterEvent, CounterKind, CounterState, CounterTracker, DeltaTracker, ResetPolicy, Totals,
};
pub use session::{
    KillTracker, TickOutcome, TickReadings, TrackerSnapshot, VEHICLE_KILL_NOTICE,
};
pub use streak::{streak_message, StreakConfig, StreakEngine, DEFAULT_STREAK_WINDOW};
