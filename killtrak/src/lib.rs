//! KillTrak - on-screen kill counter tracking
//!
//! This library reads the kill and vehicle-kill counters a game draws on
//! screen, turns the periodically sampled OCR readings into discrete kill
//! events, keeps persistent totals and detects kill streaks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ ReadingSource│──►│ extract_stat │──►│ DeltaTracker │──►│ StreakEngine │
//! │ (capture+OCR)│   │              │   │ (per counter)│   │ (30s window) │
//! └──────────────┘   └──────────────┘   └──────┬───────┘   └──────┬───────┘
//!                                              │                  │
//!                                              ▼                  ▼
//!                                        ┌──────────┐      ┌────────────┐
//!                                        │StatsStore│      │ Presenter  │
//!                                        └──────────┘      └────────────┘
//! ```
//!
//! The [`app::TrackerLoop`] owns one instance of each collaborator and drives
//! them once per tick until its shutdown flag is raised.

pub mod app;
pub mod config;
pub mod extract;
pub mod logging;
pub mod reading;
pub mod resolution;
pub mod store;
pub mod tracker;

/// Crate version, shown in the CLI banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
