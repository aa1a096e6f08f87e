//! Plain line-per-tick output for pipes, logs and terminals without
//! cursor control.

use std::io::{self, Write};

use chrono::Local;
use killtrak::app::Presenter;
use killtrak::tracker::TrackerSnapshot;

/// Writes one status line per tick.
pub struct LinePresenter<W> {
    out: W,
}

impl LinePresenter<io::Stdout> {
    /// Write to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LinePresenter<W> {
    /// Write to any sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for LinePresenter<W> {
    fn render(&mut self, snapshot: &TrackerSnapshot) -> io::Result<()> {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        writeln!(self.out, "{}", status_line(&timestamp, snapshot))?;
        self.out.flush()
    }
}

/// Format one status line.
pub fn status_line(timestamp: &str, snapshot: &TrackerSnapshot) -> String {
    let mut line = format!(
        "[{}] kills {}/{} | vehicle kills {}/{} | streak {} | combined {}",
        timestamp,
        snapshot.kills_session,
        snapshot.kills_total,
        snapshot.vehicle_kills_session,
        snapshot.vehicle_kills_total,
        snapshot.streak_kills,
        snapshot.combined_total(),
    );
    if let Some(message) = &snapshot.streak_message {
        line.push_str(" | ");
        line.push_str(message);
    }
    if let Some(notice) = &snapshot.notice {
        line.push_str(" | ");
        line.push_str(notice);
    }
    line
}
