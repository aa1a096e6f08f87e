//! Boxed status dashboard, redrawn every tick.

use std::io;

use console::Term;
use killtrak::app::Presenter;
use killtrak::tracker::TrackerSnapshot;

/// Inner width of the box, in characters.
const INNER_WIDTH: usize = 58;

/// Clears the terminal and draws the stats box on every tick.
pub struct DashboardPresenter {
    term: Term,
}

impl DashboardPresenter {
    /// Draw to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for DashboardPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for DashboardPresenter {
    fn render(&mut self, snapshot: &TrackerSnapshot) -> io::Result<()> {
        self.term.clear_screen()?;
        for line in render_box(snapshot) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }
}

/// Lay out the stats box.
///
/// ```text
/// ╔════════════════════════ KillTrak ════════════════════════╗
/// ║            Current             │          Total          ║
/// ╠══════════════════════════════════════════════════════════╣
/// ║ Kills                      4   │   112                   ║
/// ║ Vehicle Kills              0   │   9                     ║
/// ║ Killstreak                 2   │   121                   ║
/// ╚══════════════════════════════════════════════════════════╝
/// 💬 double kill
/// 💬 You got a vehicle kill! 🩸🚗
/// ```
pub fn render_box(snapshot: &TrackerSnapshot) -> Vec<String> {
    let rule = "═".repeat(INNER_WIDTH);
    let mut lines = vec![
        format!("╔{:═^width$}╗", " KillTrak ", width = INNER_WIDTH),
        format!("║{:^32}│{:^25}║", "Current", "Total"),
        format!("╠{}╣", rule),
        row("Kills", snapshot.kills_session, snapshot.kills_total),
        row(
            "Vehicle Kills",
            snapshot.vehicle_kills_session,
            snapshot.vehicle_kills_total,
        ),
        row(
            "Killstreak",
            snapshot.streak_kills,
            snapshot.combined_total(),
        ),
        format!("╚{}╝", rule),
    ];
    if let Some(message) = &snapshot.streak_message {
        lines.push(format!("💬 {}", message));
    }
    if let Some(notice) = &snapshot.notice {
        lines.push(format!("💬 {}", notice));
    }
    lines
}

fn row(label: &str, current: u32, total: u64) -> String {
    format!("║ {:<15} {:>12}   │   {:<21} ║", label, current, total)
}
