//! End-of-session summary.

use killtrak::tracker::{Totals, TrackerSnapshot};

/// Lines printed after the tracker stops.
///
/// `start` holds the totals loaded at startup, so the gains shown are for
/// this run only, across any number of in-game matches.
pub fn session_summary(start: Totals, end: &TrackerSnapshot) -> Vec<String> {
    vec![
        "Session Summary".to_string(),
        "───────────────".to_string(),
        format!(
            "  Kills:         +{} (total {})",
            end.kills_total.saturating_sub(start.kills),
            end.kills_total
        ),
        format!(
            "  Vehicle kills: +{} (total {})",
            end.vehicle_kills_total.saturating_sub(start.vehicle_kills),
            end.vehicle_kills_total
        ),
        format!("  Best streak:   {}", end.best_streak),
        format!("  Ticks:         {}", end.ticks),
    ]
}
