//! Per-tick combination of delta tracking and streak detection.

use std::time::Instant;

use super::delta::{CounterEvent, CounterKind, DeltaTracker, ResetPolicy, Totals};
use super::streak::{StreakConfig, StreakEngine};

/// Shown under the streak message on ticks that credit a vehicle kill.
pub const VEHICLE_KILL_NOTICE: &str = "You got a vehicle kill! 🩸🚗";

/// Extracted readings for one tick. `None` means the reading was dropped
/// (low confidence or no digits) and the counter is left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReadings {
    pub kills: Option<u32>,
    pub vehicle_kills: Option<u32>,
}

impl TickReadings {
    /// Create readings for one tick.
    pub fn new(kills: Option<u32>, vehicle_kills: Option<u32>) -> Self {
        Self {
            kills,
            vehicle_kills,
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub kills: Option<CounterEvent>,
    pub vehicle_kills: Option<CounterEvent>,
    /// A streak ended at the start of this tick.
    pub streak_expired: bool,
    /// The vehicle-kills counter went up this tick.
    pub vehicle_kill: bool,
}

impl TickOutcome {
    /// Whether either counter produced an event. Such ticks are persisted.
    pub fn has_event(&self) -> bool {
        self.kills.is_some() || self.vehicle_kills.is_some()
    }

    /// Whether either event counts toward a streak.
    pub fn is_streak_eligible(&self) -> bool {
        self.events().any(|e| e.is_streak_eligible())
    }

    /// Kills credited to the streak this tick.
    pub fn streak_increment(&self) -> u32 {
        self.events()
            .filter_map(|e| e.streak_amount())
            .fold(0u32, |acc, n| acc.saturating_add(n))
    }

    fn events(&self) -> impl Iterator<Item = CounterEvent> {
        self.kills.into_iter().chain(self.vehicle_kills)
    }
}

/// Point-in-time view of the tracker, for rendering and summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerSnapshot {
    pub kills_session: u32,
    pub kills_total: u64,
    pub vehicle_kills_session: u32,
    pub vehicle_kills_total: u64,
    pub streak_kills: u32,
    pub streak_message: Option<String>,
    /// Extra line under the streak message, such as the vehicle-kill notice.
    pub notice: Option<String>,
    pub best_streak: u32,
    pub ticks: u64,
}

impl TrackerSnapshot {
    /// Kills plus vehicle kills over all time.
    pub fn combined_total(&self) -> u64 {
        self.kills_total + self.vehicle_kills_total
    }
}

/// The kill tracking core: both counters plus the streak engine.
///
/// Owns no I/O. Feed it one [`TickReadings`] per tick together with the
/// tick's timestamp.
///
/// # Example
///
/// ```
/// use std::time::Instant;
/// use killtrak::tracker::{KillTracker, TickReadings, Totals};
///
/// let mut tracker = KillTracker::with_defaults(Totals::default());
/// let now = Instant::now();
///
/// tracker.process(now, TickReadings::new(Some(3), Some(0))); // primes
/// let outcome = tracker.process(now, TickReadings::new(Some(4), None));
///
/// assert!(outcome.has_event());
/// assert_eq!(tracker.totals().kills, 1);
/// assert_eq!(tracker.snapshot().streak_message.as_deref(), Some("single kill"));
/// ```
#[derive(Debug)]
pub struct KillTracker {
    deltas: DeltaTracker,
    streak: StreakEngine,
    ticks: u64,
    vehicle_kill_notice: bool,
    notice: Option<&'static str>,
}

impl KillTracker {
    /// Create a tracker from its parts.
    pub fn new(deltas: DeltaTracker, streak: StreakEngine) -> Self {
        Self {
            deltas,
            streak,
            ticks: 0,
            vehicle_kill_notice: true,
            notice: None,
        }
    }

    /// Enable or disable the vehicle-kill notice.
    pub fn with_vehicle_kill_notice(mut self, enabled: bool) -> Self {
        self.vehicle_kill_notice = enabled;
        self
    }

    /// Create a tracker with the given policies and streak configuration.
    pub fn with_policies(
        totals: Totals,
        kills_policy: ResetPolicy,
        vehicle_policy: ResetPolicy,
        streak: StreakConfig,
    ) -> Self {
        Self::new(
            DeltaTracker::new(totals, kills_policy, vehicle_policy),
            StreakEngine::new(streak),
        )
    }

    /// Create a tracker with default policies and a 30 second streak window.
    pub fn with_defaults(totals: Totals) -> Self {
        Self::new(
            DeltaTracker::with_default_policies(totals),
            StreakEngine::with_defaults(),
        )
    }

    /// Process one tick.
    ///
    /// Order matters: the streak deadline is checked first, then kills, then
    /// vehicle kills, then the streak is credited.
    pub fn process(&mut self, now: Instant, readings: TickReadings) -> TickOutcome {
        self.ticks += 1;
        let streak_expired = self.streak.expire(now);
        if streak_expired {
            self.notice = None;
        }

        let kills = readings
            .kills
            .and_then(|value| self.deltas.observe(CounterKind::Kills, value));
        let vehicle_kills = readings
            .vehicle_kills
            .and_then(|value| self.deltas.observe(CounterKind::VehicleKills, value));

        let outcome = TickOutcome {
            kills,
            vehicle_kills,
            streak_expired,
            vehicle_kill: matches!(vehicle_kills, Some(CounterEvent::Increment { .. })),
        };

        if outcome.is_streak_eligible() {
            let increment = outcome.streak_increment();
            self.streak.record(now, increment);
            // The notice belongs to the message it was shown with.
            if increment > 0 {
                self.notice = (self.vehicle_kill_notice && outcome.vehicle_kill)
                    .then_some(VEHICLE_KILL_NOTICE);
            }
        }

        outcome
    }

    /// Current totals.
    pub fn totals(&self) -> Totals {
        self.deltas.totals()
    }

    /// Delta tracking state.
    pub fn deltas(&self) -> &DeltaTracker {
        &self.deltas
    }

    /// Streak state.
    pub fn streak(&self) -> &StreakEngine {
        &self.streak
    }

    /// Take a snapshot for display.
    pub fn snapshot(&self) -> TrackerSnapshot {
        let totals = self.totals();
        TrackerSnapshot {
            kills_session: self.deltas.counter(CounterKind::Kills).state().session_count,
            kills_total: totals.kills,
            vehicle_kills_session: self
                .deltas
                .counter(CounterKind::VehicleKills)
                .state()
                .session_count,
            vehicle_kills_total: totals.vehicle_kills,
            streak_kills: self.streak.session_streak_kills(),
            streak_message: self.streak.message().map(str::to_string),
            notice: self.notice.map(str::to_string),
            best_streak: self.streak.best_streak(),
            ticks: self.ticks,
        }
    }
}
