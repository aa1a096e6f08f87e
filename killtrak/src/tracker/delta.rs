//! Counter delta tracking.
//!
//! The game only shows the current value of each counter, so kills have to
//! be inferred from how that value moves between ticks. Each counter is
//! tracked independently:
//!
//! ```text
//! (unset) --first reading--> primed            no event
//! primed  --reading > last--> Increment(delta) total += delta
//! primed  --reading < last--> Reset(value)     policy decides the total
//! primed  --reading = last--> (no change)
//! ```

use std::fmt;
use std::str::FromStr;

/// The two on-screen counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    Kills,
    VehicleKills,
}

impl CounterKind {
    /// Both counters, in the order they are read each tick.
    pub const ALL: [CounterKind; 2] = [CounterKind::Kills, CounterKind::VehicleKills];

    /// Short label used in logs and file names.
    pub fn label(&self) -> &'static str {
        match self {
            CounterKind::Kills => "kills",
            CounterKind::VehicleKills => "vehicle_kills",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a counter decrease is accounted for.
///
/// A decrease means the game restarted its own counter (a new match). The
/// kills counter has always credited the new value as fresh kills, while the
/// vehicle-kills counter treats the reset as a plain session boundary. Both
/// behaviors are kept and selectable per counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Add the new (lower) value to the total and count it toward the streak.
    CarryIntoTotal,
    /// Only restart the session count; totals and streak are untouched.
    SessionBoundary,
}

impl ResetPolicy {
    /// Config file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetPolicy::CarryIntoTotal => "carry",
            ResetPolicy::SessionBoundary => "boundary",
        }
    }
}

impl fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carry" => Ok(ResetPolicy::CarryIntoTotal),
            "boundary" => Ok(ResetPolicy::SessionBoundary),
            other => Err(format!(
                "unknown reset policy '{}' (expected 'carry' or 'boundary')",
                other
            )),
        }
    }
}

/// Event inferred from one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    /// The counter went up by `delta`.
    Increment { delta: u32 },
    /// The counter went down to `new_value`. `carried` is true when the new
    /// value was added to the total.
    Reset { new_value: u32, carried: bool },
}

impl CounterEvent {
    /// Amount this event contributes to a kill streak, if it counts at all.
    pub fn streak_amount(&self) -> Option<u32> {
        match *self {
            CounterEvent::Increment { delta } => Some(delta),
            CounterEvent::Reset {
                new_value,
                carried: true,
            } => Some(new_value),
            CounterEvent::Reset { carried: false, .. } => None,
        }
    }

    /// Whether the event may open or extend a streak.
    pub fn is_streak_eligible(&self) -> bool {
        self.streak_amount().is_some()
    }
}

/// Last-seen value and in-game session count for one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    /// `None` until the first confident reading.
    pub last_seen: Option<u32>,
    /// Count for the current in-game session.
    pub session_count: u32,
}

/// Tracks one counter and its running total.
#[derive(Debug, Clone)]
pub struct CounterTracker {
    state: CounterState,
    policy: ResetPolicy,
    total: u64,
}

impl CounterTracker {
    /// Create a tracker starting from a persisted total.
    pub fn new(policy: ResetPolicy, total: u64) -> Self {
        Self {
            state: CounterState::default(),
            policy,
            total,
        }
    }

    /// Apply one present reading.
    pub fn observe(&mut self, reading: u32) -> Option<CounterEvent> {
        let Some(last) = self.state.last_seen else {
            self.state = CounterState {
                last_seen: Some(reading),
                session_count: reading,
            };
            return None;
        };

        let event = if reading < last {
            self.state.session_count = reading;
            let carried = self.policy == ResetPolicy::CarryIntoTotal;
            if carried {
                self.total += u64::from(reading);
            }
            Some(CounterEvent::Reset {
                new_value: reading,
                carried,
            })
        } else if reading > last {
            let delta = reading - last;
            self.state.session_count = self.state.session_count.saturating_add(delta);
            self.total += u64::from(delta);
            Some(CounterEvent::Increment { delta })
        } else {
            None
        };

        self.state.last_seen = Some(reading);
        event
    }

    /// Current state.
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Running total across sessions and restarts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Reset policy in effect.
    pub fn policy(&self) -> ResetPolicy {
        self.policy
    }
}

/// Persistent totals for both counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub kills: u64,
    pub vehicle_kills: u64,
}

impl Totals {
    /// Create totals.
    pub fn new(kills: u64, vehicle_kills: u64) -> Self {
        Self {
            kills,
            vehicle_kills,
        }
    }

    /// Kills plus vehicle kills.
    pub fn combined(&self) -> u64 {
        self.kills + self.vehicle_kills
    }
}

/// Delta tracking for both counters.
#[derive(Debug, Clone)]
pub struct DeltaTracker {
    kills: CounterTracker,
    vehicle_kills: CounterTracker,
}

impl DeltaTracker {
    /// Create a tracker from persisted totals and the per-counter reset policies.
    pub fn new(totals: Totals, kills_policy: ResetPolicy, vehicle_policy: ResetPolicy) -> Self {
        Self {
            kills: CounterTracker::new(kills_policy, totals.kills),
            vehicle_kills: CounterTracker::new(vehicle_policy, totals.vehicle_kills),
        }
    }

    /// Create a tracker with the default policies: kills carry resets into the
    /// total, vehicle kills treat them as a session boundary.
    pub fn with_default_policies(totals: Totals) -> Self {
        Self::new(
            totals,
            ResetPolicy::CarryIntoTotal,
            ResetPolicy::SessionBoundary,
        )
    }

    /// Apply a present reading to one counter.
    pub fn observe(&mut self, counter: CounterKind, reading: u32) -> Option<CounterEvent> {
        self.counter_mut(counter).observe(reading)
    }

    /// Tracker for one counter.
    pub fn counter(&self, counter: CounterKind) -> &CounterTracker {
        match counter {
            CounterKind::Kills => &self.kills,
            CounterKind::VehicleKills => &self.vehicle_kills,
        }
    }

    fn counter_mut(&mut self, counter: CounterKind) -> &mut CounterTracker {
        match counter {
            CounterKind::Kills => &mut self.kills,
            CounterKind::VehicleKills => &mut self.vehicle_kills,
        }
    }

    /// Current totals.
    pub fn totals(&self) -> Totals {
        Totals {
            kills: self.kills.total(),
            vehicle_kills: self.vehicle_kills.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> DeltaTracker {
        DeltaTracker::with_default_policies(Totals::default())
    }

    #[test]
    fn test_first_reading_primes_without_event() {
        let mut t = tracker();
        assert_eq!(t.observe(CounterKind::Kills, 4), None);

        let state = t.counter(CounterKind::Kills).state();
        assert_eq!(state.last_seen, Some(4));
        assert_eq!(state.session_count, 4);
        assert_eq!(t.totals().kills, 0);
    }

    #[test]
    fn test_increment_adds_delta() {
        let mut t = tracker();
        t.observe(CounterKind::Kills, 2);

        assert_eq!(
            t.observe(CounterKind::Kills, 5),
            Some(CounterEvent::Increment { delta: 3 })
        );
        assert_eq!(t.counter(CounterKind::Kills).state().session_count, 5);
        assert_eq!(t.totals().kills, 3);
    }

    #[test]
    fn test_unchanged_reading_is_quiet() {
        let mut t = tracker();
        t.observe(CounterKind::Kills, 2);
        assert_eq!(t.observe(CounterKind::Kills, 2), None);
        assert_eq!(t.totals().kills, 0);
    }

    #[test]
    fn test_kills_reset_carries_new_value_into_total() {
        let mut t = DeltaTracker::with_default_policies(Totals::new(100, 0));
        t.observe(CounterKind::Kills, 12);

        let event = t.observe(CounterKind::Kills, 3);
        assert_eq!(
            event,
            Some(CounterEvent::Reset {
                new_value: 3,
                carried: true
            })
        );
        assert_eq!(event.and_then(|e| e.streak_amount()), Some(3));
        assert_eq!(t.totals().kills, 103);

        let state = t.counter(CounterKind::Kills).state();
        assert_eq!(state.session_count, 3);
        assert_eq!(state.last_seen, Some(3));
    }

    #[test]
    fn test_vehicle_reset_is_session_boundary_only() {
        let mut t = DeltaTracker::with_default_policies(Totals::new(0, 40));
        t.observe(CounterKind::VehicleKills, 5);

        let event = t.observe(CounterKind::VehicleKills, 1);
        assert_eq!(
            event,
            Some(CounterEvent::Reset {
                new_value: 1,
                carried: false
            })
        );
        assert!(!event.is_some_and(|e| e.is_streak_eligible()));
        assert_eq!(t.totals().vehicle_kills, 40);
        assert_eq!(t.counter(CounterKind::VehicleKills).state().session_count, 1);
    }

    #[test]
    fn test_vehicle_reset_can_be_switched_to_carry() {
        let mut t = DeltaTracker::new(
            Totals::default(),
            ResetPolicy::CarryIntoTotal,
            ResetPolicy::CarryIntoTotal,
        );
        t.observe(CounterKind::VehicleKills, 5);
        t.observe(CounterKind::VehicleKills, 1);
        assert_eq!(t.totals().vehicle_kills, 1);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut t = tracker();
        t.observe(CounterKind::Kills, 1);
        t.observe(CounterKind::VehicleKills, 7);
        t.observe(CounterKind::Kills, 2);

        assert_eq!(t.counter(CounterKind::VehicleKills).state().last_seen, Some(7));
        assert_eq!(t.totals(), Totals::new(1, 0));
    }

    #[test]
    fn test_session_accumulates_after_reset() {
        let mut t = tracker();
        for reading in [3, 5, 0, 2] {
            t.observe(CounterKind::Kills, reading);
        }
        assert_eq!(t.counter(CounterKind::Kills).state().session_count, 2);
        // 3 primes, +2, reset to 0 carries 0, +2
        assert_eq!(t.totals().kills, 4);
    }

    #[test]
    fn test_reset_policy_parse() {
        assert_eq!("carry".parse(), Ok(ResetPolicy::CarryIntoTotal));
        assert_eq!(" Boundary ".parse(), Ok(ResetPolicy::SessionBoundary));
        assert!("ignore".parse::<ResetPolicy>().is_err());
        assert_eq!(ResetPolicy::SessionBoundary.to_string(), "boundary");
    }

    #[test]
    fn test_totals_combined() {
        assert_eq!(Totals::new(10, 4).combined(), 14);
    }

    proptest! {
        #[test]
        fn prop_monotone_total_is_sum_of_deltas(
            initial in 0u64..10_000,
            start in 0u32..100,
            steps in proptest::collection::vec(0u32..5, 0..50),
        ) {
            let mut t = DeltaTracker::with_default_policies(Totals::new(initial, 0));
            t.observe(CounterKind::Kills, start);

            let mut reading = start;
            for step in &steps {
                reading += step;
                t.observe(CounterKind::Kills, reading);
            }

            let sum: u64 = steps.iter().map(|s| u64::from(*s)).sum();
            prop_assert_eq!(t.totals().kills, initial + sum);
            prop_assert_eq!(t.counter(CounterKind::Kills).state().session_count, reading);
        }

        #[test]
        fn prop_totals_never_decrease(readings in proptest::collection::vec(0u32..50, 1..60)) {
            let mut t = tracker();
            let mut previous = t.totals();
            for reading in readings {
                t.observe(CounterKind::Kills, reading);
                t.observe(CounterKind::VehicleKills, reading);
                let now = t.totals();
                prop_assert!(now.kills >= previous.kills);
                prop_assert!(now.vehicle_kills >= previous.vehicle_kills);
                previous = now;
            }
        }
    }
}
