//! The tick loop.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::bootstrap::Startup;
use super::clock::Clock;
use super::config::TrackerSettings;
use super::error::AppError;
use crate::reading::{CounterReading, ReadingSource};
use crate::resolution::Resolution;
use crate::store::{StatsRecord, StatsStore};
use crate::tracker::{
    CounterEvent, CounterKind, KillTracker, TickOutcome, TickReadings, TrackerSnapshot,
};

/// Longest uninterrupted sleep. The shutdown flag is checked between slices.
pub const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Shows the tracker state after every tick.
pub trait Presenter {
    fn render(&mut self, snapshot: &TrackerSnapshot) -> io::Result<()>;
}

/// Drives one tracker session.
///
/// Each tick reads kills then vehicle kills, feeds both readings to the
/// [`KillTracker`], saves the totals if anything happened and renders the
/// new state. Between ticks it sleeps for the configured interval.
pub struct TrackerLoop<S, T, P, C> {
    source: S,
    store: T,
    presenter: P,
    clock: C,
    tracker: KillTracker,
    resolution: Resolution,
    interval: Duration,
    confidence_threshold: u8,
    shutdown: Arc<AtomicBool>,
}

impl<S, T, P, C> TrackerLoop<S, T, P, C>
where
    S: ReadingSource,
    T: StatsStore,
    P: Presenter,
    C: Clock,
{
    /// Create a loop starting from `startup`.
    pub fn new(
        settings: &TrackerSettings,
        startup: Startup,
        source: S,
        store: T,
        presenter: P,
        clock: C,
    ) -> Self {
        let tracker = KillTracker::with_policies(
            startup.totals,
            settings.kills_reset_policy,
            settings.vehicle_reset_policy,
            settings.streak,
        )
        .with_vehicle_kill_notice(settings.vehicle_kill_notice);

        Self {
            source,
            store,
            presenter,
            clock,
            tracker,
            resolution: startup.resolution,
            interval: settings.interval,
            confidence_threshold: settings.confidence_threshold,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use an externally owned shutdown flag.
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown = flag;
        self
    }

    /// Flag that stops [`run`](Self::run) once set.
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Tracker core state.
    pub fn tracker(&self) -> &KillTracker {
        &self.tracker
    }

    /// Stats store.
    pub fn store(&self) -> &T {
        &self.store
    }

    /// Presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run one tick.
    pub fn tick(&mut self) -> Result<TickOutcome, AppError> {
        let now = self.clock.now();
        let readings = TickReadings::new(
            self.read(CounterKind::Kills)?,
            self.read(CounterKind::VehicleKills)?,
        );

        let outcome = self.tracker.process(now, readings);

        if outcome.streak_expired {
            debug!("Streak expired");
        }
        for (counter, event) in [
            (CounterKind::Kills, outcome.kills),
            (CounterKind::VehicleKills, outcome.vehicle_kills),
        ] {
            if let Some(event) = event {
                log_event(counter, event, &self.tracker);
            }
        }

        if outcome.has_event() {
            let record = StatsRecord::new(self.tracker.totals(), Some(self.resolution));
            self.store.save(&record)?;
        }

        self.presenter
            .render(&self.tracker.snapshot())
            .map_err(AppError::Present)?;

        Ok(outcome)
    }

    /// Tick until the shutdown flag is set, then return the final state.
    ///
    /// The flag is checked before every tick and between sleep slices, so
    /// shutdown takes effect within [`SLEEP_SLICE`] of being requested
    /// unless an OCR call is in flight.
    pub fn run(&mut self) -> Result<TrackerSnapshot, AppError> {
        info!(
            resolution = %self.resolution,
            interval_ms = self.interval.as_millis() as u64,
            confidence_threshold = self.confidence_threshold,
            "Tracker started"
        );

        while !self.is_shutdown() {
            self.tick()?;
            self.pause();
        }

        let snapshot = self.tracker.snapshot();
        info!(
            ticks = snapshot.ticks,
            kills = snapshot.kills_total,
            vehicle_kills = snapshot.vehicle_kills_total,
            best_streak = snapshot.best_streak,
            "Tracker stopped"
        );
        Ok(snapshot)
    }

    fn read(&mut self, counter: CounterKind) -> Result<Option<u32>, AppError> {
        let region = self.resolution.layout().region(counter);
        let recognized = self.source.read(counter, &region)?;
        let reading = CounterReading::from_recognized(&recognized, self.confidence_threshold);

        if !reading.is_present() {
            debug!(
                %counter,
                confidence = reading.confidence,
                text = %recognized.text.trim(),
                "Reading dropped"
            );
        }
        Ok(reading.value)
    }

    fn pause(&self) {
        let mut remaining = self.interval;
        while !remaining.is_zero() && !self.is_shutdown() {
            let step = remaining.min(SLEEP_SLICE);
            self.clock.sleep(step);
            remaining -= step;
        }
    }

    fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

fn log_event(counter: CounterKind, event: CounterEvent, tracker: &KillTracker) {
    let state = tracker.deltas().counter(counter);
    match event {
        CounterEvent::Increment { delta } => info!(
            %counter,
            delta,
            session = state.state().session_count,
            total = state.total(),
            "Kill registered"
        ),
        CounterEvent::Reset { new_value, carried } => info!(
            %counter,
            new_value,
            carried,
            total = state.total(),
            "Counter reset"
        ),
    }
}
