//! Kill streak detection.
//!
//! A streak is a run of kills where each one lands within the streak window
//! (30 seconds by default) of the previous one. The engine is a two-state
//! machine:
//!
//! ```text
//! Idle   --kill event-->                 Active (expire = now + window)
//! Active --kill event, now < expire-->   Active (count += n, expire = now + window)
//! Active --tick, now >= expire-->        Idle   (everything cleared)
//! ```
//!
//! Expiry is checked at the start of every tick, before that tick's
//! readings are applied, so a kill landing exactly on the deadline opens a
//! new streak instead of extending the dead one.

use std::time::{Duration, Instant};

/// Default streak window.
pub const DEFAULT_STREAK_WINDOW: Duration = Duration::from_secs(30);

/// Configuration for streak detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakConfig {
    /// Time without a kill after which the streak ends.
    pub window: Duration,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_STREAK_WINDOW,
        }
    }
}

impl StreakConfig {
    /// Create a configuration with the given window.
    pub fn new(window: Duration) -> Self {
        Self { window }
    }
}

/// Message for a cumulative streak count.
pub fn streak_message(count: u32) -> String {
    match count {
        0 | 1 => "single kill".to_string(),
        2 => "double kill".to_string(),
        3 => "triple kill".to_string(),
        4 => "quadra kill".to_string(),
        5 => "penta kill".to_string(),
        n => format!("{} kill streak", n),
    }
}

/// State machine for kill streaks.
#[derive(Debug)]
pub struct StreakEngine {
    config: StreakConfig,

    /// When the active streak started.
    start_time: Option<Instant>,

    /// When the active streak ends unless extended.
    expire_time: Option<Instant>,

    /// Kills credited to the active streak.
    count: u32,

    /// Kills shown on the dashboard for the active streak.
    session_streak_kills: u32,

    /// Current tier message, empty when idle.
    message: String,

    /// Highest count reached by any streak this run.
    best: u32,
}

impl StreakEngine {
    /// Create an idle engine.
    pub fn new(config: StreakConfig) -> Self {
        Self {
            config,
            start_time: None,
            expire_time: None,
            count: 0,
            session_streak_kills: 0,
            message: String::new(),
            best: 0,
        }
    }

    /// Create an engine with the default 30 second window.
    pub fn with_defaults() -> Self {
        Self::new(StreakConfig::default())
    }

    /// End the active streak if its deadline has passed.
    ///
    /// Call at the start of every tick. Returns `true` if a streak ended.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.expire_time {
            Some(expire) if now >= expire => {
                tracing::debug!(count = self.count, "Streak expired");
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Record a tick that produced at least one kill-attributable event.
    ///
    /// `increment` is the number of kills credited this tick. An event with
    /// no kills (a reset to zero) still opens a streak window.
    pub fn record(&mut self, now: Instant, increment: u32) {
        let stale = self.expire_time.is_some_and(|expire| now > expire);
        if self.start_time.is_none() || stale {
            self.clear();
            self.start_time = Some(now);
            self.expire_time = Some(now + self.config.window);
            tracing::debug!("Streak started");
        }

        if increment > 0 {
            self.count = self.count.saturating_add(increment);
            self.session_streak_kills = self.session_streak_kills.saturating_add(increment);
            self.message = streak_message(self.count);
            self.expire_time = Some(now + self.config.window);
            self.best = self.best.max(self.count);
        }
    }

    fn clear(&mut self) {
        self.start_time = None;
        self.expire_time = None;
        self.count = 0;
        self.session_streak_kills = 0;
        self.message.clear();
    }

    /// Whether a streak is in progress.
    pub fn is_active(&self) -> bool {
        self.start_time.is_some()
    }

    /// Kills in the active streak.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Kills shown on the dashboard for the active streak.
    pub fn session_streak_kills(&self) -> u32 {
        self.session_streak_kills
    }

    /// Tier message of the active streak, if any.
    pub fn message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    /// When the active streak started.
    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    /// When the active streak ends unless extended.
    pub fn expire_time(&self) -> Option<Instant> {
        self.expire_time
    }

    /// Highest streak count seen since the engine was created.
    pub fn best_streak(&self) -> u32 {
        self.best
    }

    /// Get the current configuration.
    pub fn config(&self) -> &StreakConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_tier_messages() {
        let expected = [
            (1, "single kill"),
            (2, "double kill"),
            (3, "triple kill"),
            (4, "quadra kill"),
            (5, "penta kill"),
            (6, "6 kill streak"),
            (7, "7 kill streak"),
        ];
        for (count, message) in expected {
            assert_eq!(streak_message(count), message);
        }
    }

    #[test]
    fn test_first_kill_opens_streak() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();

        engine.record(start, 1);

        assert!(engine.is_active());
        assert_eq!(engine.count(), 1);
        assert_eq!(engine.message(), Some("single kill"));
        assert_eq!(engine.start_time(), Some(start));
        assert_eq!(engine.expire_time(), Some(start + secs(30)));
    }

    #[test]
    fn test_kills_inside_window_accumulate() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();

        engine.record(start, 1);
        engine.record(start + secs(10), 1);
        engine.record(start + secs(35), 2);

        assert_eq!(engine.count(), 4);
        assert_eq!(engine.session_streak_kills(), 4);
        assert_eq!(engine.message(), Some("quadra kill"));
        assert_eq!(engine.start_time(), Some(start));
        assert_eq!(engine.expire_time(), Some(start + secs(65)));
    }

    #[test]
    fn test_expiry_clears_everything() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();
        engine.record(start, 3);

        assert!(!engine.expire(start + secs(29)));
        assert!(engine.expire(start + secs(30)));

        assert!(!engine.is_active());
        assert_eq!(engine.count(), 0);
        assert_eq!(engine.session_streak_kills(), 0);
        assert_eq!(engine.message(), None);
        assert_eq!(engine.expire_time(), None);
    }

    #[test]
    fn test_kill_after_expiry_starts_fresh() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();
        engine.record(start, 2);

        let later = start + secs(31);
        engine.expire(later);
        engine.record(later, 1);

        assert_eq!(engine.count(), 1);
        assert_eq!(engine.message(), Some("single kill"));
        assert_eq!(engine.start_time(), Some(later));
    }

    #[test]
    fn test_stale_streak_restarts_without_expire_call() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();
        engine.record(start, 2);

        engine.record(start + secs(45), 1);

        assert_eq!(engine.count(), 1);
        assert_eq!(engine.start_time(), Some(start + secs(45)));
    }

    #[test]
    fn test_zero_increment_opens_window_without_message() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();

        engine.record(start, 0);

        assert!(engine.is_active());
        assert_eq!(engine.count(), 0);
        assert_eq!(engine.message(), None);
        assert_eq!(engine.expire_time(), Some(start + secs(30)));
    }

    #[test]
    fn test_zero_increment_does_not_extend() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();
        engine.record(start, 1);
        engine.record(start + secs(20), 0);

        assert_eq!(engine.expire_time(), Some(start + secs(30)));
    }

    #[test]
    fn test_best_streak_survives_expiry() {
        let mut engine = StreakEngine::with_defaults();
        let start = Instant::now();
        engine.record(start, 5);
        engine.expire(start + secs(60));
        engine.record(start + secs(61), 2);

        assert_eq!(engine.best_streak(), 5);
        assert_eq!(engine.count(), 2);
    }

    #[test]
    fn test_custom_window() {
        let mut engine = StreakEngine::new(StreakConfig::new(secs(5)));
        let start = Instant::now();
        engine.record(start, 1);
        assert!(engine.expire(start + secs(5)));
    }

    #[test]
    fn test_default_config() {
        let config = StreakConfig::default();
        assert_eq!(config.window, secs(30));
    }
}
