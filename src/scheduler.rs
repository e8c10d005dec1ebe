use std::time::{Duration, Instant};

use crate::settings::Settings;

/// Fixed-interval trigger polled by the host loop.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last_fired: Instant,
}

impl Ticker {
    /// Starts a ticker whose first firing is one interval after `now`.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_fired: now,
        }
    }

    /// Returns true once a full interval has passed since the last firing.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_fired) >= self.interval
    }

    /// Records a firing at `now`.
    pub fn fire(&mut self, now: Instant) {
        self.last_fired = now;
    }

    /// Returns how long until the ticker is due, zero if it already is.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fired))
    }

    /// Returns the firing interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Which triggers fired during one poll.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DueTicks {
    pub snake: bool,
    pub brick: bool,
}

/// The snake and brick tickers, driven from a single thread.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    snake: Ticker,
    brick: Ticker,
    paused: bool,
}

impl Scheduler {
    /// Builds both tickers from the configured intervals.
    #[must_use]
    pub fn new(settings: &Settings, now: Instant) -> Self {
        Self {
            snake: Ticker::new(settings.snake_tick_interval(), now),
            brick: Ticker::new(settings.brick_tick_interval(), now),
            paused: false,
        }
    }

    /// Fires every ticker that is due. Nothing fires while paused.
    pub fn poll(&mut self, now: Instant) -> DueTicks {
        if self.paused {
            return DueTicks::default();
        }

        let mut due = DueTicks::default();
        if self.snake.is_due(now) {
            self.snake.fire(now);
            due.snake = true;
        }
        if self.brick.is_due(now) {
            self.brick.fire(now);
            due.brick = true;
        }
        due
    }

    /// How long the host may block waiting for input before a ticker is due.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Duration {
        if self.paused {
            return self.snake.interval();
        }

        self.snake
            .time_until_due(now)
            .min(self.brick.time_until_due(now))
    }

    /// Toggles pause. Resuming restarts both intervals from `now` so no burst
    /// of ticks fires.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.paused = !self.paused;
        if !self.paused {
            self.snake.fire(now);
            self.brick.fire(now);
        }
    }

    /// Returns true while ticks are suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
