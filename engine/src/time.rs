//! Frame Timing
//!
//! The simulation has no scheduler of its own: each frame the host reads a
//! monotonic clock and the [`FrameTimer`] turns consecutive readings into a
//! delta time in seconds. A large gap produces a large `dt`; nothing is
//! sub-stepped or capped here.

use std::time::{Duration, Instant};

/// Source of monotonically increasing timestamps.
pub trait Clock {
    /// Time elapsed since the clock's own epoch.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`], with its epoch at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when told to. Used by tests and replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Move the clock forward by a number of milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Converts consecutive clock readings into per-frame delta times.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last: Duration,
    frames: u64,
}

impl FrameTimer {
    /// Start timing from the given reading; the first `tick` measures from here.
    pub fn new(start: Duration) -> Self {
        Self {
            last: start,
            frames: 0,
        }
    }

    /// Start timing from the clock's current reading.
    pub fn start(clock: &dyn Clock) -> Self {
        Self::new(clock.now())
    }

    /// Record a new reading and return the seconds since the previous one.
    ///
    /// A reading earlier than the previous one yields `0.0`.
    pub fn tick(&mut self, now: Duration) -> f32 {
        let dt = now.saturating_sub(self.last);
        self.last = now;
        self.frames += 1;
        dt.as_secs_f32()
    }

    /// Read `clock` and tick.
    pub fn tick_clock(&mut self, clock: &dyn Clock) -> f32 {
        self.tick(clock.now())
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
