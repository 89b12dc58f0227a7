// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame clock for the engine loop.
//!
//! The clock is an ordinary value owned by the loop rather than global state:
//! the loop calls [`FrameClock::update`] exactly once per frame and hands
//! `&FrameClock` (or the sampled delta) to anything that needs it. `update`
//! takes `&mut self`, so the borrow checker rules out a second writer and
//! readers always observe the delta of the most recent completed update.
//!
//! Time comes from a [`TimeSource`]; tests drive a [`ManualTimeSource`] to get
//! fully deterministic deltas.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::config::ClockConfig;

/// Monotonic time reading, measured from an arbitrary fixed origin.
pub trait TimeSource {
    /// Current reading. Must never decrease between calls.
    fn now(&self) -> Duration;
}

/// Wall-clock monotonic source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTimeSource {
    origin: Instant,
}

impl MonotonicTimeSource {
    /// Creates a source whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTimeSource {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven source for tests and fixed-step replays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualTimeSource {
    now: Duration,
}

impl ManualTimeSource {
    /// Creates a source reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the reading forward by `by`.
    pub fn advance(&mut self, by: Duration) {
        self.now = self.now.saturating_add(by);
    }

    /// Sets the reading to `at`. Callers must not move it backwards.
    pub fn set(&mut self, at: Duration) {
        debug_assert!(at >= self.now, "manual time source moved backwards");
        self.now = at;
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Anything that can report the current frame delta in seconds.
///
/// Implemented for [`FrameClock`] and for plain `f32` so fixed-step callers
/// can pass a constant.
pub trait DeltaTime {
    /// Seconds elapsed during the last frame.
    fn delta_time(&self) -> f32;
}

impl DeltaTime for f32 {
    fn delta_time(&self) -> f32 {
        *self
    }
}

/// Per-frame clock: a start epoch plus the last sampled time.
#[derive(Debug, Clone)]
pub struct FrameClock<S = MonotonicTimeSource> {
    source: S,
    config: ClockConfig,
    epoch: Duration,
    last_sample: Duration,
    delta_time: f32,
    unscaled_delta_time: f32,
    frame_count: u64,
}

impl FrameClock<MonotonicTimeSource> {
    /// Creates a wall-clock frame clock with the default config.
    pub fn new() -> Self {
        Self::with_source(MonotonicTimeSource::new(), ClockConfig::default())
    }
}

impl Default for FrameClock<MonotonicTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeSource> FrameClock<S> {
    /// Creates a clock reading from `source`; the epoch is the source's
    /// current reading.
    ///
    /// `config` is not re-validated in release builds: a hand-built config
    /// must satisfy [`ClockConfig::validate`] (a negative `time_scale` would
    /// run the clock backwards). Debug builds assert it.
    pub fn with_source(source: S, config: ClockConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid clock config: {config:?}"
        );
        let epoch = source.now();
        Self {
            source,
            config,
            epoch,
            last_sample: epoch,
            delta_time: 0.0,
            unscaled_delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Resets the epoch to now and clears the delta and frame counter.
    pub fn start(&mut self) {
        self.epoch = self.source.now();
        self.last_sample = self.epoch;
        self.delta_time = 0.0;
        self.unscaled_delta_time = 0.0;
        self.frame_count = 0;
        debug!(epoch = ?self.epoch, config = ?self.config, "frame clock started");
    }

    /// Samples the source and records the time since the previous sample.
    ///
    /// Call once per frame. Returns the new (scaled) delta in seconds.
    pub fn update(&mut self) -> f32 {
        let now = self.source.now();
        let raw = now.saturating_sub(self.last_sample).as_secs_f32();
        self.last_sample = now;

        let mut unscaled = raw;
        if let Some(cap) = self.config.max_delta_seconds {
            if raw > cap {
                warn!(raw, cap, "frame delta clamped");
                unscaled = cap;
            }
        }
        self.unscaled_delta_time = unscaled;
        self.delta_time = unscaled * self.config.time_scale;
        self.frame_count += 1;
        trace!(frame = self.frame_count, delta = self.delta_time, "frame clock update");
        self.delta_time
    }

    /// Scaled seconds between the two most recent updates (0 before the first).
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Delta before `time_scale` is applied (after the optional cap).
    pub fn unscaled_delta_time(&self) -> f32 {
        self.unscaled_delta_time
    }

    /// Number of updates since construction or the last [`Self::start`].
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds since the epoch, read live from the source.
    pub fn total_seconds(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Whole milliseconds since the epoch, read live from the source.
    pub fn total_milliseconds(&self) -> u128 {
        self.elapsed().as_millis()
    }

    /// Nanoseconds since the epoch, read live from the source.
    pub fn total_nanoseconds(&self) -> u128 {
        self.elapsed().as_nanos()
    }

    /// Active configuration.
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// The underlying time source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the time source (e.g. to advance a manual source).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn elapsed(&self) -> Duration {
        self.source.now().saturating_sub(self.epoch)
    }
}

impl<S: TimeSource> DeltaTime for FrameClock<S> {
    fn delta_time(&self) -> f32 {
        self.delta_time
    }
}
