//! Wall-clock delta tracking for host loops.
//!
//! This module provides:
//! - [`Time`] - measures elapsed time between ticks and turns it into a world delta
//! - [`FixedTime`] - accumulates frame time into fixed-size steps
//!
//! # Examples
//!
//! ```
//! use rui::time::{FixedTime, Time};
//! use rui::World;
//!
//! let mut world = World::new();
//! let mut time = Time::new();
//! world.advance(&mut time).unwrap();
//!
//! let mut fixed = FixedTime::new(60);
//! world.advance_fixed(&mut fixed, std::time::Duration::from_millis(40)).unwrap();
//! assert_eq!(world.tick(), 3);
//! ```

use std::time::{Duration, Instant};

/// Tracks elapsed time between ticks
#[derive(Clone, Debug)]
pub struct Time {
    /// Time since last update
    delta: Duration,
    /// Total elapsed time since start
    elapsed: Duration,
    /// Update counter
    update_count: u64,
    /// Time scale multiplier (1.0 = normal speed)
    time_scale: f64,
    startup_time: Instant,
    last_update: Instant,
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            update_count: 0,
            time_scale: 1.0,
            startup_time: now,
            last_update: now,
        }
    }

    /// Measure the time since the previous update
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_update);
        self.elapsed = now.duration_since(self.startup_time);
        self.last_update = now;
        self.update_count += 1;
    }

    /// Advance by an explicit delta instead of reading the clock
    pub fn update_with(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.last_update += delta;
        self.update_count += 1;
    }

    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Scaled delta in seconds, the value handed to the world
    pub fn delta_seconds(&self) -> f64 {
        self.delta.as_secs_f64() * self.time_scale
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Set time scale (1.0 = normal, 0.5 = half speed, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        self.time_scale = 0.0;
    }

    pub fn resume(&mut self) {
        self.time_scale = 1.0;
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed timestep accumulator
#[derive(Clone, Debug)]
pub struct FixedTime {
    timestep: Duration,
    /// Frame time not yet consumed by a step
    accumulator: Duration,
}

impl FixedTime {
    /// Create with given frequency (Hz)
    pub fn new(hz: u32) -> Self {
        Self::from_duration(Duration::from_secs_f64(1.0 / f64::from(hz.max(1))))
    }

    pub fn from_duration(timestep: Duration) -> Self {
        Self {
            timestep,
            accumulator: Duration::ZERO,
        }
    }

    /// Add frame time and return the number of fixed steps to run
    pub fn tick(&mut self, delta: Duration) -> usize {
        self.accumulator += delta;
        if self.timestep.is_zero() {
            return 0;
        }

        let mut steps = 0;
        while self.accumulator >= self.timestep {
            self.accumulator -= self.timestep;
            steps += 1;
        }
        steps
    }

    pub fn timestep(&self) -> Duration {
        self.timestep
    }

    pub fn timestep_seconds(&self) -> f64 {
        self.timestep.as_secs_f64()
    }

    /// Leftover as a fraction of the timestep (0.0 to 1.0)
    pub fn overstep_fraction(&self) -> f64 {
        if self.timestep.is_zero() {
            0.0
        } else {
            self.accumulator.as_secs_f64() / self.timestep.as_secs_f64()
        }
    }
}

impl Default for FixedTime {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_creation() {
        let time = Time::new();
        assert_eq!(time.update_count(), 0);
        assert_eq!(time.time_scale(), 1.0);
    }

    #[test]
    fn test_update_with_explicit_delta() {
        let mut time = Time::new();
        time.update_with(Duration::from_millis(250));
        time.update_with(Duration::from_millis(250));
        assert_eq!(time.update_count(), 2);
        assert_eq!(time.elapsed(), Duration::from_millis(500));
        assert!((time.delta_seconds() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_time_pause() {
        let mut time = Time::new();
        time.update_with(Duration::from_millis(10));
        time.pause();
        assert!(time.is_paused());
        assert_eq!(time.delta_seconds(), 0.0);
        time.resume();
        assert!(!time.is_paused());
    }

    #[test]
    fn test_fixed_time_60hz() {
        let mut fixed = FixedTime::new(60);
        assert_eq!(fixed.tick(Duration::from_millis(16)), 0);
        assert_eq!(fixed.tick(Duration::from_millis(17)), 1);
    }

    #[test]
    fn test_fixed_time_slow_frame() {
        let mut fixed = FixedTime::from_duration(Duration::from_millis(10));
        assert_eq!(fixed.tick(Duration::from_millis(35)), 3);
        assert!((fixed.overstep_fraction() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_timestep_never_steps() {
        let mut fixed = FixedTime::from_duration(Duration::ZERO);
        assert_eq!(fixed.tick(Duration::from_secs(1)), 0);
        assert_eq!(fixed.overstep_fraction(), 0.0);
    }
}
