//! Tick profiling
//!
//! The world records how long each system took on every tick. The last
//! tick is kept as a [`TickProfile`]; running totals per system live in the
//! [`SystemProfiler`].
//!
//! ## Tracing output
//!
//! Structural changes and system dispatch are reported through `tracing`.
//! With the `profiling` feature enabled, each tick and each system call is
//! also wrapped in an `info_span!`, and [`init_subscriber`] installs a
//! formatting subscriber:
//!
//! ```ignore
//! let _guard = rui::profiling::init_subscriber(std::io::stdout());
//! // RUST_LOG=rui=trace shows every system dispatch
//! ```

use std::any::TypeId;
use std::time::Duration;

use rustc_hash::FxHashMap;

/// System execution stats
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub call_count: u64,
}

/// System profiler for collecting timing data
pub struct SystemProfiler {
    timings: FxHashMap<TypeId, Vec<Duration>>,
    call_counts: FxHashMap<TypeId, u64>,
    /// Samples kept per system
    max_samples: usize,
}

impl SystemProfiler {
    pub fn new() -> Self {
        Self {
            timings: FxHashMap::default(),
            call_counts: FxHashMap::default(),
            max_samples: 120,
        }
    }

    pub fn record_execution(&mut self, id: TypeId, duration: Duration) {
        let samples = self.timings.entry(id).or_default();
        samples.push(duration);
        if samples.len() > self.max_samples {
            samples.remove(0);
        }
        self.call_counts
            .entry(id)
            .and_modify(|c| *c += 1)
            .or_insert(1);
    }

    pub fn get_stats(&self, id: TypeId) -> Option<SystemStats> {
        let timings = self.timings.get(&id)?;
        if timings.is_empty() {
            return None;
        }

        let min = *timings.iter().min().unwrap_or(&Duration::ZERO);
        let max = *timings.iter().max().unwrap_or(&Duration::ZERO);
        let avg = timings.iter().sum::<Duration>() / timings.len() as u32;

        Some(SystemStats {
            min,
            max,
            avg,
            call_count: *self.call_counts.get(&id).unwrap_or(&0),
        })
    }

    /// Drop everything recorded for one system
    pub fn forget(&mut self, id: TypeId) {
        self.timings.remove(&id);
        self.call_counts.remove(&id);
    }

    pub fn clear(&mut self) {
        self.timings.clear();
        self.call_counts.clear();
    }
}

impl Default for SystemProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-system timing data for a single tick
#[derive(Debug, Clone)]
pub struct SystemTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Execution profile for a tick
#[derive(Debug, Clone, Default)]
pub struct TickProfile {
    pub tick: u64,
    pub total_time: Duration,
    pub system_timings: Vec<SystemTiming>,
    /// False when a system failed and the rest of the tick was skipped
    pub completed: bool,
}

impl TickProfile {
    /// Slowest system of the tick
    pub fn slowest(&self) -> Option<&SystemTiming> {
        self.system_timings.iter().max_by_key(|timing| timing.duration)
    }
}

/// Install a `tracing` fmt subscriber writing through a non-blocking writer.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Keep the returned
/// guard alive for as long as output should be flushed.
#[cfg(feature = "profiling")]
pub fn init_subscriber<W>(writer: W) -> tracing_appender::non_blocking::WorkerGuard
where
    W: std::io::Write + Send + 'static,
{
    use tracing_subscriber::EnvFilter;

    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests, host application)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_target(true)
        .try_init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    struct B;

    #[test]
    fn test_stats_min_max_avg() {
        let mut profiler = SystemProfiler::new();
        let id = TypeId::of::<A>();
        profiler.record_execution(id, Duration::from_millis(2));
        profiler.record_execution(id, Duration::from_millis(4));

        let stats = profiler.get_stats(id).expect("stats recorded");
        assert_eq!(stats.min, Duration::from_millis(2));
        assert_eq!(stats.max, Duration::from_millis(4));
        assert_eq!(stats.avg, Duration::from_millis(3));
        assert_eq!(stats.call_count, 2);
        assert!(profiler.get_stats(TypeId::of::<B>()).is_none());
    }

    #[test]
    fn test_sample_window_is_bounded() {
        let mut profiler = SystemProfiler::new();
        let id = TypeId::of::<A>();
        for _ in 0..200 {
            profiler.record_execution(id, Duration::from_micros(1));
        }
        assert_eq!(profiler.timings[&id].len(), 120);
        assert_eq!(profiler.get_stats(id).map(|s| s.call_count), Some(200));
    }

    #[test]
    fn test_forget() {
        let mut profiler = SystemProfiler::new();
        let id = TypeId::of::<A>();
        profiler.record_execution(id, Duration::from_micros(1));
        profiler.forget(id);
        assert!(profiler.get_stats(id).is_none());
    }

    #[test]
    fn test_slowest() {
        let profile = TickProfile {
            tick: 1,
            total_time: Duration::from_millis(3),
            system_timings: vec![
                SystemTiming {
                    name: "a",
                    duration: Duration::from_millis(1),
                },
                SystemTiming {
                    name: "b",
                    duration: Duration::from_millis(2),
                },
            ],
            completed: true,
        };
        assert_eq!(profile.slowest().map(|t| t.name), Some("b"));
    }
}
