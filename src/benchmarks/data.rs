use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::info;

use super::BenchmarkConfig;
use crate::maze::GenerationStats;

/// Work counters gathered across many maze generations
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    /// Step count of each recorded generation
    pub steps: Vec<usize>,
    /// Total reverted runs across all recorded generations
    pub total_reverts: usize,
    /// Total committed runs across all recorded generations
    pub total_extensions: usize,
    /// Maximum number of step samples to keep in memory
    max_samples: usize,
}

impl GenerationCounter {
    /// Creates a new generation counter
    pub fn new(max_samples: usize) -> Self {
        Self {
            steps: Vec::with_capacity(max_samples.min(1024)),
            max_samples,
            ..Self::default()
        }
    }

    /// Records the counters of one generation
    pub fn record(&mut self, stats: &GenerationStats) {
        self.steps.push(stats.steps);
        self.total_reverts += stats.reverts;
        self.total_extensions += stats.extensions;

        // Keep only the most recent samples
        if self.steps.len() > self.max_samples {
            self.steps.remove(0);
        }
    }

    /// Number of step samples currently held
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no generation has been recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns step statistics as (min, avg, max), or `None` with no samples
    pub fn step_stats(&self) -> Option<(usize, f64, usize)> {
        let min = *self.steps.iter().min()?;
        let max = *self.steps.iter().max()?;
        let avg = self.steps.iter().sum::<usize>() as f64 / self.steps.len() as f64;
        Some((min, avg, max))
    }
}

/// Performance profiler for identifying hot paths
pub struct Profiler {
    active_timers: HashMap<String, Instant>,
    config: BenchmarkConfig,
}

impl Profiler {
    /// Creates a new profiler
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            active_timers: HashMap::new(),
            config,
        }
    }

    /// Starts timing a section
    pub fn start_section(&mut self, name: &str) {
        if self.config.enabled {
            self.active_timers.insert(name.to_string(), Instant::now());
        }
    }

    /// Ends timing a section
    pub fn end_section(&mut self, name: &str) {
        if !self.config.enabled {
            return;
        }
        if let Some(start_time) = self.active_timers.remove(name) {
            let duration = start_time.elapsed();
            record_global(name, duration);

            if self.config.print_results {
                info!("[PROFILER] {}: {:?}", name, duration);
            }
        }
    }

    /// Times a closure execution
    pub fn time_closure<F, R>(&mut self, name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if self.config.enabled {
            self.start_section(name);
            let result = f();
            self.end_section(name);
            result
        } else {
            f()
        }
    }
}

/// Performance metrics for a specific operation
#[derive(Debug, Clone)]
pub struct PerformanceMetrics {
    /// Number of times this operation was measured
    pub count: usize,
    /// Total duration of all measurements combined
    pub total_duration: Duration,
    /// Shortest duration recorded for this operation
    pub min_duration: Duration,
    /// Longest duration recorded for this operation
    pub max_duration: Duration,
    /// Average duration across all measurements
    pub avg_duration: Duration,
}

impl PerformanceMetrics {
    fn new() -> Self {
        Self {
            count: 0,
            total_duration: Duration::ZERO,
            min_duration: Duration::MAX,
            max_duration: Duration::ZERO,
            avg_duration: Duration::ZERO,
        }
    }

    fn update(&mut self, duration: Duration) {
        self.count += 1;
        self.total_duration += duration;
        self.min_duration = self.min_duration.min(duration);
        self.max_duration = self.max_duration.max(duration);
        self.avg_duration = self.total_duration / self.count as u32;
    }
}

lazy_static::lazy_static! {
    /// Centralized benchmark data storage
    pub static ref BENCHMARK_DATA: Arc<Mutex<BenchmarkData>> = Arc::new(Mutex::new(BenchmarkData::new()));
}

/// Runs `f` against the global store. A poisoned lock still holds usable
/// measurements, so it is recovered rather than propagated.
pub(crate) fn with_global<T>(f: impl FnOnce(&mut BenchmarkData) -> T) -> T {
    let mut data = BENCHMARK_DATA
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut data)
}

fn record_global(name: &str, duration: Duration) {
    with_global(|data| data.record_measurement(name, duration));
}

/// Central storage for all benchmark measurements
pub struct BenchmarkData {
    measurements: HashMap<String, PerformanceMetrics>,
    config: BenchmarkConfig,
    generation_counter: GenerationCounter,
}

impl Default for BenchmarkData {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkData {
    /// Creates an empty store using the default configuration
    pub fn new() -> Self {
        let config = BenchmarkConfig::default();
        Self {
            measurements: HashMap::new(),
            generation_counter: GenerationCounter::new(config.max_samples),
            config,
        }
    }

    /// Records a new measurement for the specified operation
    ///
    /// # Arguments
    /// * `name` - The name of the operation being measured
    /// * `duration` - The duration of the operation
    pub fn record_measurement(&mut self, name: &str, duration: Duration) {
        if !self.measurements.contains_key(name)
            && self.config.max_samples > 0
            && self.measurements.len() >= self.config.max_samples
        {
            return;
        }

        self.measurements
            .entry(name.to_string())
            .or_insert_with(PerformanceMetrics::new)
            .update(duration);
    }

    /// Returns a copy of all recorded measurements
    pub fn get_measurements(&self) -> HashMap<String, PerformanceMetrics> {
        self.measurements.clone()
    }

    /// Clears all recorded measurements and generation counters
    pub fn clear(&mut self) {
        self.measurements.clear();
        self.generation_counter = GenerationCounter::new(self.config.max_samples);
    }

    /// Records the work counters of one maze generation
    pub fn record_generation(&mut self, stats: &GenerationStats) {
        self.generation_counter.record(stats);
    }

    /// Returns the generation counters recorded so far
    pub fn generation_counter(&self) -> &GenerationCounter {
        &self.generation_counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(steps: usize, reverts: usize) -> GenerationStats {
        GenerationStats {
            start_points: 4,
            extensions: 2,
            steps,
            reverts,
        }
    }

    #[test]
    fn test_generation_counter() {
        let mut counter = GenerationCounter::new(2);
        assert!(counter.step_stats().is_none());

        counter.record(&stats(10, 1));
        counter.record(&stats(30, 0));
        counter.record(&stats(20, 2));

        // oldest sample dropped, totals keep everything
        assert_eq!(counter.steps, vec![30, 20]);
        assert_eq!(counter.step_stats(), Some((20, 25.0, 30)));
        assert_eq!(counter.total_reverts, 3);
        assert_eq!(counter.total_extensions, 6);
    }

    #[test]
    fn test_metrics_update() {
        let mut data = BenchmarkData::new();
        data.record_measurement("maze_generation", Duration::from_millis(4));
        data.record_measurement("maze_generation", Duration::from_millis(2));

        let metrics = &data.get_measurements()["maze_generation"];
        assert_eq!(metrics.count, 2);
        assert_eq!(metrics.total_duration, Duration::from_millis(6));
        assert_eq!(metrics.min_duration, Duration::from_millis(2));
        assert_eq!(metrics.max_duration, Duration::from_millis(4));
        assert_eq!(metrics.avg_duration, Duration::from_millis(3));

        data.record_generation(&stats(5, 0));
        assert_eq!(data.generation_counter().len(), 1);
        data.clear();
        assert!(data.get_measurements().is_empty());
        assert!(data.generation_counter().is_empty());
    }
}
