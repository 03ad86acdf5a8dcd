//! Benchmark utility functions and helper types
//!
//! This module provides convenience functions, timers, and utilities for common
//! benchmarking tasks. It includes both manual timers and automatic scoped timers,
//! as well as functions for managing benchmark data and generating reports.
//!
//! # Key Features
//! - **Manual Timers**: `Timer` for explicit start/stop timing
//! - **Scoped Timers**: `ScopedTimer` for automatic timing based on scope
//! - **Generation Counters**: `record_generation` for per-maze work counters
//! - **File Output**: Functions to save benchmark results to files
//! - **Macros**: `benchmark!` for easy code instrumentation

use chrono::{DateTime, Local};
use log::info;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::BenchmarkConfig;
use super::data::{GenerationCounter, PerformanceMetrics, Profiler, with_global};
use super::format::{format_generation_counter, format_table};
use crate::maze::GenerationStats;

/// Directory benchmark reports are written to, relative to the working directory
pub const REPORT_DIR: &str = "debug-analytics/benchmarks";

/// A timer for measuring execution time of code sections
///
/// This timer provides manual control over timing operations. It starts timing
/// when created and can be stopped explicitly to record the measurement.
pub struct Timer {
    /// The name of the operation being timed
    name: String,
    /// When the timer was started
    start_time: Instant,
    /// Configuration for this timer
    config: BenchmarkConfig,
}

impl Timer {
    /// Creates a new timer with the given name
    ///
    /// # Arguments
    /// * `name` - The name of the operation to be timed
    /// * `config` - Configuration for the timer behavior
    pub fn new(name: &str, config: BenchmarkConfig) -> Self {
        Self {
            name: name.to_string(),
            start_time: Instant::now(),
            config,
        }
    }

    /// Stops the timer and records the measurement
    ///
    /// Returns the duration that elapsed since the timer was created.
    /// If the duration meets the minimum threshold, it will be recorded
    /// in the global benchmark data.
    pub fn stop(self) -> Duration {
        let duration = self.start_time.elapsed();

        if self.config.enabled && duration >= self.config.min_duration_threshold {
            with_global(|data| data.record_measurement(&self.name, duration));

            if self.config.print_results {
                info!("[BENCHMARK] {}: {:?}", self.name, duration);
            }
        }

        duration
    }
}

/// A scoped timer that automatically stops when dropped
pub struct ScopedTimer {
    timer: Option<Timer>,
}

impl ScopedTimer {
    /// Creates a new scoped timer
    ///
    /// # Arguments
    /// * `name` - The name of the operation to be timed
    /// * `config` - Configuration for the timer behavior
    pub fn new(name: &str, config: BenchmarkConfig) -> Self {
        Self {
            timer: Some(Timer::new(name, config)),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
    }
}

/// Times a closure execution with default configuration
///
/// # Returns
/// The result of the closure execution
pub fn time<F, R>(name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut profiler = Profiler::new(BenchmarkConfig::default());
    profiler.time_closure(name, f)
}

/// Creates a scoped timer with default configuration
pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name, BenchmarkConfig::default())
}

/// Records the work counters of one maze generation in the global store
pub fn record_generation(stats: &GenerationStats) {
    with_global(|data| data.record_generation(stats));
}

/// Returns a snapshot of the global generation counters
pub fn generation_counter() -> GenerationCounter {
    with_global(|data| data.generation_counter().clone())
}

/// Clears all recorded measurements
pub fn clear_measurements() {
    with_global(|data| data.clear());
}

/// Gets all recorded measurements
///
/// # Returns
/// A HashMap containing all benchmark measurements indexed by operation name
pub fn get_measurements() -> HashMap<String, PerformanceMetrics> {
    with_global(|data| data.get_measurements())
}

/// Whether a measurement name belongs to maze generation rather than to
/// queries against finished grids
fn is_generation_benchmark(name: &str) -> bool {
    name.contains("generation") || name.contains("generate") || name.contains("extension")
}

/// Builds the full summary text: generation counters, then one table for
/// generation timings and one for query timings.
///
/// Returns `None` when nothing has been measured.
pub fn summary_report() -> Option<String> {
    let measurements = get_measurements();
    let counter = generation_counter();
    if measurements.is_empty() && counter.is_empty() {
        return None;
    }

    let (mut generation, mut queries): (Vec<_>, Vec<_>) = measurements
        .iter()
        .partition(|(name, _)| is_generation_benchmark(name));

    let mut report = String::from("=== PERFORMANCE SUMMARY ===\n");
    report.push_str(&format_generation_counter(&counter));
    report.push('\n');

    for table in [
        format_table(
            "GENERATION BENCHMARKS",
            "This table shows the time spent building mazes:",
            &mut generation,
        ),
        format_table(
            "QUERY BENCHMARKS",
            "This table shows the time spent querying finished mazes:",
            &mut queries,
        ),
    ] {
        if !table.is_empty() {
            report.push('\n');
            report.push_str(&table);
        }
    }

    Some(report)
}

/// Prints a summary of all recorded measurements to stdout
pub fn print_summary() {
    match summary_report() {
        Some(report) => println!("\n{report}\n============================="),
        None => println!("[BENCHMARK] No measurements recorded"),
    }
}

/// Writes benchmark results into `dir` when `config.write_to_file` is set
///
/// # Returns
/// The path of the written report, `None` if writing is disabled or there was
/// nothing to write, or an `io::Error` if file operations fail
pub fn write_results_if_enabled(
    config: &BenchmarkConfig,
    dir: &Path,
    source: &str,
) -> io::Result<Option<PathBuf>> {
    if !config.write_to_file {
        return Ok(None);
    }
    write_results_to_dir(dir, source)
}

/// Writes benchmark results to a timestamped file inside `dir`
pub fn write_results_to_dir(dir: &Path, source: &str) -> io::Result<Option<PathBuf>> {
    let Some(report) = summary_report() else {
        info!("[BENCHMARK] No measurements to write");
        return Ok(None);
    };

    fs::create_dir_all(dir)?;

    let now: DateTime<Local> = Local::now();
    let file_path = dir.join(format!("{}.txt", now.format("%Y-%m-%d-%H%M%S")));

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&file_path)?;

    writeln!(file, "Maze Land Performance Benchmark Results")?;
    writeln!(file, "Generated: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file, "Source: {}", source)?;
    writeln!(file, "{}", "=".repeat(60))?;
    writeln!(file)?;
    write!(file, "{report}")?;
    writeln!(file)?;
    writeln!(file, "{}", "=".repeat(60))?;
    writeln!(file, "End of benchmark report")?;

    info!("[BENCHMARK] Results written to: {}", file_path.display());
    Ok(Some(file_path))
}

/// Macro for easy timing of code blocks
///
/// Creates a scoped timer with the default configuration that records when
/// the block exits, and evaluates to the block's value.
///
/// # Example
/// ```rust
/// use maze_land::benchmark;
/// use maze_land::maze::MazeGenerator;
///
/// let generator = MazeGenerator::new(21, 21, Some(7)).unwrap();
/// let grid = benchmark!("maze_generation", generator.generate().unwrap());
/// assert_eq!(grid.dimensions(), (21, 21));
/// ```
#[macro_export]
macro_rules! benchmark {
    ($name:expr, $block:expr) => {{
        let _timer = $crate::benchmarks::ScopedTimer::new(
            $name,
            $crate::benchmarks::BenchmarkConfig::default(),
        );
        $block
    }};
}
