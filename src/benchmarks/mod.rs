//! Benchmarking and Performance Analysis Library
//!
//! This module provides utilities for measuring how long maze generation and
//! grid queries take, and how much work the wall-extension loop does per maze.
//!
//! # Features
//! - **Timing Measurements**: Precise timing for code sections and functions
//! - **Generation Counters**: Steps, extensions and reverts per generated maze
//! - **Profiling Tools**: Named sections timed into a shared store
//! - **Conditional Compilation**: Benchmarks are off by default in release builds

use std::time::Duration;

/// Configuration for benchmarking features
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Whether benchmarking is enabled
    pub enabled: bool,
    /// Whether to log each measurement as it is recorded
    pub print_results: bool,
    /// Whether to write results to file
    pub write_to_file: bool,
    /// Minimum duration to log (filters out very fast operations)
    pub min_duration_threshold: Duration,
    /// Maximum number of samples to keep in memory
    pub max_samples: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            print_results: false,
            write_to_file: cfg!(debug_assertions),
            min_duration_threshold: Duration::from_micros(100),
            max_samples: 1000,
        }
    }
}

impl BenchmarkConfig {
    /// Configuration that records every measurement regardless of build
    /// profile, used by explicit benchmark runs. Report writing is off until
    /// requested with [`with_report`](Self::with_report).
    pub fn always() -> Self {
        Self {
            enabled: true,
            write_to_file: false,
            min_duration_threshold: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Returns a copy of this configuration with report writing set to `write`.
    pub fn with_report(mut self, write: bool) -> Self {
        self.write_to_file = write;
        self
    }
}

/// Data structures for storing benchmark measurements and generation counters
pub mod data;

/// Plain-text tables for benchmark reports
pub mod format;

/// Timers, summaries, report files and the `benchmark!` macro
pub mod utils;


pub use data::{GenerationCounter, PerformanceMetrics, Profiler};
pub use utils::*;
