//! Benchmark result formatting utilities
//!
//! Measurements are rendered into plain-text tables that are shared by the
//! console summary and the report file, so both always show the same thing.

use std::fmt::Write;

use super::data::{GenerationCounter, PerformanceMetrics};

/// Column widths for a benchmark table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Operation name column
    pub name: usize,
    /// Measurement count column
    pub count: usize,
    /// Total duration column
    pub total: usize,
    /// Average duration column
    pub avg: usize,
    /// Minimum duration column
    pub min: usize,
    /// Maximum duration column
    pub max: usize,
}

impl ColumnWidths {
    /// Length of a full separator line
    fn separator_len(&self) -> usize {
        // five " | " separators
        self.name + self.count + self.total + self.avg + self.min + self.max + 15
    }
}

/// Helper function to calculate column widths for benchmark table formatting
///
/// # Arguments
/// * `benchmarks` - Benchmark names and their metrics
/// * `has_multiple_counts` - Whether the avg/min/max columns carry data
pub fn calculate_column_widths(
    benchmarks: &[(&String, &PerformanceMetrics)],
    has_multiple_counts: bool,
) -> ColumnWidths {
    let mut widths = ColumnWidths {
        name: 30,
        count: 6,
        total: 15,
        avg: 15,
        min: 15,
        max: 15,
    };

    for (name, metrics) in benchmarks {
        widths.name = widths.name.max(name.len());
        widths.count = widths.count.max(metrics.count.to_string().len());
        widths.total = widths
            .total
            .max(format!("{:?}", metrics.total_duration).len());

        if has_multiple_counts {
            widths.avg = widths.avg.max(format!("{:?}", metrics.avg_duration).len());
            widths.min = widths.min.max(format!("{:?}", metrics.min_duration).len());
            widths.max = widths.max.max(format!("{:?}", metrics.max_duration).len());
        }
    }

    widths
}

/// Renders one titled table of measurements, most expensive first.
///
/// Returns an empty string when `benchmarks` is empty.
pub fn format_table(
    title: &str,
    caption: &str,
    benchmarks: &mut [(&String, &PerformanceMetrics)],
) -> String {
    let mut out = String::new();
    if benchmarks.is_empty() {
        return out;
    }

    benchmarks.sort_by(|a, b| b.1.total_duration.cmp(&a.1.total_duration));

    let has_multiple_counts = benchmarks.iter().any(|(_, m)| m.count > 1);
    let w = calculate_column_widths(benchmarks, has_multiple_counts);
    let total_secs: f64 = benchmarks
        .iter()
        .map(|(_, m)| m.total_duration.as_secs_f64())
        .sum();

    // Writing into a String cannot fail
    let _ = writeln!(out, "=== {title} ===");
    let _ = writeln!(out, "{caption}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<nw$} | {:>cw$} | {:>tw$} | {:>aw$} | {:>iw$} | {:>xw$}",
        "Operation",
        "Count",
        "Total",
        "Avg",
        "Min",
        "Max",
        nw = w.name,
        cw = w.count,
        tw = w.total,
        aw = w.avg,
        iw = w.min,
        xw = w.max,
    );
    let _ = writeln!(out, "{}", "-".repeat(w.separator_len()));

    for (name, metrics) in benchmarks.iter() {
        let total = format!("{:?}", metrics.total_duration);
        if metrics.count > 1 {
            let _ = writeln!(
                out,
                "{:<nw$} | {:>cw$} | {:>tw$} | {:>aw$} | {:>iw$} | {:>xw$}",
                name,
                metrics.count,
                total,
                format!("{:?}", metrics.avg_duration),
                format!("{:?}", metrics.min_duration),
                format!("{:?}", metrics.max_duration),
                nw = w.name,
                cw = w.count,
                tw = w.total,
                aw = w.avg,
                iw = w.min,
                xw = w.max,
            );
        } else {
            // single measurement: avg/min/max would repeat the total
            let _ = writeln!(
                out,
                "{:<nw$} | {:>cw$} | {:>tw$}",
                name,
                metrics.count,
                total,
                nw = w.name,
                cw = w.count,
                tw = w.total,
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total {}: {:.3}s", title.to_lowercase(), total_secs);
    out
}

/// One-line description of the recorded generation counters.
pub fn format_generation_counter(counter: &GenerationCounter) -> String {
    match counter.step_stats() {
        Some((min, avg, max)) => format!(
            "Generation Steps - Min: {}, Average: {:.1}, Max: {} ({} mazes, {} extensions, {} reverts)",
            min,
            avg,
            max,
            counter.len(),
            counter.total_extensions,
            counter.total_reverts
        ),
        None => "Generation Steps - No generations recorded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::GenerationStats;
    use std::time::Duration;

    fn metrics(count: usize, total_ms: u64) -> PerformanceMetrics {
        let total = Duration::from_millis(total_ms);
        PerformanceMetrics {
            count,
            total_duration: total,
            min_duration: total / count as u32,
            max_duration: total / count as u32,
            avg_duration: total / count as u32,
        }
    }

    #[test]
    fn test_column_widths_grow_with_names() {
        let long = "x".repeat(40);
        let short = "maze_generation".to_string();
        let (a, b) = (metrics(1, 1), metrics(3, 3));
        let widths = calculate_column_widths(&[(&long, &a), (&short, &b)], true);
        assert_eq!(widths.name, 40);
        assert_eq!(widths.count, 6);
        assert_eq!(widths.total, 15);
    }

    #[test]
    fn test_table_sorted_by_total() {
        let (fast, slow) = ("fast_query".to_string(), "slow_query".to_string());
        let (a, b) = (metrics(1, 1), metrics(4, 20));
        let mut rows = vec![(&fast, &a), (&slow, &b)];

        let table = format_table("QUERY BENCHMARKS", "caption", &mut rows);
        let slow_at = table.find("slow_query").unwrap();
        let fast_at = table.find("fast_query").unwrap();
        assert!(slow_at < fast_at);
        assert!(table.starts_with("=== QUERY BENCHMARKS ==="));
        assert!(table.contains("Total query benchmarks: 0.021s"));

        assert!(format_table("EMPTY", "caption", &mut []).is_empty());
    }

    #[test]
    fn test_generation_counter_line() {
        let mut counter = GenerationCounter::new(10);
        assert_eq!(
            format_generation_counter(&counter),
            "Generation Steps - No generations recorded"
        );

        counter.record(&GenerationStats {
            start_points: 81,
            extensions: 20,
            steps: 120,
            reverts: 2,
        });
        let line = format_generation_counter(&counter);
        assert!(line.starts_with("Generation Steps - Min: 120, Average: 120.0, Max: 120"));
        assert!(line.contains("1 mazes, 20 extensions, 2 reverts"));
    }
}
