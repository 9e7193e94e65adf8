//! Chart data preparation and the optional rendering collaborator.
//!
//! [`prepare`] owns the data shaping: it reorders the row collection and
//! derives per-axis series. Rendering itself is delegated to plotters behind
//! the `plot` cargo feature; [`available`] is the capability flag, resolved
//! once from the build configuration rather than checked piecemeal at every
//! call site.

#[cfg(feature = "plot")]
mod render;

#[cfg(feature = "plot")]
pub use render::render;

use crate::results::ResultRow;

/// Throughput values in ops/sec, keyed by the entry count of each run.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputSeries {
    pub median: Vec<(u64, f64)>,
    pub min: Vec<(u64, f64)>,
    pub max: Vec<(u64, f64)>,
}

/// Latency percentiles in microseconds, keyed by the entry count of each run.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencySeries {
    pub p50: Vec<(u64, f64)>,
    pub p95: Vec<(u64, f64)>,
    pub p99: Vec<(u64, f64)>,
}

/// The series handed to the chart renderer, already sorted by entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub throughput: ThroughputSeries,
    pub latency: LatencySeries,
}

/// Whether chart rendering was compiled in.
pub const fn available() -> bool {
    cfg!(feature = "plot")
}

/// Sort the rows by ascending `entries` and derive the chart series.
///
/// The sort is stable and happens in place: every later consumer of the same
/// collection observes the entries-ascending order. Latency values are
/// converted from nanoseconds to microseconds for the latency axis.
pub fn prepare(rows: &mut [ResultRow]) -> ChartData {
    rows.sort_by_key(|row| row.entries);

    ChartData {
        throughput: ThroughputSeries {
            median: rows.iter().map(|r| (r.entries, r.median_ops_per_sec)).collect(),
            min: rows.iter().map(|r| (r.entries, r.min_ops_per_sec)).collect(),
            max: rows.iter().map(|r| (r.entries, r.max_ops_per_sec)).collect(),
        },
        latency: LatencySeries {
            p50: rows.iter().map(|r| (r.entries, r.median_p50_ns / 1000.0)).collect(),
            p95: rows.iter().map(|r| (r.entries, r.median_p95_ns / 1000.0)).collect(),
            p99: rows.iter().map(|r| (r.entries, r.median_p99_ns / 1000.0)).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entries: u64, source_file: &str) -> ResultRow {
        ResultRow {
            entries,
            iters: 0,
            runs: 0,
            interval_ns: 0,
            median_ops_per_sec: entries as f64 * 10.0,
            min_ops_per_sec: entries as f64 * 8.0,
            max_ops_per_sec: entries as f64 * 12.0,
            stddev_ops_per_sec: 0.0,
            median_p50_ns: 1500.0,
            median_p95_ns: 3000.0,
            median_p99_ns: 4500.0,
            median_p999_ns: 6000.0,
            kernel: String::new(),
            machine: String::new(),
            source_file: source_file.to_string(),
        }
    }

    #[test]
    fn test_prepare_sorts_rows_in_place_ascending() {
        let mut rows = vec![row(1024, "c"), row(16, "a"), row(128, "b")];
        let _ = prepare(&mut rows);

        let entries: Vec<u64> = rows.iter().map(|r| r.entries).collect();
        assert_eq!(entries, vec![16, 128, 1024]);
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let mut rows = vec![row(1024, "c"), row(16, "a"), row(128, "b")];
        let first = prepare(&mut rows);
        let order_after_first: Vec<String> = rows.iter().map(|r| r.source_file.clone()).collect();

        let second = prepare(&mut rows);
        let order_after_second: Vec<String> = rows.iter().map(|r| r.source_file.clone()).collect();

        assert_eq!(order_after_first, order_after_second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_prepare_sort_is_stable_for_equal_entries() {
        let mut rows = vec![row(64, "first"), row(64, "second"), row(16, "third")];
        let _ = prepare(&mut rows);

        let names: Vec<&str> = rows.iter().map(|r| r.source_file.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_series_are_keyed_by_entries() {
        let mut rows = vec![row(128, "b"), row(16, "a")];
        let data = prepare(&mut rows);

        assert_eq!(data.throughput.median, vec![(16, 160.0), (128, 1280.0)]);
        assert_eq!(data.throughput.min, vec![(16, 128.0), (128, 1024.0)]);
        assert_eq!(data.throughput.max, vec![(16, 192.0), (128, 1536.0)]);
    }

    #[test]
    fn test_latency_series_convert_to_microseconds() {
        let mut rows = vec![row(16, "a")];
        let data = prepare(&mut rows);

        assert_eq!(data.latency.p50, vec![(16, 1.5)]);
        assert_eq!(data.latency.p95, vec![(16, 3.0)]);
        assert_eq!(data.latency.p99, vec![(16, 4.5)]);
    }
}
