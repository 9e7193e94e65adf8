//! Cross-run extrema over the normalized row set.

use crate::results::ResultRow;

/// The best and worst performing configurations of a comparison batch.
///
/// Throughput extrema are taken over `median_ops_per_sec`, latency extrema
/// over `median_p50_ns`. When several rows share an extreme value, the first
/// row in the collection's current order wins.
#[derive(Debug)]
pub struct Extremes<'a> {
    pub best_throughput: &'a ResultRow,
    pub worst_throughput: &'a ResultRow,
    pub best_latency: &'a ResultRow,
    pub worst_latency: &'a ResultRow,
}

impl<'a> Extremes<'a> {
    /// Compute the four extrema, or `None` when the batch has fewer than two
    /// rows and there is nothing to compare.
    pub fn compute(rows: &'a [ResultRow]) -> Option<Self> {
        if rows.len() < 2 {
            return None;
        }

        let (first, rest) = rows.split_first()?;
        let mut extremes = Extremes {
            best_throughput: first,
            worst_throughput: first,
            best_latency: first,
            worst_latency: first,
        };

        // Strict comparisons keep the first occurrence on ties.
        for row in rest {
            if row.median_ops_per_sec > extremes.best_throughput.median_ops_per_sec {
                extremes.best_throughput = row;
            }
            if row.median_ops_per_sec < extremes.worst_throughput.median_ops_per_sec {
                extremes.worst_throughput = row;
            }
            if row.median_p50_ns < extremes.best_latency.median_p50_ns {
                extremes.best_latency = row;
            }
            if row.median_p50_ns > extremes.worst_latency.median_p50_ns {
                extremes.worst_latency = row;
            }
        }

        Some(extremes)
    }
}
