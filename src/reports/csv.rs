use crate::Result;
use crate::results::ResultRow;
use core::fmt::Write;
use std::borrow::Cow;

/// The CSV column set, in output order.
///
/// The header and every data row follow this order exactly; `source_file` is
/// deliberately not part of the report.
pub const FIELDNAMES: [&str; 14] = [
    "entries",
    "iters",
    "runs",
    "interval_ns",
    "median_ops_per_sec",
    "min_ops_per_sec",
    "max_ops_per_sec",
    "stddev_ops_per_sec",
    "median_p50_ns",
    "median_p95_ns",
    "median_p99_ns",
    "median_p999_ns",
    "kernel",
    "machine",
];

/// Generate the CSV report, one data row per result row in collection order.
pub fn generate<W: Write>(rows: &[ResultRow], writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", FIELDNAMES.join(","))?;

    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            row.entries,
            row.iters,
            row.runs,
            row.interval_ns,
            row.median_ops_per_sec,
            row.min_ops_per_sec,
            row.max_ops_per_sec,
            row.stddev_ops_per_sec,
            row.median_p50_ns,
            row.median_p95_ns,
            row.median_p99_ns,
            row.median_p999_ns,
            escape_csv(&row.kernel),
            escape_csv(&row.machine)
        )?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
