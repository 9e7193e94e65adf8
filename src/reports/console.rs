use crate::Result;
use crate::results::ResultRow;
use crate::summary::Extremes;
use core::fmt::Write;
use owo_colors::OwoColorize;

const BANNER_WIDTH: usize = 120;
const SUMMARY_BANNER_WIDTH: usize = 60;
const ENTRIES_WIDTH: usize = 8;
const METRIC_WIDTH: usize = 12;
const KERNEL_WIDTH: usize = 20;
const KERNEL_KEEP: usize = 17;
const ELLIPSIS: &str = "...";

/// Generate the comparison table.
///
/// One line per row, in the collection's current order. Column widths are
/// fixed; values are integer-rounded for display only.
pub fn generate_table<W: Write>(rows: &[ResultRow], colorize: bool, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", "=".repeat(BANNER_WIDTH))?;
    write_title(writer, "GATEBENCH COMPARISON RESULTS", colorize)?;
    writeln!(writer, "{}", "=".repeat(BANNER_WIDTH))?;

    writeln!(
        writer,
        "{:>ENTRIES_WIDTH$} {:>METRIC_WIDTH$} {:>METRIC_WIDTH$} {:>METRIC_WIDTH$} {:>METRIC_WIDTH$} {:>METRIC_WIDTH$} {:>METRIC_WIDTH$} {:>KERNEL_WIDTH$}",
        "Entries", "Ops/sec (med)", "Ops/sec (min)", "Ops/sec (max)", "p50 (ns)", "p95 (ns)", "p99 (ns)", "Kernel"
    )?;
    writeln!(writer, "{}", "-".repeat(BANNER_WIDTH))?;

    for row in rows {
        let kernel = shorten_kernel(&row.kernel);
        writeln!(
            writer,
            "{:>ENTRIES_WIDTH$} {:>METRIC_WIDTH$.0} {:>METRIC_WIDTH$.0} {:>METRIC_WIDTH$.0} {:>METRIC_WIDTH$.0} {:>METRIC_WIDTH$.0} {:>METRIC_WIDTH$.0} {:>KERNEL_WIDTH$}",
            row.entries,
            row.median_ops_per_sec,
            row.min_ops_per_sec,
            row.max_ops_per_sec,
            row.median_p50_ns,
            row.median_p95_ns,
            row.median_p99_ns,
            kernel
        )?;
    }

    writeln!(writer, "{}", "=".repeat(BANNER_WIDTH))?;
    Ok(())
}

/// Generate the best/worst summary block from precomputed extrema.
pub fn generate_summary<W: Write>(extremes: &Extremes<'_>, colorize: bool, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", "=".repeat(SUMMARY_BANNER_WIDTH))?;
    write_title(writer, "SUMMARY", colorize)?;
    writeln!(writer, "{}", "=".repeat(SUMMARY_BANNER_WIDTH))?;

    writeln!(
        writer,
        "Best throughput: {} entries ({:.0} ops/sec)",
        extremes.best_throughput.entries, extremes.best_throughput.median_ops_per_sec
    )?;
    writeln!(
        writer,
        "Worst throughput: {} entries ({:.0} ops/sec)",
        extremes.worst_throughput.entries, extremes.worst_throughput.median_ops_per_sec
    )?;
    writeln!(
        writer,
        "Best latency: {} entries ({:.0} ns p50)",
        extremes.best_latency.entries, extremes.best_latency.median_p50_ns
    )?;
    writeln!(
        writer,
        "Worst latency: {} entries ({:.0} ns p50)",
        extremes.worst_latency.entries, extremes.worst_latency.median_p50_ns
    )?;

    writeln!(writer, "{}", "=".repeat(SUMMARY_BANNER_WIDTH))?;
    Ok(())
}

fn write_title<W: Write>(writer: &mut W, title: &str, colorize: bool) -> Result<()> {
    if colorize {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    Ok(())
}

/// Shorten a kernel identification for the fixed-width kernel column.
///
/// Keeps the release portion (the part after the first space) when there is
/// one, otherwise the whole string. Labels longer than the column are cut to
/// 17 characters plus a 3-character ellipsis.
fn shorten_kernel(kernel: &str) -> String {
    let label = kernel.split_once(' ').map_or(kernel, |(_, release)| release);
    if label.chars().count() > KERNEL_WIDTH {
        let kept: String = label.chars().take(KERNEL_KEEP).collect();
        format!("{kept}{ELLIPSIS}")
    } else {
        label.to_string()
    }
}
