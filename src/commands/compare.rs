use super::common::{ColorMode, LogLevel, init_logging, use_color};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use gatebench_compare::results::{self, ResultRow};
use gatebench_compare::summary::Extremes;
use gatebench_compare::{Result, charts, reports};
use ohno::{IntoAppError, bail};
use std::fs;

const DEFAULT_CSV_FILE: &str = "gatebench_comparison.csv";

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// JSON result files to compare
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Output CSV file for comparison data [default: <output-dir>/gatebench_comparison.csv]
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub csv: Option<Utf8PathBuf>,

    /// Generate comparison plots
    #[arg(long, help_heading = "Report Output")]
    pub plot: bool,

    /// Directory for output files
    #[arg(long, value_name = "DIR", default_value = ".", help_heading = "Report Output")]
    pub output_dir: Utf8PathBuf,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Run one comparison batch: load every input, then fan the accumulated rows
/// out to the table, CSV, chart, and summary stages.
pub fn run(args: &CompareArgs) -> Result<()> {
    init_logging(args.log_level);

    let mut rows = load_batch(&args.files);
    if rows.is_empty() {
        bail!("no valid results to compare");
    }

    let colorize = use_color(args.color);

    let mut table = String::new();
    reports::generate_table(&rows, colorize, &mut table)?;
    println!();
    print!("{table}");

    let csv_path = args
        .csv
        .clone()
        .unwrap_or_else(|| args.output_dir.join(DEFAULT_CSV_FILE));
    let mut csv_text = String::new();
    reports::generate_csv(&rows, &mut csv_text)?;
    fs::write(&csv_path, csv_text).into_app_err_with(|| format!("writing CSV report to '{csv_path}'"))?;
    println!("\nCSV report saved to: {csv_path}");

    if args.plot {
        if charts::available() {
            // Reorders `rows` by ascending entries; the summary below sees
            // that order.
            let data = charts::prepare(&mut rows);
            let plot_path = render_chart(&data, &args.output_dir)?;
            println!("Plot saved to: {plot_path}");
        } else {
            log::warn!("built without the `plot` feature");
            eprintln!("Warning: chart support not compiled in, plotting disabled");
        }
    }

    if let Some(extremes) = Extremes::compute(&rows) {
        let mut summary = String::new();
        reports::generate_summary(&extremes, colorize, &mut summary)?;
        println!();
        print!("{summary}");
    }

    Ok(())
}

/// Load every input file, skipping any that fail with a diagnostic on
/// standard error. A per-file failure never aborts the batch.
fn load_batch(files: &[Utf8PathBuf]) -> Vec<ResultRow> {
    let mut rows = Vec::with_capacity(files.len());

    for path in files {
        match results::load(path) {
            Ok(raw) => {
                let source_file = path.file_name().unwrap_or(path.as_str());
                let row = ResultRow::from_raw(&raw, source_file);
                println!("Loaded: {path} (entries={})", row.entries);
                rows.push(row);
            }
            Err(e) => {
                log::warn!("skipping '{path}'");
                eprintln!("Error loading {path}: {e}");
            }
        }
    }

    rows
}

#[cfg(feature = "plot")]
fn render_chart(data: &charts::ChartData, output_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    charts::render(data, output_dir)
}

#[cfg(not(feature = "plot"))]
fn render_chart(_data: &charts::ChartData, _output_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    bail!("chart rendering is not available in this build")
}
