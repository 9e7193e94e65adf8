//! A tool to compare benchmark results from multiple gatebench runs.
//!
//! # Overview
//!
//! `gatebench-compare` reads the JSON result documents that gatebench writes,
//! normalizes them into a common schema, and shows how throughput and the
//! latency distribution change across configurations (typically varying
//! schedule sizes).
//!
//! # Basic Usage
//!
//! Compare two runs:
//!
//! ```bash
//! gatebench-compare results_16.json results_1024.json
//! ```
//!
//! This prints a comparison table, writes `gatebench_comparison.csv` to the
//! current directory, and ends with a best/worst summary when there is more
//! than one run to compare.
//!
//! # Output Files
//!
//! **CSV report** (always written):
//! ```bash
//! gatebench-compare results_*.json --csv comparison.csv
//! ```
//!
//! **Comparison charts**:
//! ```bash
//! gatebench-compare results_*.json --plot
//! ```
//!
//! This writes `gatebench_comparison.png` with throughput and latency
//! percentile panels over the schedule size. If the tool was built without
//! the `plot` feature, `--plot` prints a warning and everything else still
//! runs.
//!
//! **Output directory** for the default file names:
//! ```bash
//! gatebench-compare results_*.json --plot --output-dir reports/
//! ```
//!
//! # Input Handling
//!
//! Files that are missing or fail to decode are reported on standard error
//! and skipped; the comparison proceeds with the remaining inputs. The tool
//! exits with status 1 only when no input could be loaded at all.

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use gatebench_compare::Result;

mod commands;

use crate::commands::{CompareArgs, compare};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gatebench-compare", version, about = "Compare gatebench results from multiple JSON files")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: CompareArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    compare(&cli.args)
}
