use crate::Result;
use crate::charts::ChartData;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::app_err;
use plotters::coord::Shift;
use plotters::prelude::*;

// 12 x 10 inches at 150 DPI, the same canvas the report images have always used.
const CHART_WIDTH: u32 = 1800;
const CHART_HEIGHT: u32 = 1500;
const PANEL_SPLIT: i32 = 750;
const PLOT_FILE: &str = "gatebench_comparison.png";

const TITLE_FONT_SIZE: u32 = 40;
const AXIS_LABEL_FONT_SIZE: u32 = 26;
const TICK_LABEL_FONT_SIZE: u32 = 20;
const LEGEND_FONT_SIZE: u32 = 20;

/// Render the comparison chart into `output_dir` and return the image path.
///
/// Two stacked panels share a base-2 logarithmic entries axis: throughput
/// with a min-max band on top, latency percentiles below.
pub fn render(data: &ChartData, output_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let path = output_dir.join(PLOT_FILE);

    let root = BitMapBackend::new(path.as_std_path(), (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| app_err!("preparing chart canvas: {e}"))?;

    let (upper, lower) = root.split_vertically(PANEL_SPLIT);
    draw_throughput_panel(&upper, data)?;
    draw_latency_panel(&lower, data)?;

    root.present().map_err(|e| app_err!("writing chart to '{path}': {e}"))?;
    drop(upper);
    drop(lower);
    drop(root);
    Ok(path)
}

fn draw_throughput_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, data: &ChartData) -> Result<()> {
    let (x_min, x_max) = x_bounds(&data.throughput.median);
    let y_max = series_max(&data.throughput.max).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Gate Control-Plane Performance vs. Schedule Size", ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((x_min..x_max).log_scale().base(2.0), 0.0..y_max)
        .map_err(|e| app_err!("laying out throughput panel: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Number of gate entries")
        .y_desc("Operations per second")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(|e| app_err!("drawing throughput mesh: {e}"))?;

    // Min-max band: max series left to right, then min series back.
    let band: Vec<(f64, f64)> = data
        .throughput
        .max
        .iter()
        .map(to_point)
        .chain(data.throughput.min.iter().rev().map(to_point))
        .collect();
    _ = chart
        .draw_series(core::iter::once(Polygon::new(band, BLUE.mix(0.2))))
        .map_err(|e| app_err!("drawing throughput band: {e}"))?
        .label("Min-Max range")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BLUE.mix(0.2).filled()));

    let median: Vec<(f64, f64)> = data.throughput.median.iter().map(to_point).collect();
    _ = chart
        .draw_series(LineSeries::new(median.clone(), BLUE.stroke_width(2)))
        .map_err(|e| app_err!("drawing median throughput: {e}"))?
        .label("Median ops/sec")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    _ = chart
        .draw_series(median.iter().map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())))
        .map_err(|e| app_err!("drawing median throughput points: {e}"))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(|e| app_err!("drawing throughput legend: {e}"))
}

fn draw_latency_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, data: &ChartData) -> Result<()> {
    let (x_min, x_max) = x_bounds(&data.latency.p50);
    let y_max = series_max(&data.latency.p99).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption("Latency Percentiles vs. Schedule Size", ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((x_min..x_max).log_scale().base(2.0), 0.0..y_max)
        .map_err(|e| app_err!("laying out latency panel: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Number of gate entries")
        .y_desc("Latency (μs)")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(|e| app_err!("drawing latency mesh: {e}"))?;

    let percentiles = [
        (&data.latency.p50, GREEN, "p50 (median)"),
        (&data.latency.p95, RED, "p95"),
        (&data.latency.p99, MAGENTA, "p99"),
    ];

    for (series, color, name) in percentiles {
        let points: Vec<(f64, f64)> = series.iter().map(to_point).collect();
        _ = chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(|e| app_err!("drawing {name} latency: {e}"))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        _ = chart
            .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, color.filled())))
            .map_err(|e| app_err!("drawing {name} latency points: {e}"))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(|e| app_err!("drawing latency legend: {e}"))
}

#[expect(clippy::cast_precision_loss, reason = "entry counts are far below 2^52")]
fn to_point(&(entries, value): &(u64, f64)) -> (f64, f64) {
    (entries.max(1) as f64, value)
}

/// Log-scale axis bounds over a sorted series; a zero entry count is clamped
/// to 1 so the axis stays well defined.
#[expect(clippy::cast_precision_loss, reason = "entry counts are far below 2^52")]
fn x_bounds(series: &[(u64, f64)]) -> (f64, f64) {
    let min = series.first().map_or(1, |&(entries, _)| entries.max(1)) as f64;
    let max = series.last().map_or(1, |&(entries, _)| entries.max(1)) as f64 * 2.0;
    (min, max)
}

fn series_max(series: &[(u64, f64)]) -> f64 {
    series.iter().map(|&(_, value)| value).fold(0.0_f64, f64::max)
}
