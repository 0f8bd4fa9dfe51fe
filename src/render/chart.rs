//! Line + band chart rendering
//!
//! One chart overlays every dataset for a single metric: a line with
//! per-point markers, plus a shaded band from (mean − std) to (mean + std)
//! in the line's color at reduced opacity.

use super::palette::categorical_color;
use crate::config::PlotConfig;
use crate::metrics::{BandClip, BandSeries, PlotError, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Fraction of the data extent added as axis padding on each side
const AXIS_MARGIN: f64 = 0.05;

/// Marker drawn at each data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// Everything chart-specific that is not per-series data
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Main title ("Latency vs Threads")
    pub title: String,

    /// Smaller configuration line under the title
    pub subtitle: String,

    /// X-axis description
    pub x_label: String,

    /// Y-axis description
    pub y_label: String,

    pub marker: Marker,

    /// Band lower-bound clip policy for this chart
    pub clip: BandClip,
}

fn render_err(e: impl std::fmt::Display) -> PlotError {
    PlotError::Render(e.to_string())
}

/// Axis ranges covering every series including its band, with margins
fn axis_ranges(series: &[BandSeries], clip: BandClip) -> (f64, f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        let (sx_min, sx_max, sy_min, sy_max) = s.extent(clip);
        x_min = x_min.min(sx_min);
        x_max = x_max.max(sx_max);
        y_min = y_min.min(sy_min);
        y_max = y_max.max(sy_max);
    }

    let x_pad = match x_max - x_min {
        d if d > 0.0 => d * AXIS_MARGIN,
        _ => 1.0,
    };
    let y_pad = match y_max - y_min {
        d if d > 0.0 => d * AXIS_MARGIN,
        _ => 1.0,
    };

    (x_min - x_pad, x_max + x_pad, y_min - y_pad, y_max + y_pad)
}

/// Render one chart with all series to an SVG file
pub fn render_chart(
    series: &[BandSeries],
    spec: &ChartSpec,
    config: &PlotConfig,
    output: impl AsRef<Path>,
) -> Result<()> {
    if series.is_empty() {
        return Err(PlotError::Empty("no series to render".to_string()));
    }

    let (width, height) = config.resolve_dimensions();
    let output = output.as_ref();

    let root = SVGBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (x_min, x_max, y_min, y_max) = axis_ranges(series, spec.clip);

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(10)
        .margin_top(50)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    for (idx, s) in series.iter().enumerate() {
        let color = categorical_color(idx);

        // Band polygon: upper bound left to right, then lower bound back
        let mut band: Vec<(f64, f64)> = s
            .points
            .iter()
            .map(|p| (p.x, p.bounds(spec.clip).1))
            .collect();
        band.extend(s.points.iter().rev().map(|p| (p.x, p.bounds(spec.clip).0)));

        chart
            .draw_series(std::iter::once(Polygon::new(
                band,
                color.mix(config.band_alpha),
            )))
            .map_err(render_err)?;

        // Mean line carries the legend entry
        chart
            .draw_series(LineSeries::new(
                s.points.iter().map(|p| (p.x, p.mean)),
                color.stroke_width(2),
            ))
            .map_err(render_err)?
            .label(s.legend_label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 10, y), (x + 10, y)], color.stroke_width(2))
            });

        // Per-point markers
        let size = config.marker_size as i32;
        match spec.marker {
            Marker::Circle => {
                chart
                    .draw_series(
                        s.points
                            .iter()
                            .map(|p| Circle::new((p.x, p.mean), size, color.filled())),
                    )
                    .map_err(render_err)?;
            }
            Marker::Square => {
                chart
                    .draw_series(s.points.iter().map(|p| {
                        EmptyElement::at((p.x, p.mean))
                            + Rectangle::new([(-size, -size), (size, size)], color.filled())
                    }))
                    .map_err(render_err)?;
            }
        }
    }

    // Subtitle line between the caption and the plot area
    let subtitle_style = ("sans-serif", 15)
        .into_font()
        .color(&BLACK.mix(0.7))
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        spec.subtitle.clone(),
        ((width / 2) as i32, 36),
        subtitle_style,
    ))
    .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.5))
        .label_font(("sans-serif", 15))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;

    Ok(())
}
