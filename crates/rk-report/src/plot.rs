//! T-s diagram rendering with `plotters`.

use crate::error::{ReportError, ReportResult};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rk_cycle::{DiagramData, LabelAlign};
use std::path::Path;
use tracing::info;

/// File name used when no output path is given.
pub const DEFAULT_PLOT_FILE: &str = "rankine_reheat_ts.png";

/// Raster and axis settings for the T-s diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Entropy axis range [kJ/(kg·K)]
    pub s_range: (f64, f64),
    /// Padding added above and below the temperature extent [K]
    pub t_padding: f64,
    pub font_size: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 1000,
            title: "Ideal Rankine Cycle T-s Diagram".to_string(),
            s_range: (-2.0, 10.0),
            t_padding: 30.0,
            font_size: 18.0,
        }
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Render(e.to_string())
}

/// Padding around a label's text block [px].
const LABEL_PAD: i32 = 4;

/// Pixel corners of a label background, relative to the label anchor.
///
/// Text hangs below the anchor and extends right of it for `Left` alignment,
/// left of it for `Right`.
fn label_box(
    align: LabelAlign,
    text_width: i32,
    line_count: usize,
    line_height: i32,
) -> [(i32, i32); 2] {
    let (x0, x1) = match align {
        LabelAlign::Left => (-LABEL_PAD, text_width + LABEL_PAD),
        LabelAlign::Right => (-text_width - LABEL_PAD, LABEL_PAD),
    };
    let height = line_count as i32 * line_height;
    [(x0, -LABEL_PAD), (x1, height + LABEL_PAD)]
}

/// Temperature axis bounds covering the dome, the overlay and every label anchor.
pub fn temperature_range(data: &DiagramData, padding: f64) -> (f64, f64) {
    let temps = data
        .dome
        .liquid
        .iter()
        .chain(&data.dome.vapor)
        .chain(&data.overlay)
        .map(|&(_, t)| t)
        .chain(data.labels.iter().map(|l| l.anchor.1));

    let (lo, hi) = temps.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
        (lo.min(t), hi.max(t))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo - padding, hi + padding)
    } else {
        (250.0, 950.0)
    }
}

/// Render the annotated T-s diagram to a PNG at `path`.
///
/// Liquid branch blue, vapor branch red, cycle overlay black.
pub fn render_ts_diagram(
    data: &DiagramData,
    path: &Path,
    config: &PlotConfig,
) -> ReportResult<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (t_min, t_max) = temperature_range(data, config.t_padding);
    let (s_min, s_max) = config.s_range;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 36.0).into_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(s_min..s_max, t_min..t_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Entropy (kJ/kg·K)")
        .y_desc("Temperature (K)")
        .label_style(("sans-serif", 20.0))
        .axis_desc_style(("sans-serif", 24.0))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            data.dome.liquid.iter().copied(),
            BLUE.stroke_width(2),
        ))
        .map_err(render_err)?;
    chart
        .draw_series(LineSeries::new(
            data.dome.vapor.iter().copied(),
            RED.stroke_width(2),
        ))
        .map_err(render_err)?;
    chart
        .draw_series(LineSeries::new(
            data.overlay.iter().copied(),
            BLACK.stroke_width(2),
        ))
        .map_err(render_err)?;
    chart
        .draw_series(
            data.overlay
                .iter()
                .map(|&pt| Circle::new(pt, 4, BLACK.filled())),
        )
        .map_err(render_err)?;

    let line_height = (config.font_size * 1.25).round() as i32;
    for label in &data.labels {
        let h_pos = match label.align {
            LabelAlign::Left => HPos::Left,
            LabelAlign::Right => HPos::Right,
        };
        let style = TextStyle::from(("sans-serif", config.font_size).into_font())
            .pos(Pos::new(h_pos, VPos::Top));

        let mut text_width = 0;
        for line in &label.lines {
            let (w, _) = root.estimate_text_size(line, &style).map_err(render_err)?;
            text_width = text_width.max(w as i32);
        }
        let [top_left, bottom_right] =
            label_box(label.align, text_width, label.lines.len(), line_height);

        // Background first so the dome and grid do not show through the text
        chart
            .draw_series(std::iter::once(
                EmptyElement::at(label.anchor)
                    + Rectangle::new([top_left, bottom_right], WHITE.filled()),
            ))
            .map_err(render_err)?;
        chart
            .draw_series(label.lines.iter().enumerate().map(|(i, line)| {
                EmptyElement::at(label.anchor)
                    + Text::new(line.clone(), (0, i as i32 * line_height), style.clone())
            }))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "T-s diagram written");
    Ok(())
}
