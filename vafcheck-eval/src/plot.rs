use std::ops::Range;
use std::path::Path;

use log::{info, warn};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use vafcheck_core::consts::{
    PLOT_DPI, PLOT_HEIGHT_INCHES, PLOT_TITLE, PLOT_WIDTH_INCHES, PLOT_X_LABEL, PLOT_Y_LABEL,
};
use vafcheck_core::errors::{Result, VafCheckError};
use vafcheck_core::models::EvaluatedVariant;

use crate::statistics::{linear_fit, r_squared};

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE_TITLE: u32 = 22;
const FONT_SIZE_AXIS: u32 = 16;
const FONT_SIZE_ANNOTATION: u32 = 16;
const POINT_SIZE: u32 = 4;
const PLOT_MARGIN: u32 = 20;
const LABEL_AREA_SIZE: u32 = 50;
const RANGE_PADDING: f64 = 0.05;

// seaborn "darkgrid" look
const PANEL_COLOR: RGBColor = RGBColor(234, 234, 242);
const POINT_COLOR: RGBColor = RGBColor(76, 114, 176);

fn plot_err<E: std::fmt::Display>(e: E) -> VafCheckError {
    VafCheckError::Plot(e.to_string())
}

/// Canvas size in pixels for the configured figure size and DPI.
pub fn canvas_size() -> (u32, u32) {
    let dpi = PLOT_DPI as f64;
    (
        (PLOT_WIDTH_INCHES * dpi).round() as u32,
        (PLOT_HEIGHT_INCHES * dpi).round() as u32,
    )
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..100.0;
    }

    let padding = match max - min {
        span if span > 0.0 => span * RANGE_PADDING,
        _ => 1.0,
    };
    (min - padding)..(max + padding)
}

///
/// Render expected VAF (y) against found VAF (x) as a PNG scatter plot.
///
/// Variants without a numeric found VAF are left out. A least-squares trend line is drawn
/// when it is defined, and the squared Pearson correlation is annotated in the upper left
/// corner (`NA` when undefined).
///
/// # Arguments
/// - evaluated: the matched truth set
/// - path: the PNG file to create
///
pub fn plot_expected_vs_found(evaluated: &[EvaluatedVariant], path: &Path) -> Result<()> {
    let points: Vec<(f64, f64)> = evaluated.iter().filter_map(|v| v.vaf_pair()).collect();

    let skipped = evaluated.len() - points.len();
    if skipped > 0 {
        warn!(
            "{} of {} variants have no found VAF and are left out of the plot",
            skipped,
            evaluated.len()
        );
    }

    let found: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
    let expected: Vec<f64> = points.iter().map(|(_, y)| *y).collect();

    let annotation = match r_squared(&found, &expected) {
        Some(r2) => format!("R-squared: {:.2}", r2),
        None => "R-squared: NA".to_string(),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let root = BitMapBackend::new(path, canvas_size()).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let x_range = padded_range(found.iter().copied());
    let y_range = padded_range(expected.iter().copied());

    let mut chart = ChartBuilder::on(&root)
        .margin(PLOT_MARGIN)
        .caption(PLOT_TITLE, (FONT_FAMILY, FONT_SIZE_TITLE))
        .x_label_area_size(LABEL_AREA_SIZE)
        .y_label_area_size(LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(plot_err)?;

    chart.plotting_area().fill(&PANEL_COLOR).map_err(plot_err)?;

    chart
        .configure_mesh()
        .bold_line_style(WHITE)
        .light_line_style(WHITE.mix(0.4))
        .axis_desc_style((FONT_FAMILY, FONT_SIZE_AXIS))
        .x_desc(PLOT_X_LABEL)
        .y_desc(PLOT_Y_LABEL)
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), POINT_SIZE, POINT_COLOR.filled())),
        )
        .map_err(plot_err)?;

    if let Some(fit) = linear_fit(&found, &expected) {
        let line = vec![
            (x_range.start, fit.predict(x_range.start)),
            (x_range.end, fit.predict(x_range.end)),
        ];
        chart
            .draw_series(LineSeries::new(line, POINT_COLOR.stroke_width(2)))
            .map_err(plot_err)?;
    }

    let annotation_style = TextStyle::from((FONT_FAMILY, FONT_SIZE_ANNOTATION).into_font())
        .pos(Pos::new(HPos::Left, VPos::Top));
    chart
        .draw_series(std::iter::once(Text::new(
            annotation.clone(),
            (x_range.start, y_range.end),
            annotation_style,
        )))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!("Plot saved to {:?} ({})", path, annotation);

    Ok(())
}
