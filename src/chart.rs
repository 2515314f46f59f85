//! Line-chart rendering for the property series.
//!
//! Two charts summarise a sweep: one overlays the elastic modulus, Poisson's
//! ratio and density against fiber content, the other shows the tensile
//! strength alone. Both are written as PNG images.

use std::path::Path;

use plotters::prelude::*;

use crate::errors::ChartError;
use crate::sweep::PropertyRecord;

/// Pixel dimensions of the rendered images.
const CHART_SIZE: (u32, u32) = (1000, 620);
/// Radius of the per-point markers.
const MARKER_SIZE: u32 = 4;

/// Convert any drawing-backend failure into a [`ChartError`].
fn render_err<E: std::fmt::Display>(error: E) -> ChartError {
    ChartError::Render(error.to_string())
}

/// Extract one property from each record as `(percentage, value)` pairs.
fn series<F>(records: &[PropertyRecord], value: F) -> Vec<(f64, f64)>
where
    F: Fn(&PropertyRecord) -> f64,
{
    records
        .iter()
        .map(|record| (f64::from(record.percentage), value(record)))
        .collect()
}

/// Compute a padded y-axis range covering every value in the given series.
fn value_range(series: &[&[(f64, f64)]]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for points in series {
        for &(_, value) in *points {
            min = min.min(value);
            max = max.max(value);
        }
    }
    let padding = ((max - min) * 0.1).max(0.05);
    (min - padding, max + padding)
}

/// Compute a padded x-axis range from the first and last percentage.
fn percentage_range(records: &[PropertyRecord]) -> (f64, f64) {
    let first = f64::from(records[0].percentage);
    let last = f64::from(records[records.len() - 1].percentage);
    (first - 1.0, last + 1.0)
}

/// Render the overlay chart of elastic modulus, Poisson's ratio and density
/// against fiber content.
///
/// # Errors
///
/// Returns [`ChartError::EmptySeries`] when `records` is empty and
/// [`ChartError::Render`] when the drawing backend fails.
pub fn render_property_overlay(
    records: &[PropertyRecord],
    path: &Path,
) -> Result<(), ChartError> {
    if records.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let moduli = series(records, |record| record.elastic_modulus);
    let ratios = series(records, |record| record.poisson_ratio);
    let densities = series(records, |record| record.density);

    let (x_min, x_max) = percentage_range(records);
    let (y_min, y_max) = value_range(&[&moduli[..], &ratios[..], &densities[..]]);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "PGA-Silk Composite Properties vs. Silk Content",
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Silk Fiber Content (%)")
        .y_desc("Value")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(moduli.iter().copied(), &BLUE))
        .map_err(render_err)?
        .label("Elastic Modulus (GPa)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLUE));
    chart
        .draw_series(
            moduli
                .iter()
                .map(|&point| Circle::new(point, MARKER_SIZE, BLUE.filled())),
        )
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(ratios.iter().copied(), &RED))
        .map_err(render_err)?
        .label("Poisson's Ratio")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED));
    chart
        .draw_series(
            ratios
                .iter()
                .map(|&point| Cross::new(point, MARKER_SIZE, RED)),
        )
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(densities.iter().copied(), &GREEN))
        .map_err(render_err)?
        .label("Density (g/cm\u{b3})")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], GREEN));
    chart
        .draw_series(
            densities
                .iter()
                .map(|&point| TriangleMarker::new(point, MARKER_SIZE, GREEN.filled())),
        )
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

/// Render the tensile strength chart against fiber content.
///
/// # Errors
///
/// Returns [`ChartError::EmptySeries`] when `records` is empty and
/// [`ChartError::Render`] when the drawing backend fails.
pub fn render_tensile_strength(
    records: &[PropertyRecord],
    path: &Path,
) -> Result<(), ChartError> {
    if records.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let strengths = series(records, |record| record.tensile_strength);
    let (x_min, x_max) = percentage_range(records);
    let (y_min, y_max) = value_range(&[&strengths[..]]);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Tensile Strength vs. Silk Content", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Silk Fiber Content (%)")
        .y_desc("Tensile Strength (MPa)")
        .draw()
        .map_err(render_err)?;

    let style = RGBColor(139, 0, 0);
    chart
        .draw_series(LineSeries::new(strengths.iter().copied(), style.stroke_width(2)))
        .map_err(render_err)?
        .label("Tensile Strength (MPa)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], style));
    chart
        .draw_series(
            strengths
                .iter()
                .map(|&point| Cross::new(point, MARKER_SIZE, style)),
        )
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)
}
