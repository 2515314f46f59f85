use std::path::Path;

use compositex::{chart, report, Composite, FiberGeometry, SweepRange};
use dialoguer::Input;

/// Output path for the overlay chart of modulus, Poisson's ratio and density.
const PROPERTY_CHART_PATH: &str = "composite_properties.png";
/// Output path for the tensile strength chart.
const STRENGTH_CHART_PATH: &str = "tensile_strength.png";

fn main() -> anyhow::Result<()> {
    println!("Silk-PGA Composite Property Calculator\n");

    // Collect the percentage range first and validate it before asking for
    // anything else, mirroring how the tool is used: a bad range means there
    // is no sweep to configure.
    let start: u32 = Input::new()
        .with_prompt("Starting silk fiber percentage (e.g. 20)")
        .interact_text()?;
    let end: u32 = Input::new()
        .with_prompt("Ending silk fiber percentage (e.g. 40)")
        .interact_text()?;
    let step: u32 = Input::new()
        .with_prompt("Step size (e.g. 5)")
        .interact_text()?;
    let range = SweepRange::new(start, end, step)?;

    // Fiber geometry: length in centimetres, diameter in micrometres (the
    // library converts to centimetres) and the empirical orientation
    // correction factor for randomly oriented fibers.
    let length: f64 = Input::new()
        .with_prompt("Fiber length in cm (e.g. 0.5)")
        .interact_text()?;
    let diameter: f64 = Input::new()
        .with_prompt("Fiber diameter in \u{3bc}m (e.g. 10)")
        .interact_text()?;
    let orientation_factor: f64 = Input::new()
        .with_prompt("Orientation correction factor K_o (e.g. 0.3)")
        .interact_text()?;
    let geometry = FiberGeometry::new(length, diameter, orientation_factor)?;

    let composite = Composite::silk_pga(geometry);

    // The critical length determines whether the fibers carry their full
    // strength, so report it before the sweep.
    println!(
        "\nCalculated Critical Length (Lc) = {:.4} cm\n",
        composite.critical_length()
    );

    // Evaluate the sweep, printing each table row as it is computed.
    println!("{}", report::render_header());
    let mut records = Vec::new();
    for percentage in range.percentages() {
        let record = composite.evaluate(percentage);
        println!("{}", report::render_row(&record));
        records.push(record);
    }

    // Hand the collected series to the chart renderer.
    chart::render_property_overlay(&records, Path::new(PROPERTY_CHART_PATH))?;
    chart::render_tensile_strength(&records, Path::new(STRENGTH_CHART_PATH))?;
    println!("\nCharts written to {PROPERTY_CHART_PATH} and {STRENGTH_CHART_PATH}");

    Ok(())
}
