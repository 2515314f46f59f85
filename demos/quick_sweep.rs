use compositex::{report, Composite, FiberGeometry, SweepRange};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let geometry = FiberGeometry::new(0.5, 10.0, 0.3)?;
    let composite = Composite::silk_pga(geometry);
    let range = SweepRange::new(20, 40, 5)?;

    println!(
        "Critical length: {:.4} cm\n",
        composite.critical_length()
    );
    println!("{}", report::render_table(&composite.sweep(&range)));

    Ok(())
}
