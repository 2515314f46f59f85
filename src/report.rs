//! Fixed-width table rendering for the property series.

use std::fmt::Write;

use crate::sweep::PropertyRecord;

/// Total width of the rendered table, used for the separator line.
const TABLE_WIDTH: usize = 95;

/// Render the table header and separator line.
#[must_use]
pub fn render_header() -> String {
    let mut output = String::new();
    writeln!(
        &mut output,
        "{:<12} {:<20} {:<20} {:<20} {:<20}",
        "Silk (%)",
        "Elastic Modulus (GPa)",
        "Poisson's Ratio",
        "Density (g/cm\u{b3})",
        "Tensile Strength (MPa)",
    )
    .expect("writing to string cannot fail");
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output
}

/// Render a single table row for one evaluated percentage.
///
/// Moduli, ratios and densities are shown with three decimal places; the
/// tensile strength with one, mirroring the precision the estimates carry.
#[must_use]
pub fn render_row(record: &PropertyRecord) -> String {
    format!(
        "{:<12} {:<20.3} {:<20.3} {:<20.3} {:<20.1}",
        record.percentage,
        record.elastic_modulus,
        record.poisson_ratio,
        record.density,
        record.tensile_strength,
    )
}

/// Render the complete table for a result series.
#[must_use]
pub fn render_table(records: &[PropertyRecord]) -> String {
    let mut output = render_header();
    for record in records {
        output.push('\n');
        output.push_str(&render_row(record));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_every_column() {
        let header = render_header();
        assert!(header.contains("Silk (%)"));
        assert!(header.contains("Elastic Modulus (GPa)"));
        assert!(header.contains("Poisson's Ratio"));
        assert!(header.contains("Density (g/cm\u{b3})"));
        assert!(header.contains("Tensile Strength (MPa)"));
        assert!(header.contains("----"));
    }

    #[test]
    fn row_formats_values_with_expected_precision() {
        let record = PropertyRecord {
            percentage: 30,
            elastic_modulus: 3.329_268,
            poisson_ratio: 0.333,
            density: 1.42,
            tensile_strength: 209.5,
        };
        let row = render_row(&record);
        assert!(row.starts_with("30"));
        assert!(row.contains("3.329"));
        assert!(row.contains("0.333"));
        assert!(row.contains("1.420"));
        assert!(row.contains("209.5"));
    }

    #[test]
    fn table_has_one_line_per_record_plus_header() {
        let record = PropertyRecord {
            percentage: 20,
            elastic_modulus: 3.2,
            poisson_ratio: 0.332,
            density: 1.43,
            tensile_strength: 168.0,
        };
        let table = render_table(&[record, record]);
        assert_eq!(table.lines().count(), 4);
    }
}
