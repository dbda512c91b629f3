//! CSV Export functionality
//!
//! Exports a projection as one row per month, spreadsheet-compatible.

use std::io::Write;

use crate::error::{CoreflowError, CoreflowResult};
use crate::models::ProjectionSeries;

/// Export a projection to CSV with `Month,Nominal,Real` columns
pub fn export_projection_csv<W: Write>(
    projection: &ProjectionSeries,
    writer: &mut W,
) -> CoreflowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Month", "Nominal", "Real"])
        .map_err(|e| CoreflowError::Export(e.to_string()))?;

    for point in &projection.points {
        csv_writer
            .write_record(&[
                point.month.to_string(),
                format!("{:.2}", point.nominal_balance),
                format!("{:.2}", point.real_balance),
            ])
            .map_err(|e| CoreflowError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CoreflowError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::WealthProjector;

    #[test]
    fn test_export_projection_csv() {
        let projection = WealthProjector::new().project(10_000.0, 12, 0.07, 0.06).unwrap();
        let mut buffer = Vec::new();
        export_projection_csv(&projection, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Month,Nominal,Real");
        assert!(lines[1].starts_with("1,10000.00,"));
        assert!(lines[12].starts_with("12,"));
    }

    #[test]
    fn test_empty_projection_has_header_only() {
        let projection = WealthProjector::new().project(100.0, 0, 0.07, 0.06).unwrap();
        let mut buffer = Vec::new();
        export_projection_csv(&projection, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Month,Nominal,Real\n");
    }
}
