//! JSON Export functionality
//!
//! Exports a complete plan report to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CoreflowError, CoreflowResult};
use crate::reports::PlanReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A plan report wrapped with export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Display currency symbol the amounts were reported in
    pub currency_symbol: String,

    pub report: PlanReport,
}

impl PlanExport {
    /// Wrap a report for export
    pub fn new(report: PlanReport, currency_symbol: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: currency_symbol.to_string(),
            report,
        }
    }
}

/// Export a plan to JSON
pub fn export_plan_json<W: Write>(
    export: &PlanExport,
    writer: &mut W,
    pretty: bool,
) -> CoreflowResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| CoreflowError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| CoreflowError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::models::{Lifestyle, Mood, Profile};

    fn export() -> PlanExport {
        let profile = Profile::new(Lifestyle::Freelancer, Mood::Disciplined, 60_000.0);
        let report = PlanReport::generate(&Engine::default(), &profile, "₹").unwrap();
        PlanExport::new(report, "₹")
    }

    #[test]
    fn test_export_round_trip() {
        let original = export();
        let mut buffer = Vec::new();
        export_plan_json(&original, &mut buffer, false).unwrap();

        let parsed: PlanExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.report.budget, original.report.budget);
        assert_eq!(parsed.report.projection.len(), 12);
        assert_eq!(parsed.report.scorecard.grade, original.report.scorecard.grade);
    }

    #[test]
    fn test_export_field_names() {
        let mut buffer = Vec::new();
        export_plan_json(&export(), &mut buffer, true).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"lifestyle\": \"freelancer\""));
        assert!(text.contains("\"mood\": \"disciplined\""));
        assert!(text.contains("\"nominal_balance\""));
        assert!(text.contains("\"direction\": \"gain\""));
    }
}
