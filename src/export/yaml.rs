//! YAML Export functionality
//!
//! Exports a plan report to YAML format for human-readable sharing.

use std::io::Write;

use crate::error::{CoreflowError, CoreflowResult};
use crate::export::json::PlanExport;

/// Export a plan to YAML format
pub fn export_plan_yaml<W: Write>(export: &PlanExport, writer: &mut W) -> CoreflowResult<()> {
    let header = [
        "# CoreFlow Financial Plan Export".to_string(),
        format!("# Generated: {}", export.exported_at),
        format!("# App Version: {}", export.app_version),
        "#".to_string(),
        "# Projections are estimates under fixed return and inflation assumptions.".to_string(),
    ];
    for line in header {
        writeln!(writer, "{}", line).map_err(|e| CoreflowError::Export(e.to_string()))?;
    }
    writeln!(writer).map_err(|e| CoreflowError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| CoreflowError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::models::{Lifestyle, Mood, Profile};
    use crate::reports::PlanReport;

    #[test]
    fn test_yaml_export() {
        let profile = Profile::new(Lifestyle::Homemaker, Mood::Splurge, 25_000.0);
        let report = PlanReport::generate(&Engine::default(), &profile, "$").unwrap();
        let export = PlanExport::new(report, "$");

        let mut buffer = Vec::new();
        export_plan_yaml(&export, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# CoreFlow Financial Plan Export"));
        assert!(text.contains("lifestyle: homemaker"));
        assert!(text.contains("grade: F"));

        let parsed: PlanExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.report.budget, export.report.budget);
    }
}
