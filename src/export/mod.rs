//! Export module for CoreFlow
//!
//! Provides plan export in multiple formats:
//! - CSV: The month-by-month projection (spreadsheet-compatible)
//! - JSON: The full plan report, machine-readable
//! - YAML: The full plan report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_projection_csv;
pub use json::{export_plan_json, PlanExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;
