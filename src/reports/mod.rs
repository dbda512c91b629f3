//! Reports module for CoreFlow
//!
//! Bundles engine outputs into printable, exportable reports.

pub mod plan;

pub use plan::PlanReport;
