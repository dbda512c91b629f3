//! CoreFlow - Personal finance calculator engine
//!
//! This library splits a monthly income into necessities, wants and savings
//! from a lifestyle and spending mood, projects the savings forward with
//! compounding and inflation, simulates what-if scenarios, grades the plan
//! and writes a short narrative about it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Allocation rules, assumptions, paths and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, profile, budget, projection, scenario)
//! - `services`: Calculation layer (allocation, projection, scenarios, grading, narrative)
//! - `engine`: Facade over the services under one set of assumptions
//! - `reports`: The combined plan report
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the `coreflow` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use coreflow::models::{Lifestyle, Mood, Profile};
//! use coreflow::Engine;
//!
//! let engine = Engine::default();
//! let profile = Profile::new(Lifestyle::Student, Mood::Balanced, 20_000.0);
//! let budget = engine.allocate(&profile)?;
//! let projection = engine.project_savings(budget.savings.to_f64())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use engine::Engine;
pub use error::{CoreflowError, CoreflowResult};
