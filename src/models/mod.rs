//! Core data models for CoreFlow
//!
//! This module contains the plain data passed into and out of the engine:
//! profiles, allocation rules, budget amounts, projections, scenario deltas
//! and scorecards. Everything here is transient and recomputed per request.

pub mod allocation;
pub mod budget;
pub mod money;
pub mod profile;
pub mod projection;
pub mod scenario;
pub mod scorecard;

pub use allocation::AllocationRule;
pub use budget::BudgetResult;
pub use money::{Money, MoneyParseError};
pub use profile::{Lifestyle, Mood, Profile};
pub use projection::{ProjectionPoint, ProjectionSeries};
pub use scenario::{AdjustedBudget, Direction, ScenarioDelta};
pub use scorecard::{Grade, Scorecard};
