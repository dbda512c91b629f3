//! Configuration module for CoreFlow
//!
//! This module provides configuration management including:
//! - The read-only allocation rule table
//! - Overridable economic assumptions
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod assumptions;
pub mod paths;
pub mod rules;
pub mod settings;

pub use assumptions::Assumptions;
pub use paths::CoreflowPaths;
pub use settings::Settings;
