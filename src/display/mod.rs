//! Display formatting for terminal output
//!
//! Provides utilities for formatting engine outputs for terminal display,
//! including bars, percentages and signed deltas.

pub mod report;

pub use report::{
    double_separator, format_bar, format_delta, format_money_colored, format_percentage, separator,
};
