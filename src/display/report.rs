//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the plan report and CLI handlers.

use crate::models::{Direction, Money, ScenarioDelta};

/// Format a signed amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount.format_with_symbol(symbol)) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m+{}\x1b[0m", amount.format_with_symbol(symbol)) // Green for positive
    } else {
        amount.format_with_symbol(symbol)
    }
}

/// Format a scenario delta as "+₹1,234 (gain)" / "-₹1,234 (loss)"
pub fn format_delta(delta: &ScenarioDelta, symbol: &str) -> String {
    let magnitude = Money::from_f64(delta.magnitude()).format_rounded(symbol);
    match delta.direction {
        Direction::Gain => format!("+{} (gain)", magnitude),
        Direction::Loss => format!("-{} (loss)", magnitude),
    }
}

/// Format a fraction (0.0 - 1.0) as a percentage with appropriate precision
pub fn format_percentage(fraction: f64) -> String {
    let pct = fraction * 100.0;
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
