//! Financial health grade and scorecard models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade for a budget's financial health
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// The grade letter
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Badge shown next to the letter
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::A => "💪",
            Self::B => "👍",
            Self::C => "🙂",
            Self::D => "👀",
            Self::F => "💸",
        }
    }

    /// One-line insight for this grade
    pub const fn comment(&self) -> &'static str {
        match self {
            Self::A => "Excellent! Your savings rate is exceptional.",
            Self::B => "Great job! You are on track with the recommended savings rate.",
            Self::C => "Good start! Aiming for 20% will accelerate your goals.",
            Self::D => "There's room for improvement. Try reallocating from 'Wants'.",
            Self::F => "Warning! Your current savings rate is critically low.",
        }
    }

    /// A or B
    pub const fn is_strong(&self) -> bool {
        matches!(self, Self::A | Self::B)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.letter())
    }
}

/// Grade plus the ratios of the graded budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub grade: Grade,
    /// Savings as a fraction of income
    pub savings_rate: f64,
    /// Months of necessity spending covered by one projection horizon of savings
    pub coverage_months: f64,
    /// This month's savings toward the emergency-fund goal, capped at 1.0
    pub emergency_fund_progress: f64,
}

impl Scorecard {
    pub fn comment(&self) -> &'static str {
        self.grade.comment()
    }

    /// Whether one month of saving already meets the emergency-fund goal
    pub fn emergency_fund_complete(&self) -> bool {
        self.emergency_fund_progress >= 1.0
    }
}
