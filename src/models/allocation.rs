//! Allocation rule model
//!
//! One rule maps a (lifestyle, mood) pair to whole-number percentages of
//! income for necessities, wants and savings.

use serde::{Deserialize, Serialize};

use super::profile::{Lifestyle, Mood};

/// Percentage split of income across the three budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRule {
    pub lifestyle: Lifestyle,
    pub mood: Mood,
    pub necessities_pct: u8,
    pub wants_pct: u8,
    pub savings_pct: u8,
}

impl AllocationRule {
    /// Sum of the three percentages (100 for every rule in the table)
    pub const fn total_pct(&self) -> u32 {
        self.necessities_pct as u32 + self.wants_pct as u32 + self.savings_pct as u32
    }

    /// The split as `(necessities, wants, savings)`
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.necessities_pct, self.wants_pct, self.savings_pct)
    }
}
