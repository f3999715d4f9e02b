//! Per-day staffing requirements.

use serde::{Deserialize, Serialize};

use super::Shift;

/// Required headcount for each shift of one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequirements {
    #[serde(default)]
    pub morning: u32,
    #[serde(default)]
    pub afternoon: u32,
    #[serde(default)]
    pub night: u32,
}

impl ShiftRequirements {
    /// Creates requirements from explicit headcounts.
    pub fn new(morning: u32, afternoon: u32, night: u32) -> Self {
        Self {
            morning,
            afternoon,
            night,
        }
    }

    /// Same headcount for every shift.
    pub fn uniform(count: u32) -> Self {
        Self::new(count, count, count)
    }

    /// Headcount for a shift.
    #[inline]
    pub fn get(&self, shift: Shift) -> u32 {
        match shift {
            Shift::Morning => self.morning,
            Shift::Afternoon => self.afternoon,
            Shift::Night => self.night,
        }
    }

    /// Sets the headcount for a shift.
    pub fn set(&mut self, shift: Shift, count: u32) {
        match shift {
            Shift::Morning => self.morning = count,
            Shift::Afternoon => self.afternoon = count,
            Shift::Night => self.night = count,
        }
    }

    /// Builder: sets one shift's headcount.
    pub fn with(mut self, shift: Shift, count: u32) -> Self {
        self.set(shift, count);
        self
    }

    /// Total headcount across the day.
    pub fn total(&self) -> u32 {
        self.morning + self.afternoon + self.night
    }
}
