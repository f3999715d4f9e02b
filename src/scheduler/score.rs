//! Roster quality score.
//!
//! | Component | Weight |
//! |-----------|--------|
//! | Every configured slot staffed exactly | 1000 (once) |
//! | Configured slot with at least one manager | 100 each |
//! | Assignment on a `preferred` mark | 10 each |
//!
//! The combination is flat-weighted, not lexicographic. With more than
//! nine manager-covered slots, coverage can outweigh full staffing.

use crate::models::{AvailabilityMark, Schedule, Settings};

/// Weight of full staffing.
pub const FULL_STAFFING_WEIGHT: u64 = 1000;
/// Weight per manager-covered slot.
pub const MANAGER_SLOT_WEIGHT: u64 = 100;
/// Weight per satisfied preference.
pub const PREFERRED_WEIGHT: u64 = 10;

/// Score breakdown for one roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleScore {
    /// Every configured slot holds exactly its required headcount.
    pub fully_staffed: bool,
    /// Configured slots with at least one manager.
    pub manager_slots: usize,
    /// Assignments matching a `preferred` mark.
    pub preferred_hits: usize,
}

impl ScheduleScore {
    /// Scores a roster against its settings.
    pub fn calculate(schedule: &Schedule, settings: &Settings) -> Self {
        let manager_slots = settings
            .slots()
            .iter()
            .filter(|(slot, _)| {
                schedule
                    .assignments_for_slot(slot.day, slot.shift)
                    .iter()
                    .any(|a| settings.person(&a.person_id).is_some_and(|p| p.is_manager))
            })
            .count();

        let preferred_hits = schedule
            .assignments
            .iter()
            .filter(|a| settings.mark(&a.person_id, a.day, a.shift) == AvailabilityMark::Preferred)
            .count();

        Self {
            fully_staffed: is_fully_staffed(schedule, settings),
            manager_slots,
            preferred_hits,
        }
    }

    /// Scalar objective. Higher is better.
    pub fn total(&self) -> u64 {
        let staffed = if self.fully_staffed {
            FULL_STAFFING_WEIGHT
        } else {
            0
        };
        staffed
            + MANAGER_SLOT_WEIGHT * self.manager_slots as u64
            + PREFERRED_WEIGHT * self.preferred_hits as u64
    }
}

/// Whether every configured slot holds exactly its required headcount.
pub fn is_fully_staffed(schedule: &Schedule, settings: &Settings) -> bool {
    settings
        .slots()
        .iter()
        .all(|(slot, required)| schedule.slot_count(slot.day, slot.shift) == *required as usize)
}
