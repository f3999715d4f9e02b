//! Scheduling input.
//!
//! `Settings` bundles everything one generation call needs: people,
//! per-day requirements, availability marks and incompatible pairs.
//! Its serde shape matches the settings document persisted by the
//! editing front end.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    Availability, AvailabilityMark, Day, IncompatiblePairs, Person, Shift, ShiftRequirements,
    Slot,
};

/// Input configuration for generation and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Display order only. Never used by scheduling.
    #[serde(default)]
    pub first_day_of_week: Day,
    /// Requirements per configured day. Days absent here have no slots.
    #[serde(default)]
    pub shift_requirements: BTreeMap<Day, ShiftRequirements>,
    /// People in list order. Order breaks ties during construction.
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub incompatible_pairs: IncompatiblePairs,
    #[serde(default)]
    pub availability: Availability,
}

impl Settings {
    /// Creates empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person.
    pub fn with_person(mut self, person: Person) -> Self {
        self.persons.push(person);
        self
    }

    /// Sets the requirements for one day.
    pub fn with_requirements(mut self, day: Day, requirements: ShiftRequirements) -> Self {
        self.shift_requirements.insert(day, requirements);
        self
    }

    /// Sets the headcount for one slot, configuring the day if needed.
    pub fn with_requirement(mut self, day: Day, shift: Shift, count: u32) -> Self {
        self.shift_requirements
            .entry(day)
            .or_default()
            .set(shift, count);
        self
    }

    /// Sets the same requirements on all seven days.
    pub fn with_weekly_requirements(mut self, requirements: ShiftRequirements) -> Self {
        for day in Day::ALL {
            self.shift_requirements.insert(day, requirements);
        }
        self
    }

    /// Adds an incompatible pair.
    pub fn with_incompatible(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.incompatible_pairs.add(a, b);
        self
    }

    /// Sets an availability mark.
    pub fn with_mark(
        mut self,
        person_id: impl Into<String>,
        day: Day,
        shift: Shift,
        mark: AvailabilityMark,
    ) -> Self {
        self.availability.set(person_id, day, shift, mark);
        self
    }

    /// Sets the display start of the week.
    pub fn with_first_day(mut self, day: Day) -> Self {
        self.first_day_of_week = day;
        self
    }

    /// Finds a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    /// Required headcount for a slot, `None` if its day is not configured.
    pub fn required(&self, day: Day, shift: Shift) -> Option<u32> {
        self.shift_requirements.get(&day).map(|r| r.get(shift))
    }

    /// The scheduling grid: every configured slot with its headcount,
    /// in day-then-shift order.
    pub fn slots(&self) -> Vec<(Slot, u32)> {
        self.shift_requirements
            .iter()
            .flat_map(|(&day, req)| {
                Shift::ALL
                    .into_iter()
                    .map(move |shift| (Slot::new(day, shift), req.get(shift)))
            })
            .collect()
    }

    /// Availability mark for a person and slot.
    #[inline]
    pub fn mark(&self, person_id: &str, day: Day, shift: Shift) -> AvailabilityMark {
        self.availability.mark(person_id, day, shift)
    }

    /// Days in display order, starting at `first_day_of_week`.
    pub fn display_days(&self) -> [Day; 7] {
        Day::week_starting(self.first_day_of_week)
    }

    /// Whether there is anything to schedule: at least one person and
    /// at least one configured day.
    pub fn is_schedulable(&self) -> bool {
        !self.persons.is_empty() && !self.shift_requirements.is_empty()
    }
}
