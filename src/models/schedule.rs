//! Schedule (roster) model.
//!
//! A schedule is the ordered list of (day, shift, person) assignments for
//! one week. It may be understaffed; validation reports that separately.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Day, Shift, Slot};

/// A weekly roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Assignments in placement order.
    pub assignments: Vec<Assignment>,
    /// Construction attempts run by the search that produced this roster.
    #[serde(default)]
    pub generation_attempts: usize,
}

/// One person placed into one slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub day: Day,
    pub shift: Shift,
    pub person_id: String,
}

/// A constraint violation found by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Slot concerned, if the violation is slot-local.
    pub slot: Option<Slot>,
    /// People concerned.
    pub person_ids: Vec<String>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// Fewer people than required in a slot.
    Understaffed,
    /// More people than required in a slot.
    Overstaffed,
    /// A person holds two or more shifts on one day.
    DoubleShift,
    /// A person exceeds their weekly cap.
    OverMaxShifts,
    /// An incompatible pair shares a slot.
    IncompatiblePair,
    /// A shift on the day after a night shift.
    NightRest,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(day: Day, shift: Shift, person_id: impl Into<String>) -> Self {
        Self {
            day,
            shift,
            person_id: person_id.into(),
        }
    }

    /// The slot this assignment occupies.
    #[inline]
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.shift)
    }

    /// Whether this assignment sits in (day, shift).
    #[inline]
    pub fn is_in(&self, day: Day, shift: Shift) -> bool {
        self.day == day && self.shift == shift
    }
}

impl Violation {
    pub(crate) fn new(
        violation_type: ViolationType,
        slot: Option<Slot>,
        person_ids: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            slot,
            person_ids,
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Builder: appends an assignment and returns self.
    pub fn with_assignment(mut self, day: Day, shift: Shift, person_id: impl Into<String>) -> Self {
        self.add_assignment(Assignment::new(day, shift, person_id));
        self
    }

    /// Whether the exact (day, shift, person) triple is present.
    pub fn contains(&self, day: Day, shift: Shift, person_id: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.is_in(day, shift) && a.person_id == person_id)
    }

    /// Assignments in one slot.
    pub fn assignments_for_slot(&self, day: Day, shift: Shift) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.is_in(day, shift))
            .collect()
    }

    /// Number of people in one slot.
    pub fn slot_count(&self, day: Day, shift: Shift) -> usize {
        self.assignments.iter().filter(|a| a.is_in(day, shift)).count()
    }

    /// Assignments held by one person.
    pub fn assignments_for_person(&self, person_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.person_id == person_id)
            .collect()
    }

    /// Weekly shift count per person (people without shifts are absent).
    pub fn shift_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for a in &self.assignments {
            *counts.entry(a.person_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether there are no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
