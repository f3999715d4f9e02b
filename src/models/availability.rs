//! Availability marks.
//!
//! Each person may mark any (day, shift) slot. Absent marks read as
//! [`AvailabilityMark::Available`]. A person's marks keep the order they
//! were entered in; forced placements are resolved in that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Day, Shift, Slot};

/// A person's stance on one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityMark {
    #[default]
    Available,
    /// Never placed here.
    Unavailable,
    /// Placed here when the workload fairness guard allows.
    Preferred,
    /// Placed here first, if eligible.
    Required,
}

/// Availability marks keyed by person id, then day, then shift.
///
/// Days and shifts under a person iterate in entry order.
///
/// Serializes as the nested `{ personId: { day: { shift: mark } } }`
/// document shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    marks: BTreeMap<String, IndexMap<Day, IndexMap<Shift, AvailabilityMark>>>,
}

impl Availability {
    /// Creates an empty table (everyone available everywhere).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a mark.
    pub fn set(
        &mut self,
        person_id: impl Into<String>,
        day: Day,
        shift: Shift,
        mark: AvailabilityMark,
    ) {
        self.marks
            .entry(person_id.into())
            .or_default()
            .entry(day)
            .or_default()
            .insert(shift, mark);
    }

    /// Builder: sets a mark and returns self.
    pub fn with(
        mut self,
        person_id: impl Into<String>,
        day: Day,
        shift: Shift,
        mark: AvailabilityMark,
    ) -> Self {
        self.set(person_id, day, shift, mark);
        self
    }

    /// The mark for a slot, defaulting to `Available`.
    pub fn mark(&self, person_id: &str, day: Day, shift: Shift) -> AvailabilityMark {
        self.marks
            .get(person_id)
            .and_then(|days| days.get(&day))
            .and_then(|shifts| shifts.get(&shift))
            .copied()
            .unwrap_or_default()
    }

    /// Slots a person explicitly marked with `mark`, in entry order.
    ///
    /// Days come in the order first entered, and shifts within a day
    /// likewise. Re-marking a slot keeps its original position.
    pub fn slots_marked(&self, person_id: &str, mark: AvailabilityMark) -> Vec<Slot> {
        let Some(days) = self.marks.get(person_id) else {
            return Vec::new();
        };
        days.iter()
            .flat_map(|(&day, shifts)| {
                shifts
                    .iter()
                    .filter(move |(_, m)| **m == mark)
                    .map(move |(&shift, _)| Slot::new(day, shift))
            })
            .collect()
    }

    /// Whether no marks are stored.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
