//! Per-attempt working state and the eligibility predicate.
//!
//! Every construction attempt owns a fresh `AttemptState`. Nothing in it
//! survives the attempt, so attempts are independent of each other.

use std::collections::HashMap;

use crate::models::{Assignment, AvailabilityMark, Day, Person, Schedule, Settings, Shift, Slot};

/// Roster under construction plus the counters the eligibility
/// predicate reads.
#[derive(Debug, Clone)]
pub struct AttemptState<'a> {
    settings: &'a Settings,
    assignments: Vec<Assignment>,
    /// Running weekly count, indexed like `settings.persons`.
    shift_count: Vec<u32>,
    /// Days worked, indexed like `settings.persons`.
    worked: Vec<[bool; 7]>,
    /// Night shifts held, indexed like `settings.persons`.
    nights: Vec<[bool; 7]>,
    slot_count: HashMap<Slot, u32>,
    manager_count: HashMap<Slot, u32>,
}

impl<'a> AttemptState<'a> {
    /// Creates an empty state for one attempt.
    pub fn new(settings: &'a Settings) -> Self {
        let n = settings.persons.len();
        Self {
            settings,
            assignments: Vec::new(),
            shift_count: vec![0; n],
            worked: vec![[false; 7]; n],
            nights: vec![[false; 7]; n],
            slot_count: HashMap::new(),
            manager_count: HashMap::new(),
        }
    }

    /// The settings this attempt schedules against.
    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Decides whether `person_id` may be placed into (day, shift) given
    /// the roster built so far. Unknown ids are never eligible.
    pub fn can_assign(&self, person_id: &str, day: Day, shift: Shift) -> bool {
        self.index_of(person_id)
            .is_some_and(|idx| self.can_assign_index(idx, day, shift))
    }

    /// Index-based form of [`can_assign`](Self::can_assign).
    pub(crate) fn can_assign_index(&self, idx: usize, day: Day, shift: Shift) -> bool {
        let Some(person) = self.settings.persons.get(idx) else {
            return false;
        };

        if self.shift_count[idx] >= person.max_shifts_per_week {
            return false;
        }
        if self.worked[idx][day.index()] {
            return false;
        }
        if self.settings.mark(&person.id, day, shift) == AvailabilityMark::Unavailable {
            return false;
        }

        let pairs = &self.settings.incompatible_pairs;
        let clash = self
            .assignments
            .iter()
            .filter(|a| a.is_in(day, shift))
            .any(|a| pairs.contains(&person.id, &a.person_id));
        if clash {
            return false;
        }

        // Nothing of any kind on the day after a night.
        if self.nights[idx][day.prev().index()] {
            return false;
        }
        shift != Shift::Night || !self.worked[idx][day.next().index()]
    }

    /// Records a placement. Performs no eligibility check.
    pub(crate) fn place(&mut self, idx: usize, day: Day, shift: Shift) {
        let settings = self.settings;
        let person = &settings.persons[idx];
        let slot = Slot::new(day, shift);

        self.assignments
            .push(Assignment::new(day, shift, person.id.clone()));
        self.shift_count[idx] += 1;
        self.worked[idx][day.index()] = true;
        if shift == Shift::Night {
            self.nights[idx][day.index()] = true;
        }
        *self.slot_count.entry(slot).or_insert(0) += 1;
        if person.is_manager {
            *self.manager_count.entry(slot).or_insert(0) += 1;
        }
    }

    /// People placed in a slot so far.
    pub fn slot_count(&self, slot: Slot) -> u32 {
        self.slot_count.get(&slot).copied().unwrap_or(0)
    }

    /// Managers placed in a slot so far.
    pub fn manager_count(&self, slot: Slot) -> u32 {
        self.manager_count.get(&slot).copied().unwrap_or(0)
    }

    /// Running weekly count of the person at `idx`.
    pub fn shift_count(&self, idx: usize) -> u32 {
        self.shift_count[idx]
    }

    /// Lowest running count among non-managers other than `idx`.
    ///
    /// `None` when there is no such worker.
    pub(crate) fn min_other_worker_count(&self, idx: usize) -> Option<u32> {
        self.settings
            .persons
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != idx && !p.is_manager)
            .map(|(i, _)| self.shift_count[i])
            .min()
    }

    /// Remaining capacity of a slot (0 for unconfigured days).
    pub(crate) fn remaining(&self, slot: Slot) -> u32 {
        let required = self.settings.required(slot.day, slot.shift).unwrap_or(0);
        required.saturating_sub(self.slot_count(slot))
    }

    pub(crate) fn person(&self, idx: usize) -> &'a Person {
        &self.settings.persons[idx]
    }

    fn index_of(&self, person_id: &str) -> Option<usize> {
        self.settings.persons.iter().position(|p| p.id == person_id)
    }

    /// Number of placements made so far.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Consumes the state, yielding the candidate roster.
    pub fn into_schedule(self) -> Schedule {
        Schedule {
            assignments: self.assignments,
            generation_attempts: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::new()
            .with_person(Person::worker("a", 2))
            .with_person(Person::worker("b", 5))
            .with_person(Person::manager("m", 5))
            .with_weekly_requirements(crate::models::ShiftRequirements::uniform(2))
    }

    fn idx(s: &Settings, id: &str) -> usize {
        s.persons.iter().position(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_unknown_person_ineligible() {
        let s = settings();
        let st = AttemptState::new(&s);
        assert!(!st.can_assign("ghost", Day::Monday, Shift::Morning));
        assert!(st.can_assign("a", Day::Monday, Shift::Morning));
    }

    #[test]
    fn test_weekly_cap() {
        let s = settings();
        let mut st = AttemptState::new(&s);
        let a = idx(&s, "a");
        st.place(a, Day::Monday, Shift::Morning);
        st.place(a, Day::Wednesday, Shift::Morning);
        assert!(!st.can_assign("a", Day::Friday, Shift::Morning));
    }

    #[test]
    fn test_zero_cap_never_eligible() {
        let s = Settings::new().with_person(Person::worker("z", 0));
        let st = AttemptState::new(&s);
        assert!(!st.can_assign("z", Day::Monday, Shift::Morning));
    }

    #[test]
    fn test_one_shift_per_day() {
        let s = settings();
        let mut st = AttemptState::new(&s);
        st.place(idx(&s, "b"), Day::Monday, Shift::Morning);
        assert!(!st.can_assign("b", Day::Monday, Shift::Afternoon));
        assert!(st.can_assign("b", Day::Tuesday, Shift::Afternoon));
    }

    #[test]
    fn test_unavailable_mark() {
        let s = settings().with_mark("b", Day::Monday, Shift::Night, AvailabilityMark::Unavailable);
        let st = AttemptState::new(&s);
        assert!(!st.can_assign("b", Day::Monday, Shift::Night));
        assert!(st.can_assign("b", Day::Monday, Shift::Morning));
    }

    #[test]
    fn test_incompatible_slot_mate() {
        let s = settings().with_incompatible("b", "a");
        let mut st = AttemptState::new(&s);
        st.place(idx(&s, "a"), Day::Monday, Shift::Morning);
        assert!(!st.can_assign("b", Day::Monday, Shift::Morning));
        assert!(st.can_assign("b", Day::Monday, Shift::Afternoon));
        assert!(st.can_assign("m", Day::Monday, Shift::Morning));
    }

    #[test]
    fn test_night_blocks_next_day() {
        let s = settings();
        let mut st = AttemptState::new(&s);
        st.place(idx(&s, "b"), Day::Sunday, Shift::Night);
        for shift in Shift::ALL {
            assert!(!st.can_assign("b", Day::Monday, shift));
        }
        assert!(st.can_assign("b", Day::Tuesday, Shift::Morning));
    }

    #[test]
    fn test_no_back_to_back_nights() {
        let s = settings();
        let mut st = AttemptState::new(&s);
        st.place(idx(&s, "b"), Day::Sunday, Shift::Night);
        assert!(!st.can_assign("b", Day::Monday, Shift::Night));
        assert!(st.can_assign("b", Day::Tuesday, Shift::Night));
    }

    #[test]
    fn test_night_needs_free_next_day() {
        let s = settings();
        let mut st = AttemptState::new(&s);
        st.place(idx(&s, "b"), Day::Sunday, Shift::Morning);
        assert!(!st.can_assign("b", Day::Saturday, Shift::Night));
        assert!(st.can_assign("b", Day::Saturday, Shift::Morning));
    }

    #[test]
    fn test_night_rule_wraps_week() {
        let s = settings();
        let mut st = AttemptState::new(&s);
        st.place(idx(&s, "b"), Day::Saturday, Shift::Night);
        assert!(!st.can_assign("b", Day::Sunday, Shift::Morning));
    }

    #[test]
    fn test_counters() {
        let s = settings();
        let mut st = AttemptState::new(&s);
        let slot = Slot::new(Day::Monday, Shift::Morning);
        st.place(idx(&s, "m"), Day::Monday, Shift::Morning);
        st.place(idx(&s, "a"), Day::Monday, Shift::Morning);
        assert_eq!(st.slot_count(slot), 2);
        assert_eq!(st.manager_count(slot), 1);
        assert_eq!(st.remaining(slot), 0);
        assert_eq!(st.min_other_worker_count(idx(&s, "b")), Some(1));
        assert_eq!(st.min_other_worker_count(idx(&s, "a")), Some(0));
        assert_eq!(st.into_schedule().assignment_count(), 2);
    }
}
