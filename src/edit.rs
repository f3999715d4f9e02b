//! Manual roster edits.
//!
//! Edits never check eligibility. Run [`validate`](crate::validation::validate)
//! afterwards to surface any violations they introduce.

use crate::models::{Assignment, Day, Schedule, Shift};

/// Replaces `old_person_id` with `new_person_id` in (day, shift).
///
/// Any existing placement of `new_person_id` in that slot is removed
/// first so the triple stays unique. Reassigning a person to themself is
/// a no-op. If `old_person_id` holds no placement there, the only effect
/// is that removal.
pub fn reassign(
    mut schedule: Schedule,
    day: Day,
    shift: Shift,
    old_person_id: &str,
    new_person_id: &str,
) -> Schedule {
    if old_person_id == new_person_id {
        return schedule;
    }
    schedule
        .assignments
        .retain(|a| !(a.is_in(day, shift) && a.person_id == new_person_id));
    for a in schedule
        .assignments
        .iter_mut()
        .filter(|a| a.is_in(day, shift) && a.person_id == old_person_id)
    {
        a.person_id = new_person_id.to_string();
    }
    schedule
}

/// Places `person_id` into an open position of (day, shift).
///
/// Unchanged if the exact triple already exists.
pub fn assign(mut schedule: Schedule, day: Day, shift: Shift, person_id: &str) -> Schedule {
    if !schedule.contains(day, shift, person_id) {
        schedule.add_assignment(Assignment::new(day, shift, person_id));
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Settings};
    use crate::validation::validate;

    fn base() -> Schedule {
        Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "a")
            .with_assignment(Day::Monday, Shift::Morning, "b")
            .with_assignment(Day::Tuesday, Shift::Morning, "a")
    }

    #[test]
    fn test_reassign_replaces_in_place() {
        let s = reassign(base(), Day::Monday, Shift::Morning, "a", "c");
        assert_eq!(s.assignments[0], Assignment::new(Day::Monday, Shift::Morning, "c"));
        assert!(s.contains(Day::Tuesday, Shift::Morning, "a"));
        assert_eq!(s.assignment_count(), 3);
    }

    #[test]
    fn test_reassign_to_slot_mate_drops_duplicate() {
        let s = reassign(base(), Day::Monday, Shift::Morning, "a", "b");
        assert_eq!(s.slot_count(Day::Monday, Shift::Morning), 1);
        assert!(s.contains(Day::Monday, Shift::Morning, "b"));
        assert!(!s.contains(Day::Monday, Shift::Morning, "a"));
    }

    #[test]
    fn test_reassign_self_is_noop() {
        let s = reassign(base(), Day::Monday, Shift::Morning, "a", "a");
        assert_eq!(s, base());
    }

    #[test]
    fn test_assign_into_empty_position() {
        let s = assign(base(), Day::Friday, Shift::Night, "b");
        assert!(s.contains(Day::Friday, Shift::Night, "b"));
        let again = assign(s.clone(), Day::Friday, Shift::Night, "b");
        assert_eq!(again, s);
    }

    #[test]
    fn test_edits_skip_checks_but_validator_sees_them() {
        let settings = Settings::new()
            .with_person(Person::worker("a", 5))
            .with_person(Person::worker("b", 5))
            .with_incompatible("a", "b")
            .with_requirement(Day::Monday, Shift::Morning, 2);
        let s = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "a")
            .with_assignment(Day::Monday, Shift::Morning, "x");
        assert!(validate(&s, &settings).no_incompatible_pairs);

        let s = reassign(s, Day::Monday, Shift::Morning, "x", "b");
        assert!(!validate(&s, &settings).no_incompatible_pairs);
    }
}
