//! Roster validation.
//!
//! Re-checks hard constraints on any roster, generated or hand-edited.
//! Three properties are reported:
//! - every configured slot holds exactly its required headcount
//! - no incompatible pair shares a slot
//! - nobody works twice on one day or beyond their weekly cap
//!
//! Rest after a night shift is enforced during construction but is not
//! part of these three flags. [`night_rest_violations`] checks it
//! separately for callers that want it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Day, Schedule, Settings, Shift, Slot, Violation, ViolationType};

/// Validation summary for one roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Every configured slot holds exactly its required headcount.
    pub all_shifts_assigned: bool,
    /// No person has two shifts on one day or exceeds their weekly cap.
    pub no_person_overloaded: bool,
    /// No incompatible pair shares a slot.
    pub no_incompatible_pairs: bool,
    /// Each individual finding, in deterministic order.
    #[serde(default)]
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Whether all three properties hold.
    pub fn is_valid(&self) -> bool {
        self.all_shifts_assigned && self.no_person_overloaded && self.no_incompatible_pairs
    }

    /// Findings of one type.
    pub fn violations_of(&self, violation_type: ViolationType) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.violation_type == violation_type)
            .collect()
    }
}

/// Validates a roster against its settings.
///
/// Pure: the same inputs always give the same result.
pub fn validate(schedule: &Schedule, settings: &Settings) -> ValidationResult {
    let mut violations = Vec::new();

    let staffing = check_staffing(schedule, settings);
    let all_shifts_assigned = staffing.is_empty();
    violations.extend(staffing);

    let pairs = check_incompatible_pairs(schedule, settings);
    let no_incompatible_pairs = pairs.is_empty();
    violations.extend(pairs);

    let load = check_person_load(schedule, settings);
    let no_person_overloaded = load.is_empty();
    violations.extend(load);

    ValidationResult {
        all_shifts_assigned,
        no_person_overloaded,
        no_incompatible_pairs,
        violations,
    }
}

fn check_staffing(schedule: &Schedule, settings: &Settings) -> Vec<Violation> {
    let mut found = Vec::new();
    for (slot, required) in settings.slots() {
        let assigned = schedule.slot_count(slot.day, slot.shift);
        let required = required as usize;
        if assigned == required {
            continue;
        }
        let (violation_type, label) = if assigned < required {
            (ViolationType::Understaffed, "understaffed")
        } else {
            (ViolationType::Overstaffed, "overstaffed")
        };
        found.push(Violation::new(
            violation_type,
            Some(slot),
            Vec::new(),
            format!("{slot} is {label}: {assigned} of {required} assigned"),
        ));
    }
    found
}

fn check_incompatible_pairs(schedule: &Schedule, settings: &Settings) -> Vec<Violation> {
    let mut found = Vec::new();
    for pair in &settings.incompatible_pairs {
        let slots_of = |id: &str| -> BTreeSet<Slot> {
            schedule
                .assignments_for_person(id)
                .iter()
                .map(|a| a.slot())
                .collect()
        };
        let first = slots_of(pair.first());
        let second = slots_of(pair.second());
        for &slot in first.intersection(&second) {
            found.push(Violation::new(
                ViolationType::IncompatiblePair,
                Some(slot),
                vec![pair.first().to_string(), pair.second().to_string()],
                format!(
                    "incompatible pair {} and {} share {slot}",
                    pair.first(),
                    pair.second()
                ),
            ));
        }
    }
    found
}

fn check_person_load(schedule: &Schedule, settings: &Settings) -> Vec<Violation> {
    let mut found = Vec::new();
    for person in &settings.persons {
        let mine = schedule.assignments_for_person(&person.id);

        let mut per_day: BTreeMap<Day, usize> = BTreeMap::new();
        for a in &mine {
            *per_day.entry(a.day).or_insert(0) += 1;
        }
        for (day, count) in per_day.into_iter().filter(|(_, c)| *c > 1) {
            found.push(Violation::new(
                ViolationType::DoubleShift,
                None,
                vec![person.id.clone()],
                format!("{} has {count} shifts on {day}", person.id),
            ));
        }

        if mine.len() > person.max_shifts_per_week as usize {
            found.push(Violation::new(
                ViolationType::OverMaxShifts,
                None,
                vec![person.id.clone()],
                format!(
                    "{} has {} shifts, weekly cap is {}",
                    person.id,
                    mine.len(),
                    person.max_shifts_per_week
                ),
            ));
        }
    }
    found
}

/// Finds shifts worked on the day after a night shift (cyclic).
///
/// Not folded into [`validate`]; hand edits can break this rule without
/// affecting the three summary flags.
pub fn night_rest_violations(schedule: &Schedule) -> Vec<Violation> {
    let nights: BTreeSet<(&str, Day)> = schedule
        .assignments
        .iter()
        .filter(|a| a.shift == Shift::Night)
        .map(|a| (a.person_id.as_str(), a.day))
        .collect();

    schedule
        .assignments
        .iter()
        .filter(|a| nights.contains(&(a.person_id.as_str(), a.day.prev())))
        .map(|a| {
            Violation::new(
                ViolationType::NightRest,
                Some(a.slot()),
                vec![a.person_id.clone()],
                format!(
                    "{} works {} after a night shift on {}",
                    a.person_id,
                    a.slot(),
                    a.day.prev()
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    fn settings() -> Settings {
        Settings::new()
            .with_person(Person::worker("a", 2))
            .with_person(Person::worker("b", 5))
            .with_incompatible("a", "b")
            .with_requirement(Day::Monday, Shift::Morning, 2)
    }

    #[test]
    fn test_valid_roster() {
        let s = Settings::new()
            .with_person(Person::worker("a", 2))
            .with_person(Person::worker("c", 2))
            .with_requirement(Day::Monday, Shift::Morning, 2);
        let schedule = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "a")
            .with_assignment(Day::Monday, Shift::Morning, "c");
        let r = validate(&schedule, &s);
        assert!(r.is_valid());
        assert!(r.violations.is_empty());
    }

    #[test]
    fn test_understaffed() {
        let schedule = Schedule::new().with_assignment(Day::Monday, Shift::Morning, "a");
        let r = validate(&schedule, &settings());
        assert!(!r.all_shifts_assigned);
        assert_eq!(r.violations_of(ViolationType::Understaffed).len(), 1);
        assert!(r.no_person_overloaded);
        assert!(r.no_incompatible_pairs);
    }

    #[test]
    fn test_overstaffed_fails_exact_match() {
        let s = Settings::new()
            .with_person(Person::worker("a", 5))
            .with_person(Person::worker("b", 5))
            .with_requirement(Day::Monday, Shift::Morning, 1);
        let schedule = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "a")
            .with_assignment(Day::Monday, Shift::Morning, "b");
        let r = validate(&schedule, &s);
        assert!(!r.all_shifts_assigned);
        assert_eq!(r.violations_of(ViolationType::Overstaffed).len(), 1);
    }

    #[test]
    fn test_incompatible_pair_flagged() {
        let schedule = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "b")
            .with_assignment(Day::Monday, Shift::Morning, "a");
        let r = validate(&schedule, &settings());
        assert!(!r.no_incompatible_pairs);
        assert!(r.all_shifts_assigned);
        let v = r.violations_of(ViolationType::IncompatiblePair);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].slot, Some(Slot::new(Day::Monday, Shift::Morning)));
    }

    #[test]
    fn test_double_shift_flagged() {
        let schedule = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "b")
            .with_assignment(Day::Monday, Shift::Night, "b");
        let r = validate(&schedule, &settings());
        assert!(!r.no_person_overloaded);
        assert_eq!(r.violations_of(ViolationType::DoubleShift).len(), 1);
    }

    #[test]
    fn test_weekly_cap_flagged() {
        let schedule = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "a")
            .with_assignment(Day::Tuesday, Shift::Morning, "a")
            .with_assignment(Day::Wednesday, Shift::Morning, "a");
        let r = validate(&schedule, &settings());
        assert!(!r.no_person_overloaded);
        assert_eq!(r.violations_of(ViolationType::OverMaxShifts).len(), 1);
    }

    #[test]
    fn test_night_rest_not_in_flags() {
        let s = Settings::new()
            .with_person(Person::worker("a", 5))
            .with_requirement(Day::Sunday, Shift::Night, 1)
            .with_requirement(Day::Monday, Shift::Morning, 1);
        let schedule = Schedule::new()
            .with_assignment(Day::Sunday, Shift::Night, "a")
            .with_assignment(Day::Monday, Shift::Morning, "a");
        let r = validate(&schedule, &s);
        assert!(r.is_valid());

        let rest = night_rest_violations(&schedule);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].slot, Some(Slot::new(Day::Monday, Shift::Morning)));
    }

    #[test]
    fn test_night_rest_wraps_week() {
        let schedule = Schedule::new()
            .with_assignment(Day::Saturday, Shift::Night, "a")
            .with_assignment(Day::Sunday, Shift::Afternoon, "a");
        assert_eq!(night_rest_violations(&schedule).len(), 1);
    }

    #[test]
    fn test_unknown_people_ignored_for_load() {
        let schedule = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "ghost")
            .with_assignment(Day::Monday, Shift::Night, "ghost");
        let r = validate(&schedule, &settings());
        assert!(r.no_person_overloaded);
    }

    #[test]
    fn test_validate_idempotent() {
        let schedule = Schedule::new()
            .with_assignment(Day::Monday, Shift::Morning, "a")
            .with_assignment(Day::Monday, Shift::Morning, "b")
            .with_assignment(Day::Monday, Shift::Night, "b");
        let s = settings();
        assert_eq!(validate(&schedule, &s), validate(&schedule, &s));
    }

    #[test]
    fn test_empty_everything() {
        let r = validate(&Schedule::new(), &Settings::new());
        assert!(r.is_valid());
    }
}
