//! Six-phase randomized construction of one candidate roster.
//!
//! # Algorithm
//!
//! 1. Forced: place every `required` mark that passes eligibility,
//!    in person-list order, then each person's mark entry order.
//! 2. Shuffle: draw a fresh random order of people and of slots.
//! 3. Manager backfill: give each under-capacity slot with no manager
//!    one manager chosen uniformly among the eligible.
//! 4. Preferred: place `preferred` marks, guarded so nobody runs more
//!    than one shift ahead of the least-loaded other worker.
//! 5. Worker fill: least-loaded eligible non-managers fill the gaps.
//! 6. Manager fill: least-loaded eligible managers fill what is left.
//!
//! Phases only add placements. Every placement re-checks eligibility
//! against the roster built so far.
//!
//! # Complexity
//! O(slots × persons × assignments) per attempt.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::trace;

use super::AttemptState;
use crate::models::{AvailabilityMark, Schedule, Settings, Slot};

/// Builds one candidate roster.
///
/// All randomness comes from `rng`; the same settings and rng state
/// produce the same roster.
pub fn construct<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Schedule {
    let mut state = AttemptState::new(settings);

    place_required(&mut state);
    trace!(placed = state.assignment_count(), "forced placements done");

    let mut people: Vec<usize> = (0..settings.persons.len()).collect();
    people.shuffle(rng);
    let mut slots: Vec<Slot> = settings.slots().into_iter().map(|(slot, _)| slot).collect();
    slots.shuffle(rng);

    backfill_managers(&mut state, &slots, rng);
    trace!(placed = state.assignment_count(), "manager backfill done");

    place_preferred(&mut state, &people, rng);
    trace!(placed = state.assignment_count(), "preferred placements done");

    fill_least_loaded(&mut state, &slots, false);
    trace!(placed = state.assignment_count(), "worker fill done");

    fill_least_loaded(&mut state, &slots, true);
    trace!(placed = state.assignment_count(), "manager fill done");

    state.into_schedule()
}

/// Phase 1. Capacity is not checked; a required mark wins its slot
/// whenever the person is eligible. A person's conflicting marks are
/// settled by entry order.
fn place_required(state: &mut AttemptState<'_>) {
    let settings = state.settings();
    for (idx, person) in settings.persons.iter().enumerate() {
        for slot in settings
            .availability
            .slots_marked(&person.id, AvailabilityMark::Required)
        {
            if state.can_assign_index(idx, slot.day, slot.shift) {
                state.place(idx, slot.day, slot.shift);
            }
        }
    }
}

/// Phase 3.
fn backfill_managers<R: Rng + ?Sized>(state: &mut AttemptState<'_>, slots: &[Slot], rng: &mut R) {
    let settings = state.settings();
    for &slot in slots {
        if state.remaining(slot) == 0 || state.manager_count(slot) > 0 {
            continue;
        }
        let eligible: Vec<usize> = settings
            .persons
            .iter()
            .enumerate()
            .filter(|(idx, p)| p.is_manager && state.can_assign_index(*idx, slot.day, slot.shift))
            .map(|(idx, _)| idx)
            .collect();
        if let Some(&idx) = eligible.choose(rng) {
            state.place(idx, slot.day, slot.shift);
        }
    }
}

/// Phase 4.
fn place_preferred<R: Rng + ?Sized>(state: &mut AttemptState<'_>, people: &[usize], rng: &mut R) {
    let settings = state.settings();
    for &idx in people {
        let person = state.person(idx);
        let mut preferred = settings
            .availability
            .slots_marked(&person.id, AvailabilityMark::Preferred);
        preferred.shuffle(rng);

        for slot in preferred {
            if !state.can_assign_index(idx, slot.day, slot.shift) || state.remaining(slot) == 0 {
                continue;
            }
            let within_guard = state
                .min_other_worker_count(idx)
                .map_or(true, |min| state.shift_count(idx) <= min + 1);
            if within_guard {
                state.place(idx, slot.day, slot.shift);
            }
        }
    }
}

/// Phases 5 and 6: least-loaded first, ties by person-list order.
fn fill_least_loaded(state: &mut AttemptState<'_>, slots: &[Slot], managers: bool) {
    let settings = state.settings();
    for &slot in slots {
        if state.remaining(slot) == 0 {
            continue;
        }
        let mut candidates: Vec<usize> = settings
            .persons
            .iter()
            .enumerate()
            .filter(|(idx, p)| {
                p.is_manager == managers && state.can_assign_index(*idx, slot.day, slot.shift)
            })
            .map(|(idx, _)| idx)
            .collect();
        candidates.sort_by_key(|&idx| state.shift_count(idx));

        for idx in candidates {
            if state.remaining(slot) == 0 {
                break;
            }
            // Earlier picks in this slot can make later ones incompatible.
            if state.can_assign_index(idx, slot.day, slot.shift) {
                state.place(idx, slot.day, slot.shift);
            }
        }
    }
}
