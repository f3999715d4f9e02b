//! Roster generation.
//!
//! A randomized constructive heuristic repeated under a fixed attempt
//! budget, keeping the best-scoring candidate.
//!
//! # Algorithm
//!
//! [`construct`] builds one candidate in six greedy phases (forced,
//! shuffle, manager backfill, preferred with fairness guard, worker fill,
//! manager fill). [`RosterGenerator`] repeats it, scores each candidate
//! with [`ScheduleScore`] and stops early on full staffing if configured.
//!
//! Each attempt builds its own [`AttemptState`], so attempts share no
//! mutable state and could be evaluated independently.
//!
//! # Complexity
//! O(attempts × slots × persons²) in the worst case. Intended for tens of
//! people and up to 21 weekly slots.

mod construct;
mod score;
mod search;
mod state;

pub use construct::construct;
pub use score::{
    is_fully_staffed, ScheduleScore, FULL_STAFFING_WEIGHT, MANAGER_SLOT_WEIGHT, PREFERRED_WEIGHT,
};
pub use search::{generate, GenerationOutcome, RosterGenerator};
pub use state::AttemptState;
