//! Multi-attempt search.
//!
//! # Algorithm
//!
//! 1. Run [`construct`] up to `max_attempts` times, each with a fresh
//!    attempt state.
//! 2. Keep the candidate with the strictly highest score.
//! 3. If `stop_on_first_feasible` is set, return the first fully staffed
//!    candidate immediately.
//! 4. Otherwise return the best candidate once the budget is spent.
//!
//! Empty input (no people or no configured days) skips the loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::{construct, ScheduleScore};
use crate::config::GeneratorConfig;
use crate::models::{Schedule, Settings};
use crate::validation::{validate, ValidationResult};

/// Result of one generation call.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Selected roster. `generation_attempts` records the attempts run.
    pub schedule: Schedule,
    /// Validation of `schedule` against the settings.
    pub validation: ValidationResult,
    /// Score of `schedule`.
    pub score: ScheduleScore,
}

impl GenerationOutcome {
    /// Whether the selected roster staffs every slot exactly.
    pub fn is_fully_staffed(&self) -> bool {
        self.score.fully_staffed
    }
}

/// Randomized best-of-N roster generator.
///
/// # Example
///
/// ```
/// use u_roster::config::GeneratorConfig;
/// use u_roster::models::{Day, Person, Settings, Shift};
/// use u_roster::scheduler::RosterGenerator;
///
/// let settings = Settings::new()
///     .with_person(Person::worker("ana", 5))
///     .with_person(Person::manager("ben", 5))
///     .with_requirement(Day::Monday, Shift::Morning, 2);
///
/// let generator = RosterGenerator::new(GeneratorConfig::new().with_random_seed(1));
/// let outcome = generator.generate(&settings);
/// assert!(outcome.validation.all_shifts_assigned);
/// assert_eq!(outcome.schedule.assignment_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterGenerator {
    config: GeneratorConfig,
}

impl RosterGenerator {
    /// Creates a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a roster, seeding from `random_seed` when configured and
    /// from the OS otherwise.
    pub fn generate(&self, settings: &Settings) -> GenerationOutcome {
        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with_rng(settings, &mut rng)
    }

    /// Generates a roster drawing all randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        settings: &Settings,
        rng: &mut R,
    ) -> GenerationOutcome {
        if !settings.is_schedulable() {
            warn!(
                persons = settings.persons.len(),
                days = settings.shift_requirements.len(),
                "nothing to schedule, returning empty roster"
            );
            return finish(Schedule::new(), settings, 0);
        }

        let max_attempts = self.config.max_attempts.max(1);
        info!(
            event = "generate_start",
            persons = settings.persons.len(),
            slots = settings.slots().len(),
            max_attempts
        );

        let mut best: Option<(Schedule, u64)> = None;
        let mut attempts = 0;

        for attempt in 1..=max_attempts {
            attempts = attempt;
            let candidate = construct(settings, rng);
            let score = ScheduleScore::calculate(&candidate, settings);
            let total = score.total();
            debug!(attempt, score = total, fully_staffed = score.fully_staffed);

            if score.fully_staffed && self.config.stop_on_first_feasible {
                info!(event = "generate_end", attempts, score = total, fully_staffed = true);
                return finish(candidate, settings, attempts);
            }

            if best.as_ref().map_or(true, |(_, best_total)| total > *best_total) {
                debug!(attempt, score = total, "new best roster");
                best = Some((candidate, total));
            }
        }

        let schedule = best.map(|(s, _)| s).unwrap_or_default();
        let outcome = finish(schedule, settings, attempts);
        if !outcome.is_fully_staffed() {
            warn!(
                attempts,
                score = outcome.score.total(),
                "attempt budget spent without a fully staffed roster"
            );
        }
        info!(
            event = "generate_end",
            attempts,
            score = outcome.score.total(),
            fully_staffed = outcome.is_fully_staffed()
        );
        outcome
    }
}

fn finish(mut schedule: Schedule, settings: &Settings, attempts: usize) -> GenerationOutcome {
    schedule.generation_attempts = attempts;
    GenerationOutcome {
        validation: validate(&schedule, settings),
        score: ScheduleScore::calculate(&schedule, settings),
        schedule,
    }
}

/// Generates a roster with the default configuration and validates it.
pub fn generate(settings: &Settings) -> (Schedule, ValidationResult) {
    let outcome = RosterGenerator::default().generate(settings);
    (outcome.schedule, outcome.validation)
}
