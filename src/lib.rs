//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Assigns people to recurring morning, afternoon and night shifts under
//! hard eligibility rules (availability, incompatible pairs, weekly caps,
//! rest after nights) and soft goals (manager coverage, preferred shifts).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Person`, `Day`, `Shift`, `Slot`,
//!   `Availability`, `IncompatiblePairs`, `Schedule`, `Settings`
//! - **`scheduler`**: Eligibility, six-phase construction, scoring and the
//!   best-of-N search loop
//! - **`validation`**: Hard-constraint checks on any roster
//! - **`edit`**: Unchecked manual reassignment
//! - **`config`**: Search loop configuration (TOML)
//!
//! # Example
//!
//! ```
//! use u_roster::models::{Day, Person, Settings, Shift};
//!
//! let settings = Settings::new()
//!     .with_person(Person::worker("a", 6))
//!     .with_person(Person::worker("b", 6))
//!     .with_person(Person::manager("c", 6))
//!     .with_requirement(Day::Monday, Shift::Morning, 1);
//!
//! let (schedule, validation) = u_roster::generate(&settings);
//! assert_eq!(schedule.slot_count(Day::Monday, Shift::Morning), 1);
//! assert!(validation.all_shifts_assigned);
//!
//! let edited = u_roster::reassign(schedule, Day::Monday, Shift::Morning, "c", "a");
//! let _ = u_roster::validate(&edited, &settings);
//! ```
//!
//! This is a heuristic. It does not guarantee an optimal or even a feasible
//! roster for over-constrained input, and without a seed runs differ.

pub mod config;
pub mod edit;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::GeneratorConfig;
pub use edit::{assign, reassign};
pub use error::{Result, RosterError};
pub use scheduler::{generate, GenerationOutcome, RosterGenerator};
pub use validation::{validate, ValidationResult};
