//! Rostering domain models.
//!
//! Value types for weekly shift rostering: who can work, what each slot
//! needs, and what the roster looks like.
//!
//! # Domain Mappings
//!
//! | u-roster | Retail | Healthcare | Hospitality |
//! |----------|--------|------------|-------------|
//! | Person | Clerk | Nurse | Server |
//! | Slot | Store shift | Ward shift | Floor shift |
//! | Manager | Shift lead | Charge nurse | Floor manager |
//! | Schedule | Weekly rota | Duty roster | Staff plan |

mod availability;
mod day;
mod pair;
mod person;
mod requirement;
mod schedule;
mod settings;

pub use availability::{Availability, AvailabilityMark};
pub use day::{Day, Shift, Slot};
pub use pair::{IncompatiblePair, IncompatiblePairs};
pub use person::Person;
pub use requirement::ShiftRequirements;
pub use schedule::{Assignment, Schedule, Violation, ViolationType};
pub use settings::Settings;
