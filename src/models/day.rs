//! Weekday and shift enumerations.
//!
//! `Day` is a fixed ordinal 0..7 (sunday = 0) with cyclic successor and
//! predecessor. The "first day of week" setting is a display concern and
//! never affects this arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven weekdays.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// One of the three daily shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    /// Carries the rest-after-night adjacency rule.
    Night,
}

/// A (day, shift) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub shift: Shift,
}

impl Day {
    /// All days in ordinal order, sunday first.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Ordinal position (sunday = 0 .. saturday = 6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at the given ordinal, wrapping modulo 7.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Cyclic successor (saturday → sunday).
    #[inline]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Cyclic predecessor (sunday → saturday).
    #[inline]
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// The seven days rotated to start at `first`.
    pub fn week_starting(first: Day) -> [Day; 7] {
        std::array::from_fn(|i| Self::from_index(first.index() + i))
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Sunday => "sunday",
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }
}

impl Shift {
    /// All shifts in daily order.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Night => "night",
        }
    }
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Day, shift: Shift) -> Self {
        Self { day, shift }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_at_week_end() {
        assert_eq!(Day::Saturday.next(), Day::Sunday);
        assert_eq!(Day::Sunday.next(), Day::Monday);
    }

    #[test]
    fn test_prev_wraps_at_week_start() {
        assert_eq!(Day::Sunday.prev(), Day::Saturday);
        assert_eq!(Day::Wednesday.prev(), Day::Tuesday);
    }

    #[test]
    fn test_next_prev_inverse() {
        for day in Day::ALL {
            assert_eq!(day.next().prev(), day);
            assert_eq!(day.prev().next(), day);
        }
    }

    #[test]
    fn test_week_starting() {
        let week = Day::week_starting(Day::Monday);
        assert_eq!(week[0], Day::Monday);
        assert_eq!(week[6], Day::Sunday);
        assert_eq!(Day::week_starting(Day::Sunday), Day::ALL);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Slot::new(Day::Friday, Shift::Night)).unwrap();
        assert_eq!(json, r#"{"day":"friday","shift":"night"}"#);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::new(Day::Monday, Shift::Morning).to_string(), "monday-morning");
    }
}
