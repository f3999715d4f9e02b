//! Person model.
//!
//! A person is a schedulable worker. Rosters reference people by `id`
//! only; the record itself lives in the settings.

use serde::{Deserialize, Serialize};

/// A schedulable worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Managers are placed first into slots lacking manager coverage
    /// and last when filling remaining capacity.
    #[serde(default)]
    pub is_manager: bool,
    /// Weekly workload cap.
    #[serde(default)]
    pub max_shifts_per_week: u32,
    /// Legend color. Display only.
    #[serde(default)]
    pub color: String,
}

impl Person {
    /// Creates a non-manager worker with a zero shift cap.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            is_manager: false,
            max_shifts_per_week: 0,
            color: String::new(),
        }
    }

    /// Creates a non-manager worker.
    pub fn worker(id: impl Into<String>, max_shifts_per_week: u32) -> Self {
        Self::new(id).with_max_shifts(max_shifts_per_week)
    }

    /// Creates a manager.
    pub fn manager(id: impl Into<String>, max_shifts_per_week: u32) -> Self {
        Self::new(id)
            .with_max_shifts(max_shifts_per_week)
            .as_manager(true)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly shift cap.
    pub fn with_max_shifts(mut self, max_shifts_per_week: u32) -> Self {
        self.max_shifts_per_week = max_shifts_per_week;
        self
    }

    /// Sets the manager flag.
    pub fn as_manager(mut self, is_manager: bool) -> Self {
        self.is_manager = is_manager;
        self
    }

    /// Sets the legend color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}
