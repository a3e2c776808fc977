//! Developer (worker) model.
//!
//! A developer is a capacity-bounded worker. Capacity is a cumulative hour
//! budget for the planning run, not a calendar.

use serde::{Deserialize, Serialize};

/// A developer that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    /// Unique developer name.
    pub name: String,
    /// Skill level on the same scale as task difficulty.
    pub skill_level: f64,
    /// Total hour budget for the run.
    pub max_hours: f64,
    /// Task type this developer prefers to work on.
    pub preferred_task_type: String,
}

impl Developer {
    /// Creates a developer with zero skill, zero hours and no preference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skill_level: 0.0,
            max_hours: 0.0,
            preferred_task_type: String::new(),
        }
    }

    /// Sets the skill level.
    pub fn with_skill_level(mut self, skill_level: f64) -> Self {
        self.skill_level = skill_level;
        self
    }

    /// Sets the hour budget.
    pub fn with_max_hours(mut self, max_hours: f64) -> Self {
        self.max_hours = max_hours;
        self
    }

    /// Sets the preferred task type.
    pub fn with_preferred_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.preferred_task_type = task_type.into();
        self
    }

    /// Whether this developer prefers the given task type.
    pub fn prefers(&self, task_type: &str) -> bool {
        self.preferred_task_type == task_type
    }
}
