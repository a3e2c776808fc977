//! Task model.
//!
//! A task is an indivisible unit of work with an hour cost, a type used for
//! preference matching, a priority, and a set of tasks that must be assigned
//! before it.

use serde::{Deserialize, Serialize};

/// A task to be assigned.
///
/// Tasks are identified by name. Dependencies refer to other tasks by name;
/// a task is ready once every dependency has been assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task name.
    #[serde(rename = "taskName")]
    pub name: String,
    /// Difficulty on the same scale as developer skill.
    pub difficulty: f64,
    /// Hours the task consumes from a developer's budget.
    pub hours_required: f64,
    /// Task type (matched against developer preferences).
    pub task_type: String,
    /// Scheduling priority (higher = more urgent).
    pub priority: f64,
    /// Names of tasks that must be assigned first.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Task {
    /// Creates a task with the given name and no cost, type or dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            difficulty: 0.0,
            hours_required: 0.0,
            task_type: String::new(),
            priority: 0.0,
            dependencies: Vec::new(),
        }
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the required hours.
    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours_required = hours;
        self
    }

    /// Sets the task type.
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a dependency on another task.
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    /// Whether this task lists `name` as a dependency.
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }

    /// Whether this task has no dependencies.
    pub fn is_independent(&self) -> bool {
        self.dependencies.is_empty()
    }
}
