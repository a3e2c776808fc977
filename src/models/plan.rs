//! Assignment plan (solution) model.
//!
//! A plan records, per developer, the tasks bound to them in assignment
//! order, plus every task that could not be placed and why.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Task;

/// The result of an assignment run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPlan {
    /// One entry per input developer, in input order.
    pub developer_assignments: Vec<DeveloperAssignment>,
    /// Tasks that could not be placed, in the order they were rejected.
    pub unassigned_tasks: Vec<UnassignedTask>,
    /// Number of tasks bound to a developer.
    pub total_tasks_assigned: usize,
    /// Number of tasks rejected.
    pub total_tasks_unassigned: usize,
}

/// The tasks bound to one developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperAssignment {
    /// Developer name.
    pub name: String,
    /// Assigned tasks in assignment order.
    pub assigned_tasks: Vec<Task>,
    /// Hours consumed by the assigned tasks.
    pub total_hours: f64,
    /// Hours left in the developer's budget.
    pub remaining_hours: f64,
}

/// A task that could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnassignedTask {
    /// The rejected task.
    pub task: Task,
    /// Why it was rejected.
    pub reason: UnassignedReason,
}

/// Why a task ended up unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnassignedReason {
    /// No pending task was ready; this one was drained as blocked.
    ///
    /// Covers true cycles, unknown dependency names, and dependencies on
    /// tasks that were themselves rejected.
    #[serde(rename = "Dependency chain cannot be resolved")]
    UnresolvedDependencies,
    /// The task was ready but no developer had enough hours left.
    #[serde(rename = "No developer has sufficient remaining hours")]
    InsufficientCapacity,
}

impl UnassignedReason {
    /// Human-readable reason string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnresolvedDependencies => "Dependency chain cannot be resolved",
            Self::InsufficientCapacity => "No developer has sufficient remaining hours",
        }
    }
}

impl fmt::Display for UnassignedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DeveloperAssignment {
    /// Number of tasks assigned to this developer.
    pub fn task_count(&self) -> usize {
        self.assigned_tasks.len()
    }

    /// Whether the named task is assigned to this developer.
    pub fn has_task(&self, task_name: &str) -> bool {
        self.assigned_tasks.iter().any(|t| t.name == task_name)
    }

    /// Names of the assigned tasks, in assignment order.
    pub fn task_names(&self) -> Vec<&str> {
        self.assigned_tasks.iter().map(|t| t.name.as_str()).collect()
    }
}

impl AssignmentPlan {
    /// Returns the assignment record for a developer.
    pub fn assignment_for_developer(&self, name: &str) -> Option<&DeveloperAssignment> {
        self.developer_assignments.iter().find(|d| d.name == name)
    }

    /// Returns the name of the developer a task was assigned to.
    pub fn developer_of(&self, task_name: &str) -> Option<&str> {
        self.developer_assignments
            .iter()
            .find(|d| d.has_task(task_name))
            .map(|d| d.name.as_str())
    }

    /// Whether the named task was assigned.
    pub fn is_assigned(&self, task_name: &str) -> bool {
        self.developer_of(task_name).is_some()
    }

    /// Returns the rejection reason for a task, if it was rejected.
    pub fn unassigned_reason(&self, task_name: &str) -> Option<UnassignedReason> {
        self.unassigned_tasks
            .iter()
            .find(|u| u.task.name == task_name)
            .map(|u| u.reason)
    }

    /// Total number of tasks accounted for.
    pub fn total_tasks(&self) -> usize {
        self.total_tasks_assigned + self.total_tasks_unassigned
    }

    /// Total hours consumed across all developers.
    pub fn total_hours_assigned(&self) -> f64 {
        self.developer_assignments.iter().map(|d| d.total_hours).sum()
    }
}
