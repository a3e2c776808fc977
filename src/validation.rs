//! Input validation for assignment problems.
//!
//! The assigner itself never rejects input: unknown or cyclic dependencies
//! simply surface as unassigned tasks. These checks are an opt-in hardening
//! step. Detects:
//! - Duplicate developer or task names
//! - Dependencies on unknown tasks, or on the task itself
//! - Circular dependencies (DAG validation)
//! - Negative or non-finite hours
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{Developer, Task};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two developers or two tasks share the same name.
    DuplicateId,
    /// A task depends on a name that matches no task.
    UnknownDependency,
    /// A task lists itself as a dependency.
    SelfDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
    /// Hours or capacity are negative, NaN or infinite.
    InvalidHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the developers and tasks of an assignment problem.
///
/// Checks:
/// 1. No duplicate developer names
/// 2. No duplicate task names
/// 3. Developer budgets and task hours are finite and non-negative
/// 4. Every dependency names an existing task other than the task itself
/// 5. No circular dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(developers: &[Developer], tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut developer_names = HashSet::new();
    for dev in developers {
        if !developer_names.insert(dev.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate developer name: {}", dev.name),
            ));
        }
        if !is_valid_hours(dev.max_hours) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!(
                    "Developer '{}' has invalid max hours {}",
                    dev.name, dev.max_hours
                ),
            ));
        }
    }

    let mut task_names = HashSet::new();
    for task in tasks {
        if !task_names.insert(task.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task name: {}", task.name),
            ));
        }
        if !is_valid_hours(task.hours_required) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!(
                    "Task '{}' has invalid required hours {}",
                    task.name, task.hours_required
                ),
            ));
        }
    }

    for task in tasks {
        for dep in &task.dependencies {
            if dep == &task.name {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfDependency,
                    format!("Task '{}' depends on itself", task.name),
                ));
            } else if !task_names.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!("Task '{}' depends on unknown task '{}'", task.name, dep),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_hours(hours: f64) -> bool {
    hours.is_finite() && hours >= 0.0
}

/// Detects cycles in the dependency graph using DFS.
///
/// Self-loops are reported separately by [`validate_input`] and skipped here.
/// Roots are visited in input order so the reported task is stable.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
fn detect_cycles(tasks: &[Task]) -> Option<ValidationError> {
    let index: HashMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .rev()
        .map(|(i, t)| (t.name.as_str(), i))
        .collect();

    // Edges run from a task to the tasks waiting on it.
    let mut waiting: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    for (i, task) in tasks.iter().enumerate() {
        for dep in task.dependencies.iter().filter(|d| **d != task.name) {
            if let Some(&j) = index.get(dep.as_str()) {
                waiting[j].push(i);
            }
        }
    }

    let mut marks = vec![Mark::Unvisited; tasks.len()];
    for root in 0..tasks.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        if let Some(i) = find_back_edge(root, &waiting, &mut marks) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!(
                    "Circular dependency detected involving task '{}'",
                    tasks[i].name
                ),
            ));
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Walks everything reachable from `root` without recursion. Returns the
/// task that closes a cycle, if any.
fn find_back_edge(root: usize, waiting: &[Vec<usize>], marks: &mut [Mark]) -> Option<usize> {
    let mut path: Vec<(usize, usize)> = vec![(root, 0)];
    marks[root] = Mark::OnPath;

    while let Some((node, cursor)) = path.last_mut() {
        let Some(&next) = waiting[*node].get(*cursor) else {
            marks[*node] = Mark::Done;
            path.pop();
            continue;
        };
        *cursor += 1;
        match marks[next] {
            Mark::OnPath => return Some(next),
            Mark::Unvisited => {
                marks[next] = Mark::OnPath;
                path.push((next, 0));
            }
            Mark::Done => {}
        }
    }

    None
}
