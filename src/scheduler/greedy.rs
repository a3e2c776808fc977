//! Dependency-aware greedy assigner.
//!
//! # Algorithm
//!
//! While tasks remain pending:
//! 1. Select the next ready task: highest priority, then most direct
//!    dependents among pending tasks, then input order.
//! 2. If nothing is ready, drain the first pending task as unresolvable.
//! 3. Otherwise bind the task to the highest-scoring developer with enough
//!    hours left (first in input order on ties), or reject it for capacity.
//!
//! Exactly one task leaves the pending set per iteration and decisions are
//! never revisited, so the loop terminates after `tasks.len()` iterations.
//!
//! # Complexity
//! O(n² · d + n · m) where n=tasks, d=dependencies/task, m=developers.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use crate::models::{
    AssignmentPlan, Developer, DeveloperAssignment, Task, UnassignedReason, UnassignedTask,
};
use crate::scoring::ScoringWeights;
use crate::validation::{validate_input, ValidationError};

/// Input container for an assignment run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Developers, in tie-breaking order.
    pub developers: Vec<Developer>,
    /// Tasks, in tie-breaking order.
    pub tasks: Vec<Task>,
    /// Score weights. Defaults to the reference formula.
    #[serde(default)]
    pub scoring: ScoringWeights,
}

impl AssignmentRequest {
    /// Creates a request with the reference weights.
    pub fn new(developers: Vec<Developer>, tasks: Vec<Task>) -> Self {
        Self {
            developers,
            tasks,
            scoring: ScoringWeights::default(),
        }
    }

    /// Sets the score weights.
    pub fn with_scoring(mut self, scoring: ScoringWeights) -> Self {
        self.scoring = scoring;
        self
    }
}

/// Errors from [`GreedyAssigner::assign_checked`].
#[derive(Debug, Error)]
pub enum AssignError {
    /// The input failed validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// One decision taken by the assigner, in the order it was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum AssignmentEvent {
    /// A task was bound to a developer.
    Assigned {
        task: String,
        developer: String,
        score: f64,
    },
    /// A task was rejected.
    Rejected {
        task: String,
        reason: UnassignedReason,
    },
}

impl AssignmentEvent {
    /// Name of the task this event concerns.
    pub fn task_name(&self) -> &str {
        match self {
            Self::Assigned { task, .. } | Self::Rejected { task, .. } => task,
        }
    }
}

/// Greedy one-shot task assigner.
///
/// Binds each ready task to the best-fitting developer that still has room,
/// or records why the task could not be placed. The caller's slices are
/// cloned on entry and never mutated.
///
/// # Example
///
/// ```
/// use u_assign::models::{Developer, Task};
/// use u_assign::scheduler::GreedyAssigner;
///
/// let developers = vec![
///     Developer::new("Alice").with_skill_level(7.0).with_max_hours(40.0),
/// ];
/// let tasks = vec![
///     Task::new("Design").with_hours(10.0).with_priority(2.0),
///     Task::new("Build").with_hours(20.0).with_dependency("Design"),
/// ];
///
/// let plan = GreedyAssigner::new().assign(&developers, &tasks);
/// assert_eq!(plan.total_tasks_assigned, 2);
/// assert_eq!(plan.developer_assignments[0].task_names(), vec!["Design", "Build"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner {
    weights: ScoringWeights,
}

impl GreedyAssigner {
    /// Creates an assigner with the reference weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the score weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The score weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Assigns tasks to developers.
    ///
    /// Never fails: blocked and oversized tasks are reported in
    /// [`AssignmentPlan::unassigned_tasks`].
    pub fn assign(&self, developers: &[Developer], tasks: &[Task]) -> AssignmentPlan {
        self.assign_with_trace(developers, tasks).0
    }

    /// Assigns tasks and also returns every decision in order.
    pub fn assign_with_trace(
        &self,
        developers: &[Developer],
        tasks: &[Task],
    ) -> (AssignmentPlan, Vec<AssignmentEvent>) {
        let span = info_span!(
            "assign",
            developers = developers.len(),
            tasks = tasks.len()
        );
        let _guard = span.enter();

        AssignmentRun::new(&self.weights, developers, tasks).run()
    }

    /// Validates the input, then assigns.
    ///
    /// Rejects duplicate names, unknown or cyclic dependencies and invalid
    /// hours instead of letting them surface as unassigned tasks.
    pub fn assign_checked(
        &self,
        developers: &[Developer],
        tasks: &[Task],
    ) -> Result<AssignmentPlan, AssignError> {
        self.assign_with_trace_checked(developers, tasks)
            .map(|(plan, _)| plan)
    }

    /// Validates the input, then assigns and returns every decision in order.
    pub fn assign_with_trace_checked(
        &self,
        developers: &[Developer],
        tasks: &[Task],
    ) -> Result<(AssignmentPlan, Vec<AssignmentEvent>), AssignError> {
        validate_input(developers, tasks).map_err(AssignError::InvalidInput)?;
        Ok(self.assign_with_trace(developers, tasks))
    }

    /// Assigns from a request, using the request's weights.
    pub fn assign_request(&self, request: &AssignmentRequest) -> AssignmentPlan {
        let assigner = Self {
            weights: request.scoring,
        };
        assigner.assign(&request.developers, &request.tasks)
    }
}

/// Assigns with the reference weights.
pub fn assign_tasks(developers: &[Developer], tasks: &[Task]) -> AssignmentPlan {
    GreedyAssigner::new().assign(developers, tasks)
}

/// Per-run developer state.
#[derive(Debug, Clone)]
struct DeveloperState {
    developer: Developer,
    remaining_hours: f64,
    assigned: Vec<Task>,
}

impl DeveloperState {
    fn new(developer: Developer) -> Self {
        Self {
            remaining_hours: developer.max_hours,
            developer,
            assigned: Vec::new(),
        }
    }

    /// A developer with a zero budget never takes work, not even zero-hour tasks.
    fn has_room_for(&self, task: &Task) -> bool {
        self.developer.max_hours != 0.0 && self.remaining_hours >= task.hours_required
    }

    fn into_assignment(self) -> DeveloperAssignment {
        DeveloperAssignment {
            name: self.developer.name,
            total_hours: self.developer.max_hours - self.remaining_hours,
            remaining_hours: self.remaining_hours,
            assigned_tasks: self.assigned,
        }
    }
}

/// State owned by a single run.
struct AssignmentRun<'a> {
    weights: &'a ScoringWeights,
    developers: Vec<DeveloperState>,
    pending: Vec<Task>,
    completed: HashSet<String>,
    unassigned: Vec<UnassignedTask>,
    events: Vec<AssignmentEvent>,
}

impl<'a> AssignmentRun<'a> {
    fn new(weights: &'a ScoringWeights, developers: &[Developer], tasks: &[Task]) -> Self {
        Self {
            weights,
            developers: developers.iter().cloned().map(DeveloperState::new).collect(),
            pending: tasks.to_vec(),
            completed: HashSet::new(),
            unassigned: Vec::new(),
            events: Vec::new(),
        }
    }

    fn run(mut self) -> (AssignmentPlan, Vec<AssignmentEvent>) {
        while !self.pending.is_empty() {
            match self.next_task() {
                None => {
                    // Nothing ready: drain the first blocked task.
                    let task = self.pending.remove(0);
                    self.reject(task, UnassignedReason::UnresolvedDependencies);
                }
                Some(idx) => {
                    let task = self.pending.remove(idx);
                    match self.best_developer(&task) {
                        Some((dev_idx, score)) => self.bind(task, dev_idx, score),
                        None => self.reject(task, UnassignedReason::InsufficientCapacity),
                    }
                }
            }
        }

        let total_tasks_assigned: usize =
            self.developers.iter().map(|d| d.assigned.len()).sum();
        let total_tasks_unassigned = self.unassigned.len();
        info!(
            assigned = total_tasks_assigned,
            unassigned = total_tasks_unassigned,
            "assignment run complete"
        );

        let plan = AssignmentPlan {
            developer_assignments: self
                .developers
                .into_iter()
                .map(DeveloperState::into_assignment)
                .collect(),
            unassigned_tasks: self.unassigned,
            total_tasks_assigned,
            total_tasks_unassigned,
        };
        (plan, self.events)
    }

    /// Whether every dependency of `task` has been assigned.
    fn is_ready(&self, task: &Task) -> bool {
        task.dependencies
            .iter()
            .all(|dep| self.completed.contains(dep))
    }

    /// Number of pending tasks that list `name` as a dependency.
    fn dependent_count(&self, name: &str) -> usize {
        self.pending.iter().filter(|t| t.depends_on(name)).count()
    }

    /// Index into `pending` of the next task to place, or `None` when no
    /// pending task is ready.
    fn next_task(&self) -> Option<usize> {
        let mut best: Option<(usize, f64, usize)> = None;

        for (idx, task) in self.pending.iter().enumerate() {
            if self.completed.contains(&task.name) || !self.is_ready(task) {
                continue;
            }
            let dependents = self.dependent_count(&task.name);
            let better = match best {
                None => true,
                Some((_, priority, best_dependents)) => {
                    task.priority > priority
                        || (task.priority == priority && dependents > best_dependents)
                }
            };
            if better {
                best = Some((idx, task.priority, dependents));
            }
        }

        best.map(|(idx, _, _)| idx)
    }

    /// Highest-scoring developer with room for `task`; first wins ties.
    fn best_developer(&self, task: &Task) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (idx, state) in self.developers.iter().enumerate() {
            if !state.has_room_for(task) {
                continue;
            }
            let score = self
                .weights
                .score(&state.developer, state.remaining_hours, task);
            let better = match best {
                None => true,
                Some((_, best_score)) => score > best_score,
            };
            if better {
                best = Some((idx, score));
            }
        }

        best
    }

    fn bind(&mut self, task: Task, dev_idx: usize, score: f64) {
        let state = &mut self.developers[dev_idx];
        state.remaining_hours -= task.hours_required;
        debug!(
            task = %task.name,
            developer = %state.developer.name,
            score,
            remaining_hours = state.remaining_hours,
            "task assigned"
        );

        self.events.push(AssignmentEvent::Assigned {
            task: task.name.clone(),
            developer: state.developer.name.clone(),
            score,
        });
        self.completed.insert(task.name.clone());
        state.assigned.push(task);
    }

    fn reject(&mut self, task: Task, reason: UnassignedReason) {
        warn!(task = %task.name, %reason, "task unassigned");
        self.events.push(AssignmentEvent::Rejected {
            task: task.name.clone(),
            reason,
        });
        self.unassigned.push(UnassignedTask { task, reason });
    }
}
