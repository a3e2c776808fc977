//! Plan quality metrics (KPIs).
//!
//! Computes summary indicators from a finished plan and its input
//! developers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assignment Rate | Assigned tasks / all tasks |
//! | Assigned Hours | Sum of hours bound to developers |
//! | Avg Utilization | Mean of per-developer used / max hours |
//! | Preference Match Rate | Assigned tasks matching the developer's preferred type |
//! | Unassigned by Reason | Rejections split by cause |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use crate::models::{AssignmentPlan, Developer, UnassignedReason};

/// Plan performance indicators.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Fraction of tasks that were assigned (0.0..1.0).
    pub assignment_rate: f64,
    /// Hours bound to developers.
    pub assigned_hours: f64,
    /// Sum of developer budgets.
    pub total_capacity_hours: f64,
    /// Average developer utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-developer utilization.
    pub utilization_by_developer: HashMap<String, f64>,
    /// Fraction of assigned tasks whose type matches the developer's preference.
    pub preference_match_rate: f64,
    /// Tasks rejected for unresolved dependencies.
    pub unresolved_dependencies: usize,
    /// Tasks rejected for lack of capacity.
    pub insufficient_capacity: usize,
}

impl PlanKpi {
    /// Computes KPIs from a plan and the developers it was built from.
    ///
    /// `developers` must be the slice the plan was built from; assignments are
    /// matched to developers by position. Developers with no budget are left
    /// out of utilization averages.
    pub fn calculate(plan: &AssignmentPlan, developers: &[Developer]) -> Self {
        let mut utilization_by_developer = HashMap::new();
        let mut preferred_count: usize = 0;
        let mut total_capacity_hours = 0.0;

        for (assignment, developer) in plan.developer_assignments.iter().zip(developers) {
            total_capacity_hours += developer.max_hours;
            if developer.max_hours > 0.0 {
                utilization_by_developer.insert(
                    assignment.name.clone(),
                    assignment.total_hours / developer.max_hours,
                );
            }
            preferred_count += assignment
                .assigned_tasks
                .iter()
                .filter(|t| developer.prefers(&t.task_type))
                .count();
        }

        let avg_utilization = if utilization_by_developer.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_developer.values().sum();
            sum / utilization_by_developer.len() as f64
        };

        let total = plan.total_tasks();
        let assignment_rate = if total == 0 {
            1.0
        } else {
            plan.total_tasks_assigned as f64 / total as f64
        };

        let preference_match_rate = if plan.total_tasks_assigned == 0 {
            0.0
        } else {
            preferred_count as f64 / plan.total_tasks_assigned as f64
        };

        let count_reason = |reason: UnassignedReason| {
            plan.unassigned_tasks
                .iter()
                .filter(|u| u.reason == reason)
                .count()
        };

        Self {
            assignment_rate,
            assigned_hours: plan.total_hours_assigned(),
            total_capacity_hours,
            avg_utilization,
            utilization_by_developer,
            preference_match_rate,
            unresolved_dependencies: count_reason(UnassignedReason::UnresolvedDependencies),
            insufficient_capacity: count_reason(UnassignedReason::InsufficientCapacity),
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_assignment_rate: f64, min_utilization: f64) -> bool {
        self.assignment_rate >= min_assignment_rate && self.avg_utilization >= min_utilization
    }
}
