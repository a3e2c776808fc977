//! Assignment algorithms.
//!
//! - [`GreedyAssigner`]: dependency-aware greedy developer assignment
//! - [`PlanKpi`]: plan quality metrics

mod greedy;
mod kpi;

pub use greedy::{assign_tasks, AssignError, AssignmentEvent, AssignmentRequest, GreedyAssigner};
pub use kpi::PlanKpi;
