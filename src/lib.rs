//! Task assignment for the U-Engine ecosystem.
//!
//! Binds interdependent tasks to capacity-bounded developers in a single
//! greedy pass, honoring priority, skill fit, type preference, load balance
//! and dependency order.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Developer`, `Task`, `AssignmentPlan`,
//!   `DeveloperAssignment`, `UnassignedTask`
//! - **`scoring`**: Developer-task fit score and its weights
//! - **`scheduler`**: The greedy assigner and plan KPIs
//! - **`validation`**: Input integrity checks (duplicate names, unknown or
//!   cyclic dependencies, invalid hours)
//!
//! # Example
//!
//! ```
//! use u_assign::models::{Developer, Task, UnassignedReason};
//! use u_assign::scheduler::assign_tasks;
//!
//! let developers = vec![Developer::new("Solo").with_max_hours(10.0)];
//! let tasks = vec![Task::new("Big").with_hours(15.0)];
//!
//! let plan = assign_tasks(&developers, &tasks);
//! assert_eq!(plan.unassigned_reason("Big"), Some(UnassignedReason::InsufficientCapacity));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod validation;
