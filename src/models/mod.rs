//! Assignment domain models.
//!
//! Provides the input records (developers and tasks) and the output plan.
//!
//! # Domain Mappings
//!
//! | u-assign | Software team | Field service | Support desk |
//! |----------|---------------|---------------|--------------|
//! | Developer | Engineer | Technician | Agent |
//! | Task | Ticket/Story | Work order | Case |
//! | AssignmentPlan | Sprint plan | Dispatch list | Queue allocation |

mod developer;
mod plan;
mod task;

pub use developer::Developer;
pub use plan::{AssignmentPlan, DeveloperAssignment, UnassignedReason, UnassignedTask};
pub use task::Task;
