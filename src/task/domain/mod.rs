//! Domain model for tasks.
//!
//! The task domain models titled work items with a validated status enum,
//! optional category and priority references, and read-time enrichment,
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges, TaskView};
pub use title::TaskTitle;
