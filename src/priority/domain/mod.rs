//! Domain model for task priorities.

mod error;
mod ids;
mod name;
mod priority;

pub use error::PriorityDomainError;
pub use ids::PriorityId;
pub use name::PriorityName;
pub use priority::{NewPriority, Priority, PriorityChanges};
