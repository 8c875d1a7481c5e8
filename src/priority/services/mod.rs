//! Application services for priority management.

mod manage;

pub use manage::{
    CreatePriorityRequest, PriorityService, PriorityServiceError, PriorityServiceResult,
    UpdatePriorityRequest,
};
