//! Shared handler state.

use crate::category::services::CategoryService;
use crate::priority::services::PriorityService;
use crate::task::services::TaskService;

/// Services shared by every handler.
///
/// Each service is internally `Arc`-backed, so cloning the state per
/// request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Category operations.
    pub categories: CategoryService,
    /// Priority operations.
    pub priorities: PriorityService,
    /// Task operations.
    pub tasks: TaskService,
}

impl AppState {
    /// Bundles the three services into handler state.
    #[must_use]
    pub const fn new(
        categories: CategoryService,
        priorities: PriorityService,
        tasks: TaskService,
    ) -> Self {
        Self {
            categories,
            priorities,
            tasks,
        }
    }
}
