//! Task orchestration services.

mod manage;

pub use manage::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
