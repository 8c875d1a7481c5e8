//! In-memory task repository for tests.

use crate::category::domain::CategoryId;
use crate::priority::domain::PriorityId;
use crate::storage::InMemoryStore;
use crate::storage::memory::StoreState;
use crate::task::domain::{NewTask, PersistedTaskData, Task, TaskChanges, TaskId, TaskView};
use crate::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Task repository over the shared [`InMemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    store: InMemoryStore,
}

impl InMemoryTaskRepository {
    /// Creates a repository view over the given store.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

/// Builds the enriched read-time view by looking up linked rows.
fn enrich(state: &StoreState, task: Task) -> TaskView {
    let category = task
        .category_id()
        .and_then(|id| state.categories.get(&id.value()));
    let priority = task
        .priority_id()
        .and_then(|id| state.priorities.get(&id.value()));

    TaskView {
        category_name: category.map(|c| c.name().as_str().to_owned()),
        category_color: category.map(|c| c.color().as_str().to_owned()),
        priority_name: priority.map(|p| p.name().as_str().to_owned()),
        priority_color: priority.map(|p| p.color().as_str().to_owned()),
        task,
    }
}

fn check_references(
    state: &StoreState,
    category_id: Option<CategoryId>,
    priority_id: Option<PriorityId>,
) -> TaskRepositoryResult<()> {
    if let Some(id) = category_id {
        if !state.categories.contains_key(&id.value()) {
            return Err(TaskRepositoryError::MissingCategory(id));
        }
    }
    if let Some(id) = priority_id {
        if !state.priorities.contains_key(&id.value()) {
            return Err(TaskRepositoryError::MissingPriority(id));
        }
    }
    Ok(())
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self, category: Option<CategoryId>) -> TaskRepositoryResult<Vec<TaskView>> {
        let state = self.store.read().map_err(TaskRepositoryError::persistence)?;
        // BTreeMap iterates id ascending; reverse for newest-first.
        let views = state
            .tasks
            .values()
            .rev()
            .filter(|task| category.is_none() || task.category_id() == category)
            .map(|task| enrich(&state, task.clone()))
            .collect();
        Ok(views)
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.store.read().map_err(TaskRepositoryError::persistence)?;
        Ok(state.tasks.contains_key(&id.value()))
    }

    async fn insert(&self, new: NewTask) -> TaskRepositoryResult<TaskView> {
        let mut state = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;

        check_references(&state, Some(new.category_id), new.priority_id)?;

        let id = state.next_task_id();
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(id),
            title: new.title,
            status: new.status,
            category_id: Some(new.category_id),
            priority_id: new.priority_id,
            description: new.description,
            due_date: new.due_date,
            created_at: new.created_at,
            updated_at: None,
        });
        state.tasks.insert(id, task.clone());
        Ok(enrich(&state, task))
    }

    async fn update(
        &self,
        id: TaskId,
        changes: TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<TaskView> {
        let mut state = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;

        let Some(existing) = state.tasks.get(&id.value()).cloned() else {
            return Err(TaskRepositoryError::NotFound(id));
        };

        check_references(
            &state,
            changes.category_id.flatten(),
            changes.priority_id.flatten(),
        )?;

        let mut updated = existing;
        updated.apply_changes(&changes, updated_at);
        state.tasks.insert(id.value(), updated.clone());
        Ok(enrich(&state, updated))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self
            .store
            .write()
            .map_err(TaskRepositoryError::persistence)?;

        if state.tasks.remove(&id.value()).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        Ok(())
    }
}
