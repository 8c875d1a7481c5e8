//! In-memory priority repository for tests.

use crate::priority::domain::{NewPriority, Priority, PriorityChanges, PriorityId};
use crate::priority::ports::{
    PriorityRepository, PriorityRepositoryError, PriorityRepositoryResult,
};
use crate::storage::InMemoryStore;
use async_trait::async_trait;

/// Priority repository over the shared [`InMemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriorityRepository {
    store: InMemoryStore,
}

impl InMemoryPriorityRepository {
    /// Creates a repository view over the given store.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PriorityRepository for InMemoryPriorityRepository {
    async fn list(&self) -> PriorityRepositoryResult<Vec<Priority>> {
        let state = self
            .store
            .read()
            .map_err(PriorityRepositoryError::persistence)?;
        let mut priorities: Vec<Priority> = state.priorities.values().cloned().collect();
        priorities.sort_by_key(|priority| (priority.level(), priority.id().value()));
        Ok(priorities)
    }

    async fn find_by_id(&self, id: PriorityId) -> PriorityRepositoryResult<Option<Priority>> {
        let state = self
            .store
            .read()
            .map_err(PriorityRepositoryError::persistence)?;
        Ok(state.priorities.get(&id.value()).cloned())
    }

    async fn exists(&self, id: PriorityId) -> PriorityRepositoryResult<bool> {
        let state = self
            .store
            .read()
            .map_err(PriorityRepositoryError::persistence)?;
        Ok(state.priorities.contains_key(&id.value()))
    }

    async fn insert(&self, new: NewPriority) -> PriorityRepositoryResult<Priority> {
        let mut state = self
            .store
            .write()
            .map_err(PriorityRepositoryError::persistence)?;

        let clash = state
            .priorities
            .values()
            .any(|priority| priority.name() == &new.name);
        if clash {
            return Err(PriorityRepositoryError::DuplicateName(
                new.name.as_str().to_owned(),
            ));
        }

        let id = state.next_priority_id();
        let priority = Priority::new(
            PriorityId::new(id),
            new.name,
            new.level,
            new.color,
            new.description,
        );
        state.priorities.insert(id, priority.clone());
        Ok(priority)
    }

    async fn update(
        &self,
        id: PriorityId,
        changes: PriorityChanges,
    ) -> PriorityRepositoryResult<Priority> {
        let mut state = self
            .store
            .write()
            .map_err(PriorityRepositoryError::persistence)?;

        let Some(existing) = state.priorities.get(&id.value()).cloned() else {
            return Err(PriorityRepositoryError::NotFound(id));
        };

        if let Some(name) = &changes.name {
            let clash = state
                .priorities
                .values()
                .any(|priority| priority.id() != id && priority.name() == name);
            if clash {
                return Err(PriorityRepositoryError::DuplicateName(
                    name.as_str().to_owned(),
                ));
            }
        }

        let mut updated = existing;
        updated.apply_changes(&changes);
        state.priorities.insert(id.value(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: PriorityId) -> PriorityRepositoryResult<()> {
        let mut state = self
            .store
            .write()
            .map_err(PriorityRepositoryError::persistence)?;

        if !state.priorities.contains_key(&id.value()) {
            return Err(PriorityRepositoryError::NotFound(id));
        }

        let referenced = state
            .tasks
            .values()
            .any(|task| task.priority_id() == Some(id));
        if referenced {
            return Err(PriorityRepositoryError::InUse(id));
        }

        state.priorities.remove(&id.value());
        Ok(())
    }
}
