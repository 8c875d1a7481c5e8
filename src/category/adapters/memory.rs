//! In-memory category repository for tests.

use crate::category::domain::{Category, CategoryId, CategoryName, NewCategory};
use crate::category::ports::{
    CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult,
};
use crate::color::HexColor;
use crate::storage::InMemoryStore;
use async_trait::async_trait;

/// Category repository over the shared [`InMemoryStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    store: InMemoryStore,
}

impl InMemoryCategoryRepository {
    /// Creates a repository view over the given store.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> CategoryRepositoryResult<Vec<Category>> {
        let state = self
            .store
            .read()
            .map_err(CategoryRepositoryError::persistence)?;
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(categories)
    }

    async fn exists(&self, id: CategoryId) -> CategoryRepositoryResult<bool> {
        let state = self
            .store
            .read()
            .map_err(CategoryRepositoryError::persistence)?;
        Ok(state.categories.contains_key(&id.value()))
    }

    async fn insert(&self, new: NewCategory) -> CategoryRepositoryResult<Category> {
        let mut state = self
            .store
            .write()
            .map_err(CategoryRepositoryError::persistence)?;

        let clash = state
            .categories
            .values()
            .any(|category| category.name() == &new.name);
        if clash {
            return Err(CategoryRepositoryError::DuplicateName(
                new.name.as_str().to_owned(),
            ));
        }

        let id = state.next_category_id();
        let category = Category::new(CategoryId::new(id), new.name, new.color);
        state.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: CategoryId,
        name: CategoryName,
        color: HexColor,
    ) -> CategoryRepositoryResult<Category> {
        let mut state = self
            .store
            .write()
            .map_err(CategoryRepositoryError::persistence)?;

        if !state.categories.contains_key(&id.value()) {
            return Err(CategoryRepositoryError::NotFound(id));
        }

        let clash = state
            .categories
            .values()
            .any(|category| category.id() != id && category.name() == &name);
        if clash {
            return Err(CategoryRepositoryError::DuplicateName(
                name.as_str().to_owned(),
            ));
        }

        let category = Category::new(id, name, color);
        state.categories.insert(id.value(), category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        let mut state = self
            .store
            .write()
            .map_err(CategoryRepositoryError::persistence)?;

        if !state.categories.contains_key(&id.value()) {
            return Err(CategoryRepositoryError::NotFound(id));
        }

        let referenced = state
            .tasks
            .values()
            .any(|task| task.category_id() == Some(id));
        if referenced {
            return Err(CategoryRepositoryError::InUse(id));
        }

        state.categories.remove(&id.value());
        Ok(())
    }
}
