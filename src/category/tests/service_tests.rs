//! Service orchestration tests for category management.

use crate::category::adapters::memory::InMemoryCategoryRepository;
use crate::category::domain::{CategoryDomainError, CategoryId};
use crate::category::ports::CategoryRepositoryError;
use crate::category::services::{CategoryService, CategoryServiceError};
use crate::storage::InMemoryStore;
use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::services::{CreateTaskRequest, TaskService, UpdateTaskRequest};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn store() -> InMemoryStore {
    InMemoryStore::new()
}

fn category_service(store: &InMemoryStore) -> CategoryService {
    CategoryService::new(Arc::new(InMemoryCategoryRepository::new(store.clone())))
}

fn task_service(store: &InMemoryStore) -> TaskService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new(store.clone())),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_lists_sorted_by_name(store: InMemoryStore) {
    let service = category_service(&store);

    service
        .create("Work", "#FF6B6B")
        .await
        .expect("first category");
    service
        .create("Errands", "#4ECDC4")
        .await
        .expect("second category");

    let listed = service.list().await.expect("list succeeds");
    let names: Vec<&str> = listed.iter().map(|c| c.name().as_str()).collect();
    assert_eq!(names, vec!["Errands", "Work"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_name(store: InMemoryStore) {
    let service = category_service(&store);
    service.create("Work", "#FF6B6B").await.expect("first");

    let result = service.create("Work", "#4ECDC4").await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Repository(
            CategoryRepositoryError::DuplicateName(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_name(store: InMemoryStore) {
    let service = category_service(&store);
    let result = service.create("   ", "#FF6B6B").await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Domain(CategoryDomainError::EmptyName))
    ));
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_color(store: InMemoryStore, #[case] color: &str) {
    let service = category_service(&store);
    let result = service.create("Work", color).await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Domain(CategoryDomainError::EmptyColor))
    ));
}

#[rstest]
#[case("FF6B6B")]
#[case("#FF6B6")]
#[case("#GG0000")]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_malformed_color(store: InMemoryStore, #[case] color: &str) {
    let service = category_service(&store);
    let result = service.create("Work", color).await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Domain(
            CategoryDomainError::InvalidColor(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_name_and_color(store: InMemoryStore) {
    let service = category_service(&store);
    let created = service.create("Work", "#FF6B6B").await.expect("create");

    let updated = service
        .update(created.id(), "Deep Work", "#4ECDC4")
        .await
        .expect("update succeeds");

    assert_eq!(updated.name().as_str(), "Deep Work");
    assert_eq!(updated.color().as_str(), "#4ECDC4");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_id_reports_not_found_before_validation(store: InMemoryStore) {
    let service = category_service(&store);

    // Even a malformed payload yields not-found for an unknown id.
    let result = service.update(CategoryId::new(999), "", "").await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Repository(
            CategoryRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_collision_with_other_category(store: InMemoryStore) {
    let service = category_service(&store);
    service.create("Work", "#FF6B6B").await.expect("first");
    let second = service.create("Errands", "#4ECDC4").await.expect("second");

    let result = service.update(second.id(), "Work", "#4ECDC4").await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Repository(
            CategoryRepositoryError::DuplicateName(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_allows_keeping_own_name(store: InMemoryStore) {
    let service = category_service(&store);
    let created = service.create("Work", "#FF6B6B").await.expect("create");

    let updated = service
        .update(created.id(), "Work", "#45B7D1")
        .await
        .expect("same-name update succeeds");
    assert_eq!(updated.color().as_str(), "#45B7D1");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_unreferenced_category(store: InMemoryStore) {
    let service = category_service(&store);
    let created = service.create("Work", "#FF6B6B").await.expect("create");

    service.delete(created.id()).await.expect("delete succeeds");
    assert!(service.list().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_id_reports_not_found(store: InMemoryStore) {
    let service = category_service(&store);
    let result = service.delete(CategoryId::new(7)).await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Repository(
            CategoryRepositoryError::NotFound(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_rejected_while_task_references_category(store: InMemoryStore) {
    let categories = category_service(&store);
    let tasks = task_service(&store);

    let category = categories.create("Work", "#FF6B6B").await.expect("create");
    tasks
        .create(
            CreateTaskRequest::new()
                .with_title("Ship release")
                .with_category(category.id().value()),
        )
        .await
        .expect("task create");

    let result = categories.delete(category.id()).await;
    assert!(matches!(
        result,
        Err(CategoryServiceError::Repository(
            CategoryRepositoryError::InUse(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_after_tasks_reassigned(store: InMemoryStore) {
    let categories = category_service(&store);
    let tasks = task_service(&store);

    let original = categories.create("Work", "#FF6B6B").await.expect("first");
    let replacement = categories
        .create("Errands", "#4ECDC4")
        .await
        .expect("second");
    let task = tasks
        .create(
            CreateTaskRequest::new()
                .with_title("Ship release")
                .with_category(original.id().value()),
        )
        .await
        .expect("task create");

    tasks
        .update(
            task.task.id(),
            UpdateTaskRequest::new().with_category(Some(replacement.id().value())),
        )
        .await
        .expect("reassign");

    categories
        .delete(original.id())
        .await
        .expect("guard lifted after reassignment");
}
