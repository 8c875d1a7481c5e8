//! SQLite repository implementation for task storage.
//!
//! Read paths enrich every row with the linked category and priority
//! name/colour through a left join; nothing denormalised is persisted.

use super::models::{NewTaskRow, TaskChangeset, TaskRow};
use crate::category::domain::CategoryId;
use crate::priority::domain::PriorityId;
use crate::storage::SqlitePool;
use crate::storage::schema::{categories, priorities, tasks};
use crate::task::domain::{
    NewTask, PersistedTaskData, Task, TaskChanges, TaskId, TaskStatus, TaskTitle, TaskView,
};
use crate::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;

/// Joined row: the task plus nullable link columns.
type ViewRow = (
    TaskRow,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// SQLite-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl SqliteTaskRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list(&self, category: Option<CategoryId>) -> TaskRepositoryResult<Vec<TaskView>> {
        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .left_join(categories::table)
                .left_join(priorities::table)
                .select((
                    TaskRow::as_select(),
                    categories::name.nullable(),
                    categories::color.nullable(),
                    priorities::name.nullable(),
                    priorities::color.nullable(),
                ))
                .order(tasks::id.desc())
                .into_boxed();

            if let Some(category) = category {
                query = query.filter(tasks::category_id.eq(category.value()));
            }

            let rows = query.load::<ViewRow>(connection)?;
            rows.into_iter().map(row_to_view).collect()
        })
        .await
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            Ok(diesel::select(diesel::dsl::exists(
                tasks::table.filter(tasks::id.eq(id.value())),
            ))
            .get_result(connection)?)
        })
        .await
    }

    async fn insert(&self, new: NewTask) -> TaskRepositoryResult<TaskView> {
        self.run_blocking(move |connection| {
            connection.transaction::<TaskView, TaskRepositoryError, _>(|connection| {
                if !category_exists(connection, new.category_id)? {
                    return Err(TaskRepositoryError::MissingCategory(new.category_id));
                }
                if let Some(priority_id) = new.priority_id {
                    if !priority_exists(connection, priority_id)? {
                        return Err(TaskRepositoryError::MissingPriority(priority_id));
                    }
                }

                let row = diesel::insert_into(tasks::table)
                    .values(NewTaskRow {
                        title: new.title.as_str().to_owned(),
                        status: new.status.as_str().to_owned(),
                        category_id: Some(new.category_id.value()),
                        priority_id: new.priority_id.map(PriorityId::value),
                        description: new.description.clone(),
                        due_date: new.due_date,
                        created_at: new.created_at,
                    })
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)?;

                load_view(connection, TaskId::new(row.id))
            })
        })
        .await
    }

    async fn update(
        &self,
        id: TaskId,
        changes: TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<TaskView> {
        self.run_blocking(move |connection| {
            connection.transaction::<TaskView, TaskRepositoryError, _>(|connection| {
                let found: bool = diesel::select(diesel::dsl::exists(
                    tasks::table.filter(tasks::id.eq(id.value())),
                ))
                .get_result(connection)?;
                if !found {
                    return Err(TaskRepositoryError::NotFound(id));
                }

                if let Some(Some(category_id)) = changes.category_id {
                    if !category_exists(connection, category_id)? {
                        return Err(TaskRepositoryError::MissingCategory(category_id));
                    }
                }
                if let Some(Some(priority_id)) = changes.priority_id {
                    if !priority_exists(connection, priority_id)? {
                        return Err(TaskRepositoryError::MissingPriority(priority_id));
                    }
                }

                let changeset = TaskChangeset {
                    title: changes.title.as_ref().map(|title| title.as_str().to_owned()),
                    status: changes.status.map(|status| status.as_str().to_owned()),
                    category_id: changes
                        .category_id
                        .map(|category| category.map(CategoryId::value)),
                    priority_id: changes
                        .priority_id
                        .map(|priority| priority.map(PriorityId::value)),
                    description: changes.description.clone(),
                    due_date: changes.due_date,
                    updated_at: Some(updated_at),
                };

                diesel::update(tasks::table.find(id.value()))
                    .set(changeset)
                    .execute(connection)?;

                load_view(connection, id)
            })
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.find(id.value())).execute(connection)?;
            if removed == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn category_exists(
    connection: &mut SqliteConnection,
    id: CategoryId,
) -> Result<bool, DieselError> {
    diesel::select(diesel::dsl::exists(
        categories::table.filter(categories::id.eq(id.value())),
    ))
    .get_result(connection)
}

fn priority_exists(
    connection: &mut SqliteConnection,
    id: PriorityId,
) -> Result<bool, DieselError> {
    diesel::select(diesel::dsl::exists(
        priorities::table.filter(priorities::id.eq(id.value())),
    ))
    .get_result(connection)
}

/// Fetches one enriched row by id.
fn load_view(connection: &mut SqliteConnection, id: TaskId) -> TaskRepositoryResult<TaskView> {
    let row = tasks::table
        .left_join(categories::table)
        .left_join(priorities::table)
        .filter(tasks::id.eq(id.value()))
        .select((
            TaskRow::as_select(),
            categories::name.nullable(),
            categories::color.nullable(),
            priorities::name.nullable(),
            priorities::color.nullable(),
        ))
        .first::<ViewRow>(connection)
        .optional()?
        .ok_or(TaskRepositoryError::NotFound(id))?;
    row_to_view(row)
}

fn row_to_view(row: ViewRow) -> TaskRepositoryResult<TaskView> {
    let (task_row, category_name, category_color, priority_name, priority_color) = row;

    let title = TaskTitle::new(task_row.title).map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(task_row.status.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(task_row.id),
        title,
        status,
        category_id: task_row.category_id.map(CategoryId::new),
        priority_id: task_row.priority_id.map(PriorityId::new),
        description: task_row.description,
        due_date: task_row.due_date,
        created_at: task_row.created_at,
        updated_at: task_row.updated_at,
    });

    Ok(TaskView {
        task,
        category_name,
        category_color,
        priority_name,
        priority_color,
    })
}
