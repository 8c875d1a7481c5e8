//! SQLite repository implementation for category storage.

use super::models::{CategoryRow, NewCategoryRow};
use crate::category::domain::{Category, CategoryId, CategoryName, NewCategory};
use crate::category::ports::{
    CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult,
};
use crate::color::HexColor;
use crate::storage::SqlitePool;
use crate::storage::schema::{categories, tasks};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

/// SQLite-backed category repository.
#[derive(Debug, Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl From<DieselError> for CategoryRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl SqliteCategoryRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CategoryRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> CategoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CategoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CategoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> CategoryRepositoryResult<Vec<Category>> {
        self.run_blocking(|connection| {
            let rows = categories::table
                .select(CategoryRow::as_select())
                .order(categories::name.asc())
                .load::<CategoryRow>(connection)?;
            rows.into_iter().map(row_to_category).collect()
        })
        .await
    }

    async fn exists(&self, id: CategoryId) -> CategoryRepositoryResult<bool> {
        self.run_blocking(move |connection| Ok(category_exists(connection, id)?))
            .await
    }

    async fn insert(&self, new: NewCategory) -> CategoryRepositoryResult<Category> {
        self.run_blocking(move |connection| {
            connection.transaction::<Category, CategoryRepositoryError, _>(|connection| {
                // The pre-check yields the semantic error; the unique index
                // still enforces integrity in the window between check and
                // insert.
                if name_taken(connection, new.name.as_str(), None)? {
                    return Err(CategoryRepositoryError::DuplicateName(
                        new.name.as_str().to_owned(),
                    ));
                }

                let row = diesel::insert_into(categories::table)
                    .values(NewCategoryRow {
                        name: new.name.as_str().to_owned(),
                        color: new.color.as_str().to_owned(),
                    })
                    .returning(CategoryRow::as_returning())
                    .get_result::<CategoryRow>(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            CategoryRepositoryError::DuplicateName(new.name.as_str().to_owned())
                        }
                        other => CategoryRepositoryError::persistence(other),
                    })?;

                row_to_category(row)
            })
        })
        .await
    }

    async fn update(
        &self,
        id: CategoryId,
        name: CategoryName,
        color: HexColor,
    ) -> CategoryRepositoryResult<Category> {
        self.run_blocking(move |connection| {
            connection.transaction::<Category, CategoryRepositoryError, _>(|connection| {
                if !category_exists(connection, id)? {
                    return Err(CategoryRepositoryError::NotFound(id));
                }

                if name_taken(connection, name.as_str(), Some(id))? {
                    return Err(CategoryRepositoryError::DuplicateName(
                        name.as_str().to_owned(),
                    ));
                }

                let row = diesel::update(categories::table.find(id.value()))
                    .set((
                        categories::name.eq(name.as_str().to_owned()),
                        categories::color.eq(color.as_str().to_owned()),
                    ))
                    .returning(CategoryRow::as_returning())
                    .get_result::<CategoryRow>(connection)?;

                row_to_category(row)
            })
        })
        .await
    }

    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<(), CategoryRepositoryError, _>(|connection| {
                if !category_exists(connection, id)? {
                    return Err(CategoryRepositoryError::NotFound(id));
                }

                let references: i64 = tasks::table
                    .filter(tasks::category_id.eq(id.value()))
                    .count()
                    .get_result(connection)?;
                if references > 0 {
                    return Err(CategoryRepositoryError::InUse(id));
                }

                diesel::delete(categories::table.find(id.value())).execute(connection)?;
                Ok(())
            })
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

/// Reports whether another row already carries the name, optionally
/// excluding one id (the row being updated).
fn name_taken(
    connection: &mut SqliteConnection,
    name: &str,
    excluding: Option<CategoryId>,
) -> Result<bool, DieselError> {
    let holder = categories::table
        .filter(categories::name.eq(name))
        .select(categories::id)
        .first::<i64>(connection)
        .optional()?;
    Ok(holder.is_some_and(|other| excluding.is_none_or(|id| other != id.value())))
}

fn row_to_category(row: CategoryRow) -> CategoryRepositoryResult<Category> {
    let name = CategoryName::new(row.name).map_err(CategoryRepositoryError::persistence)?;
    let color = HexColor::new(row.color).map_err(CategoryRepositoryError::persistence)?;
    Ok(Category::new(CategoryId::new(row.id), name, color))
}
