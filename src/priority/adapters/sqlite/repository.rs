//! SQLite repository implementation for priority storage.

use super::models::{NewPriorityRow, PriorityChangeset, PriorityRow};
use crate::color::HexColor;
use crate::priority::domain::{NewPriority, Priority, PriorityChanges, PriorityId, PriorityName};
use crate::priority::ports::{
    PriorityRepository, PriorityRepositoryError, PriorityRepositoryResult,
};
use crate::storage::SqlitePool;
use crate::storage::schema::{priorities, tasks};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;

/// SQLite-backed priority repository.
#[derive(Debug, Clone)]
pub struct SqlitePriorityRepository {
    pool: SqlitePool,
}

impl From<DieselError> for PriorityRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl SqlitePriorityRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PriorityRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> PriorityRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PriorityRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PriorityRepositoryError::persistence)?
    }
}

#[async_trait]
impl PriorityRepository for SqlitePriorityRepository {
    async fn list(&self) -> PriorityRepositoryResult<Vec<Priority>> {
        self.run_blocking(|connection| {
            // Ties on level break by id so the ordering stays stable.
            let rows = priorities::table
                .select(PriorityRow::as_select())
                .order((priorities::level.asc(), priorities::id.asc()))
                .load::<PriorityRow>(connection)?;
            rows.into_iter().map(row_to_priority).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: PriorityId) -> PriorityRepositoryResult<Option<Priority>> {
        self.run_blocking(move |connection| {
            let row = priorities::table
                .find(id.value())
                .select(PriorityRow::as_select())
                .first::<PriorityRow>(connection)
                .optional()?;
            row.map(row_to_priority).transpose()
        })
        .await
    }

    async fn exists(&self, id: PriorityId) -> PriorityRepositoryResult<bool> {
        self.run_blocking(move |connection| Ok(priority_exists(connection, id)?))
            .await
    }

    async fn insert(&self, new: NewPriority) -> PriorityRepositoryResult<Priority> {
        self.run_blocking(move |connection| {
            connection.transaction::<Priority, PriorityRepositoryError, _>(|connection| {
                if name_taken(connection, new.name.as_str(), None)? {
                    return Err(PriorityRepositoryError::DuplicateName(
                        new.name.as_str().to_owned(),
                    ));
                }

                let row = diesel::insert_into(priorities::table)
                    .values(NewPriorityRow {
                        name: new.name.as_str().to_owned(),
                        level: new.level,
                        color: new.color.as_str().to_owned(),
                        description: new.description.clone(),
                    })
                    .returning(PriorityRow::as_returning())
                    .get_result::<PriorityRow>(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            PriorityRepositoryError::DuplicateName(new.name.as_str().to_owned())
                        }
                        other => PriorityRepositoryError::persistence(other),
                    })?;

                row_to_priority(row)
            })
        })
        .await
    }

    async fn update(
        &self,
        id: PriorityId,
        changes: PriorityChanges,
    ) -> PriorityRepositoryResult<Priority> {
        self.run_blocking(move |connection| {
            connection.transaction::<Priority, PriorityRepositoryError, _>(|connection| {
                if !priority_exists(connection, id)? {
                    return Err(PriorityRepositoryError::NotFound(id));
                }

                if let Some(name) = &changes.name {
                    if name_taken(connection, name.as_str(), Some(id))? {
                        return Err(PriorityRepositoryError::DuplicateName(
                            name.as_str().to_owned(),
                        ));
                    }
                }

                let changeset = PriorityChangeset {
                    name: changes.name.as_ref().map(|name| name.as_str().to_owned()),
                    level: changes.level,
                    color: changes
                        .color
                        .as_ref()
                        .map(|color| color.as_str().to_owned()),
                    description: changes.description.clone(),
                };

                let row = diesel::update(priorities::table.find(id.value()))
                    .set(changeset)
                    .returning(PriorityRow::as_returning())
                    .get_result::<PriorityRow>(connection)?;

                row_to_priority(row)
            })
        })
        .await
    }

    async fn delete(&self, id: PriorityId) -> PriorityRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<(), PriorityRepositoryError, _>(|connection| {
                if !priority_exists(connection, id)? {
                    return Err(PriorityRepositoryError::NotFound(id));
                }

                let references: i64 = tasks::table
                    .filter(tasks::priority_id.eq(id.value()))
                    .count()
                    .get_result(connection)?;
                if references > 0 {
                    return Err(PriorityRepositoryError::InUse(id));
                }

                diesel::delete(priorities::table.find(id.value())).execute(connection)?;
                Ok(())
            })
        })
        .await
    }
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

/// Reports whether another row already carries the name, optionally
/// excluding one id (the row being updated).
fn name_taken(
    connection: &mut SqliteConnection,
    name: &str,
    excluding: Option<PriorityId>,
) -> Result<bool, DieselError> {
    let holder = priorities::table
        .filter(priorities::name.eq(name))
        .select(priorities::id)
        .first::<i64>(connection)
        .optional()?;
    Ok(holder.is_some_and(|other| excluding.is_none_or(|id| other != id.value())))
}

fn row_to_priority(row: PriorityRow) -> PriorityRepositoryResult<Priority> {
    let name = PriorityName::new(row.name).map_err(PriorityRepositoryError::persistence)?;
    let color = HexColor::new(row.color).map_err(PriorityRepositoryError::persistence)?;
    Ok(Priority::new(
        PriorityId::new(row.id),
        name,
        row.level,
        color,
        row.description,
    ))
}
