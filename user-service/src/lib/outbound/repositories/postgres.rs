//! Generic PostgreSQL implementation of [`Repository`].
//!
//! Tables follow one convention: a `uuid` primary key and a nullable
//! `deleted_at` column. Deletes are soft, and every read or write ignores rows
//! whose `deleted_at` is set.

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::postgres::PgRow;
use sqlx::query::Query;
use sqlx::Encode;
use sqlx::FromRow;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Type;
use uuid::Uuid;

use crate::domain::store::Entity;
use crate::domain::store::PageRequest;
use crate::domain::store::Repository;
use crate::domain::store::RepositoryError;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Table mapping for an entity stored by [`PgStore`].
pub trait PgEntity: Entity + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;

    /// Every stored column, primary key first, in the order
    /// [`bind_columns`](PgEntity::bind_columns) binds them.
    const COLUMNS: &'static [&'static str];

    /// Column that gives pages a stable order.
    const ORDER_BY: &'static str;

    fn key(id: &Self::Id) -> Uuid;

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

/// SQL for one table, rendered once per store.
#[derive(Debug, Clone)]
struct Statements {
    insert: String,
    select_by_key: String,
    select_page: String,
    count: String,
    update: String,
    soft_delete: String,
}

impl Statements {
    fn render<T: PgEntity>() -> Self {
        let table = T::TABLE;
        let columns = T::COLUMNS.join(", ");
        let key = T::COLUMNS.first().copied().unwrap_or("id");

        let placeholders = (1..=T::COLUMNS.len())
            .map(|n| format!("${}", n))
            .collect::<Vec<_>>()
            .join(", ");

        let assignments = T::COLUMNS
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            insert: format!("INSERT INTO {table} ({columns}) VALUES ({placeholders})"),
            select_by_key: format!(
                "SELECT {columns} FROM {table} WHERE {key} = $1 AND deleted_at IS NULL"
            ),
            select_page: format!(
                "SELECT {columns} FROM {table} WHERE deleted_at IS NULL \
                 ORDER BY {order}, {key} LIMIT $1 OFFSET $2",
                order = T::ORDER_BY
            ),
            count: format!("SELECT COUNT(*) FROM {table} WHERE deleted_at IS NULL"),
            update: format!(
                "UPDATE {table} SET {assignments} WHERE {key} = $1 AND deleted_at IS NULL"
            ),
            soft_delete: format!(
                "UPDATE {table} SET deleted_at = NOW() WHERE {key} = $1 AND deleted_at IS NULL"
            ),
        }
    }
}

/// Repository over one PostgreSQL table.
pub struct PgStore<T: PgEntity> {
    pool: PgPool,
    statements: Statements,
    _entity: std::marker::PhantomData<fn() -> T>,
}

impl<T: PgEntity> PgStore<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            statements: Statements::render::<T>(),
            _entity: std::marker::PhantomData,
        }
    }

    /// Run a trivial query to check the pool can reach the database.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    /// Fetch the first live row whose `column` equals `value`.
    ///
    /// `column` is interpolated into the statement and must be a trusted
    /// column name, never user input.
    pub async fn find_one_by<V>(&self, column: &'static str, value: V) -> Result<T, RepositoryError>
    where
        V: for<'q> Encode<'q, Postgres> + Type<Postgres> + Send + 'static,
    {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1 AND deleted_at IS NULL LIMIT 1",
            T::COLUMNS.join(", "),
            T::TABLE,
            column
        );

        sqlx::query_as::<_, T>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl<T: PgEntity> Repository<T> for PgStore<T> {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError> {
        entity
            .bind_columns(sqlx::query(&self.statements.insert))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &T::Id) -> Result<T, RepositoryError> {
        sqlx::query_as::<_, T>(&self.statements.select_by_key)
            .bind(T::key(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(&self, page: PageRequest) -> Result<(Vec<T>, u64), RepositoryError> {
        let total: i64 = sqlx::query_scalar(&self.statements.count)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let items = sqlx::query_as::<_, T>(&self.statements.select_page)
            .bind(i64::try_from(page.limit()).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok((items, u64::try_from(total).unwrap_or_default()))
    }

    async fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let result = entity
            .bind_columns(sqlx::query(&self.statements.update))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: &T::Id) -> Result<(), RepositoryError> {
        let result = sqlx::query(&self.statements.soft_delete)
            .bind(T::key(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Translate a driver error, keeping "no row" and unique violations apart.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Conflict(
                db_err
                    .constraint()
                    .map(str::to_string)
                    .unwrap_or_else(|| db_err.message().to_string()),
            )
        }
        other => RepositoryError::Database(other.to_string()),
    }
}
