use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use super::postgres::PgEntity;
use super::postgres::PgQuery;
use super::postgres::PgStore;
use crate::domain::store::HealthCheck;
use crate::domain::store::PageRequest;
use crate::domain::store::Repository;
use crate::domain::store::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: UserId(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            role: row.try_get("role")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl PgEntity for User {
    const TABLE: &'static str = "users";

    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "email",
        "password_hash",
        "role",
        "is_active",
        "created_at",
        "updated_at",
    ];

    const ORDER_BY: &'static str = "created_at";

    fn key(id: &UserId) -> Uuid {
        id.0
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.id.0)
            .bind(self.name.as_str())
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
            .bind(self.role.as_str())
            .bind(self.is_active)
            .bind(self.created_at)
            .bind(self.updated_at)
    }
}

/// PostgreSQL user repository: the generic table store plus lookup by email.
pub struct PostgresUserRepository {
    store: PgStore<User>,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: PgStore::new(pool),
        }
    }
}

#[async_trait]
impl Repository<User> for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        self.store.create(user).await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.store.find_by_id(id).await
    }

    async fn find_all(&self, page: PageRequest) -> Result<(Vec<User>, u64), RepositoryError> {
        self.store.find_all(page).await
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        self.store.update(user).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.store.find_one_by("email", email.to_string()).await
    }
}

#[async_trait]
impl HealthCheck for PostgresUserRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        self.store.ping().await
    }
}
