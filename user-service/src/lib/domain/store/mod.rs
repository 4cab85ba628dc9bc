//! Generic persistence abstraction shared by every entity.
//!
//! A [`Repository`] offers the same five operations for any [`Entity`]; entity
//! specific lookups are added by extending the trait (see
//! [`UserRepository`](crate::domain::user::ports::UserRepository)).

pub mod errors;
pub mod pagination;

use std::fmt;

use async_trait::async_trait;

pub use errors::RepositoryError;
pub use pagination::Page;
pub use pagination::PageRequest;

/// A persisted value with an identity field.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + PartialEq + fmt::Display + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}

/// Persistence operations for one entity type.
///
/// Every operation is independent; nothing here spans more than one entity.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync + 'static {
    /// Persist a new entity.
    ///
    /// # Errors
    /// * `Conflict` - A uniqueness constraint rejected the entity
    /// * `Database` - Storage operation failed
    async fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Retrieve an entity by identifier.
    ///
    /// # Errors
    /// * `NotFound` - No entity with this identifier
    /// * `Database` - Storage operation failed
    async fn find_by_id(&self, id: &T::Id) -> Result<T, RepositoryError>;

    /// Retrieve one page of entities together with the total entity count.
    ///
    /// The page request is used as given: `offset = (page - 1) * per_page`.
    /// Callers normalize it first.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_all(&self, page: PageRequest) -> Result<(Vec<T>, u64), RepositoryError>;

    /// Replace a stored entity with `entity`.
    ///
    /// # Errors
    /// * `NotFound` - No entity with this identifier
    /// * `Conflict` - A uniqueness constraint rejected the entity
    /// * `Database` - Storage operation failed
    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Remove an entity.
    ///
    /// # Errors
    /// * `NotFound` - No entity with this identifier
    /// * `Database` - Storage operation failed
    async fn delete(&self, id: &T::Id) -> Result<(), RepositoryError>;
}

/// Liveness of a storage backend.
#[async_trait]
pub trait HealthCheck: Send + Sync + 'static {
    /// Round-trip to the backend.
    ///
    /// # Errors
    /// * `Database` - Backend unreachable or failing
    async fn ping(&self) -> Result<(), RepositoryError>;
}
