//! In-memory [`Repository`] used by the integration tests and for running the
//! service without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::store::Entity;
use crate::domain::store::HealthCheck;
use crate::domain::store::PageRequest;
use crate::domain::store::Repository;
use crate::domain::store::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Entities kept in insertion order behind an async lock.
pub struct InMemoryStore<T: Entity> {
    entities: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// First entity matching `predicate`, in insertion order.
    pub async fn find_first<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.entities
            .read()
            .await
            .iter()
            .find(|entity| predicate(*entity))
            .cloned()
    }

    /// Insert `entity` unless its id is taken or a stored entity `conflicts`
    /// with it.
    pub async fn create_where<P>(&self, entity: &T, conflicts: P) -> Result<(), RepositoryError>
    where
        P: Fn(&T, &T) -> bool,
    {
        let mut entities = self.entities.write().await;

        if entities.iter().any(|stored| stored.id() == entity.id()) {
            return Err(RepositoryError::Conflict(format!(
                "duplicate key {}",
                entity.id()
            )));
        }

        if entities.iter().any(|stored| conflicts(stored, entity)) {
            return Err(RepositoryError::Conflict("unique field".to_string()));
        }

        entities.push(entity.clone());
        Ok(())
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryStore<T> {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError> {
        self.create_where(entity, |_, _| false).await
    }

    async fn find_by_id(&self, id: &T::Id) -> Result<T, RepositoryError> {
        self.find_first(|entity| entity.id() == id)
            .await
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_all(&self, page: PageRequest) -> Result<(Vec<T>, u64), RepositoryError> {
        let entities = self.entities.read().await;

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let items = entities.iter().skip(offset).take(limit).cloned().collect();

        Ok((items, entities.len() as u64))
    }

    async fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut entities = self.entities.write().await;

        let stored = entities
            .iter_mut()
            .find(|stored| stored.id() == entity.id())
            .ok_or(RepositoryError::NotFound)?;

        *stored = entity.clone();
        Ok(())
    }

    async fn delete(&self, id: &T::Id) -> Result<(), RepositoryError> {
        let mut entities = self.entities.write().await;

        let position = entities
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or(RepositoryError::NotFound)?;

        entities.remove(position);
        Ok(())
    }
}

/// In-memory user repository; enforces unique emails like the `users` table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: InMemoryStore<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<User> for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        self.store
            .create_where(user, |stored, new| stored.email == new.email)
            .await
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
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.store
            .find_first(|user| user.email == email)
            .await
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl HealthCheck for InMemoryUserRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User::new(name.to_string(), email.to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = InMemoryUserRepository::new();
        let john = user("John", "john@example.com");

        repository.create(&john).await.expect("Create failed");

        assert_eq!(repository.find_by_id(&john.id).await, Ok(john.clone()));
        assert_eq!(repository.find_by_email("john@example.com").await, Ok(john));
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let repository = InMemoryUserRepository::new();

        assert_eq!(
            repository.find_by_id(&UserId::new()).await,
            Err(RepositoryError::NotFound)
        );
        assert_eq!(
            repository.find_by_email("nobody@example.com").await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repository = InMemoryUserRepository::new();
        repository
            .create(&user("John", "john@example.com"))
            .await
            .expect("Create failed");

        assert_eq!(
            repository.find_by_email("JOHN@example.com").await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repository = InMemoryUserRepository::new();
        repository
            .create(&user("John", "john@example.com"))
            .await
            .expect("Create failed");

        let result = repository.create(&user("Johnny", "john@example.com")).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_duplicate_id_conflicts() {
        let store = InMemoryStore::<User>::new();
        let john = user("John", "john@example.com");

        store.create(&john).await.expect("Create failed");

        assert!(matches!(
            store.create(&john).await,
            Err(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_find_all_pages_in_insertion_order() {
        let repository = InMemoryUserRepository::new();
        for i in 0..25 {
            repository
                .create(&user(&format!("User {i}"), &format!("user{i}@example.com")))
                .await
                .expect("Create failed");
        }

        let (items, total) = repository
            .find_all(PageRequest::normalize(3, 10))
            .await
            .expect("List failed");

        assert_eq!(total, 25);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].name, "User 20");

        let (items, total) = repository
            .find_all(PageRequest::normalize(4, 10))
            .await
            .expect("List failed");

        assert_eq!(total, 25);
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_stored_user() {
        let repository = InMemoryUserRepository::new();
        let mut john = user("John", "john@example.com");
        repository.create(&john).await.expect("Create failed");

        john.rename("Johnny".to_string());
        repository.update(&john).await.expect("Update failed");

        let stored = repository.find_by_id(&john.id).await.expect("Find failed");
        assert_eq!(stored.name, "Johnny");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repository = InMemoryUserRepository::new();

        assert_eq!(
            repository.update(&user("John", "john@example.com")).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_delete_then_find() {
        let repository = InMemoryUserRepository::new();
        let john = user("John", "john@example.com");
        repository.create(&john).await.expect("Create failed");

        repository.delete(&john.id).await.expect("Delete failed");

        assert_eq!(
            repository.find_by_id(&john.id).await,
            Err(RepositoryError::NotFound)
        );
        assert_eq!(
            repository.delete(&john.id).await,
            Err(RepositoryError::NotFound)
        );
        assert_eq!(
            repository.find_all(PageRequest::default()).await,
            Ok((Vec::new(), 0))
        );
    }
}
