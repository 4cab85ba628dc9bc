//! Shared mocks and fixtures for domain service tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::store::PageRequest;
use crate::domain::store::Repository;
use crate::domain::store::RepositoryError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl Repository<User> for UserRepo {
        async fn create(&self, entity: &User) -> Result<(), RepositoryError>;
        async fn find_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn find_all(&self, page: PageRequest) -> Result<(Vec<User>, u64), RepositoryError>;
        async fn update(&self, entity: &User) -> Result<(), RepositoryError>;
        async fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
    }

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError>;
    }
}

/// A stored user whose hash is not a real Argon2 hash.
pub fn stored_user(name: &str, email: &str) -> User {
    User::new(
        name.to_string(),
        email.to_string(),
        "$argon2id$test_hash".to_string(),
    )
}

/// A stored user whose hash matches `password`.
pub fn stored_user_with_password(email: &str, password: &str) -> User {
    let password_hash = auth::PasswordHasher::new()
        .hash(password)
        .expect("Failed to hash password");

    User::new("John Doe".to_string(), email.to_string(), password_hash)
}
