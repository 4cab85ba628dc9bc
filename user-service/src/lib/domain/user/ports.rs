use async_trait::async_trait;

use crate::domain::store::Page;
use crate::domain::store::Repository;
use crate::domain::store::RepositoryError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Name, email, and plaintext password
    ///
    /// # Returns
    /// Summary of the created user (role "user", active)
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Infrastructure` - Storage or hashing failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<UserSummary, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Infrastructure` - Storage failed
    async fn get_user(&self, id: &UserId) -> Result<UserSummary, UserError>;

    /// Retrieve one page of users.
    ///
    /// Raw `page` and `per_page` values are normalized before use: a page
    /// below 1 becomes 1 and a page size outside `[1, 100]` becomes 10.
    ///
    /// # Errors
    /// * `Infrastructure` - Storage failed
    async fn list_users(&self, page: i64, per_page: i64) -> Result<Page<UserSummary>, UserError>;

    /// Update an existing user.
    ///
    /// # Arguments
    /// * `id` - User ID to update
    /// * `command` - New name; empty means unchanged
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Infrastructure` - Storage failed
    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<UserSummary, UserError>;

    /// Delete an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Infrastructure` - Storage failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate.
///
/// Extends the generic [`Repository`] with the lookup by email used for
/// login and for the uniqueness check on registration.
#[async_trait]
pub trait UserRepository: Repository<User> {
    /// Retrieve user by email address (exact, case-sensitive match).
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Database` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError>;
}
