use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::store::Page;
use crate::domain::store::PageRequest;
use crate::domain::store::RepositoryError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSummary;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
        }
    }

    async fn ensure_email_available(&self, email: &str) -> Result<(), UserError> {
        match self.repository.find_by_email(email).await {
            Ok(_) => Err(UserError::EmailAlreadyExists),
            Err(RepositoryError::NotFound) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<UserSummary, UserError> {
        self.ensure_email_available(&command.email).await?;

        let password_hash = self.password_hasher.hash(&command.password)?;
        let user = User::new(command.name, command.email, password_hash);

        // A concurrent registration can still win the unique index.
        self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => UserError::EmailAlreadyExists,
            other => UserError::from(other),
        })?;

        tracing::info!(user_id = %user.id, "User created");

        Ok(user.into())
    }

    async fn get_user(&self, id: &UserId) -> Result<UserSummary, UserError> {
        self.repository
            .find_by_id(id)
            .await
            .map(UserSummary::from)
            .map_err(UserError::from)
    }

    async fn list_users(&self, page: i64, per_page: i64) -> Result<Page<UserSummary>, UserError> {
        let request = PageRequest::normalize(page, per_page);

        let (users, total) = self.repository.find_all(request).await?;

        Ok(Page::new(users, total, request).map(UserSummary::from))
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<UserSummary, UserError> {
        let mut user = self.repository.find_by_id(id).await?;

        if user.rename(command.name) {
            tracing::debug!(user_id = %user.id, "User name changed");
        }
        user.touch();

        self.repository.update(&user).await?;

        tracing::info!(user_id = %user.id, "User updated");

        Ok(user.into())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        // Checked first so a missing user is reported as NotFound.
        self.repository.find_by_id(id).await?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
