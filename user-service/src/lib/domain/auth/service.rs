use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenManager;

use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::store::RepositoryError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::UserSummary;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Login flow: look up the user, check the password, check the account is
/// active, then issue a token. The first failing step ends the flow.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_manager: Arc<TokenManager>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_manager` - Issues the access token on success
    pub fn new(repository: Arc<UR>, token_manager: Arc<TokenManager>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_manager,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError> {
        let user = match self.repository.find_by_email(&command.email).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                tracing::debug!(reason = "unknown_email", "Login rejected");
                return Err(UserError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)
        {
            tracing::debug!(user_id = %user.id, reason = "password_mismatch", "Login rejected");
            return Err(UserError::InvalidCredentials);
        }

        if !user.is_active {
            tracing::debug!(user_id = %user.id, reason = "inactive", "Login rejected");
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .token_manager
            .issue(&user.id.to_string(), &user.email, &user.role)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            token,
            user: UserSummary::from(user),
        })
    }
}
