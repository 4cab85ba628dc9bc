use async_trait::async_trait;

use crate::domain::auth::models::LoginOutcome;
use crate::domain::user::models::LoginCommand;
use crate::user::errors::UserError;

/// Port for credential checks and token issuance.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email and password for an access token.
    ///
    /// # Returns
    /// Signed token and a summary of the authenticated user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, wrong password, or inactive
    ///   account; the three cases are indistinguishable
    /// * `Infrastructure` - Storage or token signing failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError>;
}
