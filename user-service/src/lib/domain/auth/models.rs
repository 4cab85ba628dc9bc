use serde::Serialize;

use crate::domain::user::models::UserSummary;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserSummary,
}
