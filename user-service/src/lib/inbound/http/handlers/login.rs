use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::LoginCommand;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation;
use crate::inbound::http::validation::ValidationError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginOutcome>, ApiError> {
    state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|outcome| ApiSuccess::new(StatusCode::OK, outcome))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

impl LoginRequestBody {
    fn try_into_command(self) -> Result<LoginCommand, ValidationError> {
        validation::validate_email(&self.email)?;
        validation::validate_login_password(&self.password)?;

        Ok(LoginCommand {
            email: self.email,
            password: self.password,
        })
    }
}
