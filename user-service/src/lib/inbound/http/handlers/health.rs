use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::store::HealthCheck;
use crate::inbound::http::router::AppState;

/// Liveness report. Always 200; a failing database shows up as
/// `"database": "error"`.
pub async fn health(State(state): State<AppState>) -> ApiSuccess<HealthResponseData> {
    let database = match state.health_check.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            "error"
        }
    };

    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: "ok".to_string(),
            env: state.environment.to_string(),
            database: database.to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: String,
    pub env: String,
    pub database: String,
}
