use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::store::Page;
use crate::domain::user::models::UserSummary;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<ApiSuccess<Page<UserSummary>>, ApiError> {
    state
        .user_service
        .list_users(params.page(), params.per_page())
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page))
}

/// Raw query parameters. Kept as strings so that garbage input falls back
/// to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersParams {
    page: Option<String>,
    per_page: Option<String>,
}

impl ListUsersParams {
    fn page(&self) -> i64 {
        parse_or_zero(self.page.as_deref())
    }

    fn per_page(&self) -> i64 {
        parse_or_zero(self.per_page.as_deref())
    }
}

fn parse_or_zero(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
