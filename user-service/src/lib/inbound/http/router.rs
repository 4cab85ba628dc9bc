use std::sync::Arc;
use std::time::Duration;

use auth::TokenManager;
use axum::body::Body;
use axum::handler::Handler;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::health::health;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::update_user::update_user;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::store::HealthCheck;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub token_manager: Arc<TokenManager>,
    pub health_check: Arc<dyn HealthCheck>,
    pub environment: Arc<str>,
}

pub fn create_router<US, AS, HC>(
    user_service: Arc<US>,
    auth_service: Arc<AS>,
    token_manager: Arc<TokenManager>,
    health_check: Arc<HC>,
    environment: &str,
) -> Router
where
    US: UserServicePort,
    AS: AuthServicePort,
    HC: HealthCheck,
{
    let state = AppState {
        user_service,
        auth_service,
        token_manager,
        health_check,
        environment: Arc::from(environment),
    };

    let public_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/users", post(create_user));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/users", get(list_users))
        .route(
            "/users/:user_id",
            get(get_user)
                .put(update_user)
                .delete(delete_user.layer(middleware::from_fn(require_admin))),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let api = Router::new().merge(public_routes).merge(protected_routes);

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
