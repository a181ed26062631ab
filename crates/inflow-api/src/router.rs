//! Route definitions for the InFlow HTTP API.
//!
//! The authentication filter and the policy enforcement layer wrap the
//! entire router, so unmatched paths are still held to the table's
//! default authenticated rule before the 404 fallback applies.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with the auth core's own routes.
pub fn build_router(state: AppState) -> Router {
    build_router_with(state, Router::new())
}

/// Build the router with additional HR domain routes mounted under `/api`.
///
/// Domain collaborators (employees, attendance, payroll, ...) pass their
/// routers here and inherit the authentication and authorization
/// pipeline; the policy table already carries their path trees.
pub fn build_router_with(state: AppState, domain_routes: Router<AppState>) -> Router {
    let api_routes = Router::new()
        .merge(login_routes())
        .merge(auth_routes())
        .merge(domain_routes);

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(actuator_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authz::enforce_policy,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authn::authenticate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// The login endpoint.
fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(handlers::auth::login))
}

/// Auth sub-tree: public POSTs plus the authenticated identity echo.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/password-reset", post(handlers::auth::reset_password))
        .route("/auth/me", get(handlers::auth::me))
}

/// Health probe (no auth required by the policy table).
fn actuator_routes() -> Router<AppState> {
    Router::new().route("/actuator/health", get(handlers::health::health_check))
}
