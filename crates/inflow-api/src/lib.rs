//! # inflow-api
//!
//! HTTP API layer for the InFlow auth core, built on Axum.
//!
//! Provides the login and credential endpoints, the authentication and
//! authorization middleware, CORS and request logging, DTOs, and error
//! mapping. HR domain routers mount through
//! [`router::build_router_with`] and inherit the same pipeline.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, build_state_with_policy, run_server};
pub use state::AppState;
