//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use inflow_auth::jwt::JwtDecoder;
use inflow_auth::policy::PolicyTable;
use inflow_auth::principal::{Authenticator, PrincipalLoader};
use inflow_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler and middleware via `State<AppState>`.
/// Everything here is immutable after startup; fields are `Arc`-wrapped
/// for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Principal loading over the credential store.
    pub principal_loader: Arc<PrincipalLoader>,
    /// Login and password-reset flows.
    pub authenticator: Arc<Authenticator>,
    /// The authorization policy table.
    pub policy_table: Arc<PolicyTable>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("rules", &self.policy_table.len())
            .finish()
    }
}
