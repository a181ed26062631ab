//! Application builder — wires configuration, collaborators, and the
//! router into a running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use inflow_auth::jwt::{JwtDecoder, JwtEncoder};
use inflow_auth::password::PasswordHasher;
use inflow_auth::policy::PolicyTable;
use inflow_auth::principal::{Authenticator, CredentialStore, PrincipalLoader};
use inflow_core::config::AppConfig;
use inflow_core::error::AppError;
use inflow_database::repositories::EmployeeRepository;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state over a credential store, using the
/// default policy table.
pub fn build_state(
    config: AppConfig,
    store: Arc<dyn CredentialStore>,
) -> Result<AppState, AppError> {
    build_state_with_policy(config, store, PolicyTable::default_table())
}

/// Builds the application state with an explicit policy table.
pub fn build_state_with_policy(
    config: AppConfig,
    store: Arc<dyn CredentialStore>,
    policy_table: PolicyTable,
) -> Result<AppState, AppError> {
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let principal_loader = PrincipalLoader::new(Arc::clone(&store));

    let authenticator = Arc::new(Authenticator::new(
        principal_loader.clone(),
        Arc::clone(&store),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        config.auth.clone(),
    )?);

    Ok(AppState {
        config: Arc::new(config),
        jwt_decoder,
        principal_loader: Arc::new(principal_loader),
        authenticator,
        policy_table: Arc::new(policy_table),
    })
}

/// Runs the InFlow server against a PostgreSQL-backed credential store.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let store: Arc<dyn CredentialStore> = Arc::new(EmployeeRepository::new(db_pool));
    let state = build_state(config.clone(), store)?;

    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("InFlow server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("InFlow server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
