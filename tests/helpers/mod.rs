//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use axum::Router;
use axum::body::Body;
use axum::routing::get;
use http::{HeaderMap, Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use inflow_api::state::AppState;
use inflow_api::{build_state_with_policy, router};
use inflow_auth::policy::PolicyTable;
use inflow_auth::principal::{CredentialStore, MemoryCredentialStore};
use inflow_auth::PasswordHasher;
use inflow_core::config::app::ServerConfig;
use inflow_core::config::auth::AuthConfig;
use inflow_core::config::logging::LoggingConfig;
use inflow_core::config::{AppConfig, DatabaseConfig};
use inflow_entity::{Employee, EmployeeRole, ResignationStatus};

/// Signing secret shared by the test app and token assertions.
pub const TEST_JWT_SECRET: &str = "integration-test-signing-secret";

/// Test application driving the real router over an in-memory store.
pub struct TestApp {
    /// The assembled Axum router.
    pub router: Router,
    /// The credential store backing the app.
    pub store: Arc<MemoryCredentialStore>,
    hasher: PasswordHasher,
    next_id: AtomicI64,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when empty or not JSON).
    pub body: Value,
}

/// Auth configuration used by every test app.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_ttl_minutes: 30,
        password_min_length: 8,
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        auth: test_auth_config(),
        logging: LoggingConfig::default(),
    }
}

/// Stand-ins for the HR domain routers, mounted under `/api`.
fn domain_stub_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(|| async { "employee list" }))
        .route("/employees/{employee_number}", get(|| async { "employee" }))
        .route(
            "/statistics/headcount",
            get(|| async { "headcount" }).delete(|| async { "deleted" }),
        )
}

impl TestApp {
    /// Creates a test application with the default policy table.
    pub async fn new() -> Self {
        Self::with_policy(PolicyTable::default_table()).await
    }

    /// Creates a test application with a custom policy table.
    pub async fn with_policy(policy: PolicyTable) -> Self {
        let store = Arc::new(MemoryCredentialStore::new());
        let dyn_store: Arc<dyn CredentialStore> = store.clone();

        let state = build_state_with_policy(test_config(), dyn_store, policy)
            .expect("failed to build test state");
        let router = router::build_router_with(state, domain_stub_routes());

        Self {
            router,
            store,
            hasher: PasswordHasher::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Inserts an active employee with a hashed password.
    pub async fn create_employee(
        &self,
        employee_number: &str,
        name: &str,
        password: &str,
        role: EmployeeRole,
    ) {
        let hash = self
            .hasher
            .hash_password(password)
            .expect("failed to hash test password");
        self.insert(employee_number, name, Some(hash), role).await;
    }

    /// Inserts an active employee with no local credential.
    pub async fn create_employee_without_password(
        &self,
        employee_number: &str,
        name: &str,
        role: EmployeeRole,
    ) {
        self.insert(employee_number, name, None, role).await;
    }

    async fn insert(
        &self,
        employee_number: &str,
        name: &str,
        password: Option<String>,
        role: EmployeeRole,
    ) {
        self.store
            .insert(Employee {
                employee_id: self.next_id.fetch_add(1, Ordering::Relaxed),
                employee_number: employee_number.to_string(),
                name: name.to_string(),
                password,
                employee_role: role,
                resignation_status: ResignationStatus::N,
            })
            .await;
    }

    /// Logs in and returns the issued access token.
    pub async fn login(&self, employee_number: &str, password: &str) -> String {
        let response = self
            .request(
                Method::POST,
                "/api/login",
                Some(serde_json::json!({
                    "employee_number": employee_number,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed in fixture");
        response.body["data"]["access_token"]
            .as_str()
            .expect("login response carries no token")
            .to_string()
    }

    /// Sends one request through the router.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
