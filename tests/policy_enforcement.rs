//! Integration tests for the authentication filter and the policy table.

mod helpers;

use http::{Method, StatusCode};

use helpers::TestApp;
use inflow_auth::policy::{Access, AuthorizationRule, PolicyTable};
use inflow_entity::{EmployeeRole, ResignationStatus};

#[tokio::test]
async fn test_protected_path_without_token_is_401() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/employees", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_401() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::GET, "/api/employees", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_401() {
    let app = TestApp::new().await;
    app.create_employee("E001", "Kim", "password-1234", EmployeeRole::Employee)
        .await;
    let token = app.login("E001", "password-1234").await;

    let sig_start = token.rfind('.').unwrap() + 1;
    let flipped = if token.as_bytes()[sig_start] == b'A' { "B" } else { "A" };
    let mut tampered = token.clone();
    tampered.replace_range(sig_start..sig_start + 1, flipped);

    let response = app
        .request(Method::GET, "/api/employees", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_allowed_role_reaches_handler() {
    let app = TestApp::new().await;
    app.create_employee("E001", "Kim", "password-1234", EmployeeRole::Employee)
        .await;
    let token = app.login("E001", "password-1234").await;

    let response = app
        .request(Method::GET, "/api/employees", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_role_outside_allowed_set_is_403() {
    // Narrow the statistics DELETE rule to ADMIN only.
    let table = PolicyTable::new(vec![
        AuthorizationRule::new("/api/login", Method::POST, Access::PermitAll),
        AuthorizationRule::new(
            "/api/statistics/**",
            Method::DELETE,
            Access::Roles(vec![EmployeeRole::Admin]),
        ),
        AuthorizationRule::new(
            "/api/statistics/**",
            Method::GET,
            Access::Roles(EmployeeRole::ALL.to_vec()),
        ),
    ]);
    let app = TestApp::with_policy(table).await;
    app.create_employee("E001", "Kim", "password-1234", EmployeeRole::Employee)
        .await;
    app.create_employee("A001", "Admin", "password-1234", EmployeeRole::Admin)
        .await;

    let employee_token = app.login("E001", "password-1234").await;
    let admin_token = app.login("A001", "password-1234").await;

    let forbidden = app
        .request(
            Method::DELETE,
            "/api/statistics/headcount",
            None,
            Some(&employee_token),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    // The same employee can still read.
    let allowed = app
        .request(
            Method::GET,
            "/api/statistics/headcount",
            None,
            Some(&employee_token),
        )
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    let admin = app
        .request(
            Method::DELETE,
            "/api/statistics/headcount",
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(admin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_resignation_invalidates_live_tokens() {
    let app = TestApp::new().await;
    app.create_employee("E001", "Kim", "password-1234", EmployeeRole::Employee)
        .await;
    let token = app.login("E001", "password-1234").await;

    // The token works while the employee is active.
    let before = app
        .request(Method::GET, "/api/employees", None, Some(&token))
        .await;
    assert_eq!(before.status, StatusCode::OK);

    // Resignation is reflected on the very next request, even though the
    // token itself is still unexpired and correctly signed.
    app.store
        .set_resignation_status("E001", ResignationStatus::Y)
        .await
        .unwrap();

    let after = app
        .request(Method::GET, "/api/employees", None, Some(&token))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unmatched_path_defaults_to_authenticated() {
    let app = TestApp::new().await;
    app.create_employee("E001", "Kim", "password-1234", EmployeeRole::Employee)
        .await;
    let token = app.login("E001", "password-1234").await;

    // Without a token the default rule rejects before routing.
    let anonymous = app
        .request(Method::GET, "/api/not-a-registered-tree", None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    // With a token the table allows any role, and the router 404s.
    let authenticated = app
        .request(
            Method::GET,
            "/api/not-a-registered-tree",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(authenticated.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_subtree_get_is_not_public() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
