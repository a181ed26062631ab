//! Auth handlers — login, password reset, identity echo.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use validator::Validate;

use inflow_core::error::AppError;

use crate::dto::request::{LoginRequest, ResetPasswordRequest};
use crate::dto::response::{ApiResponse, IdentityResponse, LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthEmployee;
use crate::state::AppState;

/// POST /api/login
///
/// On success the token is returned both in the `Authorization` response
/// header and in the body. No server-side session is created.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let outcome = state
        .authenticator
        .login(&req.employee_number, &req.password)
        .await?;

    let bearer = format!("Bearer {}", outcome.token);

    Ok((
        [(header::AUTHORIZATION, bearer)],
        Json(ApiResponse::ok(LoginResponse {
            access_token: outcome.token,
            expires_at: outcome.expires_at,
            role: outcome.role.to_string(),
            employee_number: outcome.employee_number,
            name: outcome.name,
        })),
    ))
}

/// POST /api/auth/password-reset
///
/// Public by the policy table, but it verifies the current secret with
/// the same uniform failure as login.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    state
        .authenticator
        .reset_password(&req.employee_number, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password updated".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(auth: AuthEmployee) -> Json<ApiResponse<IdentityResponse>> {
    Json(ApiResponse::ok(IdentityResponse {
        employee_number: auth.employee_number.clone(),
        role: auth.role.to_string(),
    }))
}
