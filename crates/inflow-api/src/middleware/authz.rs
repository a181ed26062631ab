//! Authorization policy enforcement.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use inflow_auth::policy::{AccessDecision, DenyReason};
use inflow_auth::SecurityContext;
use inflow_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Consults the policy table before any handler runs.
///
/// This is the single point that turns an access decision into an HTTP
/// response: 401 when no usable identity was attached, 403 when the
/// identity's role is outside the matched rule's allowed set.
pub async fn enforce_policy(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = request.extensions().get::<SecurityContext>();

    match state
        .policy_table
        .evaluate(request.uri().path(), request.method(), context)
    {
        AccessDecision::Allow => Ok(next.run(request).await),
        AccessDecision::Deny(DenyReason::Unauthenticated) => {
            Err(ApiError(AppError::unauthorized("Authentication required")))
        }
        AccessDecision::Deny(DenyReason::Forbidden) => Err(ApiError(AppError::forbidden(
            "Insufficient role for this resource",
        ))),
    }
}
