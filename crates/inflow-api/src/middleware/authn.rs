//! Request authentication filter.
//!
//! Runs once per request before the authorization check. Verification
//! failures never abort the request here: the request simply continues
//! without a security context, and the policy table produces the final
//! 401/403 decision.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use inflow_auth::SecurityContext;

use crate::state::AppState;

/// Attaches a [`SecurityContext`] to the request when it carries a valid
/// bearer token.
///
/// Whitelisted (PermitAll) paths skip token handling entirely. For the
/// rest, the token's subject is re-resolved through the principal loader
/// so that a role change or resignation after token issuance takes effect
/// on the very next request — the token's embedded role claim is never
/// trusted on its own.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let public = state
        .policy_table
        .is_public(request.uri().path(), request.method());

    if !public {
        if let Some(context) = resolve_context(&state, request.headers()).await {
            request.extensions_mut().insert(context);
        }
    }

    next.run(request).await
}

/// Verifies the bearer token and re-derives the principal.
///
/// Returns `None` on any failure: missing or malformed header, rejected
/// token, unknown or resigned principal, or a storage error.
async fn resolve_context(state: &AppState, headers: &HeaderMap) -> Option<SecurityContext> {
    let header_value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header_value.strip_prefix("Bearer ")?;

    let claims = match state.jwt_decoder.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            debug!(error = %err, "rejected bearer token");
            return None;
        }
    };

    match state
        .principal_loader
        .load_by_employee_number(&claims.sub)
        .await
    {
        Ok(Some(principal)) => Some(SecurityContext::new(
            principal.employee_number,
            principal.role,
        )),
        Ok(None) => {
            debug!(subject = %claims.sub, "token subject no longer authenticatable");
            None
        }
        Err(err) => {
            warn!(error = %err, "principal lookup failed during authentication");
            None
        }
    }
}
