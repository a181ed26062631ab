//! `AuthEmployee` extractor — reads the security context attached by the
//! authentication filter.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use inflow_auth::SecurityContext;
use inflow_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated security context, available to handlers.
///
/// Token verification already happened in the authentication filter; this
/// extractor only fails when no context was attached, which the policy
/// table normally rejects before a handler runs.
#[derive(Debug, Clone)]
pub struct AuthEmployee(pub SecurityContext);

impl AuthEmployee {
    /// Returns the inner `SecurityContext`.
    pub fn context(&self) -> &SecurityContext {
        &self.0
    }
}

impl std::ops::Deref for AuthEmployee {
    type Target = SecurityContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthEmployee {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .cloned()
            .map(AuthEmployee)
            .ok_or_else(|| ApiError(AppError::unauthorized("Authentication required")))
    }
}
