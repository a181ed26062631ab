//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Employee number.
    #[validate(length(min = 1, message = "Employee number is required"))]
    pub employee_number: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Password reset request body.
///
/// The new password's minimum length is enforced against configuration
/// by the authenticator, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// Employee number.
    #[validate(length(min = 1, message = "Employee number is required"))]
    pub employee_number: String,
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// Replacement password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}
