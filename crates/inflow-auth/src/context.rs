//! Per-request security context.

use serde::{Deserialize, Serialize};

use inflow_entity::EmployeeRole;

/// The authenticated identity attached to a single request.
///
/// Created by the authentication filter, consulted by the authorization
/// policy, and dropped when the request completes. The context is an
/// explicit value carried in the request's extensions — never shared
/// across requests and never stored in process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityContext {
    /// The authenticated employee number.
    pub employee_number: String,
    /// The employee's role as currently recorded in the credential store
    /// (re-derived per request, not taken from the token claim).
    pub role: EmployeeRole,
}

impl SecurityContext {
    /// Creates a new security context.
    pub fn new(employee_number: impl Into<String>, role: EmployeeRole) -> Self {
        Self {
            employee_number: employee_number.into(),
            role,
        }
    }
}
