//! Employee credential projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::resignation::ResignationStatus;
use super::role::EmployeeRole;

/// The authentication-relevant projection of an employee record.
///
/// Provisioning, profile data, and the rest of the HR schema are owned by
/// the employee domain service; this core only ever reads the columns it
/// needs to authenticate and authorize a request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Surrogate primary key.
    pub employee_id: i64,
    /// Unique, immutable employee number used as the login identifier.
    pub employee_number: String,
    /// Employee name.
    pub name: String,
    /// Argon2 password hash. `None` for externally provisioned accounts
    /// that have no local credential.
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// The employee's single role.
    pub employee_role: EmployeeRole,
    /// Resignation flag.
    pub resignation_status: ResignationStatus,
}

impl Employee {
    /// Whether this employee may authenticate at all.
    pub fn can_login(&self) -> bool {
        self.resignation_status.can_login()
    }
}
