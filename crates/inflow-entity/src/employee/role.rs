//! Employee role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles assignable to an employee.
///
/// Every principal carries exactly one role. There is no role hierarchy:
/// access is decided by the authorization rule's allowed-role set, not by
/// privilege comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "employee_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeRole {
    /// Regular employee.
    Employee,
    /// Human-resources staff.
    Hr,
    /// Team or department manager.
    Manager,
    /// System administrator.
    Admin,
}

impl EmployeeRole {
    /// All roles, in declaration order.
    pub const ALL: [EmployeeRole; 4] = [Self::Employee, Self::Hr, Self::Manager, Self::Admin];

    /// Return the role as its canonical uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::Hr => "HR",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmployeeRole {
    type Err = inflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMPLOYEE" => Ok(Self::Employee),
            "HR" => Ok(Self::Hr),
            "MANAGER" => Ok(Self::Manager),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(inflow_core::AppError::validation(format!(
                "Invalid employee role: '{s}'. Expected one of: EMPLOYEE, HR, MANAGER, ADMIN"
            ))),
        }
    }
}
