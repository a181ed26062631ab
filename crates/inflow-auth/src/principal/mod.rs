//! Principal loading and the login flow.

pub mod authenticator;
pub mod loader;
pub mod memory;
pub mod store;

pub use authenticator::{Authenticator, LoginOutcome};
pub use loader::PrincipalLoader;
pub use memory::MemoryCredentialStore;
pub use store::CredentialStore;

use inflow_entity::{Employee, EmployeeRole};

/// The stored secret of a principal.
///
/// Externally provisioned accounts may have no local password. Such
/// accounts carry the `Missing` sentinel, which fails every secret
/// comparison — it is never a wildcard match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredSecret {
    /// An Argon2 hash in PHC string format.
    Argon2(String),
    /// No local credential on record.
    Missing,
}

/// An authenticatable identity produced by the [`PrincipalLoader`].
///
/// Read-only from the auth core's perspective: principals are provisioned
/// by the employee domain service.
#[derive(Debug, Clone)]
pub struct Principal {
    /// Unique, immutable employee number.
    pub employee_number: String,
    /// Employee name, echoed back in the login response.
    pub name: String,
    /// Stored secret or the missing-credential sentinel.
    pub secret: StoredSecret,
    /// The single role granted to this principal.
    pub role: EmployeeRole,
}

impl From<Employee> for Principal {
    fn from(employee: Employee) -> Self {
        let secret = match employee.password {
            Some(hash) => StoredSecret::Argon2(hash),
            None => StoredSecret::Missing,
        };
        Self {
            employee_number: employee.employee_number,
            name: employee.name,
            secret,
            role: employee.employee_role,
        }
    }
}
