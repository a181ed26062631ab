//! Credential store seam.

use async_trait::async_trait;

use inflow_core::result::AppResult;
use inflow_entity::Employee;

/// Access to persisted employee credential records.
///
/// The auth core treats the employee table as an external collaborator
/// and only ever needs lookup-by-identifier plus the password-reset
/// write. Two implementations exist: the PostgreSQL-backed
/// `EmployeeRepository` and an in-memory store for tests and local
/// development.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find an employee by employee number. Returns `None` when no record
    /// exists; resignation filtering is the principal loader's concern.
    async fn find_by_employee_number(&self, employee_number: &str) -> AppResult<Option<Employee>>;

    /// Replace the stored password hash for an employee.
    async fn update_password(&self, employee_number: &str, password_hash: &str) -> AppResult<()>;
}
