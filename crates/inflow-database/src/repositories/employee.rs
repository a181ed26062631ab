//! Employee credential repository.

use async_trait::async_trait;
use sqlx::PgPool;

use inflow_auth::CredentialStore;
use inflow_core::error::{AppError, ErrorKind};
use inflow_core::result::AppResult;
use inflow_entity::Employee;

/// Repository over the employee credential columns.
///
/// The full employee table is owned by the HR domain service; this
/// repository reads only what authentication needs and writes only the
/// password column.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee's credential record by employee number.
    pub async fn find_by_employee_number(
        &self,
        employee_number: &str,
    ) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT employee_id, employee_number, name, password, employee_role, \
             resignation_status FROM employees WHERE employee_number = $1",
        )
        .bind(employee_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find employee by employee number",
                e,
            )
        })
    }

    /// Replace an employee's stored password hash.
    pub async fn update_password(
        &self,
        employee_number: &str,
        password_hash: &str,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE employees SET password = $2 WHERE employee_number = $1")
            .bind(employee_number)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "No employee '{employee_number}'"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for EmployeeRepository {
    async fn find_by_employee_number(&self, employee_number: &str) -> AppResult<Option<Employee>> {
        EmployeeRepository::find_by_employee_number(self, employee_number).await
    }

    async fn update_password(&self, employee_number: &str, password_hash: &str) -> AppResult<()> {
        EmployeeRepository::update_password(self, employee_number, password_hash).await
    }
}
