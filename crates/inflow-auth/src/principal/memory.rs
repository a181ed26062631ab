//! In-memory credential store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use inflow_core::error::AppError;
use inflow_core::result::AppResult;
use inflow_entity::{Employee, ResignationStatus};

use super::store::CredentialStore;

/// Credential store backed by a process-local map.
///
/// Used by the integration tests and for running the server without a
/// database. Records are keyed by employee number.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: RwLock<HashMap<String, Employee>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee record.
    pub async fn insert(&self, employee: Employee) {
        self.records
            .write()
            .await
            .insert(employee.employee_number.clone(), employee);
    }

    /// Updates the resignation status of an existing record.
    pub async fn set_resignation_status(
        &self,
        employee_number: &str,
        status: ResignationStatus,
    ) -> AppResult<()> {
        let mut records = self.records.write().await;
        let employee = records
            .get_mut(employee_number)
            .ok_or_else(|| AppError::not_found(format!("No employee '{employee_number}'")))?;
        employee.resignation_status = status;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_employee_number(&self, employee_number: &str) -> AppResult<Option<Employee>> {
        Ok(self.records.read().await.get(employee_number).cloned())
    }

    async fn update_password(&self, employee_number: &str, password_hash: &str) -> AppResult<()> {
        let mut records = self.records.write().await;
        let employee = records
            .get_mut(employee_number)
            .ok_or_else(|| AppError::not_found(format!("No employee '{employee_number}'")))?;
        employee.password = Some(password_hash.to_string());
        Ok(())
    }
}
