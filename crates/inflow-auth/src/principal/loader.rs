//! Principal loading over the credential store.

use std::sync::Arc;

use inflow_core::result::AppResult;

use super::store::CredentialStore;
use super::Principal;

/// Produces authentication principals from credential records.
#[derive(Clone)]
pub struct PrincipalLoader {
    /// The credential store collaborator.
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for PrincipalLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrincipalLoader").finish()
    }
}

impl PrincipalLoader {
    /// Creates a new loader over the given credential store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Loads the principal for an employee number.
    ///
    /// Returns `None` for unknown identifiers AND for resigned employees:
    /// a deactivated account must be indistinguishable from a missing one
    /// for authentication purposes. An absent password hash is substituted
    /// with the [`super::StoredSecret::Missing`] sentinel.
    pub async fn load_by_employee_number(
        &self,
        employee_number: &str,
    ) -> AppResult<Option<Principal>> {
        let Some(employee) = self.store.find_by_employee_number(employee_number).await? else {
            return Ok(None);
        };

        if !employee.can_login() {
            return Ok(None);
        }

        Ok(Some(Principal::from(employee)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::memory::MemoryCredentialStore;
    use crate::principal::StoredSecret;
    use inflow_entity::{Employee, EmployeeRole, ResignationStatus};

    fn employee(number: &str, password: Option<&str>, resigned: ResignationStatus) -> Employee {
        Employee {
            employee_id: 1,
            employee_number: number.to_string(),
            name: "Kim".to_string(),
            password: password.map(String::from),
            employee_role: EmployeeRole::Employee,
            resignation_status: resigned,
        }
    }

    #[tokio::test]
    async fn test_unknown_identifier_is_none() {
        let store = Arc::new(MemoryCredentialStore::new());
        let loader = PrincipalLoader::new(store);

        assert!(loader
            .load_by_employee_number("E999")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_resigned_employee_is_none() {
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .insert(employee("E001", Some("$hash"), ResignationStatus::Y))
            .await;
        let loader = PrincipalLoader::new(store);

        assert!(loader
            .load_by_employee_number("E001")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_missing_password_becomes_sentinel() {
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .insert(employee("E002", None, ResignationStatus::N))
            .await;
        let loader = PrincipalLoader::new(store);

        let principal = loader
            .load_by_employee_number("E002")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(principal.secret, StoredSecret::Missing);
    }
}
