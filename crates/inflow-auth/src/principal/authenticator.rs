//! Login and credential-reset flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use inflow_core::config::auth::AuthConfig;
use inflow_core::error::AppError;
use inflow_core::result::AppResult;
use inflow_entity::EmployeeRole;

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

use super::loader::PrincipalLoader;
use super::store::CredentialStore;
use super::{Principal, StoredSecret};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The issued bearer token.
    pub token: String,
    /// Token expiry timestamp.
    pub expires_at: DateTime<Utc>,
    /// The principal's role.
    pub role: EmployeeRole,
    /// The authenticated employee number.
    pub employee_number: String,
    /// The employee's name.
    pub name: String,
}

/// Runs the login state machine: lookup, secret comparison, token minting.
#[derive(Clone)]
pub struct Authenticator {
    /// Principal loading over the credential store.
    loader: PrincipalLoader,
    /// Write access for password resets.
    store: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
    /// Auth configuration.
    config: AuthConfig,
    /// Hash verified on the not-found and missing-credential paths so
    /// every failing login costs one Argon2 verification.
    dummy_hash: String,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("config", &self.config.jwt_ttl_minutes)
            .finish()
    }
}

impl Authenticator {
    /// Creates a new authenticator with all required collaborators.
    pub fn new(
        loader: PrincipalLoader,
        store: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        config: AuthConfig,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash_password("not-a-real-credential")?;
        Ok(Self {
            loader,
            store,
            hasher,
            encoder,
            config,
            dummy_hash,
        })
    }

    /// Authenticates an employee number + secret pair and mints a token.
    ///
    /// Unknown identifiers, resigned accounts, missing local credentials,
    /// and wrong secrets all produce the same generic failure, so a caller
    /// cannot probe which employee numbers exist.
    pub async fn login(&self, employee_number: &str, secret: &str) -> AppResult<LoginOutcome> {
        let principal = match self.verify_credentials(employee_number, secret).await? {
            Some(principal) => principal,
            None => return Err(Self::invalid_credentials()),
        };

        let (token, expires_at) = self.encoder.issue(&principal.employee_number, principal.role)?;

        info!(employee_number = %principal.employee_number, "login succeeded");

        Ok(LoginOutcome {
            token,
            expires_at,
            role: principal.role,
            employee_number: principal.employee_number,
            name: principal.name,
        })
    }

    /// Verifies the current secret and replaces it with a new one.
    ///
    /// Shares the login flow's uniform-failure behavior: a caller learns
    /// nothing about whether the employee number exists.
    pub async fn reset_password(
        &self,
        employee_number: &str,
        current_secret: &str,
        new_secret: &str,
    ) -> AppResult<()> {
        if new_secret.len() < self.config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.config.password_min_length
            )));
        }

        let principal = match self.verify_credentials(employee_number, current_secret).await? {
            Some(principal) => principal,
            None => return Err(Self::invalid_credentials()),
        };

        let new_hash = self.hasher.hash_password(new_secret)?;
        self.store
            .update_password(&principal.employee_number, &new_hash)
            .await?;

        info!(employee_number = %principal.employee_number, "password reset");
        Ok(())
    }

    /// Looks up the principal and compares the secret.
    ///
    /// Returns `Ok(None)` on any authentication failure. Both failure
    /// branches perform exactly one Argon2 verification.
    async fn verify_credentials(
        &self,
        employee_number: &str,
        secret: &str,
    ) -> AppResult<Option<Principal>> {
        let Some(principal) = self.loader.load_by_employee_number(employee_number).await? else {
            let _ = self.hasher.verify_password(secret, &self.dummy_hash);
            return Ok(None);
        };

        let verified = match &principal.secret {
            StoredSecret::Argon2(hash) => self.hasher.verify_password(secret, hash)?,
            StoredSecret::Missing => {
                let _ = self.hasher.verify_password(secret, &self.dummy_hash);
                false
            }
        };

        Ok(verified.then_some(principal))
    }

    fn invalid_credentials() -> AppError {
        AppError::unauthorized("Invalid employee number or password")
    }
}
